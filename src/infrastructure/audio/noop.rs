//! No-op alert audio adapter
//!
//! Stands in when the real audio could not be initialized, so the alert
//! keeps escalating through vibration alone.

use crate::application::ports::{AlertAudio, AlertAudioError};
use crate::domain::alert::Volume;

/// Alert audio that accepts every command and plays nothing
pub struct NoOpAlertAudio;

impl NoOpAlertAudio {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAlertAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertAudio for NoOpAlertAudio {
    fn rewind(&self) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn set_volume(&self, _volume: Volume) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn play_looping(&self, _loops: u32) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn is_degraded(&self) -> bool {
        true
    }
}
