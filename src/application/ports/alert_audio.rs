//! Alert audio port for the looping alarm sound

use thiserror::Error;

use crate::domain::alert::Volume;

/// Errors that can occur while opening or driving the alert sound
#[derive(Error, Debug)]
pub enum AlertAudioError {
    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// The sound asset is missing or cannot be decoded
    #[error("Failed to load alert sound: {0}")]
    SoundLoadFailed(String),

    /// A playback command failed
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port trait for the alert sound player.
///
/// Calls come from the single thread that drives the alert, so
/// implementations need not be `Send`.
pub trait AlertAudio {
    /// Move playback back to the start of the sound
    fn rewind(&self) -> Result<(), AlertAudioError>;

    /// Set playback volume
    fn set_volume(&self, volume: Volume) -> Result<(), AlertAudioError>;

    /// Start playing the sound `loops` times back to back
    fn play_looping(&self, loops: u32) -> Result<(), AlertAudioError>;

    /// Halt playback
    fn stop(&self) -> Result<(), AlertAudioError>;

    /// True when this player silently ignores every command
    fn is_degraded(&self) -> bool {
        false
    }
}

impl AlertAudio for Box<dyn AlertAudio> {
    fn rewind(&self) -> Result<(), AlertAudioError> {
        self.as_ref().rewind()
    }

    fn set_volume(&self, volume: Volume) -> Result<(), AlertAudioError> {
        self.as_ref().set_volume(volume)
    }

    fn play_looping(&self, loops: u32) -> Result<(), AlertAudioError> {
        self.as_ref().play_looping(loops)
    }

    fn stop(&self) -> Result<(), AlertAudioError> {
        self.as_ref().stop()
    }

    fn is_degraded(&self) -> bool {
        self.as_ref().is_degraded()
    }
}
