//! No-op haptics adapter
//!
//! Used when vibration is turned off.

use crate::application::ports::{Haptics, HapticsError};

/// Haptics that does nothing
pub struct NoOpHaptics;

impl NoOpHaptics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpHaptics {
    fn default() -> Self {
        Self::new()
    }
}

impl Haptics for NoOpHaptics {
    fn pulse(&self) -> Result<(), HapticsError> {
        Ok(())
    }
}
