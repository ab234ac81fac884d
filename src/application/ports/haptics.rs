//! Haptics port for vibration pulses

use thiserror::Error;

/// Haptic errors
#[derive(Debug, Clone, Error)]
pub enum HapticsError {
    #[error("Haptic pulse failed: {0}")]
    PulseFailed(String),
}

/// Port for the "vibrate now" system call
pub trait Haptics {
    /// Trigger one vibration pulse. Fire-and-forget: returns once the pulse
    /// has been requested, not when it finishes.
    fn pulse(&self) -> Result<(), HapticsError>;
}

impl Haptics for Box<dyn Haptics> {
    fn pulse(&self) -> Result<(), HapticsError> {
        self.as_ref().pulse()
    }
}
