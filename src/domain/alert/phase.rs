//! Observable phases of the alert sub-systems

use std::fmt;

/// Volume sub-system state.
///
/// State machine:
///   IDLE -> RAMPING_UP (start)
///   RAMPING_UP -> FULL (volume reached 1.0)
///   RAMPING_UP | FULL -> RAMPING_DOWN (stop)
///   RAMPING_DOWN -> STOPPED (volume reached 0.0, playback halted)
///   any -> RAMPING_UP (start resets and restarts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VolumePhase {
    #[default]
    Idle,
    RampingUp,
    Full,
    RampingDown,
    Stopped,
}

impl VolumePhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RampingUp => "ramping up",
            Self::Full => "full",
            Self::RampingDown => "ramping down",
            Self::Stopped => "stopped",
        }
    }

    /// Whether the alert is still audible or about to be
    pub const fn is_sounding(&self) -> bool {
        matches!(self, Self::RampingUp | Self::Full | Self::RampingDown)
    }
}

impl fmt::Display for VolumePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vibration sub-system state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VibrationPhase {
    #[default]
    Inactive,
    Waiting,
}

impl VibrationPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Waiting => "waiting",
        }
    }
}

impl fmt::Display for VibrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_default_to_rest() {
        assert_eq!(VolumePhase::default(), VolumePhase::Idle);
        assert_eq!(VibrationPhase::default(), VibrationPhase::Inactive);
    }

    #[test]
    fn sounding_phases() {
        assert!(!VolumePhase::Idle.is_sounding());
        assert!(VolumePhase::RampingUp.is_sounding());
        assert!(VolumePhase::Full.is_sounding());
        assert!(VolumePhase::RampingDown.is_sounding());
        assert!(!VolumePhase::Stopped.is_sounding());
    }

    #[test]
    fn phase_display() {
        assert_eq!(VolumePhase::RampingDown.to_string(), "ramping down");
        assert_eq!(VibrationPhase::Waiting.to_string(), "waiting");
    }
}
