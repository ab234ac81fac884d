//! Haptics infrastructure adapters
//!
//! Provides the vibration pulse as a terminal bell, a desktop
//! notification, or nothing at all.

mod bell;
mod noop;
mod notify;

pub use bell::BellHaptics;
pub use noop::NoOpHaptics;
pub use notify::NotifyHaptics;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Haptics;

/// Valid haptics backend names
pub const VALID_HAPTICS: &[&str] = &["bell", "notify", "none"];

/// Available haptics backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HapticsKind {
    /// Terminal bell (default)
    #[default]
    Bell,
    /// Desktop notification
    Notify,
    /// No vibration
    None,
}

impl fmt::Display for HapticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticsKind::Bell => write!(f, "bell"),
            HapticsKind::Notify => write!(f, "notify"),
            HapticsKind::None => write!(f, "none"),
        }
    }
}

/// Error type for parsing a haptics backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHapticsError {
    pub value: String,
}

impl fmt::Display for ParseHapticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid haptics '{}'. Valid options: {}",
            self.value,
            VALID_HAPTICS.join(", ")
        )
    }
}

impl std::error::Error for ParseHapticsError {}

impl FromStr for HapticsKind {
    type Err = ParseHapticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bell" => Ok(HapticsKind::Bell),
            "notify" => Ok(HapticsKind::Notify),
            "none" | "off" => Ok(HapticsKind::None),
            _ => Err(ParseHapticsError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create a haptics adapter for the chosen backend
pub fn create_haptics(kind: HapticsKind) -> Box<dyn Haptics> {
    match kind {
        HapticsKind::Bell => Box::new(BellHaptics::new()),
        HapticsKind::Notify => Box::new(NotifyHaptics::new()),
        HapticsKind::None => Box::new(NoOpHaptics::new()),
    }
}
