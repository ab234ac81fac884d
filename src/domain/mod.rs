//! Domain layer - Core alarm logic
//!
//! Contains value objects, escalation arithmetic, and domain errors.
//! This layer has no dependencies on external systems.

pub mod alert;
pub mod clock;
pub mod config;
pub mod error;

// Re-export common types
pub use alert::{RampConfig, VibrationPhase, Volume, VolumePhase};
pub use clock::{Duration, Period, TimeElement};
pub use config::AppConfig;
pub use error::*;
