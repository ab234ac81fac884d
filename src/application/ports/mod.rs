//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod alert_audio;
pub mod config;
pub mod haptics;
pub mod scheduler;

// Re-export common types
pub use alert_audio::{AlertAudio, AlertAudioError};
pub use config::ConfigStore;
pub use haptics::{Haptics, HapticsError};
pub use scheduler::{CancelHandle, OnceTask, RepeatingTask, Scheduler, MIN_INTERVAL};
