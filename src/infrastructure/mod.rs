//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio device, the terminal, the desktop,
//! the tokio timer wheel, and the config file.

pub mod audio;
pub mod config;
pub mod haptics;
pub mod scheduler;

// Re-export adapters
pub use audio::{create_alert_audio, AlertSound, NoOpAlertAudio, RodioAlertAudio};
pub use config::XdgConfigStore;
pub use haptics::{create_haptics, BellHaptics, HapticsKind, NoOpHaptics, NotifyHaptics};
pub use scheduler::{ManualScheduler, TokioScheduler};
