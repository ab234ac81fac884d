//! Application layer - Use cases and port interfaces
//!
//! Contains the escalating alert player and the trait definitions
//! for the systems it drives.

pub mod alert_player;
pub mod ports;

// Re-export use cases
pub use alert_player::AlertPlayer;
