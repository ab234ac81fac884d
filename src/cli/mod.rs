//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, dismissal handling,
//! and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod schedule_cmd;
pub mod signals;
pub mod times_cmd;

// Re-export commonly used types
pub use app::{run_ring, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, RingArgs, RingOptions};
pub use presenter::Presenter;
