//! Scheduler adapters

mod manual;
mod tokio;

pub use manual::ManualScheduler;
pub use self::tokio::TokioScheduler;
