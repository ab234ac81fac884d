//! Configuration domain types

mod app_config;

pub use app_config::{is_valid_fraction, is_valid_step, AppConfig, DEFAULT_HAPTICS};
