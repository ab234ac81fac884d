//! Clock-related value objects

mod duration;
mod time_element;

pub use duration::Duration;
pub use time_element::{Period, TimeElement, SLOT_MINUTES};
