//! Times command: list the alarm times on offer

use crate::domain::clock::{Period, TimeElement};

use super::presenter::Presenter;

/// Pickable times, optionally limited to one half of the day
pub fn pickable_times(period: Option<Period>) -> Vec<TimeElement> {
    TimeElement::generate_all()
        .into_iter()
        .filter(|t| period.map_or(true, |p| t.period() == p))
        .collect()
}

/// Handle the times command, one time per line
pub fn handle_times_command(period: Option<Period>, presenter: &Presenter) {
    for time in pickable_times(period) {
        presenter.output(&time.to_string());
    }
}
