//! Pickable alarm times
//!
//! The time picker offers a fixed list of quarter-hour slots across the day.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidTimeError;

/// Minutes offered within each hour
pub const SLOT_MINUTES: [u8; 4] = [0, 15, 30, 45];

/// Half of the day a time falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Period for an hour on the 24-hour clock
    pub const fn for_hour(hour: u8) -> Self {
        if hour < 12 {
            Self::Am
        } else {
            Self::Pm
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Am => "am",
            Self::Pm => "pm",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "am" => Ok(Self::Am),
            "pm" => Ok(Self::Pm),
            _ => Err(format!("Invalid period: \"{}\". Expected am or pm", s)),
        }
    }
}

/// A single selectable alarm time with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeElement {
    hour: u8,
    minute: u8,
    label: String,
    period: Period,
}

impl TimeElement {
    /// Create a time element for a 24-hour clock time
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeError> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeError { hour, minute });
        }
        Ok(Self::from_valid(hour, minute))
    }

    fn from_valid(hour: u8, minute: u8) -> Self {
        let label = match (hour, minute) {
            (0, 0) => "midnight".to_string(),
            (12, 0) => "noon".to_string(),
            _ => format!("{:02} : {:02}", hour, minute),
        };

        Self {
            hour,
            minute,
            label,
            period: Period::for_hour(hour),
        }
    }

    /// Every quarter-hour slot of the day, midnight first
    pub fn generate_all() -> Vec<Self> {
        (0..24u8)
            .flat_map(|hour| {
                SLOT_MINUTES
                    .iter()
                    .map(move |&minute| Self::from_valid(hour, minute))
            })
            .collect()
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Display label, e.g. "07 : 30", "noon"
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn period(&self) -> Period {
        self.period
    }
}

impl fmt::Display for TimeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.period)
    }
}
