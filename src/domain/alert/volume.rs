//! Playback volume value object

use std::fmt;

/// Resolution volume levels are snapped to after each step, so repeated
/// 0.01 or 0.05 steps land exactly on the bounds.
const SNAP: f32 = 10_000.0;

/// Playback volume, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Volume(f32);

impl Volume {
    pub const SILENT: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);
    /// Smallest step that still moves the volume; anything finer is
    /// rounded away by the snap.
    pub const RESOLUTION: f32 = 1.0 / SNAP;

    /// Create a volume, clamping into range. NaN becomes silent.
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self::SILENT;
        }
        Self(level.clamp(0.0, 1.0))
    }

    pub fn level(self) -> f32 {
        self.0
    }

    /// One ramp step up, clamped at full
    pub fn raised_by(self, step: f32) -> Self {
        Self::new(snap(self.0 + step))
    }

    /// One ramp step down, clamped at silent
    pub fn lowered_by(self, step: f32) -> Self {
        Self::new(snap(self.0 - step))
    }

    pub fn is_full(self) -> bool {
        self.0 >= 1.0
    }

    pub fn is_silent(self) -> bool {
        self.0 <= 0.0
    }

    /// Whole percentage, for display
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

fn snap(level: f32) -> f32 {
    (level * SNAP).round() / SNAP
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
