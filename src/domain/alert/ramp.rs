//! Escalation constants and the arithmetic on them

use std::time::Duration;

use super::volume::Volume;

/// Volume playback starts at
pub const VOLUME_INITIAL: f32 = 0.20;
/// Volume added per ramp-up tick
pub const VOLUME_RAMP_UP_STEP: f32 = 0.01;
/// Time a full 0 to 1 ramp-up would take
pub const VOLUME_RAMP_UP_TIME: Duration = Duration::from_secs(60);
/// Volume removed per ramp-down tick
pub const VOLUME_RAMP_DOWN_STEP: f32 = 0.05;
/// Time a full 1 to 0 ramp-down takes
pub const VOLUME_RAMP_DOWN_TIME: Duration = Duration::from_secs(3);

/// Delay before the first vibration pulse
pub const FIRST_VIBRATION_AT: Duration = Duration::from_secs(60);
/// Each wait is this fraction of the previous one (next pulse 25% sooner)
pub const VIBRATION_URGENCY: f32 = 1.0 / 1.25;
/// Shortest wait between vibration pulses
pub const VIBRATION_FLOOR: Duration = Duration::from_secs(5);

/// How many times the alert sound is queued per start
pub const LOOP_COUNT: u32 = 100;

/// Immutable parameters of one escalating alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampConfig {
    pub volume_initial: Volume,
    pub ramp_up_step: f32,
    pub ramp_up_time: Duration,
    pub ramp_down_step: f32,
    pub ramp_down_time: Duration,
    pub first_vibration_at: Duration,
    pub vibration_urgency: f32,
    pub vibration_floor: Duration,
    pub loop_count: u32,
}

impl RampConfig {
    /// Period of the volume-up timer (0.6s with the defaults)
    pub fn ramp_up_interval(&self) -> Duration {
        self.ramp_up_time.mul_f32(self.ramp_up_step)
    }

    /// Period of the volume-down timer (0.15s with the defaults)
    pub fn ramp_down_interval(&self) -> Duration {
        self.ramp_down_time.mul_f32(self.ramp_down_step)
    }

    /// Wait before the pulse after one that waited `current`
    pub fn next_vibration_wait(&self, current: Duration) -> Duration {
        current
            .mul_f32(self.vibration_urgency)
            .max(self.vibration_floor)
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            volume_initial: Volume::new(VOLUME_INITIAL),
            ramp_up_step: VOLUME_RAMP_UP_STEP,
            ramp_up_time: VOLUME_RAMP_UP_TIME,
            ramp_down_step: VOLUME_RAMP_DOWN_STEP,
            ramp_down_time: VOLUME_RAMP_DOWN_TIME,
            first_vibration_at: FIRST_VIBRATION_AT,
            vibration_urgency: VIBRATION_URGENCY,
            vibration_floor: VIBRATION_FLOOR,
            loop_count: LOOP_COUNT,
        }
    }
}
