//! Escalating alert value objects

mod phase;
mod ramp;
mod volume;

pub use phase::{VibrationPhase, VolumePhase};
pub use ramp::{
    RampConfig, FIRST_VIBRATION_AT, LOOP_COUNT, VIBRATION_FLOOR, VIBRATION_URGENCY,
    VOLUME_INITIAL, VOLUME_RAMP_DOWN_STEP, VOLUME_RAMP_DOWN_TIME, VOLUME_RAMP_UP_STEP,
    VOLUME_RAMP_UP_TIME,
};
pub use volume::Volume;
