//! Schedule command: dry-run the escalation on a virtual clock

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::application::ports::{AlertAudio, AlertAudioError, Haptics, HapticsError};
use crate::application::AlertPlayer;
use crate::domain::alert::{RampConfig, VibrationPhase, Volume, VolumePhase};
use crate::infrastructure::ManualScheduler;

use super::presenter::{format_secs, Presenter};

/// Escalation timeline of one alert, dismissed after the last listed pulse.
///
/// `full_volume_at_secs` and `fade_out_secs` are `None` when the ramp does
/// not finish within the simulated horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub volume_initial: f32,
    pub ramp_up_interval_secs: f64,
    pub full_volume_at_secs: Option<f64>,
    pub pulses: Vec<Pulse>,
    pub ramp_down_interval_secs: f64,
    pub fade_out_secs: Option<f64>,
}

/// One vibration pulse on the timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pulse {
    pub number: usize,
    pub at_secs: f64,
    pub wait_secs: f64,
}

/// Audio that accepts everything and plays nothing
struct SilentAudio;

impl AlertAudio for SilentAudio {
    fn rewind(&self) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn set_volume(&self, _volume: Volume) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn play_looping(&self, _loops: u32) -> Result<(), AlertAudioError> {
        Ok(())
    }

    fn stop(&self) -> Result<(), AlertAudioError> {
        Ok(())
    }
}

/// Records the virtual time of every pulse
struct RecordingHaptics {
    clock: Weak<ManualScheduler>,
    pulses: Rc<RefCell<Vec<Duration>>>,
}

impl Haptics for RecordingHaptics {
    fn pulse(&self) -> Result<(), HapticsError> {
        let now = self
            .clock
            .upgrade()
            .map(|clock| clock.now())
            .ok_or_else(|| HapticsError::PulseFailed("clock dropped".to_string()))?;
        self.pulses.borrow_mut().push(now);
        Ok(())
    }
}

/// Run the alert on a virtual clock until full volume and `pulses` pulses,
/// then dismiss it and measure the fade-out.
///
/// Each phase stops at a horizon derived from the config, so a ramp that
/// never finishes still yields a timeline.
pub fn simulate(config: RampConfig, pulses: usize) -> Timeline {
    let scheduler = Rc::new(ManualScheduler::new());
    let recorded = Rc::new(RefCell::new(Vec::new()));
    let haptics = RecordingHaptics {
        clock: Rc::downgrade(&scheduler),
        pulses: Rc::clone(&recorded),
    };
    let player = AlertPlayer::new(SilentAudio, haptics, Rc::clone(&scheduler), config);

    player.start();

    let ring_horizon = ring_horizon(&config, pulses);
    let mut full_at = None;
    loop {
        if full_at.is_none() && player.volume_phase() == VolumePhase::Full {
            full_at = Some(scheduler.now());
        }

        let enough_pulses = recorded.borrow().len() >= pulses
            || player.vibration_phase() == VibrationPhase::Inactive;
        if full_at.is_some() && enough_pulses {
            break;
        }
        if !fire_next_before(&scheduler, ring_horizon) {
            debug!(?ring_horizon, "escalation unfinished at horizon");
            break;
        }
    }

    let dismissed_at = scheduler.now();
    player.stop();
    let fade_horizon = dismissed_at + config.ramp_down_time + config.ramp_down_interval();
    while player.volume_phase() != VolumePhase::Stopped {
        if !fire_next_before(&scheduler, fade_horizon) {
            debug!(?fade_horizon, "fade-out unfinished at horizon");
            break;
        }
    }
    let fade_out = (player.volume_phase() == VolumePhase::Stopped)
        .then(|| scheduler.now() - dismissed_at);

    let mut previous = Duration::ZERO;
    let pulses = recorded
        .borrow()
        .iter()
        .take(pulses)
        .enumerate()
        .map(|(i, &at)| {
            let pulse = Pulse {
                number: i + 1,
                at_secs: secs(at),
                wait_secs: secs(at - previous),
            };
            previous = at;
            pulse
        })
        .collect();

    Timeline {
        volume_initial: config.volume_initial.level(),
        ramp_up_interval_secs: secs(config.ramp_up_interval()),
        full_volume_at_secs: full_at.map(secs),
        pulses,
        ramp_down_interval_secs: secs(config.ramp_down_interval()),
        fade_out_secs: fade_out.map(secs),
    }
}

/// Latest virtual time the ringing phase may need: one full ramp plus
/// every requested pulse at the longest wait the config allows.
fn ring_horizon(config: &RampConfig, pulses: usize) -> Duration {
    let longest_wait = config.first_vibration_at.max(config.vibration_floor);
    let pulses = u32::try_from(pulses).unwrap_or(u32::MAX);
    (config.ramp_up_time + config.ramp_up_interval())
        .saturating_add(longest_wait.saturating_mul(pulses))
}

/// Jump to the next armed timer and fire it, unless it is due after
/// `horizon` or nothing is armed.
fn fire_next_before(scheduler: &ManualScheduler, horizon: Duration) -> bool {
    match scheduler.next_due() {
        Some(due) if due <= horizon => {
            scheduler.advance_to(due);
            true
        }
        _ => false,
    }
}

/// Handle the schedule command
pub fn handle_schedule_command(
    config: RampConfig,
    pulses: usize,
    json: bool,
    presenter: &Presenter,
) -> Result<(), String> {
    let timeline = simulate(config, pulses);

    if json {
        let text = serde_json::to_string_pretty(&timeline).map_err(|e| e.to_string())?;
        presenter.output(&text);
        return Ok(());
    }

    let full = match timeline.full_volume_at_secs {
        Some(at) => format!("full at {}", format_secs(Duration::from_secs_f64(at))),
        None => "never reaches full".to_string(),
    };
    presenter.output(&format!(
        "Volume: {} -> 100%, one step every {}, {}",
        config.volume_initial,
        format_secs(config.ramp_up_interval()),
        full,
    ));
    for pulse in &timeline.pulses {
        presenter.output(&format!(
            "Pulse {:>3} at {:>9} (after {})",
            pulse.number,
            format_secs(Duration::from_secs_f64(pulse.at_secs)),
            format_secs(Duration::from_secs_f64(pulse.wait_secs)),
        ));
    }
    let silent = match timeline.fade_out_secs {
        Some(after) => format!(
            "silent {} after dismiss",
            format_secs(Duration::from_secs_f64(after))
        ),
        None => "never falls silent".to_string(),
    };
    presenter.output(&format!(
        "Fade-out: one step every {}, {}",
        format_secs(config.ramp_down_interval()),
        silent,
    ));

    Ok(())
}

/// Seconds rounded to the millisecond
fn secs(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}
