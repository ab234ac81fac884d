//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};

use crate::domain::alert::{RampConfig, Volume};
use crate::domain::clock::Duration;

/// Haptics backend used when none is configured
pub const DEFAULT_HAPTICS: &str = "bell";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
/// Durations are stored in the human format ("60s", "1m").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub sound_file: Option<String>,
    pub haptics: Option<String>,
    pub loop_count: Option<u32>,
    pub volume_initial: Option<f64>,
    pub ramp_up_step: Option<f64>,
    pub ramp_up_time: Option<String>,
    pub ramp_down_step: Option<f64>,
    pub ramp_down_time: Option<String>,
    pub first_vibration_at: Option<String>,
    pub vibration_urgency: Option<f64>,
    pub vibration_floor: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            sound_file: None,
            haptics: Some(DEFAULT_HAPTICS.to_string()),
            loop_count: Some(100),
            volume_initial: Some(0.2),
            ramp_up_step: Some(0.01),
            ramp_up_time: Some("60s".to_string()),
            ramp_down_step: Some(0.05),
            ramp_down_time: Some("3s".to_string()),
            first_vibration_at: Some("60s".to_string()),
            vibration_urgency: Some(0.8),
            vibration_floor: Some("5s".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            sound_file: other.sound_file.or(self.sound_file),
            haptics: other.haptics.or(self.haptics),
            loop_count: other.loop_count.or(self.loop_count),
            volume_initial: other.volume_initial.or(self.volume_initial),
            ramp_up_step: other.ramp_up_step.or(self.ramp_up_step),
            ramp_up_time: other.ramp_up_time.or(self.ramp_up_time),
            ramp_down_step: other.ramp_down_step.or(self.ramp_down_step),
            ramp_down_time: other.ramp_down_time.or(self.ramp_down_time),
            first_vibration_at: other.first_vibration_at.or(self.first_vibration_at),
            vibration_urgency: other.vibration_urgency.or(self.vibration_urgency),
            vibration_floor: other.vibration_floor.or(self.vibration_floor),
        }
    }

    /// Sound file to play, if one is configured
    pub fn sound_file_path(&self) -> Option<PathBuf> {
        self.sound_file
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Get haptics backend name, or "bell" if not set
    pub fn haptics_or_default(&self) -> &str {
        self.haptics.as_deref().unwrap_or(DEFAULT_HAPTICS)
    }

    /// Build the ramp parameters. Unset or invalid values fall back to the
    /// built-in constants individually.
    pub fn ramp_config(&self) -> RampConfig {
        let defaults = RampConfig::default();

        RampConfig {
            volume_initial: self
                .volume_initial
                .filter(|v| (0.0..=1.0).contains(v))
                .map(|v| Volume::new(v as f32))
                .unwrap_or(defaults.volume_initial),
            ramp_up_step: step_or(self.ramp_up_step, defaults.ramp_up_step),
            ramp_up_time: duration_or(&self.ramp_up_time, defaults.ramp_up_time),
            ramp_down_step: step_or(self.ramp_down_step, defaults.ramp_down_step),
            ramp_down_time: duration_or(&self.ramp_down_time, defaults.ramp_down_time),
            first_vibration_at: duration_or(
                &self.first_vibration_at,
                defaults.first_vibration_at,
            ),
            vibration_urgency: fraction_or(self.vibration_urgency, defaults.vibration_urgency),
            vibration_floor: duration_or(&self.vibration_floor, defaults.vibration_floor),
            loop_count: self
                .loop_count
                .filter(|&n| n > 0)
                .unwrap_or(defaults.loop_count),
        }
    }
}

/// Whether a value is usable as a step or urgency factor: in (0, 1]
pub fn is_valid_fraction(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Whether a value is usable as a volume ramp step: at least the volume
/// resolution, at most 1
pub fn is_valid_step(value: f64) -> bool {
    value >= f64::from(Volume::RESOLUTION) && value <= 1.0
}

fn step_or(value: Option<f64>, default: f32) -> f32 {
    value
        .filter(|&v| is_valid_step(v))
        .map(|v| v as f32)
        .unwrap_or(default)
}

fn fraction_or(value: Option<f64>, default: f32) -> f32 {
    value
        .filter(|&v| is_valid_fraction(v))
        .map(|v| v as f32)
        .unwrap_or(default)
}

fn duration_or(value: &Option<String>, default: StdDuration) -> StdDuration {
    value
        .as_ref()
        .and_then(|s| s.parse::<Duration>().ok())
        .map(|d| d.as_std())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_ramp() {
        let config = AppConfig::defaults();
        assert_eq!(config.haptics_or_default(), "bell");
        assert!(config.sound_file_path().is_none());

        let ramp = config.ramp_config();
        let builtin = RampConfig::default();
        assert_eq!(ramp.volume_initial, builtin.volume_initial);
        assert_eq!(ramp.ramp_up_time, builtin.ramp_up_time);
        assert_eq!(ramp.ramp_down_time, builtin.ramp_down_time);
        assert_eq!(ramp.first_vibration_at, builtin.first_vibration_at);
        assert_eq!(ramp.vibration_floor, builtin.vibration_floor);
        assert_eq!(ramp.loop_count, 100);
        assert!((ramp.vibration_urgency - builtin.vibration_urgency).abs() < 1e-6);
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.sound_file.is_none());
        assert!(config.haptics.is_none());
        assert!(config.ramp_up_time.is_none());
        assert!(config.vibration_urgency.is_none());
    }

    #[test]
    fn empty_config_yields_built_in_ramp() {
        assert_eq!(AppConfig::empty().ramp_config(), RampConfig::default());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            sound_file: Some("/base.wav".to_string()),
            haptics: Some("bell".to_string()),
            ramp_up_time: Some("60s".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            sound_file: Some("/other.wav".to_string()),
            haptics: None, // Should not override
            ramp_up_time: Some("2m".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.sound_file, Some("/other.wav".to_string()));
        assert_eq!(merged.haptics, Some("bell".to_string()));
        assert_eq!(merged.ramp_up_time, Some("2m".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            loop_count: Some(3),
            vibration_urgency: Some(0.5),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.loop_count, Some(3));
        assert_eq!(merged.vibration_urgency, Some(0.5));
    }

    #[test]
    fn ramp_config_applies_overrides() {
        let config = AppConfig {
            volume_initial: Some(0.5),
            ramp_up_time: Some("2m".to_string()),
            first_vibration_at: Some("30s".to_string()),
            vibration_floor: Some("10s".to_string()),
            loop_count: Some(7),
            ..Default::default()
        };

        let ramp = config.ramp_config();
        assert_eq!(ramp.volume_initial.level(), 0.5);
        assert_eq!(ramp.ramp_up_time, StdDuration::from_secs(120));
        assert_eq!(ramp.first_vibration_at, StdDuration::from_secs(30));
        assert_eq!(ramp.vibration_floor, StdDuration::from_secs(10));
        assert_eq!(ramp.loop_count, 7);
    }

    #[test]
    fn ramp_config_ignores_invalid_values() {
        let config = AppConfig {
            volume_initial: Some(1.5),
            ramp_up_step: Some(0.0),
            ramp_down_step: Some(-0.1),
            ramp_down_time: Some("soon".to_string()),
            vibration_urgency: Some(2.0),
            loop_count: Some(0),
            ..Default::default()
        };

        assert_eq!(config.ramp_config(), RampConfig::default());
    }

    #[test]
    fn ramp_config_ignores_steps_finer_than_volume_resolution() {
        let config = AppConfig {
            ramp_up_step: Some(0.00004),
            ramp_down_step: Some(0.00004),
            ..Default::default()
        };

        let ramp = config.ramp_config();
        assert_eq!(ramp.ramp_up_step, RampConfig::default().ramp_up_step);
        assert_eq!(ramp.ramp_down_step, RampConfig::default().ramp_down_step);
    }

    #[test]
    fn step_bounds() {
        assert!(is_valid_step(0.0001));
        assert!(is_valid_step(0.05));
        assert!(is_valid_step(1.0));
        assert!(!is_valid_step(0.00004));
        assert!(!is_valid_step(1.5));
        assert!(!is_valid_step(f64::NAN));
    }

    #[test]
    fn blank_sound_file_is_unset() {
        let config = AppConfig {
            sound_file: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.sound_file_path().is_none());
    }

    #[test]
    fn fraction_bounds() {
        assert!(is_valid_fraction(1.0));
        assert!(is_valid_fraction(0.01));
        assert!(!is_valid_fraction(0.0));
        assert!(!is_valid_fraction(1.01));
    }
}
