//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::alert::Volume;
use crate::domain::clock::Duration;
use crate::domain::config::{is_valid_fraction, is_valid_step, AppConfig};
use crate::domain::error::ConfigError;
use crate::infrastructure::HapticsKind;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_known_key(key)?;

    let config = store.load().await?;

    match config_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &config_value(&config, key).unwrap_or_else(|| "(not set)".to_string()),
        );
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_known_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Current value of a config key, formatted for display
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "sound_file" => config.sound_file.clone(),
        "haptics" => config.haptics.clone(),
        "loop_count" => config.loop_count.map(|n| n.to_string()),
        "volume_initial" => config.volume_initial.map(|v| v.to_string()),
        "ramp_up_step" => config.ramp_up_step.map(|v| v.to_string()),
        "ramp_up_time" => config.ramp_up_time.clone(),
        "ramp_down_step" => config.ramp_down_step.map(|v| v.to_string()),
        "ramp_down_time" => config.ramp_down_time.clone(),
        "first_vibration_at" => config.first_vibration_at.clone(),
        "vibration_urgency" => config.vibration_urgency.map(|v| v.to_string()),
        "vibration_floor" => config.vibration_floor.clone(),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "sound_file" => config.sound_file = Some(value.to_string()),
        "haptics" => {
            let kind: HapticsKind = value.parse().map_err(|e| ConfigError::ValidationError {
                key: key.to_string(),
                message: format!("{}", e),
            })?;
            config.haptics = Some(kind.to_string());
        }
        "loop_count" => {
            let count = value
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a positive whole number".to_string(),
                })?;
            config.loop_count = Some(count);
        }
        "volume_initial" => {
            let level = parse_number(key, value)?;
            if !(0.0..=1.0).contains(&level) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be between 0 and 1".to_string(),
                });
            }
            config.volume_initial = Some(level);
        }
        "ramp_up_step" => config.ramp_up_step = Some(parse_step(key, value)?),
        "ramp_down_step" => config.ramp_down_step = Some(parse_step(key, value)?),
        "vibration_urgency" => config.vibration_urgency = Some(parse_fraction(key, value)?),
        "ramp_up_time" => config.ramp_up_time = Some(parse_duration(key, value)?),
        "ramp_down_time" => config.ramp_down_time = Some(parse_duration(key, value)?),
        "first_vibration_at" => config.first_vibration_at = Some(parse_duration(key, value)?),
        "vibration_floor" => config.vibration_floor = Some(parse_duration(key, value)?),
        _ => {
            return Err(ConfigError::ValidationError {
                key: key.to_string(),
                message: "Unknown key".to_string(),
            })
        }
    }
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("'{}' is not a number", value),
        })
}

/// Parse an urgency factor: greater than 0, at most 1
fn parse_fraction(key: &str, value: &str) -> Result<f64, ConfigError> {
    let number = parse_number(key, value)?;
    if !is_valid_fraction(number) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be greater than 0 and at most 1".to_string(),
        });
    }
    Ok(number)
}

/// Parse a volume ramp step: no finer than the volume resolution, at most 1
fn parse_step(key: &str, value: &str) -> Result<f64, ConfigError> {
    let number = parse_number(key, value)?;
    if !is_valid_step(number) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Value must be between {} and 1", Volume::RESOLUTION),
        });
    }
    Ok(number)
}

/// Parse and normalize a duration ("90s" is stored as "1m30s")
fn parse_duration(key: &str, value: &str) -> Result<String, ConfigError> {
    value
        .parse::<Duration>()
        .map(|d| d.to_string())
        .map_err(|e| ConfigError::ValidationError {
            key: key.to_string(),
            message: e.to_string(),
        })
}
