//! Main app runner for ringing the alarm

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration as StdDuration;

use tokio::task::LocalSet;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::application::ports::{AlertAudio, ConfigStore, Haptics, Scheduler};
use crate::application::AlertPlayer;
use crate::domain::alert::{VibrationPhase, VolumePhase};
use crate::domain::clock::Duration;
use crate::domain::config::AppConfig;
use crate::infrastructure::{
    create_alert_audio, create_haptics, AlertSound, HapticsKind, TokioScheduler, XdgConfigStore,
};

use super::args::{RingArgs, RingOptions};
use super::presenter::{format_secs, Presenter};
use super::signals::wait_for_dismiss;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// How often the status line is redrawn while ringing
const STATUS_REFRESH: StdDuration = StdDuration::from_millis(250);
/// Slack on top of the configured fade-out before giving up on it
const FADE_OUT_GRACE: StdDuration = StdDuration::from_secs(2);

/// Config store at `path`, or the XDG default
pub fn config_store(path: Option<PathBuf>) -> XdgConfigStore {
    match path {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

/// Load and merge configuration: defaults < file < CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            let path = store.path();
            warn!(error = %e, path = %path.display(), "Ignoring unreadable config");
            AppConfig::empty()
        }
    };

    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Config overrides carried by the ring arguments
pub fn ring_cli_config(args: &RingArgs) -> AppConfig {
    AppConfig {
        sound_file: args
            .sound
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
        haptics: args.haptics.map(|h| HapticsKind::from(h).to_string()),
        ..Default::default()
    }
}

/// Turn merged config plus the dismiss timer into ring options.
///
/// Errors are usage errors, worded for the user.
pub fn resolve_ring_options(
    config: &AppConfig,
    dismiss_after: Option<&str>,
) -> Result<RingOptions, String> {
    let dismiss_after = dismiss_after
        .map(|s| {
            s.parse::<Duration>()
                .map_err(|e| format!("Invalid dismiss-after: {}", e))
        })
        .transpose()?;

    let haptics = config
        .haptics_or_default()
        .parse::<HapticsKind>()
        .map_err(|e| format!("Invalid haptics: {}", e))?;

    Ok(RingOptions {
        sound: AlertSound::from_path(config.sound_file_path()),
        haptics,
        ramp: config.ramp_config(),
        dismiss_after,
    })
}

/// Ring the alarm until dismissed, then fade out.
///
/// Timers are `spawn_local` tasks, so everything runs inside a `LocalSet`
/// on the current thread.
pub async fn run_ring(options: RingOptions) -> ExitCode {
    LocalSet::new().run_until(ring(options)).await
}

async fn ring(options: RingOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let audio = create_alert_audio(&options.sound);
    let haptics = create_haptics(options.haptics);
    let scheduler = Rc::new(TokioScheduler::new());
    let player = AlertPlayer::new(audio, haptics, scheduler, options.ramp);

    if player.is_audio_degraded() {
        presenter.warn("No audio output; ringing with vibration only");
    }

    info!(sound = %options.sound, haptics = %options.haptics, "Ringing");
    player.start();

    let status = status_line(&presenter, &player);
    presenter.start_spinner(&status);
    let reason = {
        let dismissed = wait_for_dismiss(options.dismiss_after.map(|d| d.as_std()));
        tokio::pin!(dismissed);

        let mut refresh = interval(STATUS_REFRESH);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                reason = &mut dismissed => break reason,
                _ = refresh.tick() => presenter.update_spinner(&status_line(&presenter, &player)),
            }
        }
    };

    info!(%reason, pulses = player.pulses_triggered(), "Alarm dismissed");
    player.stop();

    let deadline = player.config().ramp_down_time + FADE_OUT_GRACE;
    let faded = tokio::time::timeout(deadline, async {
        let mut refresh = interval(STATUS_REFRESH / 5);
        while player.volume_phase() != VolumePhase::Stopped {
            refresh.tick().await;
            presenter.update_spinner(&status_line(&presenter, &player));
        }
    })
    .await;

    if faded.is_err() {
        debug!("Fade-out did not finish in time");
        presenter.stop_spinner();
        presenter.error("Alarm did not fade out in time");
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.spinner_success(&format!(
        "Alarm {} after {} pulse(s)",
        reason,
        player.pulses_triggered()
    ));
    ExitCode::from(EXIT_SUCCESS)
}

fn status_line<A, H, S>(presenter: &Presenter, player: &AlertPlayer<A, H, S>) -> String
where
    A: AlertAudio + 'static,
    H: Haptics + 'static,
    S: Scheduler + 'static,
{
    let vibration = match (player.vibration_phase(), player.current_vibration_wait()) {
        (VibrationPhase::Waiting, Some(wait)) => format!("next pulse in ≤{}", format_secs(wait)),
        _ => "vibration off".to_string(),
    };

    format!(
        "{} {} | {} | {} pulse(s)",
        presenter.format_volume(player.volume()),
        player.volume_phase(),
        vibration,
        player.pulses_triggered()
    )
}
