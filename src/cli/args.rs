//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::alert::RampConfig;
use crate::domain::clock::{Duration, Period};
use crate::infrastructure::{AlertSound, HapticsKind};

/// Alarm clock - an alert that gets louder and more insistent until dismissed
#[derive(Parser, Debug)]
#[command(name = "alarm-clock")]
#[command(version)]
#[command(about = "Alarm clock with an escalating alert: rising volume and accelerating vibration")]
#[command(long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", env = "ALARM_CLOCK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Most pulses `schedule` will list
pub const MAX_PULSES: u16 = 1000;

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ring the alarm now; press Enter or Ctrl-C to dismiss
    Ring(RingArgs),
    /// List the alarm times the time picker offers
    Times {
        /// Only show morning (am) or afternoon/evening (pm) times
        #[arg(long, value_name = "PERIOD")]
        period: Option<PeriodArg>,
    },
    /// Print the escalation timeline without making a sound
    Schedule {
        /// Number of vibration pulses to list (at most 1000)
        #[arg(
            short = 'p',
            long,
            value_name = "N",
            default_value_t = 15,
            value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_PULSES)),
        )]
        pulses: u16,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the ring command
#[derive(Args, Debug, Default)]
pub struct RingArgs {
    /// Sound file to play (wav, mp3, flac, ogg); defaults to a built-in tone
    #[arg(short = 's', long, value_name = "FILE", env = "ALARM_CLOCK_SOUND")]
    pub sound: Option<PathBuf>,

    /// How to deliver vibration pulses
    #[arg(long, value_name = "KIND")]
    pub haptics: Option<HapticsArg>,

    /// Dismiss automatically after this long (e.g., 30s, 5m)
    #[arg(short = 'd', long, value_name = "TIME")]
    pub dismiss_after: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Haptics argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HapticsArg {
    Bell,
    Notify,
    None,
}

impl From<HapticsArg> for HapticsKind {
    fn from(arg: HapticsArg) -> Self {
        match arg {
            HapticsArg::Bell => HapticsKind::Bell,
            HapticsArg::Notify => HapticsKind::Notify,
            HapticsArg::None => HapticsKind::None,
        }
    }
}

/// Period argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Am,
    Pm,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Am => Period::Am,
            PeriodArg::Pm => Period::Pm,
        }
    }
}

/// Resolved options for ringing the alarm
#[derive(Debug, Clone)]
pub struct RingOptions {
    pub sound: AlertSound,
    pub haptics: HapticsKind,
    pub ramp: RampConfig,
    pub dismiss_after: Option<Duration>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "sound_file",
    "haptics",
    "loop_count",
    "volume_initial",
    "ramp_up_step",
    "ramp_up_time",
    "ramp_down_step",
    "ramp_down_time",
    "first_vibration_at",
    "vibration_urgency",
    "vibration_floor",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
