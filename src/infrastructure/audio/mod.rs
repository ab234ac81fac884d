//! Alert audio infrastructure adapters

mod noop;
mod rodio;

pub use noop::NoOpAlertAudio;
pub use rodio::RodioAlertAudio;

use std::fmt;
use std::path::PathBuf;

use tracing::error;

use crate::application::ports::AlertAudio;

/// What the alert plays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertSound {
    /// Built-in synthesized beeping
    Tone,
    /// A sound file (wav, mp3, flac, ogg)
    File(PathBuf),
}

impl AlertSound {
    /// Sound file if one is given, the built-in tone otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or(Self::Tone)
    }
}

impl fmt::Display for AlertSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tone => write!(f, "built-in tone"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Open the alert audio, falling back to silent playback if the sound or
/// the output device is unavailable.
pub fn create_alert_audio(sound: &AlertSound) -> Box<dyn AlertAudio> {
    match RodioAlertAudio::open(sound) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            error!(error = %e, "Alert audio unavailable, continuing without sound");
            Box::new(NoOpAlertAudio::new())
        }
    }
}
