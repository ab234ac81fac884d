//! Rodio-based alert audio adapter
//!
//! Plays either a sound file from disk or a synthesized beeping tone.

use std::cell::{Cell, RefCell};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rodio::source::{SineWave, Source, Zero};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use crate::application::ports::{AlertAudio, AlertAudioError};
use crate::domain::alert::Volume;

use super::AlertSound;

/// Decoded-once, kept-in-memory alert sound
enum LoadedSound {
    Tone,
    Encoded(Arc<[u8]>),
}

impl LoadedSound {
    fn load(sound: &AlertSound) -> Result<Self, AlertAudioError> {
        match sound {
            AlertSound::Tone => Ok(Self::Tone),
            AlertSound::File(path) => {
                let bytes = read_sound_file(path)?;
                // Decode once up front so a bad file fails at startup
                Decoder::new(Cursor::new(Arc::clone(&bytes))).map_err(|e| {
                    AlertAudioError::SoundLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                Ok(Self::Encoded(bytes))
            }
        }
    }

    /// Queue the sound `loops` times on `sink`
    fn queue(&self, sink: &Sink, loops: u32) -> Result<(), AlertAudioError> {
        match self {
            Self::Tone => {
                for _ in 0..loops {
                    queue_tone_cycle(sink);
                }
            }
            Self::Encoded(bytes) => {
                let source = Decoder::new(Cursor::new(Arc::clone(bytes)))
                    .map_err(|e| AlertAudioError::PlaybackFailed(e.to_string()))?
                    .buffered();
                for _ in 0..loops {
                    sink.append(source.clone());
                }
            }
        }
        Ok(())
    }
}

fn read_sound_file(path: &Path) -> Result<Arc<[u8]>, AlertAudioError> {
    std::fs::read(path)
        .map(Arc::from)
        .map_err(|e| AlertAudioError::SoundLoadFailed(format!("{}: {}", path.display(), e)))
}

/// A short beep with a soft attack so it does not click
fn beep(freq: f32, duration_ms: u64) -> impl Source<Item = f32> + Send {
    SineWave::new(freq)
        .take_duration(Duration::from_millis(duration_ms))
        .fade_in(Duration::from_millis(10))
        .amplify(0.8)
}

fn silence(duration_ms: u64) -> impl Source<Item = f32> + Send {
    Zero::<f32>::new(1, 44100).take_duration(Duration::from_millis(duration_ms))
}

/// One cycle of the synthesized alarm: three quick beeps, then a pause
fn queue_tone_cycle(sink: &Sink) {
    for _ in 0..3 {
        sink.append(beep(880.0, 120));
        sink.append(silence(80));
    }
    sink.append(silence(500));
}

/// Alert audio implementation using rodio.
///
/// Holds the output stream for its whole lifetime; the device is released
/// when this value is dropped.
pub struct RodioAlertAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sound: LoadedSound,
    sink: RefCell<Option<Sink>>,
    volume: Cell<f32>,
}

impl RodioAlertAudio {
    /// Open the default output device and load the sound
    pub fn open(sound: &AlertSound) -> Result<Self, AlertAudioError> {
        let loaded = LoadedSound::load(sound)?;
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AlertAudioError::DeviceNotAvailable(e.to_string()))?;
        debug!(sound = %sound, "Alert audio ready");

        Ok(Self {
            _stream: stream,
            handle,
            sound: loaded,
            sink: RefCell::new(None),
            volume: Cell::new(Volume::SILENT.level()),
        })
    }
}

impl AlertAudio for RodioAlertAudio {
    /// Drops whatever is queued; the next `play_looping` starts from the top
    fn rewind(&self) -> Result<(), AlertAudioError> {
        if let Some(sink) = self.sink.borrow_mut().take() {
            sink.stop();
        }
        Ok(())
    }

    fn set_volume(&self, volume: Volume) -> Result<(), AlertAudioError> {
        self.volume.set(volume.level());
        if let Some(sink) = self.sink.borrow().as_ref() {
            sink.set_volume(volume.level());
        }
        Ok(())
    }

    fn play_looping(&self, loops: u32) -> Result<(), AlertAudioError> {
        let sink =
            Sink::try_new(&self.handle).map_err(|e| AlertAudioError::PlaybackFailed(e.to_string()))?;
        sink.set_volume(self.volume.get());
        self.sound.queue(&sink, loops)?;

        if let Some(previous) = self.sink.borrow_mut().replace(sink) {
            previous.stop();
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), AlertAudioError> {
        if let Some(sink) = self.sink.borrow_mut().take() {
            sink.stop();
        }
        Ok(())
    }
}
