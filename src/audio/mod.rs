//! Audible cue playback for interval transitions.
//!
//! The state machine never touches the audio device directly; it emits
//! effects and the app applies them through a [`CueSink`]. The
//! rodio-backed [`BeepCue`] degrades to a logged no-op when no output
//! device is available, so a missing sound card never blocks a state
//! transition.

use std::time::Duration;

use rodio::source::SineWave;
use rodio::{OutputStream, Sink, Source};
use thiserror::Error;

const CUE_FREQ_HZ: f32 = 880.0;
const CUE_LENGTH: Duration = Duration::from_millis(900);
const CUE_GAIN: f32 = 0.20;

/// Why the audio device could not be opened at startup.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("no audio output stream: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("audio sink unavailable: {0}")]
    Sink(#[from] rodio::PlayError),
}

/// Playback capability injected into the app.
pub trait CueSink {
    /// Start the cue from its beginning, replacing any playing instance.
    fn play(&mut self);
    /// Stop the cue and rewind it. No-op when nothing is playing.
    fn stop(&mut self);
}

/// rodio-backed cue sink.
///
/// Each `play` clears the sink and queues a fresh synthesized tone, so
/// playback always starts from the beginning.
pub struct BeepCue {
    // The stream must stay alive as long as the sink; only the sink is
    // touched after construction.
    output: Option<(OutputStream, Sink)>,
}

impl BeepCue {
    /// Open the default output device, falling back to a silent sink.
    pub fn new() -> Self {
        match Self::open() {
            Ok(cue) => cue,
            Err(err) => {
                tracing::warn!("audio cue disabled: {}", err);
                Self { output: None }
            }
        }
    }

    fn open() -> Result<Self, CueError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        Ok(Self {
            output: Some((stream, sink)),
        })
    }
}

impl Default for BeepCue {
    fn default() -> Self {
        Self::new()
    }
}

impl CueSink for BeepCue {
    fn play(&mut self) {
        let Some((_, sink)) = &self.output else {
            return;
        };
        sink.stop();
        let tone = SineWave::new(CUE_FREQ_HZ)
            .take_duration(CUE_LENGTH)
            .amplify(CUE_GAIN);
        sink.append(tone);
        sink.play();
    }

    fn stop(&mut self) {
        if let Some((_, sink)) = &self.output {
            sink.stop();
        }
    }
}

/// Inert sink for tests and audio-less environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCue;

impl CueSink for NullCue {
    fn play(&mut self) {}
    fn stop(&mut self) {}
}
