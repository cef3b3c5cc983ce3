//! Rodio audio backend implementation
//!
//! Uses the Rodio library for cross-platform audio playback. Each cue owns
//! at most one sink; replaying a cue replaces its sink.

use super::{AudioBackend, PlayRequest};
use crate::audio::AudioError;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: OutputStream,
    /// Output stream handle for creating sinks
    stream_handle: OutputStreamHandle,
    /// Active sound sinks by cue
    active_sounds: HashMap<String, Sink>,
}

impl RodioBackend {
    /// Open the default output device
    pub fn new() -> Result<Self, AudioError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| AudioError::BackendInitFailed(format!("Failed to create audio output: {e}")))?;

        log::info!("Rodio audio backend initialized");
        Ok(Self {
            _output_stream: stream,
            stream_handle,
            active_sounds: HashMap::new(),
        })
    }
}

impl AudioBackend for RodioBackend {
    fn play(&mut self, request: &PlayRequest) -> Result<(), AudioError> {
        let file = File::open(&request.path)
            .map_err(|e| AudioError::PlaybackFailed(format!("{}: {e}", request.path.display())))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {e}")))?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {e}")))?;
        sink.set_volume(request.volume);
        if request.looped {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }

        if let Some(previous) = self.active_sounds.insert(request.cue.clone(), sink) {
            previous.stop();
        }
        Ok(())
    }

    fn stop(&mut self, cue: &str) {
        if let Some(sink) = self.active_sounds.remove(cue) {
            sink.stop();
        }
    }

    fn is_playing(&self, cue: &str) -> bool {
        self.active_sounds
            .get(cue)
            .is_some_and(|sink| !sink.empty() && !sink.is_paused())
    }

    fn stop_all(&mut self) {
        for (_cue, sink) in self.active_sounds.drain() {
            sink.stop();
        }
    }

    fn update(&mut self) {
        // Remove finished sounds
        self.active_sounds.retain(|_cue, sink| !sink.empty());
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.stop_all();
        log::info!("Rodio audio backend shutdown");
    }
}
