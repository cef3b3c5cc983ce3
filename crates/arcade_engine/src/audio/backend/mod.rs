//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries. Cues are
//! addressed by name; a cue plays at most one voice at a time.

pub mod null_backend;
#[cfg(feature = "audio")]
pub mod rodio_backend;

pub use null_backend::{AudioCommand, NullBackend};
#[cfg(feature = "audio")]
pub use rodio_backend::RodioBackend;

use crate::audio::AudioError;
use std::path::PathBuf;

/// One playback request
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRequest {
    /// Cue name
    pub cue: String,
    /// Resolved audio file
    pub path: PathBuf,
    /// Loop until stopped
    pub looped: bool,
    /// Final volume (0.0 - 1.0)
    pub volume: f32,
}

/// Audio backend trait for platform abstraction
pub trait AudioBackend {
    /// Start a cue, replacing any voice the cue already has
    fn play(&mut self, request: &PlayRequest) -> Result<(), AudioError>;

    /// Stop a cue; stopping a silent cue is a no-op
    fn stop(&mut self, cue: &str);

    /// Whether the cue still has an audible voice
    fn is_playing(&self, cue: &str) -> bool;

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Update the backend (cleanup finished sounds, etc.)
    fn update(&mut self);
}

/// Create the default audio backend for this build.
///
/// With the `audio` feature this opens the system output device and falls
/// back to the silent backend when that fails.
pub fn create_backend(enabled: bool) -> Box<dyn AudioBackend> {
    #[cfg(feature = "audio")]
    if enabled {
        match RodioBackend::new() {
            Ok(backend) => return Box::new(backend),
            Err(e) => log::warn!("Audio output unavailable, running silent: {}", e),
        }
    }

    #[cfg(not(feature = "audio"))]
    if enabled {
        log::info!("Built without the `audio` feature; sound cues are recorded only");
    }

    Box::new(NullBackend::new())
}
