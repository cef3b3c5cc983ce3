//! Audio system
//!
//! Named sound cues bound to audio assets. Games call `play`/`stop` by cue
//! name; mixing and decoding belong to the backend.

pub mod backend;

use crate::assets::AssetManager;
use backend::{AudioBackend, PlayRequest};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use thiserror::Error;

/// Audio errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// Backend could not be opened
    #[error("Audio backend initialization failed: {0}")]
    BackendInitFailed(String),

    /// A sound could not be played
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// Cue was never added
    #[error("Unknown sound cue: {0}")]
    UnknownCue(String),
}

/// Volume and enable settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    /// Audio enabled
    pub enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// SFX volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            master_volume: 0.7,
            sfx_volume: 0.8,
        }
    }
}

/// Audio system driving a backend through named cues
pub struct AudioSystem {
    backend: Box<dyn AudioBackend>,
    cues: HashMap<String, PathBuf>,
    broken: HashSet<String>,
    settings: AudioSettings,
}

impl AudioSystem {
    /// Create an audio system over the given backend
    pub fn new(backend: Box<dyn AudioBackend>, settings: AudioSettings) -> Self {
        Self {
            backend,
            cues: HashMap::new(),
            broken: HashSet::new(),
            settings,
        }
    }

    /// Bind a cue to a declared audio asset
    pub fn add(&mut self, cue: &str, assets: &AssetManager) -> Result<(), AudioError> {
        let asset = assets
            .audio(cue)
            .map_err(|_| AudioError::UnknownCue(cue.to_string()))?;
        self.cues.insert(cue.to_string(), assets.resolve(&asset.path));
        self.broken.remove(cue);
        Ok(())
    }

    /// Play a cue once
    pub fn play(&mut self, cue: &str) -> Result<(), AudioError> {
        self.start(cue, false)
    }

    /// Loop a cue; does nothing if it is already playing
    pub fn play_looped(&mut self, cue: &str) -> Result<(), AudioError> {
        if self.backend.is_playing(cue) {
            return Ok(());
        }
        self.start(cue, true)
    }

    /// Stop a cue
    pub fn stop(&mut self, cue: &str) {
        self.backend.stop(cue);
    }

    /// Whether the cue is audible
    pub fn is_playing(&self, cue: &str) -> bool {
        self.backend.is_playing(cue)
    }

    /// Stop every cue
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }

    /// Per-frame backend housekeeping
    pub fn update(&mut self) {
        self.backend.update();
    }

    /// Whether the backend already failed to play this cue
    pub fn is_broken(&self, cue: &str) -> bool {
        self.broken.contains(cue)
    }

    /// Current settings
    pub fn settings(&self) -> AudioSettings {
        self.settings
    }

    fn start(&mut self, cue: &str, looped: bool) -> Result<(), AudioError> {
        let path = self
            .cues
            .get(cue)
            .ok_or_else(|| AudioError::UnknownCue(cue.to_string()))?;

        if !self.settings.enabled || self.broken.contains(cue) {
            return Ok(());
        }

        let request = PlayRequest {
            cue: cue.to_string(),
            path: path.clone(),
            looped,
            volume: (self.settings.master_volume * self.settings.sfx_volume).clamp(0.0, 1.0),
        };

        // A missing or broken sound file should not stop the game.
        // Failed cues stay silent until rebound with `add`.
        if let Err(e) = self.backend.play(&request) {
            log::warn!("Could not play '{}', muting it: {}", cue, e);
            self.broken.insert(cue.to_string());
        }
        Ok(())
    }
}
