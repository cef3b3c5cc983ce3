//! Silent backend that records what would have been played

use super::{AudioBackend, PlayRequest};
use crate::audio::AudioError;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Command observed by the null backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCommand {
    /// A cue started
    Play {
        /// Cue name
        cue: String,
        /// Whether it loops
        looped: bool,
    },
    /// A cue was stopped
    Stop {
        /// Cue name
        cue: String,
    },
}

/// Silent audio backend
///
/// One-shot cues finish immediately; looped cues count as playing until
/// stopped. The command log is shared so tests can keep a handle to it after
/// handing the backend to the engine.
#[derive(Debug, Default, Clone)]
pub struct NullBackend {
    looping: HashSet<String>,
    log: Arc<Mutex<Vec<AudioCommand>>>,
}

impl NullBackend {
    /// Create a new silent backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the command log
    pub fn log_handle(&self) -> Arc<Mutex<Vec<AudioCommand>>> {
        Arc::clone(&self.log)
    }

    fn record(&self, command: AudioCommand) {
        if let Ok(mut log) = self.log.lock() {
            log.push(command);
        }
    }
}

impl AudioBackend for NullBackend {
    fn play(&mut self, request: &PlayRequest) -> Result<(), AudioError> {
        if request.looped {
            self.looping.insert(request.cue.clone());
        }
        self.record(AudioCommand::Play {
            cue: request.cue.clone(),
            looped: request.looped,
        });
        Ok(())
    }

    fn stop(&mut self, cue: &str) {
        if self.looping.remove(cue) {
            self.record(AudioCommand::Stop { cue: cue.to_string() });
        }
    }

    fn is_playing(&self, cue: &str) -> bool {
        self.looping.contains(cue)
    }

    fn stop_all(&mut self) {
        let cues: Vec<String> = self.looping.drain().collect();
        for cue in cues {
            self.record(AudioCommand::Stop { cue });
        }
    }

    fn update(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn request(cue: &str, looped: bool) -> PlayRequest {
        PlayRequest {
            cue: cue.to_string(),
            path: PathBuf::from(format!("{cue}.wav")),
            looped,
            volume: 1.0,
        }
    }

    #[test]
    fn test_looped_cue_plays_until_stopped() {
        let mut backend = NullBackend::new();
        backend.play(&request("thruster", true)).unwrap();
        assert!(backend.is_playing("thruster"));

        backend.stop("thruster");
        assert!(!backend.is_playing("thruster"));
    }

    #[test]
    fn test_one_shot_is_not_playing_afterwards() {
        let mut backend = NullBackend::new();
        backend.play(&request("fire", false)).unwrap();
        assert!(!backend.is_playing("fire"));
        backend.stop("fire");

        let log = backend.log_handle();
        let log = log.lock().unwrap();
        assert_eq!(*log, vec![AudioCommand::Play { cue: "fire".into(), looped: false }]);
    }
}
