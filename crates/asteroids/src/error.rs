//! Game error type

use arcade_engine::assets::AssetError;
use arcade_engine::audio::AudioError;
use arcade_engine::config::ConfigError;
use arcade_engine::{AppError, EngineError};
use thiserror::Error;

/// Errors raised by game logic
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An image or sound key was not declared
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// A sound cue failed
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// The engine failed to start or stopped with an error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// An entity the game relies on is gone
    #[error("Missing {0} entity")]
    MissingEntity(&'static str),
}

impl From<GameError> for AppError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::Config(e) => Self::Config(e.to_string()),
            GameError::Asset(e) => Self::Asset(e),
            GameError::Audio(e) => Self::Audio(e),
            GameError::Engine(e) => Self::Engine(e),
            GameError::MissingEntity(what) => Self::GameLogic(format!("Missing {what} entity")),
        }
    }
}
