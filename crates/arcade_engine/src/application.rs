//! Application trait and lifecycle management

use crate::assets::{AssetError, AssetManager};
use crate::audio::AudioError;
use crate::engine::{Engine, EngineError, TimerEvent};
use crate::physics::CollisionPair;
use crate::render::{collect_sprites, RenderList};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game using the engine. The engine
/// calls `preload` and `create` once, then per frame: `on_collision_start`
/// after the physics step, `on_timer` for due delayed calls, `update`, and
/// finally `render`.
pub trait Application {
    /// Declare assets
    ///
    /// Called once before `create`.
    fn preload(&mut self, _assets: &mut AssetManager) -> Result<(), AppError> {
        Ok(())
    }

    /// Set up the initial game state
    ///
    /// Called once after the engine is initialized and assets are declared.
    fn create(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame. Implement your game logic here.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Handle pairs of colliders that started touching this frame
    fn on_collision_start(&mut self, _engine: &mut Engine, _pairs: &[CollisionPair]) -> Result<(), AppError> {
        Ok(())
    }

    /// Handle a delayed call scheduled with [`Engine::delayed_call`]
    fn on_timer(&mut self, _engine: &mut Engine, _timer: &TimerEvent) -> Result<(), AppError> {
        Ok(())
    }

    /// Handle a change of view size
    fn on_resize(&mut self, _engine: &mut Engine, _width: f32, _height: f32) -> Result<(), AppError> {
        Ok(())
    }

    /// Fill the frame's draw list
    ///
    /// Default implementation draws every visible sprite.
    fn render(&self, engine: &Engine, frame: &mut RenderList) {
        collect_sprites(engine.world(), frame);
    }

    /// Cleanup the application
    ///
    /// Called when the application is shutting down.
    fn cleanup(&mut self, _engine: &mut Engine) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Audio error
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Window was resized
    WindowResized {
        /// New view width
        width: f32,
        /// New view height
        height: f32,
    },

    /// Window close requested
    CloseRequested,

    /// Window lost focus; held keys are released
    FocusLost,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: crate::input::KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },
}
