//! # Arcade Engine
//!
//! A small 2D engine for arcade games. It owns the pieces a game registers
//! callbacks against and leaves the rules to the game:
//!
//! - **ECS**: generational entities with typed component storage
//! - **Physics**: gravity-free rigid bodies, circle colliders, layer filtering
//!   and `collision start` events
//! - **Input**: key state with edge-triggered presses
//! - **Audio**: named sound cues over a pluggable backend
//! - **Render**: a renderer-agnostic draw list handed to a presenter
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
//!         Ok(())
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;
pub mod spatial;
pub mod events;
pub mod input;
pub mod assets;
pub mod audio;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineConfig, EngineError, FrameDriver, TimerEvent, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineConfig, EngineError, FrameDriver, TimerEvent, WindowConfig,
        foundation::{
            math::Vec2,
            time::FixedClock,
        },
        ecs::{World, Entity, Component},
        ecs::components::{Transform2D, RigidBody, Collider, Sprite, Lifetime, WrapAround},
        physics::{CollisionLayers, CollisionPair},
        assets::AssetManager,
        audio::AudioSystem,
        render::{RenderList, DrawCommand, TextStyle, Presenter},
        input::{InputManager, KeyCode},
    };
}
