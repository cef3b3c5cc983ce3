//! # Asteroids
//!
//! The classic arcade game on top of `arcade_engine`: a ship that turns,
//! thrusts and fires, asteroids that split when shot, three lives and a
//! score.

pub mod assets;
pub mod collision;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod hud;
pub mod runner;
pub mod ship;
pub mod spawn;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{AsteroidsGame, GamePhase, GameSnapshot};
pub use ship::ShipState;
