//! ECS Components module
//!
//! Engine-owned components. Game-specific tags live in the game crate.

pub mod transform;
pub mod body;
pub mod collision;
pub mod sprite;
pub mod lifetime;

pub use transform::Transform2D;
pub use body::RigidBody;
pub use collision::{Collider, WrapAround};
pub use sprite::Sprite;
pub use lifetime::Lifetime;
