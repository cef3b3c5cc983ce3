//! Transform component for the ECS system
//!
//! Pure data: screen-space position in pixels (y down) and a rotation in
//! radians measured clockwise from +x.

use crate::ecs::Component;
use crate::foundation::math::{utils, Vec2};

/// ECS 2D transform component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in pixels
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,
}

impl Component for Transform2D {}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    /// Create from position only
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create from position and rotation
    pub fn from_position_rotation(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Unit vector the transform is facing
    pub fn heading(&self) -> Vec2 {
        utils::from_angle(self.rotation)
    }
}
