//! Math utilities and types
//!
//! Screen-space 2D math: pixels, y pointing down, angles in radians measured
//! clockwise from the +x axis (so -90° points up the screen).

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Unit vector pointing along `angle`
    pub fn from_angle(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Euclidean distance between two points
    pub fn distance(a: Vec2, b: Vec2) -> f32 {
        (a - b).magnitude()
    }
}

/// Wrap a position around a `width` x `height` torus.
///
/// A coordinate that has left the view jumps to the opposite edge; anything
/// inside `[0, width]` x `[0, height]` is returned unchanged. This mirrors
/// the classic arcade behaviour where objects reappear exactly on the edge
/// rather than at the modular offset.
pub fn wrap_position(position: Vec2, width: f32, height: f32) -> Vec2 {
    let mut wrapped = position;

    if position.x < 0.0 {
        wrapped.x = width;
    } else if position.x > width {
        wrapped.x = 0.0;
    }

    if position.y < 0.0 {
        wrapped.y = height;
    } else if position.y > height {
        wrapped.y = 0.0;
    }

    wrapped
}
