//! Rigid body component for entities that move under the physics step
//!
//! Velocities are in pixels (or radians) per second. Air friction is the
//! fraction of velocity lost per 1/60 s reference step, so tuning values
//! carry over unchanged when the timestep changes.

use crate::ecs::Component;
use crate::foundation::math::Vec2;
use crate::foundation::time::REFERENCE_STEP;

/// Component for entities integrated by the physics world
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    /// Linear velocity in pixels per second
    pub velocity: Vec2,

    /// Angular velocity in radians per second
    pub angular_velocity: f32,

    /// Mass; forces are divided by it
    pub mass: f32,

    /// Fraction of velocity lost per reference step (0 = none, 1 = instant stop)
    pub friction_air: f32,

    /// Force accumulated this frame, cleared after integration
    pub force: Vec2,
}

impl Component for RigidBody {}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl RigidBody {
    /// Create a body at rest with the given mass
    pub fn new(mass: f32) -> Self {
        Self {
            velocity: Vec2::zeros(),
            angular_velocity: 0.0,
            mass,
            friction_air: 0.0,
            force: Vec2::zeros(),
        }
    }

    /// Set the initial velocity (builder pattern)
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set air friction (builder pattern)
    pub fn with_friction_air(mut self, friction_air: f32) -> Self {
        self.friction_air = friction_air.clamp(0.0, 1.0);
        self
    }

    /// Accumulate a force for the next integration step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Push along `direction` hard enough to reach `acceleration` px/s²
    pub fn thrust(&mut self, direction: Vec2, acceleration: f32) {
        self.apply_force(direction * acceleration * self.mass);
    }

    /// Stop all motion and drop pending forces
    pub fn halt(&mut self) {
        self.velocity = Vec2::zeros();
        self.angular_velocity = 0.0;
        self.force = Vec2::zeros();
    }

    /// Apply one integration step to the body's own state.
    ///
    /// Returns the position and rotation deltas for the transform.
    pub fn integrate(&mut self, delta_time: f32) -> (Vec2, f32) {
        if self.mass > 0.0 {
            self.velocity += self.force / self.mass * delta_time;
        }
        self.force = Vec2::zeros();

        if self.friction_air > 0.0 {
            let steps = delta_time / REFERENCE_STEP;
            self.velocity *= (1.0 - self.friction_air).powf(steps);
        }

        (self.velocity * delta_time, self.angular_velocity * delta_time)
    }
}
