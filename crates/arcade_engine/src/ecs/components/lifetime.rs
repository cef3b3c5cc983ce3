//! Timed despawn
//!
//! The engine removes an entity carrying a [`Lifetime`] on the first frame
//! whose clock reaches its deadline, before the game's update runs.

use crate::ecs::Component;

/// Despawn deadline in simulated seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Clock time the entity was spawned at
    pub created_at: f64,
    /// Seconds the entity may exist
    pub duration: f64,
}

impl Component for Lifetime {}

impl Lifetime {
    /// Live for `duration` seconds from `created_at`
    pub fn new(created_at: f64, duration: f64) -> Self {
        Self {
            created_at,
            duration: duration.max(0.0),
        }
    }

    /// Clock time at which the entity goes away
    pub fn expires_at(&self) -> f64 {
        self.created_at + self.duration
    }

    /// Whether the deadline has been reached at `now`
    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.expires_at()
    }

    /// Seconds left at `now`, zero once expired
    pub fn remaining(&self, now: f64) -> f64 {
        (self.expires_at() - now).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alive_before_deadline() {
        let lifetime = Lifetime::new(0.5, 1.0);
        assert!(!lifetime.is_expired(1.2));
        assert_relative_eq!(lifetime.remaining(1.2), 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_deadline_is_inclusive() {
        let lifetime = Lifetime::new(2.0, 1.0);
        assert!(lifetime.is_expired(3.0));
        assert_eq!(lifetime.remaining(4.0), 0.0);
    }

    #[test]
    fn test_negative_duration_expires_at_once() {
        let lifetime = Lifetime::new(1.0, -5.0);
        assert_eq!(lifetime.expires_at(), 1.0);
        assert!(lifetime.is_expired(1.0));
    }
}
