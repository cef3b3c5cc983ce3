//! Collision layer system for filtering collision detection
//!
//! Every collider sits on one or more layers and carries a mask of the
//! layers it accepts. A pair is tested only when each side accepts the
//! other.

use bitflags::bitflags;

bitflags! {
    /// Collision layer definitions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player-controlled ship
        const PLAYER = 1 << 0;

        /// Hazards the player shoots at
        const HAZARD = 1 << 1;

        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 2;

        /// Pickups and collectibles
        const PICKUP = 1 << 3;

        /// Enemy ships
        const ENEMY = 1 << 4;
    }
}

impl CollisionLayers {
    /// Check if two entities should collide based on their layers and masks
    ///
    /// A's layer must be in B's mask AND B's layer must be in A's mask.
    ///
    /// # Example
    /// ```
    /// use arcade_engine::physics::CollisionLayers;
    ///
    /// let ship = (CollisionLayers::PLAYER, CollisionLayers::HAZARD);
    /// let rock = (CollisionLayers::HAZARD, CollisionLayers::PLAYER | CollisionLayers::PROJECTILE);
    ///
    /// assert!(CollisionLayers::should_collide(ship.0, ship.1, rock.0, rock.1));
    /// ```
    pub fn should_collide(
        layer_a: Self,
        mask_a: Self,
        layer_b: Self,
        mask_b: Self,
    ) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::HAZARD,
            CollisionLayers::HAZARD, CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Projectile wants the player, but the player does not accept projectiles
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::HAZARD,
            CollisionLayers::PROJECTILE, CollisionLayers::PLAYER | CollisionLayers::HAZARD,
        ));
    }

    #[test]
    fn test_hazards_ignore_each_other() {
        let rock_mask = CollisionLayers::PLAYER | CollisionLayers::PROJECTILE;
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::HAZARD, rock_mask,
            CollisionLayers::HAZARD, rock_mask,
        ));
    }

    #[test]
    fn test_empty_mask_collides_with_nothing() {
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::empty(),
            CollisionLayers::HAZARD, CollisionLayers::all(),
        ));
    }
}
