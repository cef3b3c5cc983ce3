//! Physics module for motion and collision detection
//!
//! A deliberately small provider: gravity-free integration of rigid bodies,
//! circle colliders, layer filtering and `collision start` reporting. There
//! is no contact response; games react to the reported pairs.

pub mod collision_layers;
pub mod collision_system;
pub mod integrator;

pub use collision_layers::CollisionLayers;
pub use collision_system::{PhysicsCollisionSystem, CollisionPair};
pub use integrator::integrate;

use crate::ecs::World;
use crate::ecs::components::{Collider, Transform2D};
use crate::spatial::SpatialGrid;

/// Physics world: integration plus collision detection
pub struct PhysicsWorld {
    collisions: PhysicsCollisionSystem,
}

impl PhysicsWorld {
    /// Create a physics world whose broad phase uses `cell_size` pixel cells
    pub fn new(cell_size: f32) -> Self {
        Self {
            collisions: PhysicsCollisionSystem::new(Box::new(SpatialGrid::new(cell_size))),
        }
    }

    /// Integrate every body, then return the pairs that started touching
    pub fn step(&mut self, world: &mut World, delta_time: f32) -> Vec<CollisionPair> {
        integrate(world, delta_time);
        self.detect(world)
    }

    /// Sync colliders from the world and detect newly started contacts
    pub fn detect(&mut self, world: &World) -> Vec<CollisionPair> {
        self.collisions.sync(
            world
                .query::<Collider>()
                .filter(|(_, collider)| collider.enabled)
                .filter_map(|(entity, collider)| {
                    world
                        .get_component::<Transform2D>(entity)
                        .map(|transform| (entity, transform.position, *collider))
                }),
        );
        self.collisions.detect_collisions()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(64.0)
    }
}
