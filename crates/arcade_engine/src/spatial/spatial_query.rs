//! Abstract spatial query interface for broad-phase collision detection
//!
//! Lets the collision system swap partitioning schemes (grid, quadtree...)
//! without changing the narrow phase.

use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Abstract interface for spatial partitioning used in broad-phase collision detection
pub trait SpatialQuery: Send + Sync {
    /// Insert an entity at a position with a bounding radius
    fn insert(&mut self, entity: Entity, position: Vec2, radius: f32);

    /// Remove an entity from the spatial structure
    fn remove(&mut self, entity: Entity);

    /// Query entities whose bounds may overlap the given entity's bounds.
    ///
    /// The result may contain false positives but never misses an overlap.
    fn query_nearby(&self, entity: Entity) -> Vec<Entity>;

    /// Clear all entities from the spatial structure
    fn clear(&mut self);

    /// Get the number of entities in the structure
    fn entity_count(&self) -> usize;
}
