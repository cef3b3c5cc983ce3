//! Core collision detection system
//!
//! Two phases: the broad phase asks the spatial structure for candidate
//! neighbours and filters them by layer; the narrow phase tests circle
//! overlap. Pairs are remembered between frames so only contacts that
//! *started* this frame are reported.

use crate::ecs::Entity;
use crate::ecs::components::Collider;
use crate::foundation::math::Vec2;
use crate::physics::collision_layers::CollisionLayers;
use crate::spatial::SpatialQuery;
use std::collections::{HashMap, HashSet};

/// Collision pair representing two entities that are colliding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionPair {
    /// Entity with the smaller id
    pub entity_a: Entity,
    /// Entity with the larger id
    pub entity_b: Entity,
}

impl CollisionPair {
    /// Create a new collision pair (always stores smaller entity ID first for consistency)
    pub fn new(entity_a: Entity, entity_b: Entity) -> Self {
        if entity_a.id() < entity_b.id() {
            Self { entity_a, entity_b }
        } else {
            Self { entity_a: entity_b, entity_b: entity_a }
        }
    }

    /// Whether `entity` is one side of the pair
    pub fn involves(&self, entity: Entity) -> bool {
        self.entity_a == entity || self.entity_b == entity
    }

    fn sort_key(&self) -> (u64, u64) {
        (self.entity_a.id(), self.entity_b.id())
    }
}

/// Collider data stored by the collision system
#[derive(Clone, Copy)]
struct ColliderData {
    position: Vec2,
    radius: f32,
    layer: CollisionLayers,
    mask: CollisionLayers,
}

impl ColliderData {
    fn overlaps(&self, other: &Self) -> bool {
        let radius_sum = self.radius + other.radius;
        (self.position - other.position).magnitude_squared() <= radius_sum * radius_sum
    }
}

/// Core collision detection system
pub struct PhysicsCollisionSystem {
    /// Spatial partitioning structure for broad-phase
    spatial_query: Box<dyn SpatialQuery>,

    /// Collider data for each entity
    colliders: HashMap<Entity, ColliderData>,

    /// Collision pairs from the current frame
    current_pairs: HashSet<CollisionPair>,

    /// Collision pairs from the previous frame
    previous_pairs: HashSet<CollisionPair>,
}

impl PhysicsCollisionSystem {
    /// Create a new collision system with the given spatial query implementation
    pub fn new(spatial_query: Box<dyn SpatialQuery>) -> Self {
        Self {
            spatial_query,
            colliders: HashMap::new(),
            current_pairs: HashSet::new(),
            previous_pairs: HashSet::new(),
        }
    }

    /// Replace the tracked colliders with this frame's set
    pub fn sync(&mut self, colliders: impl IntoIterator<Item = (Entity, Vec2, Collider)>) {
        self.spatial_query.clear();
        self.colliders.clear();

        for (entity, position, collider) in colliders {
            self.spatial_query.insert(entity, position, collider.radius);
            self.colliders.insert(entity, ColliderData {
                position,
                radius: collider.radius,
                layer: collider.layer,
                mask: collider.mask,
            });
        }
    }

    /// Perform collision detection (broad-phase + narrow-phase).
    ///
    /// Returns the pairs that were not touching last frame, ordered by
    /// entity id so callers see a deterministic sequence.
    pub fn detect_collisions(&mut self) -> Vec<CollisionPair> {
        std::mem::swap(&mut self.current_pairs, &mut self.previous_pairs);
        self.current_pairs.clear();

        let potential_pairs = self.broad_phase();
        self.narrow_phase(potential_pairs);

        let mut started: Vec<CollisionPair> = self
            .current_pairs
            .difference(&self.previous_pairs)
            .copied()
            .collect();
        started.sort_by_key(CollisionPair::sort_key);
        started
    }

    /// Number of pairs touching after the last detection
    pub fn active_pair_count(&self) -> usize {
        self.current_pairs.len()
    }

    /// Broad-phase: Use spatial query to find potential collision pairs
    fn broad_phase(&self) -> HashSet<CollisionPair> {
        let mut potential_pairs = HashSet::new();

        for (&entity, collider) in &self.colliders {
            for nearby_entity in self.spatial_query.query_nearby(entity) {
                let Some(other) = self.colliders.get(&nearby_entity) else {
                    continue;
                };

                if !CollisionLayers::should_collide(
                    collider.layer,
                    collider.mask,
                    other.layer,
                    other.mask,
                ) {
                    continue;
                }

                potential_pairs.insert(CollisionPair::new(entity, nearby_entity));
            }
        }

        potential_pairs
    }

    /// Narrow-phase: Test actual shape intersections
    fn narrow_phase(&mut self, potential_pairs: HashSet<CollisionPair>) {
        for pair in potential_pairs {
            let (Some(a), Some(b)) = (
                self.colliders.get(&pair.entity_a),
                self.colliders.get(&pair.entity_b),
            ) else {
                continue;
            };

            if a.overlaps(b) {
                self.current_pairs.insert(pair);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;
    use crate::spatial::SpatialGrid;

    fn system() -> PhysicsCollisionSystem {
        PhysicsCollisionSystem::new(Box::new(SpatialGrid::new(32.0)))
    }

    #[test]
    fn test_started_pair_reported_once() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut collisions = system();

        let frame = [
            (a, Vec2::new(0.0, 0.0), Collider::new(10.0)),
            (b, Vec2::new(15.0, 0.0), Collider::new(10.0)),
        ];

        collisions.sync(frame);
        assert_eq!(collisions.detect_collisions(), vec![CollisionPair::new(a, b)]);

        // Still touching: not a new contact
        collisions.sync(frame);
        assert!(collisions.detect_collisions().is_empty());
        assert_eq!(collisions.active_pair_count(), 1);
    }

    #[test]
    fn test_separated_then_touching_again_reports_again() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut collisions = system();

        collisions.sync([(a, Vec2::new(0.0, 0.0), Collider::new(5.0)), (b, Vec2::new(5.0, 0.0), Collider::new(5.0))]);
        assert_eq!(collisions.detect_collisions().len(), 1);

        collisions.sync([(a, Vec2::new(0.0, 0.0), Collider::new(5.0)), (b, Vec2::new(50.0, 0.0), Collider::new(5.0))]);
        assert!(collisions.detect_collisions().is_empty());

        collisions.sync([(a, Vec2::new(0.0, 0.0), Collider::new(5.0)), (b, Vec2::new(10.0, 0.0), Collider::new(5.0))]);
        assert_eq!(collisions.detect_collisions().len(), 1);
    }

    #[test]
    fn test_layer_filtering_skips_pair() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut collisions = system();

        let rock = Collider::new(10.0).with_layers(
            CollisionLayers::HAZARD,
            CollisionLayers::PLAYER | CollisionLayers::PROJECTILE,
        );
        collisions.sync([(a, Vec2::new(0.0, 0.0), rock), (b, Vec2::new(1.0, 0.0), rock)]);
        assert!(collisions.detect_collisions().is_empty());
    }

    #[test]
    fn test_pair_ordering_is_stable() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert_eq!(CollisionPair::new(a, b), CollisionPair::new(b, a));
        assert!(CollisionPair::new(b, a).involves(a));
    }
}
