//! Collision detection components for ECS
//!
//! A collider is a circle centred on the entity's transform. Layer and mask
//! decide which pairs the physics world even considers.

use crate::ecs::Component;
use crate::physics::CollisionLayers;

/// Component that marks an entity as having collision detection enabled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Circle radius in pixels
    pub radius: f32,

    /// Layers this entity belongs to
    pub layer: CollisionLayers,

    /// Layers this entity can collide with
    pub mask: CollisionLayers,

    /// Disabled colliders are ignored and drop out of the contact set
    pub enabled: bool,
}

impl Component for Collider {}

impl Collider {
    /// Create a collider on all layers that collides with everything
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
            enabled: true,
        }
    }

    /// Create a collider with specific layer and mask
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }
}

/// Marker for entities wrapped around the view edges every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapAround;

impl Component for WrapAround {}
