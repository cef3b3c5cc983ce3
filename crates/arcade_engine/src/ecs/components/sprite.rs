//! Sprite component: what the renderer should draw for an entity

use crate::ecs::Component;

/// Textured quad drawn at the entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    /// Image asset key
    pub texture: String,

    /// Hidden sprites stay in the world but are not drawn
    pub visible: bool,

    /// Uniform scale factor
    pub scale: f32,

    /// Draw order; higher is drawn later
    pub depth: i32,
}

impl Component for Sprite {}

impl Sprite {
    /// Create a visible sprite at scale 1
    pub fn new(texture: impl Into<String>) -> Self {
        Self {
            texture: texture.into(),
            visible: true,
            scale: 1.0,
            depth: 0,
        }
    }

    /// Set the draw order (builder pattern)
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }

    /// Start hidden (builder pattern)
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
