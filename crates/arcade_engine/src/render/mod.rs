//! Renderer-agnostic draw lists
//!
//! Each frame the engine and the game append draw commands to a
//! [`RenderList`]; a [`Presenter`] receives the finished list. Rasterising
//! it is the presenter's business.

use crate::ecs::World;
use crate::ecs::components::{Sprite, Transform2D};
use crate::foundation::math::Vec2;

/// Text style
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f32,
    /// CSS-style colour, e.g. `#ffffff`
    pub color: String,
}

impl TextStyle {
    /// White text of the given family and size
    pub fn new(font_family: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            color: "#ffffff".to_string(),
        }
    }
}

/// One thing to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Textured sprite centred on `position`
    Sprite {
        /// Image asset key
        texture: String,
        /// Centre in pixels
        position: Vec2,
        /// Rotation in radians
        rotation: f32,
        /// Uniform scale
        scale: f32,
        /// Draw order
        depth: i32,
    },
    /// Text label
    Text {
        /// The string to draw
        content: String,
        /// Anchor point in pixels
        position: Vec2,
        /// Font settings
        style: TextStyle,
        /// Anchor within the text box: 0 = top-left, 0.5 = centre
        anchor: f32,
        /// Draw order
        depth: i32,
    },
}

impl DrawCommand {
    /// Draw order of the command
    pub fn depth(&self) -> i32 {
        match self {
            Self::Sprite { depth, .. } | Self::Text { depth, .. } => *depth,
        }
    }
}

/// Per-frame list of draw commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderList {
    commands: Vec<DrawCommand>,
}

impl RenderList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Append a text label
    pub fn text(&mut self, content: impl Into<String>, position: Vec2, style: &TextStyle, anchor: f32, depth: i32) {
        self.push(DrawCommand::Text {
            content: content.into(),
            position,
            style: style.clone(),
            anchor,
            depth,
        });
    }

    /// Sort by depth, keeping insertion order within a depth
    pub fn finish(&mut self) {
        self.commands.sort_by_key(DrawCommand::depth);
    }

    /// All commands in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text commands only
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }

    /// Number of sprites drawn with the given texture
    pub fn sprite_count(&self, texture: &str) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Sprite { texture: t, .. } if t == texture))
            .count()
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Receives finished frames
pub trait Presenter {
    /// Present one frame
    fn present(&mut self, frame: &RenderList);
}

/// Append every visible sprite in the world
pub fn collect_sprites(world: &World, list: &mut RenderList) {
    for (entity, sprite) in world.query::<Sprite>() {
        if !sprite.visible {
            continue;
        }
        let Some(transform) = world.get_component::<Transform2D>(entity) else {
            continue;
        };
        list.push(DrawCommand::Sprite {
            texture: sprite.texture.clone(),
            position: transform.position,
            rotation: transform.rotation,
            scale: sprite.scale,
            depth: sprite.depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_skips_hidden_sprites() {
        let mut world = World::new();
        let shown = world.create_entity();
        world.add_component(shown, Transform2D::from_position(Vec2::new(1.0, 2.0)));
        world.add_component(shown, Sprite::new("rock"));

        let hidden = world.create_entity();
        world.add_component(hidden, Transform2D::default());
        world.add_component(hidden, Sprite::new("flame").hidden());

        let mut list = RenderList::new();
        collect_sprites(&world, &mut list);
        assert_eq!(list.sprite_count("rock"), 1);
        assert_eq!(list.sprite_count("flame"), 0);
    }

    #[test]
    fn test_finish_sorts_by_depth() {
        let mut list = RenderList::new();
        let style = TextStyle::new("mono", 12.0);
        list.text("top", Vec2::zeros(), &style, 0.0, 10);
        list.text("bottom", Vec2::zeros(), &style, 0.0, -1);
        list.finish();
        let order: Vec<&str> = list.texts().collect();
        assert_eq!(order, vec!["bottom", "top"]);
    }
}
