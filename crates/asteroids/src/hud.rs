//! Score, lives and game-over text

use crate::assets::SHIP_TEXTURE;
use crate::components::depth;
use crate::ship::INITIAL_HEADING;
use arcade_engine::foundation::math::Vec2;
use arcade_engine::render::{DrawCommand, RenderList, TextStyle};

/// Font family of all HUD text
pub const HUD_FONT: &str = "AsteroidsFont";

/// Heads-up display
#[derive(Debug, Clone)]
pub struct Hud {
    score_style: TextStyle,
    game_over_style: TextStyle,
    score_position: Vec2,
    lives_origin: Vec2,
    life_spacing: f32,
    life_scale: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score_style: TextStyle::new(HUD_FONT, 24.0),
            game_over_style: TextStyle::new(HUD_FONT, 48.0),
            score_position: Vec2::new(100.0, 50.0),
            lives_origin: Vec2::new(100.0, 100.0),
            life_spacing: 20.0,
            life_scale: 0.5,
        }
    }
}

impl Hud {
    /// Create the HUD with the arcade layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Append this frame's HUD commands
    pub fn draw(&self, frame: &mut RenderList, score: u32, lives: u32, game_over: bool, view: Vec2) {
        frame.text(score.to_string(), self.score_position, &self.score_style, 0.0, depth::HUD);

        for i in 0..lives {
            frame.push(DrawCommand::Sprite {
                texture: SHIP_TEXTURE.to_string(),
                position: self.lives_origin + Vec2::new(i as f32 * self.life_spacing, 0.0),
                rotation: INITIAL_HEADING,
                scale: self.life_scale,
                depth: depth::HUD,
            });
        }

        if game_over {
            frame.text("GAME OVER", view * 0.5, &self.game_over_style, 0.5, depth::HUD);
        }
    }
}
