//! Game-specific components

use arcade_engine::prelude::*;

/// Collision layers used by the game
pub mod layers {
    use arcade_engine::physics::CollisionLayers;

    /// The player's ship
    pub const SHIP: CollisionLayers = CollisionLayers::PLAYER;

    /// Asteroids of every size
    pub const ASTEROID: CollisionLayers = CollisionLayers::HAZARD;

    /// Bullets fired by the ship
    pub const BULLET: CollisionLayers = CollisionLayers::PROJECTILE;
}

/// Draw order of game sprites
pub mod depth {
    /// Asteroids sit at the back
    pub const ASTEROID: i32 = 0;
    /// Bullets
    pub const BULLET: i32 = 1;
    /// Flame, drawn under the ship
    pub const FLAME: i32 = 2;
    /// Ship
    pub const SHIP: i32 = 3;
    /// Score, lives and game-over text
    pub const HUD: i32 = 100;
}

/// Player ship marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Ship;

impl Component for Ship {}

/// Thruster flame drawn behind the ship
#[derive(Debug, Clone, Copy, Default)]
pub struct Flame;

impl Component for Flame {}

/// Bullet projectile marker
#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet;

impl Component for Bullet {}

/// Asteroid component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    /// Asteroid size category
    pub size: AsteroidSize,
}

impl Component for Asteroid {}

/// Asteroid size categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    /// Large asteroid (splits into medium)
    Large,

    /// Medium asteroid (splits into small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

impl AsteroidSize {
    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }

    /// Points awarded per fragment when shot, or for the kill when small
    pub fn points(self) -> u32 {
        match self {
            Self::Large => 20,
            Self::Medium => 50,
            Self::Small => 100,
        }
    }

    /// Image keys for asteroids of this size; fragment `i` uses entry `i`
    pub fn textures(self) -> &'static [&'static str] {
        match self {
            Self::Large => &["asteroid"],
            Self::Medium => &["mediumAsteroid1", "mediumAsteroid2"],
            Self::Small => &["smallAsteroid1", "smallAsteroid2"],
        }
    }

    /// Textures of the two fragments this size splits into
    pub fn fragment_textures(self) -> &'static [&'static str] {
        match self.split_into() {
            Some(next) => next.textures(),
            None => &[],
        }
    }

    /// Sound cue played when a bullet hits this size
    pub fn hit_sound(self) -> &'static str {
        match self {
            Self::Large => "hitLarge",
            Self::Medium => "hitMedium",
            Self::Small => "hitSmall",
        }
    }

    /// Lower-case name used in logs and config
    pub fn name(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }
}
