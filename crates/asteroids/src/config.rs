//! Game configuration
//!
//! Every section has defaults matching the arcade feel, so a config file only
//! needs the values it changes. Per-step tuning from the classic 60 Hz game is
//! expressed per second here: 0.05 rad/step is 3 rad/s, 5 px/step is 300 px/s.

use crate::components::AsteroidSize;
use arcade_engine::assets::{AudioAsset, ImageAsset};
use arcade_engine::audio::AudioSettings;
use arcade_engine::config::{Config, ConfigError};
use arcade_engine::{EngineConfig, WindowConfig};
use arcade_engine::input::KeyCode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Window settings
    pub window: WindowSettings,

    /// Audio settings
    pub audio: AudioConfig,

    /// Controls settings
    pub controls: ControlsConfig,

    /// Asset manifest
    pub assets: AssetConfig,
}

impl Config for GameConfig {}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Starting lives
    pub starting_lives: u32,

    /// Large asteroids spawned at start
    pub asteroid_count: u32,

    /// Ship mass
    pub ship_mass: f32,

    /// Fraction of ship velocity lost per 1/60 s
    pub ship_friction_air: f32,

    /// Turn rate in radians per second
    pub ship_rotation_speed: f32,

    /// Thrust acceleration in px/s²
    pub thrust_acceleration: f32,

    /// Bullet speed relative to the ship in px/s
    pub bullet_speed: f32,

    /// Distance ahead of the ship centre where bullets appear
    pub bullet_offset: f32,

    /// Seconds before a bullet disappears
    pub bullet_lifetime: f64,

    /// Bullet mass
    pub bullet_mass: f32,

    /// Per-size asteroid tuning
    pub asteroids: AsteroidTable,

    /// Respawn waits until no asteroid is this close to the view centre
    pub respawn_safe_radius: f32,

    /// Seconds between respawn safety checks
    pub respawn_retry_interval: f64,

    /// Seconds per simulation step
    pub timestep: f32,

    /// Broad-phase grid cell size in pixels
    pub broadphase_cell_size: f32,

    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            asteroid_count: 8,
            ship_mass: 80.0,
            ship_friction_air: 0.005,
            ship_rotation_speed: 3.0,
            thrust_acceleration: 125.0,
            bullet_speed: 300.0,
            bullet_offset: 30.0,
            bullet_lifetime: 1.0,
            bullet_mass: 1.0,
            asteroids: AsteroidTable::default(),
            respawn_safe_radius: 150.0,
            respawn_retry_interval: 0.1,
            timestep: 1.0 / 60.0,
            broadphase_cell_size: 64.0,
            seed: None,
        }
    }
}

/// Mass and speed range of each asteroid size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidTable {
    /// Large asteroids
    pub large: AsteroidClass,
    /// Medium asteroids
    pub medium: AsteroidClass,
    /// Small asteroids
    pub small: AsteroidClass,
}

impl AsteroidTable {
    /// Tuning for one size
    pub fn get(&self, size: AsteroidSize) -> &AsteroidClass {
        match size {
            AsteroidSize::Large => &self.large,
            AsteroidSize::Medium => &self.medium,
            AsteroidSize::Small => &self.small,
        }
    }
}

impl Default for AsteroidTable {
    fn default() -> Self {
        Self {
            large: AsteroidClass { mass: 15.0, speed: SpeedRange { min: 30.0, max: 60.0 } },
            medium: AsteroidClass { mass: 7.5, speed: SpeedRange { min: 60.0, max: 90.0 } },
            small: AsteroidClass { mass: 3.75, speed: SpeedRange { min: 90.0, max: 120.0 } },
        }
    }
}

/// Tuning for one asteroid size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AsteroidClass {
    /// Body mass
    pub mass: f32,
    /// Launch speed range in px/s
    pub speed: SpeedRange,
}

/// Inclusive speed range in px/s
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SpeedRange {
    /// Slowest launch speed
    pub min: f32,
    /// Fastest launch speed
    pub max: f32,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Window title
    pub title: String,

    /// View width in pixels
    pub width: f32,

    /// View height in pixels
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Asteroids".to_string(),
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Audio enabled
    pub enabled: bool,

    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    /// SFX volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        let settings = AudioSettings::default();
        Self {
            enabled: settings.enabled,
            master_volume: settings.master_volume,
            sfx_volume: settings.sfx_volume,
        }
    }
}

/// Controls configuration, as key names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Left turn key
    pub left: String,

    /// Right turn key
    pub right: String,

    /// Thrust key
    pub thrust: String,

    /// Fire key
    pub fire: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            left: "Left".to_string(),
            right: "Right".to_string(),
            thrust: "Up".to_string(),
            fire: "Z".to_string(),
        }
    }
}

/// Resolved key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Turn left
    pub left: KeyCode,
    /// Turn right
    pub right: KeyCode,
    /// Thrust forward
    pub thrust: KeyCode,
    /// Fire a bullet
    pub fire: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            thrust: KeyCode::Up,
            fire: KeyCode::Z,
        }
    }
}

impl ControlsConfig {
    /// Parse key names, keeping the default binding for any unknown name
    pub fn resolve(&self) -> Controls {
        let defaults = Controls::default();
        let parse = |action: &str, name: &str, fallback: KeyCode| match name.parse::<KeyCode>() {
            Ok(key) => key,
            Err(e) => {
                log::warn!("{} for '{}', using {}", e, action, fallback);
                fallback
            }
        };

        Controls {
            left: parse("left", &self.left, defaults.left),
            right: parse("right", &self.right, defaults.right),
            thrust: parse("thrust", &self.thrust, defaults.thrust),
            fire: parse("fire", &self.fire, defaults.fire),
        }
    }
}

/// Asset manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory the paths below are relative to
    pub root: String,

    /// Fail at startup when a declared file is missing
    pub verify_files: bool,

    /// Images with their pixel sizes
    pub images: Vec<ImageAsset>,

    /// Sounds
    pub sounds: Vec<AudioAsset>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "assets".to_string(),
            verify_files: false,
            images: vec![
                ImageAsset::new("spaceship", "ship.png", 48.0, 32.0),
                ImageAsset::new("asteroid", "asteroid.png", 96.0, 96.0),
                ImageAsset::new("bullet", "bullet.png", 6.0, 6.0),
                ImageAsset::new("flame", "flame.png", 24.0, 14.0),
                ImageAsset::new("mediumAsteroid1", "mediumAsteroid1.png", 48.0, 48.0),
                ImageAsset::new("mediumAsteroid2", "mediumAsteroid2.png", 48.0, 48.0),
                ImageAsset::new("smallAsteroid1", "smallAsteroid1.png", 24.0, 24.0),
                ImageAsset::new("smallAsteroid2", "smallAsteroid2.png", 24.0, 24.0),
                ImageAsset::new("particle", "bullet.png", 6.0, 6.0),
            ],
            sounds: vec![
                AudioAsset::new("thruster", "thrust.wav"),
                AudioAsset::new("bulletFired", "fire.wav"),
                AudioAsset::new("hitLarge", "hitLarge.wav"),
                AudioAsset::new("hitMedium", "hitMedium.wav"),
                AudioAsset::new("hitSmall", "hitSmall.wav"),
            ],
        }
    }
}

impl GameConfig {
    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.width <= 0.0 || window.height <= 0.0 {
            return Err(invalid("window", format!("view size {}x{} must be positive", window.width, window.height)));
        }

        let gameplay = &self.gameplay;
        if gameplay.timestep <= 0.0 {
            return Err(invalid("gameplay.timestep", "must be positive"));
        }
        if gameplay.ship_mass <= 0.0 || gameplay.bullet_mass <= 0.0 {
            return Err(invalid("gameplay", "ship and bullet masses must be positive"));
        }
        if gameplay.bullet_lifetime <= 0.0 {
            return Err(invalid("gameplay.bullet_lifetime", "must be positive"));
        }
        if gameplay.respawn_retry_interval <= 0.0 {
            return Err(invalid("gameplay.respawn_retry_interval", "must be positive"));
        }
        if gameplay.broadphase_cell_size <= 0.0 {
            return Err(invalid("gameplay.broadphase_cell_size", "must be positive"));
        }

        for size in [AsteroidSize::Large, AsteroidSize::Medium, AsteroidSize::Small] {
            let class = gameplay.asteroids.get(size);
            let field = format!("gameplay.asteroids.{}", size.name());
            if class.mass <= 0.0 {
                return Err(invalid(&field, "mass must be positive"));
            }
            if class.speed.min <= 0.0 || class.speed.max < class.speed.min {
                return Err(invalid(
                    &field,
                    format!("speed range {}..{} is empty or allows standing still", class.speed.min, class.speed.max),
                ));
            }
        }

        Ok(())
    }

    /// Engine settings derived from this config
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window: WindowConfig {
                title: self.window.title.clone(),
                width: self.window.width,
                height: self.window.height,
            },
            timestep: self.gameplay.timestep,
            broadphase_cell_size: self.gameplay.broadphase_cell_size,
            asset_root: self.assets.root.clone(),
            verify_assets: self.assets.verify_files,
            audio: AudioSettings {
                enabled: self.audio.enabled,
                master_volume: self.audio.master_volume.clamp(0.0, 1.0),
                sfx_volume: self.audio.sfx_volume.clamp(0.0, 1.0),
            },
            seed: self.gameplay.seed,
        }
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.gameplay.starting_lives, 3);
        assert_eq!(config.gameplay.asteroid_count, 8);
        assert_eq!(config.assets.images.len(), 9);
        assert_eq!(config.assets.sounds.len(), 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [gameplay]
            starting_lives = 5

            [gameplay.asteroids.small]
            mass = 2.0
            speed = { min = 100.0, max = 140.0 }

            [controls]
            fire = "space"
        "#;
        let config = GameConfig::parse("game.toml", text).unwrap();
        assert_eq!(config.gameplay.starting_lives, 5);
        assert_eq!(config.gameplay.asteroid_count, 8);
        assert_eq!(config.gameplay.asteroids.small.speed.max, 140.0);
        assert_eq!(config.gameplay.asteroids.large.mass, 15.0);
        assert_eq!(config.controls.resolve().fire, KeyCode::Space);
        assert_eq!(config.window.width, 1024.0);
    }

    #[test]
    fn test_unknown_key_name_falls_back() {
        let controls = ControlsConfig {
            thrust: "Hyperdrive".to_string(),
            ..ControlsConfig::default()
        };
        assert_eq!(controls.resolve().thrust, KeyCode::Up);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.window.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));

        let mut config = GameConfig::default();
        config.gameplay.asteroids.medium.speed = SpeedRange { min: 90.0, max: 60.0 };
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.gameplay.asteroids.large.speed.min = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.gameplay.bullet_lifetime = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asteroids.ron");

        let mut config = GameConfig::default();
        config.gameplay.seed = Some(42);
        config.window.title = "Rocks".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = GameConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[gameplay\nstarting_lives = ").unwrap();
        assert!(matches!(GameConfig::load_or_default(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_engine_config_mapping() {
        let mut config = GameConfig::default();
        config.audio.master_volume = 3.0;
        config.gameplay.seed = Some(9);
        let engine = config.engine_config();
        assert_eq!(engine.window.width, 1024.0);
        assert_eq!(engine.audio.master_volume, 1.0);
        assert_eq!(engine.seed, Some(9));
    }
}
