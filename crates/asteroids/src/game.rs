//! The Asteroids application

use crate::assets::{self, THRUSTER_SOUND};
use crate::collision::{self, Contact};
use crate::components::{Asteroid, Bullet, Ship};
use crate::config::{Controls, GameConfig};
use crate::error::GameError;
use crate::hud::Hud;
use crate::ship::{self, ShipState, RESPAWN_CHECK};
use crate::spawn;
use arcade_engine::foundation::math::wrap_position;
use arcade_engine::physics::CollisionPair;
use arcade_engine::prelude::*;

/// Whether the round is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ship flying, input accepted
    Playing,
    /// Out of lives; asteroids keep drifting
    GameOver,
}

/// Point-in-time view of the game for runners and tests
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Frames simulated
    pub frame: u64,
    /// Simulated seconds
    pub time: f64,
    /// Current score
    pub score: u32,
    /// Lives left
    pub lives: u32,
    /// Round phase
    pub phase: GamePhase,
    /// Ship lifecycle
    pub ship_state: ShipState,
    /// Asteroids in play
    pub asteroids: usize,
    /// Bullets in flight
    pub bullets: usize,
}

/// Asteroids game state
pub struct AsteroidsGame {
    config: GameConfig,
    controls: Controls,
    hud: Hud,
    score: u32,
    lives: u32,
    phase: GamePhase,
    ship_state: ShipState,
    ship: Option<Entity>,
    flame: Option<Entity>,
}

impl AsteroidsGame {
    /// Create a game from a validated config
    pub fn new(config: GameConfig) -> Self {
        let controls = config.controls.resolve();
        let lives = config.gameplay.starting_lives;
        Self {
            config,
            controls,
            hud: Hud::new(),
            score: 0,
            lives,
            phase: GamePhase::Playing,
            ship_state: ShipState::Respawning,
            ship: None,
            flame: None,
        }
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lives left
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Round phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Ship lifecycle state
    pub fn ship_state(&self) -> ShipState {
        self.ship_state
    }

    /// The ship entity, until game over
    pub fn ship(&self) -> Option<Entity> {
        self.ship
    }

    /// The game's configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Summarise the game state
    pub fn snapshot(&self, engine: &Engine) -> GameSnapshot {
        GameSnapshot {
            frame: engine.frame_count(),
            time: engine.time(),
            score: self.score,
            lives: self.lives,
            phase: self.phase,
            ship_state: self.ship_state,
            asteroids: engine.world.entities_with::<Asteroid>().len(),
            bullets: engine.world.entities_with::<Bullet>().len(),
        }
    }

    fn ship_handles(&self) -> Result<(Entity, Entity), GameError> {
        match (self.ship, self.flame) {
            (Some(ship), Some(flame)) => Ok((ship, flame)),
            _ => Err(GameError::MissingEntity("ship")),
        }
    }

    fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    fn on_ship_hit(&mut self, engine: &mut Engine, asteroid: Entity) -> Result<(), GameError> {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Ship destroyed, {} lives left", self.lives);
        collision::resolve_ship_hit(engine, &self.config.gameplay, asteroid)?;

        if self.lives > 0 {
            let (ship, flame) = self.ship_handles()?;
            self.ship_state = ship::reset_ship(engine, &self.config.gameplay, ship, flame)?;
        } else {
            self.game_over(engine);
        }
        Ok(())
    }

    fn game_over(&mut self, engine: &mut Engine) {
        log::info!("Game Over!");
        self.phase = GamePhase::GameOver;
        self.ship_state = ShipState::Destroyed;

        if let Some(ship) = self.ship.take() {
            engine.world.despawn(ship);
        }
        if let Some(flame) = self.flame {
            if let Some(sprite) = engine.world.get_component_mut::<Sprite>(flame) {
                sprite.visible = false;
            }
        }
        if engine.audio.is_playing(THRUSTER_SOUND) {
            engine.audio.stop(THRUSTER_SOUND);
        }
    }

    fn fly(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        let (ship, flame) = self.ship_handles()?;
        let gameplay = &self.config.gameplay;
        let control = ship::read_controls(&engine.input, &self.controls);

        if control.fire {
            spawn::fire_bullet(engine, gameplay, ship)?;
        }
        wrap_all::<Bullet>(engine);
        wrap_all::<Ship>(engine);
        ship::steer(engine, gameplay, ship, control)?;
        ship::place_flame(engine, ship, flame, control.thrust)?;
        Ok(())
    }
}

/// Wrap every `T` entity that carries `WrapAround` back into the view
fn wrap_all<T: Component>(engine: &mut Engine) {
    let view = engine.view_size();
    for entity in engine.world.entities_with::<T>() {
        if !engine.world.has_component::<WrapAround>(entity) {
            continue;
        }
        if let Some(transform) = engine.world.get_component_mut::<Transform2D>(entity) {
            transform.position = wrap_position(transform.position, view.x, view.y);
        }
    }
}

impl Application for AsteroidsGame {
    fn preload(&mut self, assets: &mut AssetManager) -> Result<(), AppError> {
        assets::declare(assets, &self.config.assets)?;
        Ok(())
    }

    fn create(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        assets::bind_sounds(&mut engine.audio, &engine.assets, &self.config.assets)?;

        let gameplay = &self.config.gameplay;
        let (ship, flame) = ship::spawn_ship(engine, gameplay)?;
        self.ship = Some(ship);
        self.flame = Some(flame);

        spawn::spawn_initial_field(engine, gameplay)?;
        self.ship_state = ship::reset_ship(engine, gameplay, ship, flame)?;

        log::info!(
            "Game started: {} lives, {} asteroids, ship {:?}",
            self.lives,
            gameplay.asteroid_count,
            self.ship_state
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if self.phase == GamePhase::Playing {
            if self.ship_state == ShipState::Active {
                self.fly(engine)?;
            } else {
                wrap_all::<Bullet>(engine);
            }
        }
        wrap_all::<Asteroid>(engine);
        Ok(())
    }

    fn on_collision_start(&mut self, engine: &mut Engine, pairs: &[CollisionPair]) -> Result<(), AppError> {
        let mut ship_hit = false;

        for pair in pairs {
            match collision::classify(&engine.world, pair) {
                Some(Contact::BulletAsteroid { bullet, asteroid }) => {
                    let points = collision::resolve_bullet_hit(engine, &self.config.gameplay, bullet, asteroid)?;
                    self.add_points(points);
                }
                Some(Contact::ShipAsteroid { asteroid, .. }) => {
                    // One life per step, however many rocks touched the ship
                    if ship_hit || self.ship_state != ShipState::Active {
                        continue;
                    }
                    ship_hit = true;
                    self.on_ship_hit(engine, asteroid)?;
                }
                None => {}
            }
        }
        Ok(())
    }

    fn on_timer(&mut self, engine: &mut Engine, timer: &TimerEvent) -> Result<(), AppError> {
        if timer.name != RESPAWN_CHECK
            || self.phase != GamePhase::Playing
            || self.ship_state != ShipState::Respawning
        {
            return Ok(());
        }

        let (ship, _) = self.ship_handles()?;
        let gameplay = &self.config.gameplay;
        if ship::try_place_ship(engine, gameplay, ship)? {
            self.ship_state = ShipState::Active;
        } else {
            engine.delayed_call(gameplay.respawn_retry_interval, RESPAWN_CHECK);
        }
        Ok(())
    }

    fn on_resize(&mut self, _engine: &mut Engine, width: f32, height: f32) -> Result<(), AppError> {
        log::debug!("Playfield is now {}x{}", width, height);
        Ok(())
    }

    fn render(&self, engine: &Engine, frame: &mut RenderList) {
        arcade_engine::render::collect_sprites(engine.world(), frame);
        self.hud.draw(
            frame,
            self.score,
            self.lives,
            self.phase == GamePhase::GameOver,
            engine.view_size(),
        );
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        engine.audio.stop_all();
        log::info!(
            "Final score {} after {:.1}s ({} lives left)",
            self.score,
            engine.time(),
            self.lives
        );
    }
}
