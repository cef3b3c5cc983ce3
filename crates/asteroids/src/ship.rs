//! Ship controls, thruster flame and respawning

use crate::assets::{self, FLAME_TEXTURE, SHIP_TEXTURE, THRUSTER_SOUND};
use crate::components::{depth, layers, Asteroid, Flame, Ship};
use crate::config::{Controls, GameplayConfig};
use crate::error::GameError;
use arcade_engine::foundation::math::{utils, Vec2};
use arcade_engine::prelude::*;

/// Timer name of the respawn safety check
pub const RESPAWN_CHECK: &str = "respawn-check";

/// Where a ship waiting to respawn is kept
pub fn parked_position() -> Vec2 {
    Vec2::new(-1000.0, -1000.0)
}

/// Initial heading: straight up the screen
pub const INITIAL_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

/// Lifecycle of the player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipState {
    /// Flying and taking input
    Active,
    /// Parked off-screen until the centre is clear
    Respawning,
    /// Removed at game over
    Destroyed,
}

/// Control state read for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// -1 turns left, 1 turns right, 0 holds the heading
    pub turn: f32,
    /// Thrust held
    pub thrust: bool,
    /// Fire pressed this frame
    pub fire: bool,
}

/// Read the bound keys; left wins when both turn keys are held
pub fn read_controls(input: &InputManager, controls: &Controls) -> ControlInput {
    let turn = if input.is_down(controls.left) {
        -1.0
    } else if input.is_down(controls.right) {
        1.0
    } else {
        0.0
    };

    ControlInput {
        turn,
        thrust: input.is_down(controls.thrust),
        fire: input.just_pressed(controls.fire),
    }
}

/// Spawn the ship at the view centre and its hidden flame
pub fn spawn_ship(engine: &mut Engine, gameplay: &GameplayConfig) -> Result<(Entity, Entity), GameError> {
    let radius = assets::collision_radius(&engine.assets, SHIP_TEXTURE)?;
    engine.assets.image(FLAME_TEXTURE)?;
    let centre = engine.view_center();

    let world = &mut engine.world;
    let ship = world.create_entity();
    world.add_component(ship, Transform2D::from_position_rotation(centre, INITIAL_HEADING));
    world.add_component(
        ship,
        RigidBody::new(gameplay.ship_mass).with_friction_air(gameplay.ship_friction_air),
    );
    world.add_component(ship, Collider::new(radius).with_layers(layers::SHIP, layers::ASTEROID));
    world.add_component(ship, Sprite::new(SHIP_TEXTURE).with_depth(depth::SHIP));
    world.add_component(ship, Ship);
    world.add_component(ship, WrapAround);

    let flame = world.create_entity();
    world.add_component(flame, Transform2D::from_position_rotation(centre, INITIAL_HEADING));
    world.add_component(flame, Sprite::new(FLAME_TEXTURE).with_depth(depth::FLAME).hidden());
    world.add_component(flame, Flame);

    log::debug!("Spawned ship {} with flame {}", ship.id(), flame.id());
    Ok((ship, flame))
}

/// Apply turn and thrust; the thruster cue loops while thrust is held
pub fn steer(engine: &mut Engine, gameplay: &GameplayConfig, ship: Entity, control: ControlInput) -> Result<(), GameError> {
    let heading = engine
        .world
        .get_component::<Transform2D>(ship)
        .ok_or(GameError::MissingEntity("ship"))?
        .heading();
    let body = engine
        .world
        .get_component_mut::<RigidBody>(ship)
        .ok_or(GameError::MissingEntity("ship"))?;

    body.angular_velocity = control.turn * gameplay.ship_rotation_speed;
    if control.thrust {
        body.thrust(heading, gameplay.thrust_acceleration);
        engine.audio.play_looped(THRUSTER_SOUND)?;
    } else if engine.audio.is_playing(THRUSTER_SOUND) {
        engine.audio.stop(THRUSTER_SOUND);
    }
    Ok(())
}

/// Where the flame sits for a ship transform and the two image sizes
pub fn flame_position(ship: &Transform2D, ship_size: Vec2, flame_size: Vec2) -> Vec2 {
    let (sin, cos) = ship.rotation.sin_cos();
    Vec2::new(
        ship.position.x - cos * (ship_size.x * 0.5 + flame_size.x * 0.5 - 5.0),
        ship.position.y - sin * (ship_size.y * 0.5 + flame_size.y * 0.5),
    )
}

/// Move the flame behind the ship; it shows only while thrusting
pub fn place_flame(engine: &mut Engine, ship: Entity, flame: Entity, thrusting: bool) -> Result<(), GameError> {
    let ship_transform = *engine
        .world
        .get_component::<Transform2D>(ship)
        .ok_or(GameError::MissingEntity("ship"))?;
    let ship_size = assets::image_size(&engine.assets, SHIP_TEXTURE)?;
    let flame_size = assets::image_size(&engine.assets, FLAME_TEXTURE)?;

    if thrusting {
        if let Some(transform) = engine.world.get_component_mut::<Transform2D>(flame) {
            transform.position = flame_position(&ship_transform, ship_size, flame_size);
            transform.rotation = ship_transform.rotation;
        }
    }
    set_visible(&mut engine.world, flame, thrusting);
    Ok(())
}

/// Take the ship out of play and bring it back once the centre is clear.
///
/// Returns `Active` when the ship could be placed straight away, otherwise
/// `Respawning` with a safety check scheduled.
pub fn reset_ship(engine: &mut Engine, gameplay: &GameplayConfig, ship: Entity, flame: Entity) -> Result<ShipState, GameError> {
    let world = &mut engine.world;
    let transform = world
        .get_component_mut::<Transform2D>(ship)
        .ok_or(GameError::MissingEntity("ship"))?;
    transform.position = parked_position();

    if let Some(body) = world.get_component_mut::<RigidBody>(ship) {
        body.halt();
    }
    if let Some(collider) = world.get_component_mut::<Collider>(ship) {
        collider.enabled = false;
    }
    set_visible(world, ship, false);
    set_visible(world, flame, false);

    if engine.audio.is_playing(THRUSTER_SOUND) {
        engine.audio.stop(THRUSTER_SOUND);
    }

    if try_place_ship(engine, gameplay, ship)? {
        Ok(ShipState::Active)
    } else {
        engine.delayed_call(gameplay.respawn_retry_interval, RESPAWN_CHECK);
        Ok(ShipState::Respawning)
    }
}

/// Whether no asteroid lies within `radius` of `point`
pub fn is_area_clear(world: &World, point: Vec2, radius: f32) -> bool {
    world.query::<Asteroid>().all(|(entity, _)| {
        world
            .get_component::<Transform2D>(entity)
            .map_or(true, |transform| utils::distance(transform.position, point) >= radius)
    })
}

/// Put the ship at the view centre if it is safe to do so
pub fn try_place_ship(engine: &mut Engine, gameplay: &GameplayConfig, ship: Entity) -> Result<bool, GameError> {
    let centre = engine.view_center();
    if !is_area_clear(&engine.world, centre, gameplay.respawn_safe_radius) {
        log::trace!("Respawn blocked, asteroid within {} px of centre", gameplay.respawn_safe_radius);
        return Ok(false);
    }

    let world = &mut engine.world;
    let transform = world
        .get_component_mut::<Transform2D>(ship)
        .ok_or(GameError::MissingEntity("ship"))?;
    transform.position = centre;

    if let Some(body) = world.get_component_mut::<RigidBody>(ship) {
        body.halt();
    }
    if let Some(collider) = world.get_component_mut::<Collider>(ship) {
        collider.enabled = true;
    }
    set_visible(world, ship, true);

    log::debug!("Ship placed at ({:.0}, {:.0})", centre.x, centre.y);
    Ok(true)
}

fn set_visible(world: &mut World, entity: Entity, visible: bool) {
    if let Some(sprite) = world.get_component_mut::<Sprite>(entity) {
        sprite.visible = visible;
    }
}
