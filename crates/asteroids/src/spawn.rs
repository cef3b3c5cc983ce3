//! Spawning asteroids and bullets

use crate::assets::{self, BULLET_TEXTURE, FIRE_SOUND};
use crate::components::{depth, layers, Asteroid, AsteroidSize, Bullet};
use crate::config::{GameplayConfig, SpeedRange};
use crate::error::GameError;
use arcade_engine::foundation::math::{constants::TAU, utils, Vec2};
use arcade_engine::prelude::*;
use rand::Rng;

/// Random launch velocity: uniform heading, speed drawn from `range`
pub fn random_velocity(rng: &mut impl Rng, range: SpeedRange) -> Vec2 {
    let heading = rng.gen_range(0.0..TAU);
    let speed = if range.max > range.min {
        rng.gen_range(range.min..=range.max)
    } else {
        range.min
    };
    utils::from_angle(heading) * speed
}

/// Spawn one drifting asteroid
pub fn spawn_asteroid(
    engine: &mut Engine,
    gameplay: &GameplayConfig,
    size: AsteroidSize,
    position: Vec2,
    texture: &str,
) -> Result<Entity, GameError> {
    let radius = assets::collision_radius(&engine.assets, texture)?;
    let class = gameplay.asteroids.get(size);
    let velocity = random_velocity(engine.rng(), class.speed);

    let world = &mut engine.world;
    let entity = world.create_entity();
    world.add_component(entity, Transform2D::from_position(position));
    world.add_component(entity, RigidBody::new(class.mass).with_velocity(velocity));
    world.add_component(
        entity,
        Collider::new(radius).with_layers(layers::ASTEROID, layers::SHIP | layers::BULLET),
    );
    world.add_component(entity, Sprite::new(texture).with_depth(depth::ASTEROID));
    world.add_component(entity, Asteroid { size });
    world.add_component(entity, WrapAround);

    log::debug!(
        "Spawned {} asteroid {} at ({:.0}, {:.0}) moving {:.1} px/s",
        size.name(),
        entity.id(),
        position.x,
        position.y,
        velocity.magnitude()
    );
    Ok(entity)
}

/// Scatter `gameplay.asteroid_count` large asteroids over the view
pub fn spawn_initial_field(engine: &mut Engine, gameplay: &GameplayConfig) -> Result<Vec<Entity>, GameError> {
    let view = engine.view_size();
    let texture = AsteroidSize::Large.textures()[0];

    (0..gameplay.asteroid_count)
        .map(|_| {
            let rng = engine.rng();
            let position = Vec2::new(rng.gen_range(0.0..=view.x), rng.gen_range(0.0..=view.y));
            spawn_asteroid(engine, gameplay, AsteroidSize::Large, position, texture)
        })
        .collect()
}

/// Spawn the fragments of `asteroid` at its position.
///
/// The parent is left in place; small asteroids produce no fragments.
pub fn split_asteroid(engine: &mut Engine, gameplay: &GameplayConfig, asteroid: Entity) -> Result<Vec<Entity>, GameError> {
    let size = engine
        .world
        .get_component::<Asteroid>(asteroid)
        .ok_or(GameError::MissingEntity("asteroid"))?
        .size;
    let position = engine
        .world
        .get_component::<Transform2D>(asteroid)
        .ok_or(GameError::MissingEntity("asteroid"))?
        .position;

    let Some(next) = size.split_into() else {
        return Ok(Vec::new());
    };

    next.textures()
        .iter()
        .map(|texture| spawn_asteroid(engine, gameplay, next, position, texture))
        .collect()
}

/// Fire a bullet from the ship's nose, inheriting the ship's velocity
pub fn fire_bullet(engine: &mut Engine, gameplay: &GameplayConfig, ship: Entity) -> Result<Entity, GameError> {
    let transform = *engine
        .world
        .get_component::<Transform2D>(ship)
        .ok_or(GameError::MissingEntity("ship"))?;
    let ship_velocity = engine
        .world
        .get_component::<RigidBody>(ship)
        .map_or_else(Vec2::zeros, |body| body.velocity);

    let heading = transform.heading();
    let position = transform.position + heading * gameplay.bullet_offset;
    let velocity = ship_velocity + heading * gameplay.bullet_speed;
    let radius = assets::collision_radius(&engine.assets, BULLET_TEXTURE)?;
    let now = engine.time();

    engine.audio.play(FIRE_SOUND)?;

    let world = &mut engine.world;
    let bullet = world.create_entity();
    world.add_component(bullet, Transform2D::from_position_rotation(position, transform.rotation));
    world.add_component(bullet, RigidBody::new(gameplay.bullet_mass).with_velocity(velocity));
    world.add_component(bullet, Collider::new(radius).with_layers(layers::BULLET, layers::ASTEROID));
    world.add_component(bullet, Sprite::new(BULLET_TEXTURE).with_depth(depth::BULLET));
    world.add_component(bullet, Lifetime::new(now, gameplay.bullet_lifetime));
    world.add_component(bullet, Bullet);
    world.add_component(bullet, WrapAround);

    log::trace!("Bullet {} fired", bullet.id());
    Ok(bullet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetConfig, GameConfig};
    use approx::assert_relative_eq;
    use arcade_engine::audio::backend::NullBackend;
    use rand::{rngs::StdRng, SeedableRng};

    fn engine(config: &GameConfig) -> Engine {
        let mut engine_config = config.engine_config();
        engine_config.seed = Some(3);
        let mut engine = Engine::new(&engine_config, Box::new(NullBackend::new())).unwrap();
        assets::declare(&mut engine.assets, &AssetConfig::default()).unwrap();
        assets::bind_sounds(&mut engine.audio, &engine.assets, &AssetConfig::default()).unwrap();
        engine
    }

    #[test]
    fn test_random_velocity_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let range = SpeedRange { min: 60.0, max: 90.0 };
        for _ in 0..200 {
            let speed = random_velocity(&mut rng, range).magnitude();
            assert!(speed >= 60.0 - 1e-3 && speed <= 90.0 + 1e-3, "speed {speed}");
        }

        let fixed = random_velocity(&mut rng, SpeedRange { min: 45.0, max: 45.0 });
        assert_relative_eq!(fixed.magnitude(), 45.0, epsilon = 1e-3);
    }

    #[test]
    fn test_initial_field_inside_view() {
        let config = GameConfig::default();
        let mut engine = engine(&config);
        let field = spawn_initial_field(&mut engine, &config.gameplay).unwrap();
        assert_eq!(field.len(), 8);

        for entity in field {
            let position = engine.world.get_component::<Transform2D>(entity).unwrap().position;
            assert!((0.0..=1024.0).contains(&position.x));
            assert!((0.0..=768.0).contains(&position.y));
            let body = engine.world.get_component::<RigidBody>(entity).unwrap();
            assert_eq!(body.mass, 15.0);
            assert_eq!(body.friction_air, 0.0);
            assert!(body.velocity.magnitude() > 0.0);
        }
    }

    #[test]
    fn test_split_large_into_two_medium() {
        let config = GameConfig::default();
        let mut engine = engine(&config);
        let parent = spawn_asteroid(&mut engine, &config.gameplay, AsteroidSize::Large, Vec2::new(200.0, 300.0), "asteroid").unwrap();

        let fragments = split_asteroid(&mut engine, &config.gameplay, parent).unwrap();
        assert_eq!(fragments.len(), 2);

        let textures: Vec<&str> = fragments
            .iter()
            .map(|&e| engine.world.get_component::<Sprite>(e).unwrap().texture.as_str())
            .collect();
        assert_eq!(textures, vec!["mediumAsteroid1", "mediumAsteroid2"]);

        for &fragment in &fragments {
            assert_eq!(engine.world.get_component::<Asteroid>(fragment).unwrap().size, AsteroidSize::Medium);
            assert_eq!(engine.world.get_component::<Transform2D>(fragment).unwrap().position, Vec2::new(200.0, 300.0));
            assert_eq!(engine.world.get_component::<RigidBody>(fragment).unwrap().mass, 7.5);
            let speed = engine.world.get_component::<RigidBody>(fragment).unwrap().velocity.magnitude();
            assert!(speed >= 60.0 - 1e-3 && speed <= 90.0 + 1e-3);
        }
        assert!(engine.world.contains(parent));
    }

    #[test]
    fn test_small_does_not_split() {
        let config = GameConfig::default();
        let mut engine = engine(&config);
        let small = spawn_asteroid(&mut engine, &config.gameplay, AsteroidSize::Small, Vec2::new(5.0, 5.0), "smallAsteroid1").unwrap();
        assert!(split_asteroid(&mut engine, &config.gameplay, small).unwrap().is_empty());
    }

    #[test]
    fn test_bullet_leaves_the_nose() {
        let config = GameConfig::default();
        let mut engine = engine(&config);

        let ship = engine.world.create_entity();
        engine.world.add_component(ship, Transform2D::from_position_rotation(Vec2::new(100.0, 100.0), 0.0));
        engine.world.add_component(ship, RigidBody::new(80.0).with_velocity(Vec2::new(10.0, -5.0)));

        let bullet = fire_bullet(&mut engine, &config.gameplay, ship).unwrap();
        let transform = engine.world.get_component::<Transform2D>(bullet).unwrap();
        assert_relative_eq!(transform.position.x, 130.0, epsilon = 1e-4);
        assert_relative_eq!(transform.position.y, 100.0, epsilon = 1e-4);

        let body = engine.world.get_component::<RigidBody>(bullet).unwrap();
        assert_relative_eq!(body.velocity.x, 310.0, epsilon = 1e-4);
        assert_relative_eq!(body.velocity.y, -5.0, epsilon = 1e-4);
        assert_eq!(body.mass, 1.0);

        let lifetime = engine.world.get_component::<Lifetime>(bullet).unwrap();
        assert_relative_eq!(lifetime.duration, 1.0);
    }
}
