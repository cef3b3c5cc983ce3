//! Classifying and resolving started collisions

use crate::components::{Asteroid, AsteroidSize, Bullet, Ship};
use crate::config::GameplayConfig;
use crate::error::GameError;
use crate::spawn::split_asteroid;
use arcade_engine::physics::CollisionPair;
use arcade_engine::prelude::*;

/// A collision the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// The ship ran into an asteroid
    ShipAsteroid {
        /// The ship
        ship: Entity,
        /// The asteroid it hit
        asteroid: Entity,
    },
    /// A bullet hit an asteroid
    BulletAsteroid {
        /// The bullet
        bullet: Entity,
        /// The asteroid it hit
        asteroid: Entity,
    },
}

/// Work out what kind of contact a pair is.
///
/// Pairs whose entities are gone (despawned earlier in the same batch) or
/// that match no rule yield `None`.
pub fn classify(world: &World, pair: &CollisionPair) -> Option<Contact> {
    let sides = [(pair.entity_a, pair.entity_b), (pair.entity_b, pair.entity_a)];

    sides.into_iter().find_map(|(other, asteroid)| {
        if !world.has_component::<Asteroid>(asteroid) {
            return None;
        }
        if world.has_component::<Ship>(other) {
            Some(Contact::ShipAsteroid { ship: other, asteroid })
        } else if world.has_component::<Bullet>(other) {
            Some(Contact::BulletAsteroid { bullet: other, asteroid })
        } else {
            None
        }
    })
}

/// Split an asteroid and remove it; returns the fragments
pub fn shatter(engine: &mut Engine, gameplay: &GameplayConfig, asteroid: Entity) -> Result<Vec<Entity>, GameError> {
    let fragments = split_asteroid(engine, gameplay, asteroid)?;
    engine.world.despawn(asteroid);
    Ok(fragments)
}

/// Resolve a bullet hit and return the points it earned.
///
/// Large and medium asteroids pay their points once per fragment; small
/// ones pay once.
pub fn resolve_bullet_hit(
    engine: &mut Engine,
    gameplay: &GameplayConfig,
    bullet: Entity,
    asteroid: Entity,
) -> Result<u32, GameError> {
    let size = asteroid_size(&engine.world, asteroid)?;
    engine.audio.play(size.hit_sound())?;

    let fragments = shatter(engine, gameplay, asteroid)?;
    engine.world.despawn(bullet);

    let points = if fragments.is_empty() {
        size.points()
    } else {
        size.points() * fragments.len() as u32
    };
    log::debug!("Bullet destroyed {} asteroid for {} points", size.name(), points);
    Ok(points)
}

/// Resolve the asteroid side of a ship hit: it always sounds like a large
/// impact and the asteroid splits without scoring
pub fn resolve_ship_hit(engine: &mut Engine, gameplay: &GameplayConfig, asteroid: Entity) -> Result<(), GameError> {
    let size = asteroid_size(&engine.world, asteroid)?;
    engine.audio.play(AsteroidSize::Large.hit_sound())?;
    shatter(engine, gameplay, asteroid)?;
    log::debug!("Ship hit a {} asteroid", size.name());
    Ok(())
}

fn asteroid_size(world: &World, asteroid: Entity) -> Result<AsteroidSize, GameError> {
    world
        .get_component::<Asteroid>(asteroid)
        .map(|a| a.size)
        .ok_or(GameError::MissingEntity("asteroid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::config::{AssetConfig, GameConfig};
    use crate::spawn::spawn_asteroid;
    use arcade_engine::audio::backend::{AudioCommand, NullBackend};
    use std::sync::{Arc, Mutex};

    fn engine() -> (Engine, Arc<Mutex<Vec<AudioCommand>>>) {
        let config = GameConfig::default();
        let backend = NullBackend::new();
        let log = backend.log_handle();
        let mut engine = Engine::new(&config.engine_config(), Box::new(backend)).unwrap();
        assets::declare(&mut engine.assets, &AssetConfig::default()).unwrap();
        assets::bind_sounds(&mut engine.audio, &engine.assets, &AssetConfig::default()).unwrap();
        (engine, log)
    }

    fn played(log: &Arc<Mutex<Vec<AudioCommand>>>) -> Vec<String> {
        log.lock()
            .unwrap()
            .iter()
            .filter_map(|command| match command {
                AudioCommand::Play { cue, .. } => Some(cue.clone()),
                AudioCommand::Stop { .. } => None,
            })
            .collect()
    }

    fn rock(engine: &mut Engine, size: AsteroidSize) -> Entity {
        let texture = size.textures()[0];
        spawn_asteroid(engine, &GameplayConfig::default(), size, Vec2::new(300.0, 300.0), texture).unwrap()
    }

    #[test]
    fn test_classify_either_order() {
        let (mut engine, _) = engine();
        let asteroid = rock(&mut engine, AsteroidSize::Large);
        let bullet = engine.world.create_entity();
        engine.world.add_component(bullet, Bullet);
        let ship = engine.world.create_entity();
        engine.world.add_component(ship, Ship);

        assert_eq!(
            classify(&engine.world, &CollisionPair::new(bullet, asteroid)),
            Some(Contact::BulletAsteroid { bullet, asteroid })
        );
        assert_eq!(
            classify(&engine.world, &CollisionPair::new(asteroid, ship)),
            Some(Contact::ShipAsteroid { ship, asteroid })
        );
        assert_eq!(classify(&engine.world, &CollisionPair::new(bullet, ship)), None);

        engine.world.despawn(asteroid);
        assert_eq!(classify(&engine.world, &CollisionPair::new(bullet, asteroid)), None);
    }

    #[test]
    fn test_bullet_scores_per_fragment() {
        let gameplay = GameplayConfig::default();
        let (mut engine, log) = engine();

        for (size, expected, sound) in [
            (AsteroidSize::Large, 40, "hitLarge"),
            (AsteroidSize::Medium, 100, "hitMedium"),
            (AsteroidSize::Small, 100, "hitSmall"),
        ] {
            let asteroid = rock(&mut engine, size);
            let bullet = engine.world.create_entity();
            engine.world.add_component(bullet, Bullet);

            let points = resolve_bullet_hit(&mut engine, &gameplay, bullet, asteroid).unwrap();
            assert_eq!(points, expected);
            assert!(!engine.world.contains(asteroid));
            assert!(!engine.world.contains(bullet));
            assert_eq!(played(&log).last().map(String::as_str), Some(sound));
        }
    }

    #[test]
    fn test_ship_hit_splits_without_points() {
        let gameplay = GameplayConfig::default();
        let (mut engine, log) = engine();
        let asteroid = rock(&mut engine, AsteroidSize::Medium);

        resolve_ship_hit(&mut engine, &gameplay, asteroid).unwrap();
        assert!(!engine.world.contains(asteroid));
        assert_eq!(engine.world.entities_with::<Asteroid>().len(), 2);
        assert_eq!(played(&log), vec!["hitLarge".to_string()]);
    }
}
