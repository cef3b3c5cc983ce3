//! Rigid body integration

use crate::ecs::World;
use crate::ecs::components::{RigidBody, Transform2D};

/// Advance every entity with both a [`RigidBody`] and a [`Transform2D`]
pub fn integrate(world: &mut World, delta_time: f32) {
    let moving = world.entities_with::<RigidBody>();
    for entity in moving {
        let Some((dp, dr)) = world
            .get_component_mut::<RigidBody>(entity)
            .map(|body| body.integrate(delta_time))
        else {
            continue;
        };

        if let Some(transform) = world.get_component_mut::<Transform2D>(entity) {
            transform.position += dp;
            transform.rotation += dr;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_moves_transform() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Transform2D::from_position(Vec2::new(10.0, 10.0)));
        let mut body = RigidBody::new(1.0).with_velocity(Vec2::new(60.0, 0.0));
        body.angular_velocity = 3.0;
        world.add_component(entity, body);

        integrate(&mut world, 0.5);

        let transform = world.get_component::<Transform2D>(entity).unwrap();
        assert_relative_eq!(transform.position.x, 40.0);
        assert_relative_eq!(transform.position.y, 10.0);
        assert_relative_eq!(transform.rotation, 1.5);
    }

    #[test]
    fn test_body_without_transform_is_skipped() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, RigidBody::new(1.0).with_velocity(Vec2::new(1.0, 1.0)));
        integrate(&mut world, 1.0);
        assert!(world.get_component::<Transform2D>(entity).is_none());
    }
}
