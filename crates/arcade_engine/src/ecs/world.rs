//! ECS World implementation

use super::{Component, Entity};
use slotmap::{SecondaryMap, SlotMap};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Type-erased component column so despawn can drop every component
trait ComponentColumn: Any + Send + Sync {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ComponentColumn for SecondaryMap<Entity, T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// ECS World containing all entities and components
#[derive(Default)]
pub struct World {
    entities: SlotMap<Entity, ()>,
    component_storages: HashMap<TypeId, Box<dyn ComponentColumn>>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Destroy an entity and all of its components.
    ///
    /// Returns `false` when the entity was already gone.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if self.entities.remove(entity).is_none() {
            return false;
        }
        for column in self.component_storages.values_mut() {
            column.remove_entity(entity);
        }
        true
    }

    /// Whether the entity is still alive
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world has no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Add a component to an entity, replacing any previous value.
    ///
    /// Components added to dead entities are dropped.
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.contains(entity) {
            log::warn!("Ignoring component for despawned entity {}", entity.id());
            return;
        }
        self.column_mut::<T>().insert(entity, component);
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.column::<T>().and_then(|column| column.get(entity))
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.component_storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|column| column.as_any_mut().downcast_mut::<SecondaryMap<Entity, T>>())
            .and_then(|column| column.get_mut(entity))
    }

    /// Whether an entity has a component of type `T`
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// All entities carrying a component of type `T`, in storage order
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        self.column::<T>()
            .map(|column| column.keys().collect())
            .unwrap_or_default()
    }

    /// Iterate `(entity, component)` pairs of type `T`
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.column::<T>().into_iter().flat_map(SecondaryMap::iter)
    }

    /// Remove every entity and component
    pub fn clear(&mut self) {
        self.entities.clear();
        self.component_storages.clear();
    }

    fn column<T: Component>(&self) -> Option<&SecondaryMap<Entity, T>> {
        self.component_storages
            .get(&TypeId::of::<T>())
            .and_then(|column| column.as_any().downcast_ref::<SecondaryMap<Entity, T>>())
    }

    fn column_mut<T: Component>(&mut self) -> &mut SecondaryMap<Entity, T> {
        let column = self
            .component_storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SecondaryMap::<Entity, T>::new()));
        match column.as_any_mut().downcast_mut::<SecondaryMap<Entity, T>>() {
            Some(column) => column,
            None => unreachable!("component column registered under the wrong TypeId"),
        }
    }
}
