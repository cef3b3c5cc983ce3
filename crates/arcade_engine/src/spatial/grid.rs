//! Uniform grid spatial hash
//!
//! Each entity is bucketed into every cell its bounding square touches.
//! Arcade scenes are small and evenly spread, so a flat grid beats a tree.

use super::SpatialQuery;
use crate::ecs::Entity;
use crate::foundation::math::Vec2;
use std::collections::{HashMap, HashSet};

type Cell = (i32, i32);

/// Uniform-grid implementation of [`SpatialQuery`]
pub struct SpatialGrid {
    cell_size: f32,
    cells: HashMap<Cell, Vec<Entity>>,
    entity_cache: HashMap<Entity, (Vec2, f32)>,
}

impl SpatialGrid {
    /// Create a grid with square cells of `cell_size` pixels
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(1.0),
            cells: HashMap::new(),
            entity_cache: HashMap::new(),
        }
    }

    fn cell_range(&self, center: Vec2, radius: f32) -> impl Iterator<Item = Cell> {
        let to_cell = |v: f32| (v / self.cell_size).floor() as i32;
        let (min_x, max_x) = (to_cell(center.x - radius), to_cell(center.x + radius));
        let (min_y, max_y) = (to_cell(center.y - radius), to_cell(center.y + radius));
        (min_x..=max_x).flat_map(move |x| (min_y..=max_y).map(move |y| (x, y)))
    }

    fn collect(&self, center: Vec2, radius: f32, exclude: Entity) -> Vec<Entity> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for cell in self.cell_range(center, radius) {
            let Some(bucket) = self.cells.get(&cell) else {
                continue;
            };
            for &other in bucket {
                if other != exclude && seen.insert(other) {
                    found.push(other);
                }
            }
        }
        found
    }
}

impl SpatialQuery for SpatialGrid {
    fn insert(&mut self, entity: Entity, position: Vec2, radius: f32) {
        if self.entity_cache.contains_key(&entity) {
            self.remove(entity);
        }
        let cells: Vec<Cell> = self.cell_range(position, radius).collect();
        for cell in cells {
            self.cells.entry(cell).or_default().push(entity);
        }
        self.entity_cache.insert(entity, (position, radius));
    }

    fn remove(&mut self, entity: Entity) {
        let Some((position, radius)) = self.entity_cache.remove(&entity) else {
            return;
        };
        let cells: Vec<Cell> = self.cell_range(position, radius).collect();
        for cell in cells {
            if let Some(bucket) = self.cells.get_mut(&cell) {
                bucket.retain(|&e| e != entity);
                if bucket.is_empty() {
                    self.cells.remove(&cell);
                }
            }
        }
    }

    fn query_nearby(&self, entity: Entity) -> Vec<Entity> {
        match self.entity_cache.get(&entity) {
            Some(&(position, radius)) => self.collect(position, radius, entity),
            None => Vec::new(),
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.entity_cache.clear();
    }

    fn entity_count(&self) -> usize {
        self.entity_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::World;

    #[test]
    fn test_nearby_finds_neighbours_across_cells() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let far = world.create_entity();

        let mut grid = SpatialGrid::new(32.0);
        grid.insert(a, Vec2::new(30.0, 30.0), 5.0);
        grid.insert(b, Vec2::new(36.0, 30.0), 5.0);
        grid.insert(far, Vec2::new(500.0, 500.0), 5.0);

        let nearby = grid.query_nearby(a);
        assert!(nearby.contains(&b));
        assert!(!nearby.contains(&far));
        assert!(!nearby.contains(&a));
    }

    #[test]
    fn test_remove_and_reinsert() {
        let mut world = World::new();
        let a = world.create_entity();
        let near_origin = world.create_entity();
        let near_target = world.create_entity();
        let mut grid = SpatialGrid::new(16.0);

        grid.insert(near_origin, Vec2::new(2.0, 2.0), 4.0);
        grid.insert(near_target, Vec2::new(102.0, 100.0), 4.0);
        grid.insert(a, Vec2::new(0.0, 0.0), 4.0);
        grid.insert(a, Vec2::new(100.0, 100.0), 4.0);
        assert_eq!(grid.entity_count(), 3);
        assert_eq!(grid.query_nearby(a), vec![near_target]);
        assert!(grid.query_nearby(near_origin).is_empty());

        grid.remove(a);
        assert_eq!(grid.entity_count(), 2);
        assert!(grid.query_nearby(a).is_empty());
    }

    #[test]
    fn test_negative_coordinates() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut grid = SpatialGrid::new(16.0);
        grid.insert(a, Vec2::new(-1000.0, -1000.0), 10.0);
        grid.insert(b, Vec2::new(-995.0, -995.0), 1.0);
        assert_eq!(grid.query_nearby(b), vec![a]);
    }
}
