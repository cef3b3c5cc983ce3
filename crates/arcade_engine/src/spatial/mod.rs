//! Spatial partitioning for broad-phase collision detection

pub mod spatial_query;
pub mod grid;

pub use spatial_query::SpatialQuery;
pub use grid::SpatialGrid;
