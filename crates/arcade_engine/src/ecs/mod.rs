//! Entity-Component-System implementation
//!
//! Entities are generational keys; components live in one sparse column per
//! type. Game rules run as plain functions over the [`World`].

pub mod world;
pub mod entity;
pub mod component;
pub mod components;

pub use world::World;
pub use entity::Entity;
pub use component::Component;
