//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - 2D math types and the toroidal wrap primitive
//! - Fixed-timestep time management
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
