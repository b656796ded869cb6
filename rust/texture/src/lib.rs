//! osmscape texture generation
//!
//! Deterministic procedural rasters for the scene layer: fractal
//! midpoint-displacement heightfields exported through fixed color ramps,
//! and a recursive window-grid mask for building walls. All randomness
//! flows through an injectable [`RandomSource`] so identical seeds
//! reproduce identical rasters.

pub mod error;
pub mod heightfield;
pub mod random;
pub mod tile;

pub use error::{Error, Result};
pub use heightfield::{ColorRamp, HeightField};
pub use random::{Lcg64, RandomSource};
pub use tile::tile_pattern;
