//! osmscape geometry processing
//!
//! Converts georeferenced footprint outlines into renderable triangle
//! meshes: ring normalization, deterministic ear-clipping triangulation,
//! Web-Mercator projection and roof/wall extrusion, built on nalgebra.

pub mod error;
pub mod extrusion;
pub mod mesh;
pub mod polygon;
pub mod projection;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use extrusion::{build_roof, build_walls};
pub use mesh::Mesh;
pub use polygon::{Convexity, Polygon};
pub use projection::{project, GeoCoordinate, MapBounds};
pub use triangulation::{triangulate, Triangle};
