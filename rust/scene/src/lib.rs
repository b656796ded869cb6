//! osmscape scene assembly
//!
//! Turns footprint records into category-grouped roof and wall meshes,
//! the ground plane and a camera placement. Geometry failures are
//! per-footprint: a degenerate or malformed outline skips that footprint
//! with a warning and the rest of the dataset continues.

pub mod builder;
pub mod camera;
pub mod footprint;

pub use builder::{BuiltArea, NodeIndex, SceneBuilder, SceneModel};
pub use camera::{place_camera, CameraPlacement};
pub use footprint::{AreaKind, BuildingKind, Footprint, LanduseKind};
