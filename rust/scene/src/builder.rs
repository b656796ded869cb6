// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene builder - footprints to meshes
//!
//! Resolves vertex ids, extrudes every footprint and groups the results
//! by category. Footprints are independent, so the loop runs in parallel;
//! a geometry failure is contained to its footprint, logged and skipped.

use crate::camera::{place_camera, CameraPlacement, DEFAULT_START_ANGLE_DEG};
use crate::footprint::{AreaKind, Footprint};
use osmscape_geometry::{build_roof, build_walls, GeoCoordinate, MapBounds, Mesh, Point3};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Vertex-id to coordinate lookup shared by all footprints of a dataset
pub type NodeIndex = FxHashMap<i64, GeoCoordinate>;

/// Half-extent of the ground quad in projected units
pub const GROUND_EXTENT: f64 = 8000.0;
/// Texture repeats across the ground quad
pub const GROUND_TILE: f64 = 2000.0;
/// The ground sits just below the land-use surfaces
const GROUND_ELEVATION: f64 = -1.0;

/// Default wall texture pixel dimensions used for tiling density
pub const DEFAULT_WALL_TEXTURE_SIZE: (u32, u32) = (100, 100);

/// One successfully built footprint
#[derive(Debug, Clone)]
pub struct BuiltArea {
    pub kind: AreaKind,
    /// Roof (buildings) or flat surface (land-use)
    pub surface: Mesh,
    /// Present only for footprints with the wall capability
    pub walls: Option<Mesh>,
}

/// All meshes of a dataset plus the camera that frames them
#[derive(Debug, Clone)]
pub struct SceneModel {
    pub areas: Vec<BuiltArea>,
    pub ground: Mesh,
    pub camera: CameraPlacement,
}

impl SceneModel {
    /// Combine every surface of one category into a single mesh
    pub fn combined_surface(&self, kind: AreaKind) -> Mesh {
        let mut combined = Mesh::new();
        for area in self.areas.iter().filter(|a| a.kind == kind) {
            combined.merge(&area.surface);
        }
        combined
    }

    /// Combine every wall mesh of one category into a single mesh
    pub fn combined_walls(&self, kind: AreaKind) -> Mesh {
        let mut combined = Mesh::new();
        for area in self.areas.iter().filter(|a| a.kind == kind) {
            if let Some(walls) = &area.walls {
                combined.merge(walls);
            }
        }
        combined
    }
}

/// Builds a dataset against fixed bounds and zoom
#[derive(Debug, Clone)]
pub struct SceneBuilder<'a> {
    bounds: MapBounds,
    zoom: f64,
    nodes: &'a NodeIndex,
    wall_texture_size: (u32, u32),
    start_angle_deg: f64,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(bounds: MapBounds, zoom: f64, nodes: &'a NodeIndex) -> Self {
        Self {
            bounds,
            zoom,
            nodes,
            wall_texture_size: DEFAULT_WALL_TEXTURE_SIZE,
            start_angle_deg: DEFAULT_START_ANGLE_DEG,
        }
    }

    /// Override the wall texture dimensions the tiling density is
    /// derived from
    pub fn with_wall_texture_size(mut self, size: (u32, u32)) -> Self {
        self.wall_texture_size = size;
        self
    }

    /// Override the camera elevation angle
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle_deg = degrees;
        self
    }

    /// Build the whole dataset. Malformed footprints are skipped, never
    /// dataset-fatal.
    pub fn build(&self, footprints: &[Footprint]) -> SceneModel {
        let areas: Vec<BuiltArea> = footprints
            .par_iter()
            .filter_map(|footprint| self.build_area(footprint))
            .collect();

        tracing::info!(
            built = areas.len(),
            skipped = footprints.len() - areas.len(),
            "dataset build complete"
        );

        SceneModel {
            areas,
            ground: ground_plane(GROUND_EXTENT, GROUND_TILE),
            camera: place_camera(&self.bounds, self.zoom, self.start_angle_deg),
        }
    }

    fn build_area(&self, footprint: &Footprint) -> Option<BuiltArea> {
        let Some(outline) = self.resolve(footprint) else {
            tracing::warn!(
                nodes = footprint.nodes.len(),
                "skipping footprint with unresolved vertex ids"
            );
            return None;
        };

        let surface = match build_roof(&outline, footprint.height, self.zoom, &self.bounds) {
            Ok(mesh) => mesh,
            Err(err) => {
                tracing::warn!(error = %err, "skipping footprint");
                return None;
            }
        };

        let walls = footprint.has_walls().then(|| {
            build_walls(
                &outline,
                footprint.height,
                self.zoom,
                &self.bounds,
                self.wall_texture_size,
            )
        });

        Some(BuiltArea {
            kind: footprint.kind,
            surface,
            walls,
        })
    }

    fn resolve(&self, footprint: &Footprint) -> Option<Vec<GeoCoordinate>> {
        footprint
            .nodes
            .iter()
            .map(|id| self.nodes.get(id).copied())
            .collect()
    }
}

/// Ground quad under the whole dataset, texture tiled across it
fn ground_plane(extent: f64, tile: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(4, 6);

    mesh.add_vertex_uv(Point3::new(extent, extent, GROUND_ELEVATION), 0.0, 0.0);
    mesh.add_vertex_uv(Point3::new(-extent, extent, GROUND_ELEVATION), tile, 0.0);
    mesh.add_vertex_uv(Point3::new(extent, -extent, GROUND_ELEVATION), 0.0, tile);
    mesh.add_vertex_uv(Point3::new(-extent, -extent, GROUND_ELEVATION), tile, tile);

    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{BuildingKind, LanduseKind};

    fn node_index() -> NodeIndex {
        let mut nodes = NodeIndex::default();
        // Square block
        nodes.insert(1, GeoCoordinate::new(0.8908, 0.0648));
        nodes.insert(2, GeoCoordinate::new(0.8908, 0.0652));
        nodes.insert(3, GeoCoordinate::new(0.8912, 0.0652));
        nodes.insert(4, GeoCoordinate::new(0.8912, 0.0648));
        // An isolated point, useful for degenerate footprints
        nodes.insert(9, GeoCoordinate::new(0.8910, 0.0650));
        nodes
    }

    fn bounds() -> MapBounds {
        MapBounds::new(0.8905, 0.0645, 0.8915, 0.0655)
    }

    fn square_nodes() -> Vec<i64> {
        vec![1, 2, 3, 4, 1]
    }

    #[test]
    fn test_building_gets_roof_and_walls() {
        let nodes = node_index();
        let builder = SceneBuilder::new(bounds(), 10.0, &nodes);
        let scene = builder.build(&[Footprint::building(
            square_nodes(),
            BuildingKind::Regular,
        )]);

        assert_eq!(scene.areas.len(), 1);
        let area = &scene.areas[0];
        assert!(!area.surface.is_empty());
        let walls = area.walls.as_ref().unwrap();
        assert_eq!(walls.vertex_count(), square_nodes().len() * 2);
    }

    #[test]
    fn test_landuse_gets_no_walls() {
        let nodes = node_index();
        let builder = SceneBuilder::new(bounds(), 10.0, &nodes);
        let scene = builder.build(&[Footprint::landuse(square_nodes(), LanduseKind::Grass)]);

        assert_eq!(scene.areas.len(), 1);
        assert!(scene.areas[0].walls.is_none());
    }

    #[test]
    fn test_bad_footprints_are_skipped_not_fatal() {
        let nodes = node_index();
        let builder = SceneBuilder::new(bounds(), 10.0, &nodes);

        let footprints = vec![
            Footprint::building(square_nodes(), BuildingKind::Regular),
            // Collapses to a single distinct point
            Footprint::building(vec![9, 9, 9], BuildingKind::Regular),
            // References an unknown vertex id
            Footprint::building(vec![1, 2, 77], BuildingKind::Church),
            Footprint::landuse(square_nodes(), LanduseKind::Forest),
        ];

        let scene = builder.build(&footprints);
        assert_eq!(scene.areas.len(), 2);
    }

    #[test]
    fn test_combined_surface_batches_one_category() {
        let nodes = node_index();
        let builder = SceneBuilder::new(bounds(), 10.0, &nodes);
        let scene = builder.build(&[
            Footprint::building(square_nodes(), BuildingKind::Regular),
            Footprint::building(square_nodes(), BuildingKind::Regular),
            Footprint::landuse(square_nodes(), LanduseKind::Grass),
        ]);

        let regular = scene.combined_surface(AreaKind::Building(BuildingKind::Regular));
        let single = &scene.areas[0].surface;
        assert_eq!(regular.vertex_count(), single.vertex_count() * 2);
        assert_eq!(regular.triangle_count(), single.triangle_count() * 2);

        let church = scene.combined_surface(AreaKind::Building(BuildingKind::Church));
        assert!(church.is_empty());
    }

    #[test]
    fn test_ground_plane_quad() {
        let ground = ground_plane(GROUND_EXTENT, GROUND_TILE);
        assert_eq!(ground.vertex_count(), 4);
        assert_eq!(ground.triangle_count(), 2);

        let coords = ground.tex_coords.as_ref().unwrap();
        assert_eq!(coords.len(), 8);
        assert_eq!(coords[6], GROUND_TILE as f32);

        let (min, max) = ground.bounds();
        assert_eq!(min.z, -1.0);
        assert_eq!(max.x, GROUND_EXTENT as f32);
    }
}
