// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extrusion - converting footprint outlines to 3D meshes
//!
//! Roofs are triangulated footprint polygons lifted to the extrusion
//! height; walls are quad strips between the ground ring and the roof
//! ring. Roof vertices are deliberately not shared between triangles:
//! flat-shaded duplication keeps per-triangle face orientation correct
//! under a single flat color.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::polygon::Polygon;
use crate::projection::{project, GeoCoordinate, MapBounds};
use crate::triangulation::triangulate;
use nalgebra::{Point2, Point3};

/// Build the roof mesh for a footprint.
///
/// Projects the outline, normalizes it into a polygon and clips it into
/// triangles; each triangle contributes three fresh vertices at
/// `(x, y, height)` and one index triple.
pub fn build_roof(
    outline: &[GeoCoordinate],
    height: f64,
    zoom: f64,
    bounds: &MapBounds,
) -> Result<Mesh> {
    let projected = project_outline(outline, zoom, bounds);
    let polygon = Polygon::new(&projected)?;
    let triangles = triangulate(&polygon)?;

    let mut mesh = Mesh::with_capacity(triangles.len() * 3, triangles.len() * 3);
    for triangle in &triangles {
        let base = mesh.vertex_count() as u32;
        mesh.add_vertex(Point3::new(triangle.v0.x, triangle.v0.y, height));
        mesh.add_vertex(Point3::new(triangle.v1.x, triangle.v1.y, height));
        mesh.add_vertex(Point3::new(triangle.v2.x, triangle.v2.y, height));
        mesh.add_triangle(base, base + 1, base + 2);
    }

    Ok(mesh)
}

/// Build the wall mesh for a footprint.
///
/// The outline is used in raw order (a closed input ring yields the full
/// wall loop). Every vertex contributes a ground and a roof position;
/// consecutive pairs are stitched into quads. Texture coordinates tile in
/// proportion to physical wall size: `u` accumulates segment width times
/// the texture pixel width along the loop, `v` spans the wall height
/// times the texture pixel height.
pub fn build_walls(
    outline: &[GeoCoordinate],
    height: f64,
    zoom: f64,
    bounds: &MapBounds,
    texture_size: (u32, u32),
) -> Mesh {
    let projected = project_outline(outline, zoom, bounds);
    let mut mesh = Mesh::with_capacity(
        projected.len() * 2,
        projected.len().saturating_sub(1) * 6,
    );

    let tex_width = texture_size.0 as f64;
    let tex_height = texture_size.1 as f64;
    let v_ground = tex_height * height;

    let mut u = 0.0;
    for (i, p) in projected.iter().enumerate() {
        if i > 0 {
            u += tex_width * (p - projected[i - 1]).norm();
        }
        mesh.add_vertex_uv(Point3::new(p.x, p.y, 0.0), u, v_ground);
        mesh.add_vertex_uv(Point3::new(p.x, p.y, height), u, 0.0);
    }

    // One quad per consecutive ground pair, two triangles each
    let position_count = mesh.vertex_count() as u32;
    let mut i = 0;
    while i + 3 < position_count {
        mesh.add_triangle(i, i + 2, i + 1);
        mesh.add_triangle(i + 3, i + 1, i + 2);
        i += 2;
    }

    mesh
}

fn project_outline(outline: &[GeoCoordinate], zoom: f64, bounds: &MapBounds) -> Vec<Point2<f64>> {
    outline
        .iter()
        .map(|c| project(c.lat, c.lon, zoom, bounds))
        .collect()
}
