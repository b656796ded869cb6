// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::Point3;

/// Triangle mesh with flat vertex buffers
///
/// Positions are stored as `(x, y, z)` triplets and indices as triples of
/// `u32`. Texture coordinates, when present, run parallel to the
/// positions: one `(u, v)` pair per vertex.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
    /// Optional texture coordinates (u, v), parallel to positions
    pub tex_coords: Option<Vec<f32>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
            tex_coords: None,
        }
    }

    /// Add a vertex without texture coordinates
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);
    }

    /// Add a vertex with a texture coordinate pair
    #[inline]
    pub fn add_vertex_uv(&mut self, position: Point3<f64>, u: f64, v: f64) {
        self.add_vertex(position);
        let coords = self.tex_coords.get_or_insert_with(Vec::new);
        coords.push(u as f32);
        coords.push(v as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Merge another mesh into this one, offsetting its indices.
    ///
    /// If either side carries texture coordinates the merged mesh does
    /// too; vertices from an uncoordinated side are padded with zeros so
    /// the parallel-array invariant holds.
    pub fn merge(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }

        let vertex_offset = self.vertex_count() as u32;

        if self.tex_coords.is_some() || other.tex_coords.is_some() {
            let own = self.tex_coords.get_or_insert_with(Vec::new);
            own.resize(vertex_offset as usize * 2, 0.0);
            match &other.tex_coords {
                Some(coords) => own.extend_from_slice(coords),
                None => own.resize(own.len() + other.vertex_count() * 2, 0.0),
            }
        }

        self.positions.reserve(other.positions.len());
        self.positions.extend_from_slice(&other.positions);

        self.indices.reserve(other.indices.len());
        self.indices
            .extend(other.indices.iter().map(|&i| i + vertex_offset));
    }

    /// Calculate bounds (min, max)
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.tex_coords.is_none());
    }

    #[test]
    fn test_add_vertex() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_vertex_uv_keeps_arrays_parallel() {
        let mut mesh = Mesh::new();
        mesh.add_vertex_uv(Point3::new(0.0, 0.0, 0.0), 0.5, 1.0);
        mesh.add_vertex_uv(Point3::new(1.0, 0.0, 0.0), 1.5, 0.0);

        let coords = mesh.tex_coords.as_ref().unwrap();
        assert_eq!(coords.len() / 2, mesh.vertex_count());
        assert_eq!(coords, &vec![0.5, 1.0, 1.5, 0.0]);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh1.add_vertex(Point3::new(1.0, 0.0, 0.0));
        mesh1.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh1.add_triangle(0, 1, 2);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(Point3::new(5.0, 5.0, 0.0));
        mesh2.add_vertex(Point3::new(6.0, 5.0, 0.0));
        mesh2.add_vertex(Point3::new(5.0, 6.0, 0.0));
        mesh2.add_triangle(0, 1, 2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(&mesh1.indices[3..], &[3, 4, 5]);
    }

    #[test]
    fn test_merge_pads_missing_tex_coords() {
        let mut plain = Mesh::new();
        plain.add_vertex(Point3::new(0.0, 0.0, 0.0));
        plain.add_triangle(0, 0, 0);

        let mut textured = Mesh::new();
        textured.add_vertex_uv(Point3::new(1.0, 1.0, 1.0), 2.0, 3.0);
        textured.add_triangle(0, 0, 0);

        plain.merge(&textured);
        let coords = plain.tex_coords.as_ref().unwrap();
        assert_eq!(coords, &vec![0.0, 0.0, 2.0, 3.0]);
        assert_eq!(coords.len() / 2, plain.vertex_count());
    }

    #[test]
    fn test_bounds() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(-1.0, 2.0, 0.0));
        mesh.add_vertex(Point3::new(3.0, -4.0, 5.0));

        let (min, max) = mesh.bounds();
        assert_eq!((min.x, min.y, min.z), (-1.0, -4.0, 0.0));
        assert_eq!((max.x, max.y, max.z), (3.0, 2.0, 5.0));
    }
}
