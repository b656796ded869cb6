// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simple polygon rings: normalization, signed area and convexity
//!
//! Handles simple polygons only (no holes, no self-intersection), either
//! convex or concave. A `Polygon` is immutable after construction; any
//! operation that changes the vertex set builds a new `Polygon` so the
//! cached area and classification never go stale.

use crate::error::{Error, Result};
use nalgebra::Point2;
use smallvec::SmallVec;

/// Orientation classification for a whole ring or a single vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convexity {
    Convex,
    Concave,
}

/// A closed, deduplicated vertex ring with cached derived data
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Closed ring: the last point duplicates the first
    ring: Vec<Point2<f64>>,
    signed_area: f64,
    kind: Convexity,
}

impl Polygon {
    /// Normalize a point sequence into a polygon.
    ///
    /// Duplicate points are removed (first occurrence wins), the ring is
    /// closed by appending a copy of the first point, and the signed area
    /// is computed with the shoelace formula. The sign follows the input
    /// frame: counter-clockwise is positive in a Y-up frame, callers in a
    /// Y-down frame observe the opposite sign.
    pub fn new(points: &[Point2<f64>]) -> Result<Self> {
        let open = dedup(points);

        if open.len() < 3 {
            return Err(Error::DegenerateRing(format!(
                "ring collapsed to {} distinct points",
                open.len()
            )));
        }

        let mut ring = open;
        ring.push(ring[0]);

        let signed_area = ring_signed_area(&ring);
        if signed_area == 0.0 {
            return Err(Error::DegenerateRing("ring has zero area".to_string()));
        }

        let kind = classify_ring(&ring, signed_area);

        Ok(Self {
            ring,
            signed_area,
            kind,
        })
    }

    /// Closed ring, last point equal to the first
    #[inline]
    pub fn ring(&self) -> &[Point2<f64>] {
        &self.ring
    }

    /// Ring without the duplicated closing point
    #[inline]
    pub fn open(&self) -> &[Point2<f64>] {
        &self.ring[..self.ring.len() - 1]
    }

    /// Number of distinct vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring.len() - 1
    }

    /// Signed shoelace area (sign encodes winding in the input frame)
    #[inline]
    pub fn signed_area(&self) -> f64 {
        self.signed_area
    }

    /// Absolute enclosed area
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area.abs()
    }

    /// Whole-ring classification: `Convex` iff every vertex is convex
    #[inline]
    pub fn kind(&self) -> Convexity {
        self.kind
    }

    /// Classify one vertex of the open ring.
    ///
    /// The vertex with its two neighbours (wrapping at the ring boundary)
    /// forms a 3-point sub-ring that runs through the same close/area
    /// pipeline as the full ring; its area sign is compared against the
    /// whole ring's. A zero-area triple (collinear vertex) classifies as
    /// `Concave`, which keeps it out of ear candidacy.
    ///
    /// # Panics
    /// Panics if `index >= vertex_count()`.
    pub fn vertex_type(&self, index: usize) -> Convexity {
        let open = self.open();
        let n = open.len();
        assert!(index < n, "vertex index {index} out of range ({n} vertices)");

        let prev = open[(index + n - 1) % n];
        let next = open[(index + 1) % n];
        let triple = triple_signed_area(prev, open[index], next);

        if sign(triple) == sign(self.signed_area) {
            Convexity::Convex
        } else {
            Convexity::Concave
        }
    }
}

/// Remove duplicate points, keeping the first occurrence of each.
///
/// A deliberately duplicated closing point is dropped up front so a
/// pre-closed input normalizes the same as an open one. Returns the open
/// ring.
fn dedup(points: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let body = match points {
        [first, .., last] if first == last => &points[..points.len() - 1],
        _ => points,
    };

    let mut open: Vec<Point2<f64>> = Vec::with_capacity(body.len());
    for p in body {
        if !open.iter().any(|kept| kept == p) {
            open.push(*p);
        }
    }
    open
}

/// Shoelace sum over a closed ring, halved
fn ring_signed_area(ring: &[Point2<f64>]) -> f64 {
    let mut area = 0.0;
    for pair in ring.windows(2) {
        area += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
    }
    area / 2.0
}

/// Signed area of the closed 3-point sub-ring `{a, b, c}`
fn triple_signed_area(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let ring: SmallVec<[Point2<f64>; 4]> = SmallVec::from_slice(&[a, b, c, a]);
    ring_signed_area(&ring)
}

fn classify_ring(ring: &[Point2<f64>], signed_area: f64) -> Convexity {
    let open = &ring[..ring.len() - 1];
    let n = open.len();
    for i in 0..n {
        let prev = open[(i + n - 1) % n];
        let next = open[(i + 1) % n];
        if sign(triple_signed_area(prev, open[i], next)) != sign(signed_area) {
            return Convexity::Concave;
        }
    }
    Convexity::Convex
}

#[inline]
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        ]
    }

    /// L-shaped hexagon with one reflex corner at (5, 5)
    fn l_shape() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square_area_and_kind() {
        let poly = Polygon::new(&square()).unwrap();
        assert_relative_eq!(poly.area(), 100.0);
        assert_eq!(poly.kind(), Convexity::Convex);
        assert_eq!(poly.vertex_count(), 4);
    }

    #[test]
    fn test_ring_is_closed() {
        let poly = Polygon::new(&square()).unwrap();
        assert_eq!(poly.ring().first(), poly.ring().last());
        assert_eq!(poly.open().len(), poly.ring().len() - 1);
    }

    #[test]
    fn test_preclosed_input_normalizes_identically() {
        let mut closed = square();
        closed.push(closed[0]);
        let from_open = Polygon::new(&square()).unwrap();
        let from_closed = Polygon::new(&closed).unwrap();
        assert_eq!(from_open.ring(), from_closed.ring());
    }

    #[test]
    fn test_dedup_removes_repeats_and_is_idempotent() {
        let mut points = square();
        points.insert(2, points[0]); // repeat of the first vertex mid-ring
        let once = dedup(&points);
        let twice = dedup(&once);
        assert_eq!(once.len(), 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_too_few_distinct_points() {
        let points = vec![
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(matches!(
            Polygon::new(&points),
            Err(Error::DegenerateRing(_))
        ));
    }

    #[test]
    fn test_zero_area_ring_rejected() {
        // Bowtie traversal of a square has canceling lobes
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
        ];
        assert!(matches!(
            Polygon::new(&points),
            Err(Error::DegenerateRing(_))
        ));
    }

    #[test]
    fn test_winding_flips_area_sign() {
        let ccw = Polygon::new(&square()).unwrap();
        let mut reversed = square();
        reversed.reverse();
        let cw = Polygon::new(&reversed).unwrap();
        assert_relative_eq!(ccw.signed_area(), -cw.signed_area());
        assert_relative_eq!(ccw.area(), cw.area());
    }

    #[test]
    fn test_l_shape_is_concave_with_one_reflex_vertex() {
        let poly = Polygon::new(&l_shape()).unwrap();
        assert_eq!(poly.kind(), Convexity::Concave);

        let reflex: Vec<usize> = (0..poly.vertex_count())
            .filter(|&i| poly.vertex_type(i) == Convexity::Concave)
            .collect();
        assert_eq!(reflex, vec![3]); // (5, 5)
    }

    #[test]
    fn test_kind_matches_vertex_types() {
        for points in [square(), l_shape()] {
            let poly = Polygon::new(&points).unwrap();
            let all_convex = (0..poly.vertex_count())
                .all(|i| poly.vertex_type(i) == Convexity::Convex);
            assert_eq!(poly.kind() == Convexity::Convex, all_convex);
        }
    }
}
