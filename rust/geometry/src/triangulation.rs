// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ear-clipping triangulation for simple polygons
//!
//! Every simple polygon without holes has at least two ears: triangles
//! with two sides on the polygon boundary and the third fully inside.
//! Clipping an ear yields a smaller polygon that still qualifies, so
//! repeating until three points remain triangulates the whole ring.
//!
//! The scan always clips the first qualifying vertex, which trades
//! triangle quality for a deterministic, reproducible output. Behavior on
//! self-intersecting input is undefined; when no ear can be found the
//! polygon is reported as malformed.

use crate::error::{Error, Result};
use crate::polygon::{Convexity, Polygon};
use nalgebra::Point2;

/// One clipped triangle, vertices in clip order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point2<f64>,
    pub v1: Point2<f64>,
    pub v2: Point2<f64>,
}

impl Triangle {
    /// Absolute area of the triangle
    pub fn area(&self) -> f64 {
        let ab = self.v1 - self.v0;
        let ac = self.v2 - self.v0;
        (ab.x * ac.y - ab.y * ac.x).abs() / 2.0
    }
}

/// Triangulate a simple polygon into exactly `vertex_count - 2` triangles.
///
/// Clipping removes the ear vertex and rebuilds the remaining ring as a
/// fresh [`Polygon`], so the area and convexity caches stay consistent at
/// every step.
pub fn triangulate(polygon: &Polygon) -> Result<Vec<Triangle>> {
    let mut triangles = Vec::with_capacity(polygon.vertex_count() - 2);
    let mut poly = polygon.clone();

    while poly.vertex_count() > 3 {
        let ear = find_ear(&poly)?;
        let open = poly.open();
        let n = open.len();

        triangles.push(Triangle {
            v0: open[(ear + n - 1) % n],
            v1: open[ear],
            v2: open[(ear + 1) % n],
        });

        let mut remaining = open.to_vec();
        remaining.remove(ear);
        poly = Polygon::new(&remaining)?;
    }

    let last = poly.open();
    triangles.push(Triangle {
        v0: last[0],
        v1: last[1],
        v2: last[2],
    });

    Ok(triangles)
}

/// Find the first ear vertex, scanning the open ring from index 0.
///
/// A vertex is an ear when it is locally convex and no other ring vertex
/// lies inside (or on the boundary of) its neighbour triangle.
fn find_ear(poly: &Polygon) -> Result<usize> {
    let open = poly.open();
    let n = open.len();

    for mid in 0..n {
        if poly.vertex_type(mid) != Convexity::Convex {
            continue;
        }

        let prev = (mid + n - 1) % n;
        let next = (mid + 1) % n;
        let blocked = (0..n).any(|j| {
            j != prev
                && j != mid
                && j != next
                && point_in_triangle(open[j], open[prev], open[mid], open[next])
        });

        if !blocked {
            return Ok(mid);
        }
    }

    Err(Error::MalformedPolygon(format!(
        "no ear found with {n} vertices remaining"
    )))
}

/// Test whether `p` lies inside the triangle `a, b, c`.
///
/// Same-side-of-each-edge test; points exactly on an edge count as inside,
/// so boundary-sitting vertices block ear candidacy.
pub fn point_in_triangle(
    p: Point2<f64>,
    a: Point2<f64>,
    b: Point2<f64>,
    c: Point2<f64>,
) -> bool {
    same_side(p, a, b, c) && same_side(p, b, a, c) && same_side(p, c, a, b)
}

/// True when `p1` and `p2` are on the same side of the line through `a, b`
fn same_side(p1: Point2<f64>, p2: Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> bool {
    let edge = b - a;
    let cp1 = edge.x * (p1.y - a.y) - edge.y * (p1.x - a.x);
    let cp2 = edge.x * (p2.y - a.y) - edge.y * (p2.x - a.x);
    cp1 * cp2 >= 0.0
}
