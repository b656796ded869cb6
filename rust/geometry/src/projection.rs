// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Web-Mercator projection into a dataset-local plane
//!
//! Geographic coordinates map to the global pixel plane of the standard
//! tile pyramid at a given zoom, then the midpoint of the dataset bounds
//! is subtracted so the bounding-box center lands on the local origin.
//! The bounds must be computed once per dataset and held fixed across all
//! projections, otherwise relative positions drift between footprints.

use nalgebra::{Point2, Vector2};
use std::f64::consts::{FRAC_PI_4, PI};

/// Pixels per radian of longitude at zoom 0 (256 px tile / 2π)
const PIXELS_PER_RADIAN: f64 = 256.0 / (2.0 * PI);

/// Geographic coordinate in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Dataset bounding box in radians, supplied once per dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl MapBounds {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Projected midpoint of the bounds corners at the given zoom
    pub fn projected_center(&self, zoom: f64) -> Point2<f64> {
        let min = global(self.min_lat, self.min_lon, zoom);
        let max = global(self.max_lat, self.max_lon, zoom);
        Point2::new(
            min.x + (max.x - min.x) / 2.0,
            min.y + (max.y - min.y) / 2.0,
        )
    }

    /// Signed projected extent `max - min` at the given zoom.
    ///
    /// The y component is negative for north-up data because the Mercator
    /// pixel axis points south.
    pub fn projected_span(&self, zoom: f64) -> Vector2<f64> {
        let min = global(self.min_lat, self.min_lon, zoom);
        let max = global(self.max_lat, self.max_lon, zoom);
        max - min
    }
}

/// Project into the global Web-Mercator pixel plane at `zoom`
fn global(lat: f64, lon: f64, zoom: f64) -> Point2<f64> {
    let scale = PIXELS_PER_RADIAN * 2f64.powf(zoom);
    Point2::new(
        scale * (lon + PI),
        scale * (PI - (FRAC_PI_4 + lat / 2.0).tan().ln()),
    )
}

/// Project a geographic coordinate into dataset-local pixel space.
///
/// Pure function; `lat` of exactly ±π/2 is the asymptote of the Mercator
/// formula and must be rejected upstream.
pub fn project(lat: f64, lon: f64, zoom: f64, bounds: &MapBounds) -> Point2<f64> {
    let center = bounds.projected_center(zoom);
    let p = global(lat, lon, zoom);
    Point2::new(p.x - center.x, p.y - center.y)
}
