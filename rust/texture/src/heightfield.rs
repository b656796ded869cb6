// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fractal midpoint-displacement heightfields (diamond-square)
//!
//! Generates a square scalar grid by recursive subdivision: cell centers
//! average their four diagonal corners (square step), edge midpoints
//! average their orthogonal neighbours (diamond step), each nudged by a
//! uniform random offset. The displacement range is held constant across
//! depths; the classical algorithm halves it per depth, but the flatter
//! spectrum is the intended look here and is kept for compatibility.
//!
//! Values are unbounded during generation and only rescaled into
//! `[0, 255]` when exporting to a raster through a [`ColorRamp`].

use crate::error::{Error, Result};
use crate::random::RandomSource;
use image::{Rgba, RgbaImage};

/// Neutral value the four corners are seeded with
const NEUTRAL: i32 = 128;

/// Fixed two-channel color ramps for raster export.
///
/// One channel is held at full intensity while the other two follow the
/// normalized magnitude. The mapping is a pure policy over the exported
/// byte, independent of generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRamp {
    /// Full green, magnitude on red and blue (terrain-like)
    GreenBiased,
    /// Full blue, magnitude on red and green (sky-like)
    BlueBiased,
}

impl ColorRamp {
    #[inline]
    fn shade(self, magnitude: u8) -> Rgba<u8> {
        match self {
            ColorRamp::GreenBiased => Rgba([magnitude, 255, magnitude, 255]),
            ColorRamp::BlueBiased => Rgba([magnitude, magnitude, 255, 255]),
        }
    }
}

/// Square grid of `(side + 1) x (side + 1)` integer magnitudes
#[derive(Debug, Clone)]
pub struct HeightField {
    side: usize,
    cells: Vec<i32>,
}

impl HeightField {
    /// Run diamond-square over a fresh grid.
    ///
    /// `side` must be a power of two: the recursion halves the grid
    /// spacing at every depth and anything else cannot subdivide evenly.
    /// The random offset for every touched cell is drawn uniformly from
    /// `[-d, d]` with `d = displacement_scale * roughness`.
    pub fn generate(
        roughness: f64,
        displacement_scale: f64,
        side: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        if side == 0 || !side.is_power_of_two() {
            return Err(Error::InvalidSide(format!(
                "{side} is not a power of two"
            )));
        }

        let mut field = Self {
            side,
            cells: vec![0; (side + 1) * (side + 1)],
        };
        let amplitude = displacement_scale * roughness;

        field.set(0, 0, NEUTRAL);
        field.set(side, 0, NEUTRAL);
        field.set(0, side, NEUTRAL);
        field.set(side, side, NEUTRAL);

        let mut distance = side;
        while distance > 1 {
            let half = distance / 2;

            let mut y = half;
            while y <= side {
                let mut x = half;
                while x <= side {
                    field.square(x, y, half, offset(rng, amplitude));
                    x += distance;
                }
                y += distance;
            }

            let mut y = 0;
            while y <= side {
                let mut x = (y + half) % distance;
                while x <= side {
                    field.diamond(x, y, half, offset(rng, amplitude));
                    x += distance;
                }
                y += half;
            }

            distance = half;
        }

        Ok(field)
    }

    /// Grid side length (the grid holds `side + 1` samples per axis)
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Raw magnitude at a grid coordinate
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[y * (self.side + 1) + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize, value: i32) {
        self.cells[y * (self.side + 1) + x] = value;
    }

    /// Square step: average of the four diagonal corners plus the offset
    fn square(&mut self, x: usize, y: usize, half: usize, offset: f64) {
        let average = (self.get(x - half, y - half) as f64
            + self.get(x + half, y - half) as f64
            + self.get(x - half, y + half) as f64
            + self.get(x + half, y + half) as f64)
            / 4.0;
        self.set(x, y, (average + offset) as i32);
    }

    /// Diamond step: average of the orthogonal neighbours plus the offset,
    /// dividing by 3 instead of 4 on the grid boundary
    fn diamond(&mut self, x: usize, y: usize, half: usize, offset: f64) {
        let mut sum = 0.0;
        let mut divide = 4.0;

        if y >= half {
            sum += self.get(x, y - half) as f64;
        } else {
            divide = 3.0;
        }
        if x >= half {
            sum += self.get(x - half, y) as f64;
        } else {
            divide = 3.0;
        }
        if x + half <= self.side {
            sum += self.get(x + half, y) as f64;
        } else {
            divide = 3.0;
        }
        if y + half <= self.side {
            sum += self.get(x, y + half) as f64;
        } else {
            divide = 3.0;
        }

        self.set(x, y, (sum / divide + offset) as i32);
    }

    /// Export a `side x side` raster through the given color ramp.
    ///
    /// The grid minimum is lifted to zero and the lifted range divided
    /// down so every exported byte lands in `[0, 255]`.
    pub fn to_raster(&self, ramp: ColorRamp) -> RgbaImage {
        let side = self.side as u32;
        let mut raster = RgbaImage::new(side, side);

        let mut max = 0;
        let mut min = 255;
        for y in 0..self.side {
            for x in 0..self.side {
                let v = self.get(x, y);
                max = max.max(v);
                min = min.min(v);
            }
        }

        let lift = if min < 0 { min.abs() } else { 0 };
        let factor = if min < 0 || max > 255 {
            (max + lift) as f64 / 255.0
        } else {
            1.0
        };

        for y in 0..self.side {
            for x in 0..self.side {
                let magnitude = ((self.get(x, y) + lift) as f64 / factor) as u8;
                raster.put_pixel(x as u32, y as u32, ramp.shade(magnitude));
            }
        }

        raster
    }
}

/// Uniform offset in `[-amplitude, amplitude]`
#[inline]
fn offset(rng: &mut dyn RandomSource, amplitude: f64) -> f64 {
    rng.next_f64() * amplitude * 2.0 - amplitude
}
