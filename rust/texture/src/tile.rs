// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recursive window-grid mask for wall tiling
//!
//! Produces a square binary-mask raster: a background with
//! `units x units` evenly spaced inset rectangles, a fixed margin
//! fraction between them and the leftover pixels split as an outer
//! border. Placement recurses depth-first to the neighbour below, to the
//! right and on the diagonal; recursion depth is bounded by the unit
//! count. Cells reachable on several paths repaint identical pixels.

use crate::error::{Error, Result};
use image::{Rgba, RgbaImage};

/// Fraction of each unit's side reserved as margin
const MARGIN_FRACTION: f64 = 0.4;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WINDOW: Rgba<u8> = Rgba([173, 216, 230, 255]);

/// Generate the window-grid raster.
///
/// Fails when `canvas_side / units_per_side` leaves no room for a margin
/// after placing a rectangle.
pub fn tile_pattern(canvas_side: u32, units_per_side: u32) -> Result<RgbaImage> {
    if units_per_side == 0 || canvas_side / units_per_side <= 1 {
        return Err(Error::InvalidUnitSize(format!(
            "{canvas_side}px canvas leaves no margin for {units_per_side} units per side"
        )));
    }

    let unit = canvas_side / units_per_side;
    let rest = canvas_side % units_per_side;
    let window = (unit as f64 * (1.0 - MARGIN_FRACTION)) as u32;
    let margin = unit - window;

    let mut canvas = RgbaImage::from_pixel(canvas_side, canvas_side, BACKGROUND);

    let border = rest / 2 + margin / 2;
    draw_window(
        &mut canvas,
        border,
        border,
        units_per_side as i64 - 1,
        window,
        margin,
    );

    Ok(canvas)
}

/// Place one rectangle, then recurse to the three neighbours
fn draw_window(canvas: &mut RgbaImage, x: u32, y: u32, depth: i64, window: u32, margin: u32) {
    if depth < 0 {
        return;
    }

    fill_rect(canvas, x, y, window);

    let step = window + margin;
    draw_window(canvas, x, y + step, depth - 1, window, margin);
    draw_window(canvas, x + step, y, depth - 1, window, margin);
    draw_window(canvas, x + step, y + step, depth - 1, window, margin);
}

fn fill_rect(canvas: &mut RgbaImage, x: u32, y: u32, side: u32) {
    for dy in 0..side {
        for dx in 0..side {
            canvas.put_pixel(x + dx, y + dy, WINDOW);
        }
    }
}
