// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI demo: build a small synthetic dataset end to end.
//!
//! Generates a handful of footprints around a fixed center, extrudes
//! them, places the camera and writes the three procedural textures
//! (terrain, sky, wall pattern) as PNG files.
//!
//! Usage:
//!   osmscape-preview [--out <dir>] [--zoom <z>] [--seed <n>] [--units <n>]

use osmscape_geometry::{GeoCoordinate, MapBounds};
use osmscape_scene::{AreaKind, BuildingKind, Footprint, LanduseKind, SceneBuilder};
use osmscape_texture::{tile_pattern, ColorRamp, HeightField, Lcg64};
use rustc_hash::FxHashMap;
use std::env;
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut out_dir = PathBuf::from(".");
    let mut zoom: f64 = 10.0;
    let mut seed: Option<u64> = None;
    let mut units: u32 = 1;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                i += 1;
                out_dir = PathBuf::from(&args[i]);
            }
            "--zoom" => {
                i += 1;
                zoom = args[i].parse().expect("Invalid zoom value");
            }
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse().expect("Invalid seed value"));
            }
            "--units" => {
                i += 1;
                units = args[i].parse().expect("Invalid units value");
            }
            "--help" | "-h" => {
                println!(
                    "Usage: osmscape-preview [--out <dir>] [--zoom <z>] [--seed <n>] [--units <n>]"
                );
                return;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Synthetic dataset around Ghent (radians)
    let bounds = MapBounds::new(0.8905, 0.0645, 0.8915, 0.0655);
    let (nodes, footprints) = synthetic_dataset();

    let builder = SceneBuilder::new(bounds, zoom, &nodes);
    let scene = builder.build(&footprints);

    for area in &scene.areas {
        let walls = area
            .walls
            .as_ref()
            .map(|w| w.triangle_count())
            .unwrap_or(0);
        tracing::info!(
            kind = ?area.kind,
            surface_triangles = area.surface.triangle_count(),
            wall_triangles = walls,
            "built area"
        );
    }

    let regular = scene.combined_surface(AreaKind::Building(BuildingKind::Regular));
    tracing::info!(
        areas = scene.areas.len(),
        regular_roof_vertices = regular.vertex_count(),
        ground_triangles = scene.ground.triangle_count(),
        "scene assembled"
    );

    let camera = &scene.camera;
    println!(
        "camera: position ({:.1}, {:.1}, {:.1}) looking ({:.1}, {:.1}, {:.1}) fov {}",
        camera.position.x,
        camera.position.y,
        camera.position.z,
        camera.look_direction.x,
        camera.look_direction.y,
        camera.look_direction.z,
        camera.field_of_view_deg
    );

    write_textures(&out_dir, seed, units);
}

/// A square block, an L-shaped church, an apartment tower and a grass
/// parcel, all inside the demo bounds
fn synthetic_dataset() -> (FxHashMap<i64, GeoCoordinate>, Vec<Footprint>) {
    let mut nodes = FxHashMap::default();
    let mut add = |id: i64, lat: f64, lon: f64| {
        nodes.insert(id, GeoCoordinate::new(lat, lon));
    };

    // Square block
    add(1, 0.89080, 0.06480);
    add(2, 0.89080, 0.06500);
    add(3, 0.89100, 0.06500);
    add(4, 0.89100, 0.06480);
    // L-shaped church
    add(10, 0.89110, 0.06510);
    add(11, 0.89110, 0.06530);
    add(12, 0.89120, 0.06530);
    add(13, 0.89120, 0.06520);
    add(14, 0.89130, 0.06520);
    add(15, 0.89130, 0.06510);
    // Apartment tower
    add(20, 0.89090, 0.06520);
    add(21, 0.89090, 0.06526);
    add(22, 0.89096, 0.06526);
    add(23, 0.89096, 0.06520);
    // Grass parcel
    add(30, 0.89060, 0.06460);
    add(31, 0.89060, 0.06540);
    add(32, 0.89140, 0.06540);
    add(33, 0.89140, 0.06460);

    let footprints = vec![
        Footprint::building(vec![1, 2, 3, 4, 1], BuildingKind::Regular),
        Footprint::building(vec![10, 11, 12, 13, 14, 15, 10], BuildingKind::Church),
        Footprint::apartment(vec![20, 21, 22, 23, 20], 8),
        Footprint::landuse(vec![30, 31, 32, 33, 30], LanduseKind::Grass),
    ];

    (nodes, footprints)
}

fn write_textures(out_dir: &PathBuf, seed: Option<u64>, units: u32) {
    let mut rng = match seed {
        Some(seed) => Lcg64::new(seed),
        None => Lcg64::from_entropy(),
    };

    let terrain = HeightField::generate(1.0, 256.0, 256, &mut rng)
        .expect("terrain generation failed")
        .to_raster(ColorRamp::GreenBiased);
    let sky = HeightField::generate(0.7, 256.0, 256, &mut rng)
        .expect("sky generation failed")
        .to_raster(ColorRamp::BlueBiased);
    let walls = tile_pattern(100, units).expect("wall pattern generation failed");

    for (name, raster) in [("terrain.png", terrain), ("sky.png", sky), ("walls.png", walls)] {
        let path = out_dir.join(name);
        raster.save(&path).expect("failed to write PNG");
        tracing::info!(path = %path.display(), "texture written");
    }
}
