// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera placement from the dataset bounds
//!
//! The camera sits 1.5x the projected bounding extent away from the
//! dataset center along the diagonal, lifted so the view comes in at a
//! configurable start angle, looking back at the center with Z up.

use nalgebra::{Point3, Vector3};
use osmscape_geometry::MapBounds;

/// Default elevation angle in degrees
pub const DEFAULT_START_ANGLE_DEG: f64 = 10.0;
/// Vertical field of view in degrees
pub const FIELD_OF_VIEW_DEG: f64 = 60.0;

/// A resolved perspective camera pose
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPlacement {
    pub position: Point3<f64>,
    pub look_direction: Vector3<f64>,
    pub up: Vector3<f64>,
    pub field_of_view_deg: f64,
}

/// Place the camera for a dataset.
///
/// Uses the same bounding-box projection as the footprint pipeline, so
/// the camera and the meshes agree on where the dataset center is.
pub fn place_camera(bounds: &MapBounds, zoom: f64, start_angle_deg: f64) -> CameraPlacement {
    let span = bounds.projected_span(zoom);
    let dx = 1.5 * span.x;
    let dy = 1.5 * span.y;

    let elevation = (dx * dx + dy * dy).sqrt() * start_angle_deg.to_radians().sin();

    CameraPlacement {
        position: Point3::new(-dx, -dy, elevation),
        look_direction: Vector3::new(dx, dy, -elevation),
        up: Vector3::z(),
        field_of_view_deg: FIELD_OF_VIEW_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bounds() -> MapBounds {
        MapBounds::new(0.8905, 0.0645, 0.8915, 0.0655)
    }

    #[test]
    fn test_camera_looks_back_at_center() {
        let camera = place_camera(&bounds(), 10.0, DEFAULT_START_ANGLE_DEG);

        // Looking from the position along the look direction lands on the
        // dataset center at z = 0
        let target = camera.position + camera.look_direction;
        assert_relative_eq!(target.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(target.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(target.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_elevation_follows_start_angle() {
        let b = bounds();
        let camera = place_camera(&b, 10.0, 10.0);

        let span = b.projected_span(10.0);
        let diagonal = ((1.5 * span.x).powi(2) + (1.5 * span.y).powi(2)).sqrt();
        assert_relative_eq!(
            camera.position.z,
            diagonal * 10f64.to_radians().sin(),
            epsilon = 1e-9
        );
        assert!(camera.position.z > 0.0);
    }

    #[test]
    fn test_up_and_fov() {
        let camera = place_camera(&bounds(), 10.0, DEFAULT_START_ANGLE_DEG);
        assert_eq!(camera.up, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(camera.field_of_view_deg, 60.0);
    }

    #[test]
    fn test_steeper_angle_raises_camera() {
        let low = place_camera(&bounds(), 10.0, 10.0);
        let high = place_camera(&bounds(), 10.0, 45.0);
        assert!(high.position.z > low.position.z);
        assert_eq!(low.position.xy(), high.position.xy());
    }
}
