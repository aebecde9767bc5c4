//! Mapping from a tap on a preview surface to a device focus point.
//!
//! A preview surface shows the orientation-corrected stream scaled by an
//! aspect-fit or aspect-fill transform. To steer autofocus, a tapped point
//! has to be pushed back through that transform, un-mirrored for the front
//! camera, and rotated from display space into the sensor's native
//! coordinate space.

use crate::models::camera_models::{
    CameraPosition, DeviceOrientation, FocusPoint, PreviewFill, PreviewGeometry, ViewPoint,
};
use crate::processing::orientation::{transform_for, QuarterTurn};

/// Map a tapped view point into the normalized device focus space.
///
/// Points outside the displayed stream (letterbox bars) clamp to the nearest
/// stream edge; the result is always inside the unit square.
pub fn device_focus_point(
    point: ViewPoint,
    geometry: &PreviewGeometry,
    orientation: DeviceOrientation,
    position: CameraPosition,
) -> FocusPoint {
    let view_w = geometry.width.max(1.0);
    let view_h = geometry.height.max(1.0);
    let view_aspect = view_w / view_h;
    let video_aspect = if geometry.video_aspect > 0.0 {
        geometry.video_aspect
    } else {
        view_aspect
    };

    // Rect the stream occupies inside (or around) the surface.
    let (rect_w, rect_h) = match geometry.fill {
        PreviewFill::AspectFill => {
            if video_aspect > view_aspect {
                (view_h * video_aspect, view_h)
            } else {
                (view_w, view_w / video_aspect)
            }
        }
        PreviewFill::AspectFit => {
            if video_aspect > view_aspect {
                (view_w, view_w / video_aspect)
            } else {
                (view_h * video_aspect, view_h)
            }
        }
    };
    let rect_x = (view_w - rect_w) / 2.0;
    let rect_y = (view_h - rect_h) / 2.0;

    let mut x = ((point.x - rect_x) / rect_w).clamp(0.0, 1.0);
    let y = ((point.y - rect_y) / rect_h).clamp(0.0, 1.0);

    // The front preview is mirrored on screen; undo before un-rotating.
    if position == CameraPosition::Front {
        x = 1.0 - x;
    }

    // Undo the quarter-turn the display correction applied.
    let (sensor_x, sensor_y) = match transform_for(orientation, position).turn {
        QuarterTurn::None => (x, y),
        QuarterTurn::Cw90 => (y, 1.0 - x),
        QuarterTurn::Cw180 => (1.0 - x, 1.0 - y),
        QuarterTurn::Cw270 => (1.0 - y, x),
    };

    FocusPoint {
        x: sensor_x.clamp(0.0, 1.0),
        y: sensor_y.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn fit(width: f32, height: f32, video_aspect: f32) -> PreviewGeometry {
        PreviewGeometry { width, height, video_aspect, fill: PreviewFill::AspectFit }
    }

    fn fill(width: f32, height: f32, video_aspect: f32) -> PreviewGeometry {
        PreviewGeometry { width, height, video_aspect, fill: PreviewFill::AspectFill }
    }

    #[test]
    fn center_maps_to_center_everywhere() {
        for orientation in [
            DeviceOrientation::Portrait,
            DeviceOrientation::PortraitUpsideDown,
            DeviceOrientation::LandscapeLeft,
            DeviceOrientation::LandscapeRight,
        ] {
            for position in [CameraPosition::Front, CameraPosition::Back] {
                let focus = device_focus_point(
                    ViewPoint { x: 50.0, y: 100.0 },
                    &fill(100.0, 200.0, 1.5),
                    orientation,
                    position,
                );
                assert_relative_eq!(focus.x, 0.5, epsilon = 1e-6);
                assert_relative_eq!(focus.y, 0.5, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn portrait_top_center_maps_to_sensor_left_middle() {
        // Display is the sensor turned 90° CW, so the top of the portrait
        // view is the sensor's left edge.
        let focus = device_focus_point(
            ViewPoint { x: 50.0, y: 0.0 },
            &fill(100.0, 100.0, 1.0),
            DeviceOrientation::Portrait,
            CameraPosition::Back,
        );
        assert_relative_eq!(focus.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(focus.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn aspect_fill_accounts_for_cropped_edges() {
        // 2:1 stream filling a square surface: half a stream-width is
        // cropped off each side, so the surface's left edge sits a quarter
        // of the way into the stream.
        let focus = device_focus_point(
            ViewPoint { x: 0.0, y: 50.0 },
            &fill(100.0, 100.0, 2.0),
            DeviceOrientation::LandscapeLeft,
            CameraPosition::Back,
        );
        assert_relative_eq!(focus.x, 0.25, epsilon = 1e-6);
        assert_relative_eq!(focus.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn aspect_fit_clamps_letterbox_taps_to_stream_edge() {
        // 2:1 stream letterboxed in a square surface: bars above and below.
        let geometry = fit(100.0, 100.0, 2.0);

        let in_bar = device_focus_point(
            ViewPoint { x: 50.0, y: 10.0 },
            &geometry,
            DeviceOrientation::LandscapeLeft,
            CameraPosition::Back,
        );
        assert_relative_eq!(in_bar.y, 0.0, epsilon = 1e-6);

        let mid_stream = device_focus_point(
            ViewPoint { x: 50.0, y: 50.0 },
            &geometry,
            DeviceOrientation::LandscapeLeft,
            CameraPosition::Back,
        );
        assert_relative_eq!(mid_stream.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn front_camera_unmirrors_horizontally() {
        let focus = device_focus_point(
            ViewPoint { x: 0.0, y: 50.0 },
            &fill(100.0, 100.0, 1.0),
            DeviceOrientation::LandscapeRight,
            CameraPosition::Front,
        );
        // LandscapeRight front is an unrotated display, so the tap's x is
        // just flipped.
        assert_relative_eq!(focus.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(focus.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn result_stays_inside_unit_square() {
        let focus = device_focus_point(
            ViewPoint { x: -500.0, y: 9000.0 },
            &fit(100.0, 100.0, 1.5),
            DeviceOrientation::Portrait,
            CameraPosition::Front,
        );
        assert!((0.0..=1.0).contains(&focus.x));
        assert!((0.0..=1.0).contains(&focus.y));
    }
}
