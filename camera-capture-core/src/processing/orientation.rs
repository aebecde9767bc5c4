//! Orientation correction for captured frames.
//!
//! Sensors deliver buffers in their mounting orientation (landscape, top row
//! toward the device's left edge when held upright-landscape). Correction
//! rotates/mirrors a buffer so its visual orientation matches the physical
//! device orientation at capture time.

use crate::models::camera_models::{CameraPosition, DeviceOrientation, Frame};

/// A quarter-turn rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarterTurn {
    None,
    Cw90,
    Cw180,
    Cw270,
}

/// The correction applied to a raw sensor buffer: rotate, then mirror
/// horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTransform {
    pub turn: QuarterTurn,
    pub mirrored: bool,
}

/// The correction for a frame captured under `orientation` by the sensor at
/// `position`.
///
/// Convention: the back sensor's native buffer is upright in LandscapeLeft.
/// The front sensor faces the user, so its landscape turns are swapped and
/// the result is mirrored to match what the preview showed.
/// `Unknown` corrects as `Portrait`.
pub fn transform_for(orientation: DeviceOrientation, position: CameraPosition) -> ImageTransform {
    use DeviceOrientation::*;

    let turn = match (position, orientation) {
        (_, Portrait | Unknown) => QuarterTurn::Cw90,
        (_, PortraitUpsideDown) => QuarterTurn::Cw270,
        (CameraPosition::Back, LandscapeLeft) => QuarterTurn::None,
        (CameraPosition::Back, LandscapeRight) => QuarterTurn::Cw180,
        (CameraPosition::Front, LandscapeLeft) => QuarterTurn::Cw180,
        (CameraPosition::Front, LandscapeRight) => QuarterTurn::None,
    };

    ImageTransform {
        turn,
        mirrored: position == CameraPosition::Front,
    }
}

/// Apply a correction to an RGBA8 frame, producing a new frame.
pub fn correct_frame(frame: &Frame, transform: ImageTransform) -> Frame {
    let rotated = match transform.turn {
        QuarterTurn::None => frame.clone(),
        QuarterTurn::Cw90 => rotate_cw(frame),
        QuarterTurn::Cw180 => rotate_half(frame),
        QuarterTurn::Cw270 => rotate_ccw(frame),
    };
    if transform.mirrored {
        mirror_horizontal(&rotated)
    } else {
        rotated
    }
}

/// Rotate 90° clockwise: source (x, y) lands at (height - 1 - y, x).
pub fn rotate_cw(frame: &Frame) -> Frame {
    let (w, h) = (frame.width as usize, frame.height as usize);
    let mut pixels = vec![0u8; frame.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * 4;
            let dst = (x * h + (h - 1 - y)) * 4;
            pixels[dst..dst + 4].copy_from_slice(&frame.pixels[src..src + 4]);
        }
    }
    Frame::new(frame.height, frame.width, pixels)
}

/// Rotate 90° counterclockwise: source (x, y) lands at (y, width - 1 - x).
pub fn rotate_ccw(frame: &Frame) -> Frame {
    let (w, h) = (frame.width as usize, frame.height as usize);
    let mut pixels = vec![0u8; frame.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * 4;
            let dst = ((w - 1 - x) * h + y) * 4;
            pixels[dst..dst + 4].copy_from_slice(&frame.pixels[src..src + 4]);
        }
    }
    Frame::new(frame.height, frame.width, pixels)
}

/// Rotate 180°.
pub fn rotate_half(frame: &Frame) -> Frame {
    let (w, h) = (frame.width as usize, frame.height as usize);
    let mut pixels = vec![0u8; frame.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * 4;
            let dst = ((h - 1 - y) * w + (w - 1 - x)) * 4;
            pixels[dst..dst + 4].copy_from_slice(&frame.pixels[src..src + 4]);
        }
    }
    Frame::new(frame.width, frame.height, pixels)
}

/// Flip left/right.
pub fn mirror_horizontal(frame: &Frame) -> Frame {
    let (w, h) = (frame.width as usize, frame.height as usize);
    let mut pixels = vec![0u8; frame.pixels.len()];
    for y in 0..h {
        for x in 0..w {
            let src = (y * w + x) * 4;
            let dst = (y * w + (w - 1 - x)) * 4;
            pixels[dst..dst + 4].copy_from_slice(&frame.pixels[src..src + 4]);
        }
    }
    Frame::new(frame.width, frame.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x3 frame whose pixel at (x, y) is [x, y, 0, 255].
    fn coord_frame() -> Frame {
        let (w, h) = (2u32, 3u32);
        let mut pixels = Vec::new();
        for y in 0..h {
            for x in 0..w {
                pixels.extend_from_slice(&[x as u8, y as u8, 0, 255]);
            }
        }
        Frame::new(w, h, pixels)
    }

    #[test]
    fn rotate_cw_moves_corners() {
        let frame = coord_frame();
        let rotated = rotate_cw(&frame);

        assert_eq!(rotated.width, 3);
        assert_eq!(rotated.height, 2);
        // top-left (0,0) → top-right (h-1, 0)
        assert_eq!(rotated.rgba_at(2, 0), frame.rgba_at(0, 0));
        // bottom-left (0,2) → top-left
        assert_eq!(rotated.rgba_at(0, 0), frame.rgba_at(0, 2));
        // bottom-right (1,2) → bottom-left
        assert_eq!(rotated.rgba_at(0, 1), frame.rgba_at(1, 2));
    }

    #[test]
    fn rotate_ccw_moves_corners() {
        let frame = coord_frame();
        let rotated = rotate_ccw(&frame);

        assert_eq!(rotated.width, 3);
        assert_eq!(rotated.height, 2);
        // top-right (1,0) → top-left
        assert_eq!(rotated.rgba_at(0, 0), frame.rgba_at(1, 0));
        // top-left (0,0) → bottom-left
        assert_eq!(rotated.rgba_at(0, 1), frame.rgba_at(0, 0));
    }

    #[test]
    fn rotate_half_is_cw_twice() {
        let frame = coord_frame();
        assert_eq!(rotate_half(&frame), rotate_cw(&rotate_cw(&frame)));
    }

    #[test]
    fn ccw_undoes_cw() {
        let frame = coord_frame();
        assert_eq!(rotate_ccw(&rotate_cw(&frame)), frame);
    }

    #[test]
    fn mirror_flips_rows() {
        let frame = coord_frame();
        let mirrored = mirror_horizontal(&frame);

        assert_eq!(mirrored.rgba_at(0, 1), frame.rgba_at(1, 1));
        assert_eq!(mirrored.rgba_at(1, 1), frame.rgba_at(0, 1));
        assert_eq!(mirror_horizontal(&mirrored), frame);
    }

    #[test]
    fn back_camera_transform_table() {
        use DeviceOrientation::*;
        let back = CameraPosition::Back;

        assert_eq!(
            transform_for(Portrait, back),
            ImageTransform { turn: QuarterTurn::Cw90, mirrored: false }
        );
        assert_eq!(transform_for(Unknown, back).turn, QuarterTurn::Cw90);
        assert_eq!(transform_for(PortraitUpsideDown, back).turn, QuarterTurn::Cw270);
        assert_eq!(transform_for(LandscapeLeft, back).turn, QuarterTurn::None);
        assert_eq!(transform_for(LandscapeRight, back).turn, QuarterTurn::Cw180);
    }

    #[test]
    fn front_camera_is_mirrored_with_swapped_landscape() {
        use DeviceOrientation::*;
        let front = CameraPosition::Front;

        assert!(transform_for(Portrait, front).mirrored);
        assert_eq!(transform_for(LandscapeLeft, front).turn, QuarterTurn::Cw180);
        assert_eq!(transform_for(LandscapeRight, front).turn, QuarterTurn::None);
    }

    #[test]
    fn correct_frame_applies_turn_then_mirror() {
        let frame = coord_frame();
        let transform = ImageTransform { turn: QuarterTurn::Cw90, mirrored: true };

        let corrected = correct_frame(&frame, transform);

        assert_eq!(corrected, mirror_horizontal(&rotate_cw(&frame)));
    }

    #[test]
    fn landscape_left_back_is_identity() {
        let frame = coord_frame();
        let transform = transform_for(DeviceOrientation::LandscapeLeft, CameraPosition::Back);
        assert_eq!(correct_frame(&frame, transform), frame);
    }
}
