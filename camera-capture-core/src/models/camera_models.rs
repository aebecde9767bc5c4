use serde::{Deserialize, Serialize};

/// Physical sensor position on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraPosition {
    Front,
    Back,
}

impl CameraPosition {
    /// The opposite position, used by the front/back swap command.
    pub fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Flash mode, cycled Auto → Off → On → Auto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashMode {
    Auto,
    Off,
    On,
}

impl FlashMode {
    /// The next mode in the fixed cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Auto => Self::Off,
            Self::Off => Self::On,
            Self::On => Self::Auto,
        }
    }
}

/// Which shutter action is active: still photos or movie recording.
///
/// Toggling the mode reconfigures the session to the preset family for the
/// new mode even when the position is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    Still,
    Video,
}

impl CaptureMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Still => Self::Video,
            Self::Video => Self::Still,
        }
    }
}

/// Physical device orientation as reported by the orientation sensor.
///
/// `Unknown` is what a sensor reports before its first reading (or while the
/// device is face up/down); orientation correction treats it as `Portrait`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceOrientation {
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

/// A tightly packed RGBA8 pixel buffer.
///
/// Used for live preview frames, silent-shutter snapshots, and
/// full-resolution stills. `pixels.len() == width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }

    /// The RGBA bytes of the pixel at (x, y). Row-major, origin top-left.
    pub fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }
}

/// A point in the pixel coordinate space of a preview surface,
/// origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPoint {
    pub x: f32,
    pub y: f32,
}

/// A normalized point of interest in the device's focus coordinate space,
/// both axes in `[0, 1]`, origin at the sensor's top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPoint {
    pub x: f32,
    pub y: f32,
}

/// How a preview surface scales the video stream into its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFill {
    /// Letterbox: the whole stream is visible, possibly with bars.
    AspectFit,
    /// Crop: the stream covers the surface, possibly cut off at the edges.
    AspectFill,
}

/// Geometry of a preview surface, needed to map a tap back onto the sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGeometry {
    /// Surface size in the same units as the tapped [`ViewPoint`].
    pub width: f32,
    pub height: f32,
    /// Aspect ratio (width / height) of the displayed, orientation-corrected
    /// stream. A non-positive value means "assume it matches the surface".
    pub video_aspect: f32,
    pub fill: PreviewFill,
}

/// Settings handed to the hardware for a single full-resolution still.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StillCaptureSettings {
    /// JPEG encode quality in `(0, 1]`.
    pub jpeg_quality: f32,
}
