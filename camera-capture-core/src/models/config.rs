use serde::{Deserialize, Serialize};

use super::camera_models::{CameraPosition, CaptureMode, FlashMode};

/// One session preset string per reachable
/// (position, capture mode, silent flag) combination.
///
/// The silent flag is only meaningful for still capture, so there are six
/// effective entries. All are optional here; a missing entry for a resolved
/// combination fails session configuration with
/// [`CameraError::ConfigurationMissing`](super::error::CameraError) at open
/// or reconfiguration time, never later during capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPresets {
    pub still_back: Option<String>,
    pub still_front: Option<String>,
    pub still_back_silent: Option<String>,
    pub still_front_silent: Option<String>,
    pub video_back: Option<String>,
    pub video_front: Option<String>,
}

impl SessionPresets {
    /// The preset for a combination, if one is registered.
    pub fn get(
        &self,
        position: CameraPosition,
        mode: CaptureMode,
        silent: bool,
    ) -> Option<&str> {
        let entry = match (mode, position, silent) {
            (CaptureMode::Still, CameraPosition::Back, false) => &self.still_back,
            (CaptureMode::Still, CameraPosition::Front, false) => &self.still_front,
            (CaptureMode::Still, CameraPosition::Back, true) => &self.still_back_silent,
            (CaptureMode::Still, CameraPosition::Front, true) => &self.still_front_silent,
            (CaptureMode::Video, CameraPosition::Back, _) => &self.video_back,
            (CaptureMode::Video, CameraPosition::Front, _) => &self.video_front,
        };
        entry.as_deref()
    }

    /// Human-readable name of a combination, used in error messages.
    pub fn combination_name(
        position: CameraPosition,
        mode: CaptureMode,
        silent: bool,
    ) -> &'static str {
        match (mode, position, silent) {
            (CaptureMode::Still, CameraPosition::Back, false) => "still/back",
            (CaptureMode::Still, CameraPosition::Front, false) => "still/front",
            (CaptureMode::Still, CameraPosition::Back, true) => "still/back/silent",
            (CaptureMode::Still, CameraPosition::Front, true) => "still/front/silent",
            (CaptureMode::Video, CameraPosition::Back, _) => "video/back",
            (CaptureMode::Video, CameraPosition::Front, _) => "video/front",
        }
    }

    /// The same preset for every combination. Convenient for hardware whose
    /// preset identifiers do not vary by position.
    pub fn uniform(preset: &str) -> Self {
        Self {
            still_back: Some(preset.to_owned()),
            still_front: Some(preset.to_owned()),
            still_back_silent: Some(preset.to_owned()),
            still_front_silent: Some(preset.to_owned()),
            video_back: Some(preset.to_owned()),
            video_front: Some(preset.to_owned()),
        }
    }
}

/// UI icon names for the three flash modes, reported alongside flash mode
/// change events so a flash button can re-render itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashIconSet {
    pub auto: String,
    pub off: String,
    pub on: String,
}

impl FlashIconSet {
    pub fn for_mode(&self, mode: FlashMode) -> &str {
        match mode {
            FlashMode::Auto => &self.auto,
            FlashMode::Off => &self.off,
            FlashMode::On => &self.on,
        }
    }
}

impl Default for FlashIconSet {
    fn default() -> Self {
        Self {
            auto: "flash_auto".into(),
            off: "flash_off".into(),
            on: "flash_on".into(),
        }
    }
}

/// UI icon names for the shutter button, per capture mode. The delegate may
/// veto a proposed icon change when the mode toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShutterIconSet {
    pub still: String,
    pub video: String,
}

impl ShutterIconSet {
    pub fn for_mode(&self, mode: CaptureMode) -> &str {
        match mode {
            CaptureMode::Still => &self.still,
            CaptureMode::Video => &self.video,
        }
    }
}

impl Default for ShutterIconSet {
    fn default() -> Self {
        Self {
            still: "shutter_still".into(),
            video: "shutter_video".into(),
        }
    }
}

/// Construction-time configuration for a camera controller.
///
/// Passed as an explicit value to the controller constructor and replaceable
/// only while the camera is closed. Numeric fields are normalized (clamped)
/// rather than rejected, the same policy the controller applies to zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfiguration {
    pub presets: SessionPresets,
    pub initial_position: CameraPosition,
    pub initial_capture_mode: CaptureMode,
    pub default_flash_mode: FlashMode,

    /// Capture stills from the live preview buffer instead of the dedicated
    /// full-resolution pipeline: lower resolution, no shutter sound.
    pub silent_shutter_mode: bool,

    /// Pause between firing the flash and triggering the snapshot, so
    /// exposure can stabilize.
    pub delay_time_for_flash_secs: f64,

    /// JPEG encode quality in `(0, 1]`.
    pub jpeg_quality: f32,

    /// Hand captured images to the media store after delegate delivery.
    pub auto_save_to_cameraroll: bool,

    /// Recording ceiling in seconds; a value `<= 0` means unbounded
    /// (no auto-stop).
    pub video_duration_secs: f64,

    pub flash_icons: FlashIconSet,
    pub shutter_icons: ShutterIconSet,
}

impl CameraConfiguration {
    /// Clamp numeric fields into their valid ranges. Invalid values degrade
    /// to the nearest valid bound, they never error.
    pub fn normalized(mut self) -> Self {
        self.jpeg_quality = if self.jpeg_quality.is_finite() {
            self.jpeg_quality.clamp(0.05, 1.0)
        } else {
            0.9
        };
        self.delay_time_for_flash_secs = if self.delay_time_for_flash_secs.is_finite() {
            self.delay_time_for_flash_secs.max(0.0)
        } else {
            0.0
        };
        self
    }
}

impl Default for CameraConfiguration {
    fn default() -> Self {
        Self {
            presets: SessionPresets::default(),
            initial_position: CameraPosition::Back,
            initial_capture_mode: CaptureMode::Still,
            default_flash_mode: FlashMode::Auto,
            silent_shutter_mode: false,
            delay_time_for_flash_secs: 0.25,
            jpeg_quality: 0.9,
            auto_save_to_cameraroll: false,
            video_duration_secs: 0.0,
            flash_icons: FlashIconSet::default(),
            shutter_icons: ShutterIconSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_clamps_jpeg_quality() {
        let config = CameraConfiguration {
            jpeg_quality: 7.5,
            ..Default::default()
        };
        assert_eq!(config.normalized().jpeg_quality, 1.0);

        let config = CameraConfiguration {
            jpeg_quality: f32::NAN,
            ..Default::default()
        };
        assert_eq!(config.normalized().jpeg_quality, 0.9);
    }

    #[test]
    fn normalized_clamps_flash_delay() {
        let config = CameraConfiguration {
            delay_time_for_flash_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(config.normalized().delay_time_for_flash_secs, 0.0);
    }

    #[test]
    fn uniform_presets_cover_every_combination() {
        let presets = SessionPresets::uniform("hd1280");
        for position in [CameraPosition::Front, CameraPosition::Back] {
            for mode in [CaptureMode::Still, CaptureMode::Video] {
                for silent in [false, true] {
                    assert_eq!(presets.get(position, mode, silent), Some("hd1280"));
                }
            }
        }
    }

    #[test]
    fn video_presets_ignore_silent_flag() {
        let presets = SessionPresets {
            video_back: Some("video-hi".into()),
            ..Default::default()
        };
        assert_eq!(
            presets.get(CameraPosition::Back, CaptureMode::Video, true),
            Some("video-hi")
        );
    }
}
