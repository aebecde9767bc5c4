use crate::models::camera_models::{CaptureMode, DeviceOrientation, FlashMode};
use crate::models::capture_result::{CapturedImage, RecordedMovie};
use crate::models::error::CameraError;

/// Event delegate for camera controller notifications.
///
/// Every method has a default no-op body so implementers opt into only the
/// events they need. Each event fires at most once per event instance, and
/// may arrive from either the session context or a capture/timer thread —
/// implementations marshal to a UI thread themselves if they need to.
pub trait CameraEventDelegate: Send + Sync {
    /// An orientation-corrected still image is ready.
    fn on_image_captured(&self, _image: &CapturedImage) {}

    /// A movie container finished finalizing in temp storage.
    fn on_movie_recorded(&self, _movie: &RecordedMovie) {}

    /// The device started or stopped adjusting focus. Relayed verbatim from
    /// the hardware.
    fn on_focus_adjusting_changed(&self, _device_id: &str, _adjusting: bool) {}

    fn on_orientation_changed(&self, _orientation: DeviceOrientation) {}

    /// Fires just before the encoder starts.
    fn on_recording_will_start(&self) {}

    /// Periodic recording progress. `remaining_secs` is `None` for an
    /// unbounded recording.
    fn on_recording_progress(&self, _recorded_secs: f64, _remaining_secs: Option<f64>) {}

    /// The flash mode cycled. Fires even when the active device has no
    /// flash, so a flash button stays consistent with the stored mode.
    fn on_flash_mode_changed(&self, _mode: FlashMode, _icon_name: &str) {}

    /// The capture mode toggled. `shutter_icon` is the accepted icon name,
    /// or `None` when the implementation vetoed the proposal.
    fn on_capture_mode_changed(&self, _mode: CaptureMode, _shutter_icon: Option<&str>) {}

    /// Asked before a shutter icon change; return false to veto the icon
    /// (the mode change itself is not affected).
    fn should_change_shutter_icon(&self, _proposed: &str) -> bool {
        true
    }

    /// Asynchronous failure channel. Every async failure path ends here,
    /// never in a panic across a thread boundary.
    fn on_error(&self, _error: &CameraError) {}
}
