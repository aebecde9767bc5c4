use std::path::Path;
use std::sync::Arc;

use crate::models::camera_models::{
    CameraPosition, CaptureMode, FlashMode, PreviewGeometry, ViewPoint,
};
use crate::models::error::CameraError;
use crate::traits::preview_sink::PreviewSink;

/// Object-safe command surface of the camera controller.
///
/// UI layers hold an `Arc<dyn CameraControl>` and stay ignorant of the
/// concrete hardware type behind it. Reconfiguration commands are accepted
/// synchronously but may complete asynchronously; callers must not assume
/// the new configuration is active the moment the call returns.
pub trait CameraControl: Send + Sync {
    fn open_camera(&self) -> Result<(), CameraError>;

    /// The universal abort: tears down whatever exists, safe at any time,
    /// idempotent when already closed.
    fn close_camera(&self);

    /// Cycle the flash mode Auto → Off → On → Auto.
    fn change_flash_mode(&self);

    /// Swap front/back. Stops an active recording first, never the other
    /// way around.
    fn rotate_camera_position(&self) -> Result<(), CameraError>;

    /// Toggle still/video. Stops an active recording first.
    fn toggle_camera_mode(&self) -> Result<(), CameraError>;

    /// Map a tap on a preview surface to a point-of-interest focus request.
    fn set_focus_point(&self, point: ViewPoint, geometry: PreviewGeometry);

    /// Clamped into `[1.0, max_zoom_scale]`; never errors.
    fn set_zoom_scale(&self, scale: f32);

    /// Still mode shutter. Failures surface on the delegate error channel.
    fn take_photo(&self);

    /// Video mode shutter: starts when idle, stops when recording.
    fn toggle_video_recording(&self);

    /// Delete a previously delivered temp movie file. A missing file is
    /// logged, never surfaced.
    fn remove_temp_movie_file(&self, path: &Path);

    fn add_preview_view(&self, sink: Arc<dyn PreviewSink>);

    fn remove_preview_view(&self, sink: &Arc<dyn PreviewSink>);

    fn is_camera_opened(&self) -> bool;

    fn is_recording(&self) -> bool;

    fn position(&self) -> CameraPosition;

    fn capture_mode(&self) -> CaptureMode;

    fn flash_mode(&self) -> FlashMode;

    fn zoom_scale(&self) -> f32;
}
