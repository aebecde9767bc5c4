use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::camera_models::{
    CameraPosition, FlashMode, FocusPoint, Frame, StillCaptureSettings,
};
use crate::models::error::CameraError;
use crate::traits::preview_sink::PreviewSink;

/// Callback invoked when a stopped movie recording finishes finalizing its
/// container. Finalization may outlive the stop call; the callback fires at
/// most once, possibly synchronously from inside the stop, possibly later
/// from an encoder thread. It must not call back into the controller.
pub type MovieFinalizedCallback =
    Box<dyn FnOnce(Result<PathBuf, CameraError>) + Send + 'static>;

/// Callback invoked when the device starts or stops adjusting focus.
///
/// Fires on a hardware thread; the controller relays the transitions
/// verbatim to its delegate without synthesizing any of its own.
pub type FocusActivityCallback = Arc<dyn Fn(bool) + Send + Sync + 'static>;

/// Interface for platform capture hardware: discovers the physical device
/// backing a sensor position.
///
/// Implemented by platform backends (AVFoundation, Camera2, V4L2, ...).
/// Returns `None` when no device exists for the position, e.g. a machine
/// without a front camera.
pub trait CameraHardware: Send + Sync {
    fn device_for(&self, position: CameraPosition) -> Option<Box<dyn CameraDevice>>;
}

/// A bound physical capture device.
///
/// The controller is the only writer: every call is made from its session
/// context, so implementations never see two configuration calls interleave.
/// `capture_still` and `snapshot_preview_frame` block until the frame is
/// ready; the controller invokes them from a capture worker, never a UI
/// thread.
pub trait CameraDevice: Send {
    fn id(&self) -> String;

    fn position(&self) -> CameraPosition;

    /// Whether this device has a flash unit. Front devices typically
    /// report false.
    fn has_flash(&self) -> bool;

    /// Upper zoom bound of this device; the lower bound is always 1.0.
    fn max_zoom_scale(&self) -> f32;

    /// Reconfigure the capture pipeline to a named resolution/quality
    /// preset.
    fn apply_preset(&mut self, preset: &str) -> Result<(), CameraError>;

    fn set_flash_mode(&mut self, mode: FlashMode) -> Result<(), CameraError>;

    /// Whether a still taken right now under `mode` would fire the flash.
    /// `Auto` consults the device's light metering.
    fn flash_should_fire(&self, mode: FlashMode) -> bool;

    fn set_zoom_scale(&mut self, scale: f32) -> Result<(), CameraError>;

    /// Request a point-of-interest focus lock. The device reports the
    /// resulting adjusting-focus transitions through the activity callback.
    fn focus_at_point(&mut self, point: FocusPoint) -> Result<(), CameraError>;

    fn set_focus_activity_callback(&mut self, callback: FocusActivityCallback);

    /// Replace the set of preview sinks receiving the live stream. Sinks
    /// already in the set must keep rendering uninterrupted.
    fn set_preview_sinks(&mut self, sinks: Vec<Arc<dyn PreviewSink>>);

    fn start_running(&mut self) -> Result<(), CameraError>;

    fn stop_running(&mut self);

    /// Capture a full-resolution still through the dedicated pipeline.
    /// Blocks until the frame is available.
    fn capture_still(&mut self, settings: &StillCaptureSettings) -> Result<Frame, CameraError>;

    /// Grab the most recent live preview buffer: the silent shutter path.
    /// Preview resolution, no shutter sound.
    fn snapshot_preview_frame(&mut self) -> Result<Frame, CameraError>;

    /// Start encoding a movie to `output`.
    fn start_movie_recording(&mut self, output: &Path) -> Result<(), CameraError>;

    /// Stop the encoder. `on_finalized` fires once the container is
    /// finalized, with the finished file path or the encoder error.
    fn stop_movie_recording(&mut self, on_finalized: MovieFinalizedCallback);
}
