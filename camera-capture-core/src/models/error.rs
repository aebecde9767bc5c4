use thiserror::Error;

use super::camera_models::CameraPosition;

/// Errors that can occur while controlling the camera.
///
/// Configuration errors (`DeviceUnavailable`, `ConfigurationMissing`) are
/// returned synchronously from open/reconfiguration calls and always leave
/// the controller closed and inert. `CaptureFailed` is reported
/// asynchronously on the delegate's error channel, with the controller
/// recovered to its pre-capture state. `InvalidStateTransition` is a silent
/// no-op for advisory commands (flash, zoom, focus) and a delegate error for
/// terminal ones (take photo, start recording).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CameraError {
    #[error("no capture device available for the {0:?} position")]
    DeviceUnavailable(CameraPosition),

    #[error("no session preset registered for {0}")]
    ConfigurationMissing(String),

    #[error("capture failed: {0}")]
    CaptureFailed(String),

    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),
}
