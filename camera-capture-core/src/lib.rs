//! # camera-capture-core
//!
//! Platform-agnostic camera control core.
//!
//! Presents one coherent device abstraction — "the camera" — that hides
//! sensor/session reconfiguration, orientation correction, flash
//! sequencing, zoom clamping, and still/video mode switching behind a small
//! synchronous command surface, while delivering captured artifacts and
//! recording progress asynchronously. Platform backends (AVFoundation,
//! Camera2, V4L2, ...) implement the `CameraHardware`/`CameraDevice` traits
//! and plug into the generic `CameraController`.
//!
//! ## Architecture
//!
//! ```text
//! camera-capture-core (this crate)
//! ├── traits/       ← CameraHardware, CameraDevice, CameraEventDelegate,
//! │                   CameraControl, PreviewSink, MediaStore,
//! │                   OrientationSensor
//! ├── models/       ← CameraError, session/recording state machines,
//! │                   CameraConfiguration, SessionPresets, Frame,
//! │                   CapturedImage, RecordedMovie
//! ├── processing/   ← orientation correction, focus-point mapping
//! ├── session/      ← CameraController (orchestrator), SessionPresetPolicy,
//! │                   RecordingTimer, OrientationSource
//! └── storage/      ← temp movie file naming and cleanup
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::camera_models::{
    CameraPosition, CaptureMode, DeviceOrientation, FlashMode, FocusPoint, Frame, PreviewFill,
    PreviewGeometry, StillCaptureSettings, ViewPoint,
};
pub use models::capture_result::{CaptureMetadata, CapturedImage, RecordedMovie};
pub use models::config::{CameraConfiguration, FlashIconSet, SessionPresets, ShutterIconSet};
pub use models::error::CameraError;
pub use models::state::{RecordingState, SessionOpenState};
pub use session::controller::CameraController;
pub use session::orientation_source::OrientationSource;
pub use session::preset_policy::SessionPresetPolicy;
pub use session::recording_timer::{RecordingTimer, RecordingTimerHandle, TimerTick};
pub use traits::camera_control::CameraControl;
pub use traits::camera_hardware::{
    CameraDevice, CameraHardware, FocusActivityCallback, MovieFinalizedCallback,
};
pub use traits::capture_delegate::CameraEventDelegate;
pub use traits::media_store::MediaStore;
pub use traits::orientation_sensor::{OrientationCallback, OrientationSensor};
pub use traits::preview_sink::PreviewSink;
