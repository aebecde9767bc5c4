use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::camera_models::{CameraPosition, CaptureMode, DeviceOrientation, Frame};

/// Metadata attached to every delivered artifact.
///
/// Serializable for JSON export to UI or backend layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureMetadata {
    pub id: String,
    pub position: CameraPosition,
    pub capture_mode: CaptureMode,
    /// Device orientation sampled at capture time.
    pub orientation: DeviceOrientation,
    /// Session preset the capture pipeline was configured with.
    pub preset: String,
    pub captured_at: String,
}

impl CaptureMetadata {
    pub fn new(
        position: CameraPosition,
        capture_mode: CaptureMode,
        orientation: DeviceOrientation,
        preset: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            position,
            capture_mode,
            orientation,
            preset,
            captured_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// An orientation-corrected still image, delivered to the delegate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub frame: Frame,
    pub metadata: CaptureMetadata,
}

/// A finalized movie container on disk, delivered to the delegate.
///
/// The file lives in temp storage; the receiver either persists it or hands
/// it back to `remove_temp_movie_file` for cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMovie {
    pub file_path: PathBuf,
    pub duration_secs: f64,
    pub metadata: CaptureMetadata,
}
