use crate::models::camera_models::{CameraPosition, CaptureMode};
use crate::models::config::SessionPresets;
use crate::models::error::CameraError;

/// Pure mapping from (position, capture mode, silent flag) to the session
/// preset the capture pipeline must be configured with.
///
/// No side effects and no mutable state; the controller consults it before
/// every session reconfiguration. A missing mapping surfaces as
/// `ConfigurationMissing` at open/reconfiguration time, never during
/// capture.
#[derive(Debug, Clone)]
pub struct SessionPresetPolicy {
    presets: SessionPresets,
}

impl SessionPresetPolicy {
    pub fn new(presets: SessionPresets) -> Self {
        Self { presets }
    }

    /// Resolve the preset for a combination. The silent flag only
    /// distinguishes still presets; video ignores it.
    pub fn resolve(
        &self,
        position: CameraPosition,
        mode: CaptureMode,
        silent: bool,
    ) -> Result<String, CameraError> {
        self.presets
            .get(position, mode, silent)
            .map(str::to_owned)
            .ok_or_else(|| {
                CameraError::ConfigurationMissing(
                    SessionPresets::combination_name(position, mode, silent).to_owned(),
                )
            })
    }
}
