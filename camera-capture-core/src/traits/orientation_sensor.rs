use std::sync::Arc;

use crate::models::camera_models::DeviceOrientation;
use crate::models::error::CameraError;

/// Callback delivering orientation readings, invoked on a sensor thread.
pub type OrientationCallback = Arc<dyn Fn(DeviceOrientation) + Send + Sync + 'static>;

/// Platform orientation sensor (accelerometer) subscription.
///
/// Emits readings through the callback until stopped. `stop` is idempotent;
/// stopping a sensor that never started is a no-op.
pub trait OrientationSensor: Send {
    fn start(&mut self, callback: OrientationCallback) -> Result<(), CameraError>;

    fn stop(&mut self);
}
