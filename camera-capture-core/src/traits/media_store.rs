use crate::models::capture_result::CapturedImage;
use crate::models::error::CameraError;

/// External persistence collaborator ("save to camera roll").
///
/// Invoked only after the delegate has received the image; a store failure
/// is logged by the controller and never affects delivery.
pub trait MediaStore: Send + Sync {
    fn save_image(&self, image: &CapturedImage) -> Result<(), CameraError>;
}
