use crate::models::camera_models::Frame;

/// A surface that renders the live preview stream.
///
/// Sinks are registered with the controller and attached to whatever device
/// is currently bound; attaching a new sink never interrupts the ones
/// already rendering. Identity is by `Arc` pointer, which is how a sink is
/// later removed.
pub trait PreviewSink: Send + Sync {
    /// Called for every live frame, on a hardware thread. Keep it cheap.
    fn render_frame(&self, frame: &Frame);
}
