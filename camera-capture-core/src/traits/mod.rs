pub mod camera_control;
pub mod camera_hardware;
pub mod capture_delegate;
pub mod media_store;
pub mod orientation_sensor;
pub mod preview_sink;
