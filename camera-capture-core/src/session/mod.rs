pub mod controller;
pub mod orientation_source;
pub mod preset_policy;
pub mod recording_timer;
