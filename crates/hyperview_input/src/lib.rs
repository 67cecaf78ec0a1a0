//! 4D Input Handling
//!
//! This crate turns raw keyboard state into per-frame [`InputDelta`]
//! values for the 4D camera.
//!
//! [`InputDelta`]: hyperview_core::InputDelta

mod camera_controller;

pub use camera_controller::CameraController;
