//! Core types for the Hyperview visualizer
//!
//! This crate provides everything between raw input deltas and 2D screen
//! primitives:
//!
//! - [`Color`] - RGBA color for drawable primitives
//! - [`Point`], [`Line`], [`Primitive`] - drawable 4D primitives
//! - [`Camera`] - position plus an orthonormal 4D frame, with incremental
//!   translation and plane rotation
//! - [`InputDelta`] - per-frame camera input as a plain value
//! - [`Scene`] - a camera plus an ordered collection of primitives
//! - [`render_frame`] - projects a scene into [`ScreenPrimitive`] values
//!   for the host to paint

mod color;
mod primitive;
mod camera;
mod scene;
mod projection;

pub use color::Color;
pub use primitive::{Line, Point, Primitive};
pub use camera::{Axis, Camera, CameraError, CameraPlane, InputDelta};
pub use scene::{Scene, SceneError};
pub use projection::{project, render_frame, to_view_space, ScreenPrimitive, POINT_HALF_SIZE};

// Re-export commonly used types from hyperview_math for convenience
pub use hyperview_math::{Hypercube, Mat4, RotationPlane, Vec4};
