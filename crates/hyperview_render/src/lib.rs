//! 2D Painting Library
//!
//! This crate provides the wgpu-based painter for the screen primitives
//! the projection pipeline emits.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::WirePipeline`] - colored 2D squares and line segments
//!
//! Screen primitives arrive in viewport units with the origin at the
//! center of the window and y pointing up; the shader maps them to
//! normalized device coordinates.

pub mod context;
pub mod pipeline;

// Re-export core types for convenience
pub use hyperview_core::{render_frame, Camera, Primitive, Scene, ScreenPrimitive};
pub use hyperview_core::{Color, Vec4};
