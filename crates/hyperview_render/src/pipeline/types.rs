//! GPU-compatible data types for the 2D painting pipeline
//!
//! These types match the shader layouts exactly and derive Pod and
//! Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A 2D vertex with color, in viewport units (origin centered, y up)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in viewport units
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the 2D painting pass
/// Layout: 16 bytes (must match wire2d.wgsl Viewport)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewportUniforms {
    /// Half the viewport extent in each direction, in viewport units
    pub half_extents: [f32; 2],
    /// Padding to 16-byte alignment
    pub _padding: [f32; 2],
}

impl Default for ViewportUniforms {
    fn default() -> Self {
        Self {
            half_extents: [640.0, 360.0],
            _padding: [0.0; 2],
        }
    }
}

impl ViewportUniforms {
    /// Uniforms for a window of the given pixel size
    pub fn for_size(width: u32, height: u32) -> Self {
        Self {
            half_extents: [width.max(1) as f32 * 0.5, height.max(1) as f32 * 0.5],
            _padding: [0.0; 2],
        }
    }
}
