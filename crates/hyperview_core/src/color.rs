//! RGBA color for drawable primitives

use serde::{Deserialize, Serialize};

/// An RGBA color (each component 0.0-1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Color components as RGBA
    pub rgba: [f32; 4],
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Create a new color with the given RGBA components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    /// Create an opaque color with the given RGB components
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Black color
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// White color
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Gray color
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);

    /// Red color
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Green color
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);

    /// Blue color
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
}
