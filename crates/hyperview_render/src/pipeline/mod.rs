//! Painting pipeline components

pub mod types;
pub mod wire_pipeline;

pub use types::{Vertex2D, ViewportUniforms};
pub use wire_pipeline::WirePipeline;
