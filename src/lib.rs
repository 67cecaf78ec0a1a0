//! Hyperview - 4D wireframe visualizer
//!
//! Library surface of the host application: configuration, scene setup,
//! and the window/render/simulation systems driven by `main`.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
