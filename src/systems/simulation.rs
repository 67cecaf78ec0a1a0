//! Simulation system
//!
//! Runs one logical frame: compute the elapsed time, apply accumulated
//! input to the camera, then derive the frame's screen primitives. Camera
//! mutation and projection happen strictly in that order; projection never
//! mutates scene state.

use std::time::Instant;

use hyperview_core::{render_frame, Scene, ScreenPrimitive};
use hyperview_input::CameraController;

/// Manages the per-frame update/project alternation
pub struct SimulationSystem {
    last_frame: Instant,
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame: apply input, then project the scene
    pub fn update(
        &mut self,
        scene: &mut Scene,
        controller: &CameraController,
    ) -> Vec<ScreenPrimitive> {
        // Cap dt so the first frame (or a stall) cannot teleport the camera
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.25);
        self.last_frame = now;

        scene.camera_mut().apply_input(&controller.input_delta(), dt);

        render_frame(scene)
    }
}
