//! Camera controller: keyboard state -> camera input deltas
//!
//! Controls:
//! - W/S: forward/backward
//! - A/D: left/right strafe
//! - Space/Shift: up/down
//! - Q/E: ana/kata movement (W axis)
//! - Left/Right arrows: rotation in the XW plane
//! - Up/Down arrows: rotation in the YW plane
//! - Comma/Period: rotation in the ZW plane
//! - Bracket left/right: roll in the XY plane
//!
//! The controller only tracks which keys are down; each frame the host
//! asks for an [`InputDelta`] of per-second rates and feeds it to
//! `Camera::apply_input` together with the frame's elapsed time.
//!
//! [`InputDelta`]: hyperview_core::InputDelta

use hyperview_core::InputDelta;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks pressed keys and converts them to camera input rates
pub struct CameraController {
    // Movement state
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    ana: bool,  // Q - move toward +W
    kata: bool, // E - move toward -W

    // Rotation state
    rot_xw_pos: bool,
    rot_xw_neg: bool,
    rot_yw_pos: bool,
    rot_yw_neg: bool,
    rot_zw_pos: bool,
    rot_zw_neg: bool,
    rot_xy_pos: bool,
    rot_xy_neg: bool,

    // Configuration
    pub move_speed: f32,
    pub w_move_speed: f32,
    pub rotate_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
            ana: false,
            kata: false,

            rot_xw_pos: false,
            rot_xw_neg: false,
            rot_yw_pos: false,
            rot_yw_neg: false,
            rot_zw_pos: false,
            rot_zw_neg: false,
            rot_xy_pos: false,
            rot_xy_neg: false,

            move_speed: 200.0,
            w_move_speed: 200.0,
            rotate_speed: 1.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one the controller handles.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::KeyQ => { self.ana = pressed; true }
            KeyCode::KeyE => { self.kata = pressed; true }
            KeyCode::Space => { self.up = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => { self.down = pressed; true }

            KeyCode::ArrowRight => { self.rot_xw_pos = pressed; true }
            KeyCode::ArrowLeft => { self.rot_xw_neg = pressed; true }
            KeyCode::ArrowUp => { self.rot_yw_pos = pressed; true }
            KeyCode::ArrowDown => { self.rot_yw_neg = pressed; true }
            KeyCode::Period => { self.rot_zw_pos = pressed; true }
            KeyCode::Comma => { self.rot_zw_neg = pressed; true }
            KeyCode::BracketRight => { self.rot_xy_pos = pressed; true }
            KeyCode::BracketLeft => { self.rot_xy_neg = pressed; true }

            _ => false,
        }
    }

    /// The current input as per-second rates
    pub fn input_delta(&self) -> InputDelta {
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;

        InputDelta {
            move_forward: axis(self.forward, self.backward) * self.move_speed,
            move_right: axis(self.right, self.left) * self.move_speed,
            move_up: axis(self.up, self.down) * self.move_speed,
            move_w: axis(self.ana, self.kata) * self.w_move_speed,
            rotate_xw: axis(self.rot_xw_pos, self.rot_xw_neg) * self.rotate_speed,
            rotate_yw: axis(self.rot_yw_pos, self.rot_yw_neg) * self.rotate_speed,
            rotate_zw: axis(self.rot_zw_pos, self.rot_zw_neg) * self.rotate_speed,
            rotate_xy: axis(self.rot_xy_pos, self.rot_xy_neg) * self.rotate_speed,
        }
    }

    /// Check if any movement or rotation key is pressed
    pub fn is_moving(&self) -> bool {
        !self.input_delta().is_zero()
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set W-axis movement speed
    pub fn with_w_move_speed(mut self, speed: f32) -> Self {
        self.w_move_speed = speed;
        self
    }

    /// Builder: set rotation speed (radians/s)
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_controller_is_zero() {
        let controller = CameraController::new();
        assert!(controller.input_delta().is_zero());
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_forward_key_produces_forward_rate() {
        let mut controller = CameraController::new().with_move_speed(3.0);
        assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));

        let delta = controller.input_delta();
        assert_eq!(delta.move_forward, 3.0);
        assert_eq!(delta.move_right, 0.0);
        assert!(controller.is_moving());
    }

    #[test]
    fn test_release_returns_to_zero() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(controller.input_delta().is_zero());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.input_delta().move_right, 0.0);
    }

    #[test]
    fn test_rotation_keys() {
        let mut controller = CameraController::new().with_rotate_speed(2.0);
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_keyboard(KeyCode::Period, ElementState::Pressed);

        let delta = controller.input_delta();
        assert_eq!(delta.rotate_xw, -2.0);
        assert_eq!(delta.rotate_zw, 2.0);
        assert_eq!(delta.rotate_yw, 0.0);
    }

    #[test]
    fn test_w_axis_keys() {
        let mut controller = CameraController::new().with_w_move_speed(5.0);
        controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed);
        assert_eq!(controller.input_delta().move_w, 5.0);

        controller.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert_eq!(controller.input_delta().move_w, 0.0);
    }

    #[test]
    fn test_unhandled_keys_ignored() {
        let mut controller = CameraController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyZ, ElementState::Pressed));
        assert!(controller.input_delta().is_zero());
    }
}
