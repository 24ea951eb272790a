//! Camera controller for FPS-style input handling
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Left/right strafe
//! - Shift: Sprint (speed boost while held)
//! - Mouse motion: free look while the cursor is captured or the left
//!   button is held

use quatcam_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Discrete movement directions understood by the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Step the position along `direction` for `dt` seconds of movement
    fn move_step(&mut self, direction: MoveDirection, dt: f32);
    /// Apply a look offset in cursor-delta units; positive `dx` yaws left,
    /// positive `dy` pitches up
    fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool);
    /// Change the movement speed in units per second
    fn set_move_speed(&mut self, speed: f32);
    fn position(&self) -> Vec3;
}

/// Camera controller for handling input
pub struct CameraController {
    // Movement state
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    sprint: bool,

    // Mouse state
    mouse_pressed: bool,
    pending_dx: f32,
    pending_dy: f32,

    // Configuration
    pub move_speed: f32,
    pub sprint_multiplier: f32,
    pub constrain_pitch: bool,
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
            sprint: false,

            mouse_pressed: false,
            pending_dx: 0.0,
            pending_dy: 0.0,

            move_speed: 0.5,
            sprint_multiplier: 2.0,
            constrain_pitch: true,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was consumed as a movement key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => { self.sprint = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_dx += delta_x as f32;
        self.pending_dy += delta_y as f32;
    }

    /// Update the camera based on accumulated input
    ///
    /// When `cursor_captured` is true, free look is enabled (no click
    /// required). Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, cursor_captured: bool) -> Vec3 {
        // Sprint doubles movement speed for exactly as long as Shift is held
        let speed = if self.sprint {
            self.move_speed * self.sprint_multiplier
        } else {
            self.move_speed
        };
        camera.set_move_speed(speed);

        // Apply movement for every held direction key
        if self.forward {
            camera.move_step(MoveDirection::Forward, dt);
        }
        if self.backward {
            camera.move_step(MoveDirection::Backward, dt);
        }
        if self.left {
            camera.move_step(MoveDirection::Left, dt);
        }
        if self.right {
            camera.move_step(MoveDirection::Right, dt);
        }

        // Apply rotation
        // Free look when cursor is captured, or when mouse button is pressed
        // Cursor deltas grow rightward/downward; the camera's yaw/pitch grow
        // leftward/upward, so both axes flip here
        if cursor_captured || self.mouse_pressed {
            camera.look(-self.pending_dx, -self.pending_dy, self.constrain_pitch);
        }

        // Reset pending mouse movement
        self.pending_dx = 0.0;
        self.pending_dy = 0.0;

        camera.position()
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set sprint speed multiplier
    pub fn with_sprint_multiplier(mut self, multiplier: f32) -> Self {
        self.sprint_multiplier = multiplier;
        self
    }

    /// Builder: enable or disable the pitch constraint
    pub fn with_constrain_pitch(mut self, constrain: bool) -> Self {
        self.constrain_pitch = constrain;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recording camera stub for controller tests
    #[derive(Default)]
    struct RecordingCamera {
        moves: Vec<(MoveDirection, f32)>,
        looks: Vec<(f32, f32, bool)>,
        speed: f32,
    }

    impl CameraControl for RecordingCamera {
        fn move_step(&mut self, direction: MoveDirection, dt: f32) {
            self.moves.push((direction, dt));
        }
        fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
            self.looks.push((dx, dy, constrain_pitch));
        }
        fn set_move_speed(&mut self, speed: f32) {
            self.speed = speed;
        }
        fn position(&self) -> Vec3 {
            Vec3::ZERO
        }
    }

    #[test]
    fn test_movement_keys_consumed() {
        let mut controller = CameraController::new();
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            assert!(controller.process_keyboard(key, ElementState::Pressed));
        }
        assert!(controller.is_moving());
        assert!(!controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
    }

    #[test]
    fn test_key_release_stops_movement() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_update_applies_held_directions() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);

        let mut camera = RecordingCamera::default();
        controller.update(&mut camera, 0.016, true);

        assert_eq!(
            camera.moves,
            vec![(MoveDirection::Forward, 0.016), (MoveDirection::Right, 0.016)]
        );
    }

    #[test]
    fn test_mouse_deltas_flushed_once() {
        let mut controller = CameraController::new();
        controller.process_mouse_motion(3.0, -2.0);
        controller.process_mouse_motion(1.0, 0.5);

        let mut camera = RecordingCamera::default();
        controller.update(&mut camera, 0.016, true);
        // Deltas accumulate, flip sign, and are consumed by the update
        assert_eq!(camera.looks, vec![(-4.0, 1.5, true)]);

        controller.update(&mut camera, 0.016, true);
        assert_eq!(camera.looks.len(), 2);
        assert_eq!(camera.looks[1], (0.0, 0.0, true));
    }

    #[test]
    fn test_no_look_without_capture_or_click() {
        let mut controller = CameraController::new();
        controller.process_mouse_motion(10.0, 10.0);

        let mut camera = RecordingCamera::default();
        controller.update(&mut camera, 0.016, false);
        assert!(camera.looks.is_empty());

        // Holding the left button enables look without capture
        controller.process_mouse_motion(10.0, 10.0);
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.update(&mut camera, 0.016, false);
        assert_eq!(camera.looks.len(), 1);
    }

    #[test]
    fn test_sprint_scales_speed() {
        let mut controller = CameraController::new()
            .with_move_speed(2.0)
            .with_sprint_multiplier(3.0);
        let mut camera = RecordingCamera::default();

        controller.update(&mut camera, 0.016, true);
        assert_eq!(camera.speed, 2.0);

        controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Pressed);
        controller.update(&mut camera, 0.016, true);
        assert_eq!(camera.speed, 6.0);

        controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Released);
        controller.update(&mut camera, 0.016, true);
        assert_eq!(camera.speed, 2.0);
    }

    #[test]
    fn test_unconstrained_pitch_flag_passed_through() {
        let mut controller = CameraController::new().with_constrain_pitch(false);
        controller.process_mouse_motion(0.0, 5.0);

        let mut camera = RecordingCamera::default();
        controller.update(&mut camera, 0.016, true);
        assert_eq!(camera.looks, vec![(0.0, -5.0, false)]);
    }
}
