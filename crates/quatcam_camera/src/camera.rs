//! First-person free-look camera
//!
//! The camera owns a position and a quaternion orientation. Mouse input
//! accumulates yaw and pitch angles (degrees); each look update rebuilds
//! the orientation by composing a yaw rotation about world up with a pitch
//! rotation about local X, then applying the result to a fixed forward
//! reference via the sandwich product. The derived right/up basis vectors
//! are refreshed in the same step, so the render layer never observes a
//! stale basis.
//!
//! Quaternion composition keeps yaw and pitch free of gimbal lock, and the
//! pitch clamp keeps the view direction away from the world-up poles where
//! the right vector would degenerate.

use quatcam_math::{mat4, Mat4, Quaternion, Vec3};
use quatcam_input::{CameraControl, MoveDirection};

const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const DEFAULT_MOVE_SPEED: f32 = 0.5;
const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;
const DEFAULT_PITCH_LIMIT: f32 = 89.0;

/// Straight-ahead reference direction as a pure quaternion (-Z)
const FORWARD_REF: Quaternion = Quaternion::new(0.0, 0.0, 0.0, -1.0);
/// World up axis (+Y)
const WORLD_UP: Vec3 = Vec3::Y;

/// First-person camera with quaternion orientation
pub struct Camera {
    /// World position, mutated only by movement
    position: Vec3,
    /// Current look direction as a unit pure quaternion, derived from the
    /// accumulated angles - never set directly
    orientation: Quaternion,
    /// Derived basis vectors, kept consistent with `orientation`
    right: Vec3,
    up: Vec3,

    // Accumulated look angles in degrees
    yaw: f32,
    pitch: f32,

    // Startup pose for reset
    start_position: Vec3,

    // Configuration
    move_speed: f32,
    look_sensitivity: f32,
    pitch_limit: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera at the default pose: position (0, 0, 3), looking
    /// down -Z, world up +Y
    pub fn new() -> Self {
        let direction = FORWARD_REF.vector();
        let right = direction.cross(WORLD_UP).normalized();
        let up = right.cross(direction).normalized();

        Self {
            position: DEFAULT_POSITION,
            orientation: FORWARD_REF,
            right,
            up,
            yaw: 0.0,
            pitch: 0.0,
            start_position: DEFAULT_POSITION,
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        }
    }

    /// Step the position along `direction` for `dt` seconds of movement
    ///
    /// Forward/backward move along the current view direction, left/right
    /// along the derived right vector. Negative `dt` clamps to zero.
    pub fn move_step(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.move_speed * dt.max(0.0);
        let forward = self.orientation.vector();

        match direction {
            MoveDirection::Forward => self.position += forward * velocity,
            MoveDirection::Backward => self.position -= forward * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a look offset
    ///
    /// Offsets are scaled by the look sensitivity and accumulated into the
    /// yaw/pitch angles. When `constrain_pitch` is set, pitch clamps to
    /// the configured limit (just short of +-90 degrees, so the view
    /// direction never aligns with world up).
    pub fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.look_sensitivity;
        self.pitch += dy * self.look_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        }

        self.rebuild_orientation();
    }

    /// Restore the startup pose
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.rebuild_orientation();
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction (the vector part of the orientation)
    pub fn direction(&self) -> Vec3 {
        self.orientation.vector()
    }

    /// Current orientation as a unit pure quaternion
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Derived unit right vector
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Derived unit up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Accumulated yaw angle in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch angle in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// View matrix for the render layer:
    /// lookAt(position, position + direction, up)
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.position + self.direction(), self.up)
    }

    /// Change the movement speed in units per second
    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    /// Change the look sensitivity in degrees per cursor-delta unit
    pub fn set_look_sensitivity(&mut self, sensitivity: f32) {
        self.look_sensitivity = sensitivity;
    }

    /// Builder: set the starting position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self.start_position = position;
        self
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set look sensitivity
    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    /// Builder: set the pitch clamp limit in degrees (must stay below 90)
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit;
        self
    }

    /// Rebuild the orientation quaternion and basis vectors from the
    /// accumulated angles
    fn rebuild_orientation(&mut self) {
        // Quaternion rotations use half-angles
        let half_yaw = self.yaw.to_radians() / 2.0;
        let half_pitch = self.pitch.to_radians() / 2.0;

        // Yaw about world up, pitch about local X
        let yaw_q = Quaternion::new(half_yaw.cos(), 0.0, half_yaw.sin(), 0.0);
        let pitch_q = Quaternion::new(half_pitch.cos(), half_pitch.sin(), 0.0, 0.0);

        // Yaw must stay the outer rotation: the composed operator then
        // pitches in the already-yawed frame, which is what makes the
        // fixed X axis in pitch_q act as the camera's local right axis
        let combined = yaw_q.multiply(&pitch_q).normalized();

        // Sandwich product rotates the forward reference into the new
        // view direction
        self.orientation = combined
            .multiply(&FORWARD_REF)
            .multiply(&combined.conjugate())
            .normalized();

        let direction = self.orientation.vector();
        self.right = direction.cross(WORLD_UP).normalized();
        self.up = self.right.cross(direction).normalized();
    }
}

impl CameraControl for Camera {
    fn move_step(&mut self, direction: MoveDirection, dt: f32) {
        Camera::move_step(self, direction, dt);
    }

    fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        Camera::look(self, dx, dy, constrain_pitch);
    }

    fn set_move_speed(&mut self, speed: f32) {
        Camera::set_move_speed(self, speed);
    }

    fn position(&self) -> Vec3 {
        Camera::position(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_default_pose() {
        let cam = Camera::new();
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(cam.direction(), -Vec3::Z);
        assert_eq!(cam.right(), Vec3::X);
        assert_eq!(cam.up(), Vec3::Y);
    }

    #[test]
    fn test_zero_angles_reproduce_forward_reference() {
        let mut cam = Camera::new();
        cam.look(0.0, 0.0, true);
        assert_eq!(cam.orientation(), FORWARD_REF);
    }

    #[test]
    fn test_move_forward_deterministic() {
        // Speed 0.5 for one second from (0,0,3) facing -Z lands at (0,0,2.5)
        let mut cam = Camera::new().with_move_speed(0.5);
        cam.move_step(MoveDirection::Forward, 1.0);
        assert!(vec_approx_eq(cam.position(), Vec3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn test_move_backward_and_strafe() {
        let mut cam = Camera::new().with_move_speed(1.0);
        cam.move_step(MoveDirection::Backward, 1.0);
        assert!(vec_approx_eq(cam.position(), Vec3::new(0.0, 0.0, 4.0)));

        cam.move_step(MoveDirection::Right, 2.0);
        assert!(vec_approx_eq(cam.position(), Vec3::new(2.0, 0.0, 4.0)));

        cam.move_step(MoveDirection::Left, 1.0);
        assert!(vec_approx_eq(cam.position(), Vec3::new(1.0, 0.0, 4.0)));
    }

    #[test]
    fn test_negative_dt_clamps_to_zero() {
        let mut cam = Camera::new();
        cam.move_step(MoveDirection::Forward, -5.0);
        assert_eq!(cam.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_pitch_clamp_converges() {
        let mut cam = Camera::new();
        for _ in 0..20 {
            cam.look(0.0, 1000.0, true);
            assert!(cam.pitch() <= 89.0);
        }
        assert_eq!(cam.pitch(), 89.0);

        for _ in 0..20 {
            cam.look(0.0, -1000.0, true);
            assert!(cam.pitch() >= -89.0);
        }
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn test_unconstrained_pitch_accumulates() {
        let mut cam = Camera::new();
        cam.look(0.0, 1000.0, false);
        cam.look(0.0, 1000.0, false);
        // Sensitivity 0.1 gives 100 degrees per call
        assert!(approx_eq(cam.pitch(), 200.0));
    }

    #[test]
    fn test_basis_stays_orthonormal_after_look() {
        let mut cam = Camera::new();
        for (dx, dy) in [(123.0, 45.0), (-310.0, -200.0), (77.7, 500.0), (-5.0, -888.0)] {
            cam.look(dx, dy, true);

            let dir = cam.direction();
            assert!(approx_eq(dir.length(), 1.0));
            assert!(approx_eq(cam.right().length(), 1.0));
            assert!(approx_eq(cam.up().length(), 1.0));
            assert!(approx_eq(cam.right().dot(dir), 0.0));
            assert!(approx_eq(cam.up().dot(dir), 0.0));
            assert!(approx_eq(cam.right().dot(cam.up()), 0.0));
        }
    }

    #[test]
    fn test_no_input_look_is_idempotent() {
        let mut cam = Camera::new();
        cam.look(250.0, -40.0, true);

        let orientation = cam.orientation();
        let right = cam.right();
        let up = cam.up();
        let position = cam.position();

        cam.look(0.0, 0.0, true);
        assert!(approx_eq(cam.orientation().w, orientation.w));
        assert!(vec_approx_eq(cam.direction(), orientation.vector()));
        assert!(vec_approx_eq(cam.right(), right));
        assert!(vec_approx_eq(cam.up(), up));
        assert_eq!(cam.position(), position);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        // 90 degrees of yaw turns the view from -Z to -X (positive yaw
        // rotates counterclockwise around +Y)
        let mut cam = Camera::new().with_look_sensitivity(1.0);
        cam.look(90.0, 0.0, true);
        assert!(vec_approx_eq(cam.direction(), -Vec3::X));
        assert!(vec_approx_eq(cam.right(), -Vec3::Z));
        assert!(vec_approx_eq(cam.up(), Vec3::Y));
    }

    #[test]
    fn test_pitch_after_yaw_uses_local_axis() {
        // Yaw a quarter turn, then pitch up 45 degrees: the view should
        // rise in the vertical plane containing -X, not the -Z plane
        let mut cam = Camera::new().with_look_sensitivity(1.0);
        cam.look(90.0, 45.0, true);

        let dir = cam.direction();
        let half_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
        assert!(vec_approx_eq(dir, Vec3::new(-half_sqrt2, half_sqrt2, 0.0)));
    }

    #[test]
    fn test_movement_follows_view_direction() {
        let mut cam = Camera::new()
            .with_move_speed(1.0)
            .with_look_sensitivity(1.0)
            .with_position(Vec3::ZERO);
        cam.look(90.0, 0.0, true);
        cam.move_step(MoveDirection::Forward, 1.0);
        assert!(vec_approx_eq(cam.position(), -Vec3::X));
    }

    #[test]
    fn test_reset_restores_startup_pose() {
        let mut cam = Camera::new().with_position(Vec3::new(1.0, 2.0, 3.0));
        cam.look(170.0, 300.0, true);
        cam.move_step(MoveDirection::Forward, 3.0);
        cam.reset();

        assert_eq!(cam.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cam.yaw(), 0.0);
        assert_eq!(cam.pitch(), 0.0);
        assert!(vec_approx_eq(cam.direction(), -Vec3::Z));
    }

    #[test]
    fn test_sensitivity_scales_offsets() {
        let mut cam = Camera::new().with_look_sensitivity(0.25);
        cam.look(100.0, 40.0, true);
        assert!(approx_eq(cam.yaw(), 25.0));
        assert!(approx_eq(cam.pitch(), 10.0));
    }

    #[test]
    fn test_custom_pitch_limit() {
        let mut cam = Camera::new().with_pitch_limit(45.0);
        cam.look(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), 45.0);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let mut cam = Camera::new();
        cam.look(31.0, -12.0, true);

        let expected = mat4::look_at(
            cam.position(),
            cam.position() + cam.direction(),
            cam.up(),
        );
        assert_eq!(cam.view_matrix(), expected);
    }
}
