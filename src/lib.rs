//! quatcam - quaternion free-look camera
//!
//! A first-person camera built on a minimal quaternion algebra: mouse
//! deltas accumulate into yaw/pitch angles, two axis rotations compose via
//! quaternion multiplication, and the result drives the view direction,
//! basis vectors, and view matrix.

pub mod config;

pub use quatcam_camera::Camera;
pub use quatcam_input::{CameraControl, CameraController, MoveDirection};
pub use quatcam_math::{mat4, Mat4, Quaternion, Vec3};
