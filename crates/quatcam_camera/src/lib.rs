//! Free-Look Camera
//!
//! This crate provides the first-person [`Camera`] with quaternion
//! orientation, pitch clamping, and derived basis vectors. The camera
//! implements [`quatcam_input::CameraControl`] so it can be driven by the
//! input controller.

pub mod camera;

pub use camera::Camera;

// Re-export the control seam for convenience
pub use quatcam_input::{CameraControl, MoveDirection};
