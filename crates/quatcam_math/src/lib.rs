//! Camera Mathematics Library
//!
//! This crate provides the vector, quaternion, and matrix types for the
//! quatcam free-look camera.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quaternion`] - rotation quaternion with sandwich-product rotation
//! - [`mat4`] - view and projection matrix helpers for the render layer

mod vec3;
mod quaternion;
pub mod mat4;

pub use vec3::Vec3;
pub use quaternion::Quaternion;
pub use mat4::Mat4;
