//! Input Handling
//!
//! This crate maps raw winit input events to free-look camera control:
//! WASD movement, sprint, and accumulated mouse-look deltas.

mod camera_controller;

pub use camera_controller::{CameraController, CameraControl, MoveDirection};
