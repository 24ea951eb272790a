//! 4x4 Matrix utilities for view and projection transforms
//!
//! The render layer consumes camera state as a look-at view matrix plus a
//! perspective projection. Matrices are column-major (`m[col][row]`), ready
//! for direct upload as shader uniforms.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Build a right-handed look-at view matrix.
///
/// `eye` is the camera position, `target` the point looked at, `up` the
/// camera-local up vector. `target` must not coincide with `eye`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalized();
    let s = f.cross(up).normalized();
    let u = s.cross(f);

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Build a right-handed perspective projection matrix with 0..1 depth range.
///
/// `fov_y` is the vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let focal = 1.0 / (fov_y * 0.5).tan();

    let mut m = [[0.0; 4]; 4];
    m[0][0] = focal / aspect;
    m[1][1] = focal;
    m[2][2] = far / (near - far);
    m[2][3] = -1.0;
    m[3][2] = (near * far) / (near - far);
    m
}
