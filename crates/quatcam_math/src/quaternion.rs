//! Quaternion for representing rotations in 3D space
//!
//! A quaternion has 4 components: a real part `w` and an imaginary
//! vector part `(i, j, k)`. Unit quaternions represent pure rotations;
//! a 3D vector embeds as a pure quaternion with `w = 0`.
//!
//! Composing two unit quaternions with [`Quaternion::multiply`] yields a
//! near-unit result that should be renormalized before reuse as a rotation
//! operator, to counter floating-point drift.

use bytemuck::{Pod, Zeroable};
use crate::Vec3;

/// Rotation quaternion
///
/// Q = w + i*e1 + j*e2 + k*e3
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Quaternion {
    /// Real (scalar) component
    pub w: f32,
    /// Imaginary i component (X axis)
    pub i: f32,
    /// Imaginary j component (Y axis)
    pub j: f32,
    /// Imaginary k component (Z axis)
    pub k: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { w: 1.0, i: 0.0, j: 0.0, k: 0.0 };

    /// Create a quaternion from raw components
    ///
    /// No constraints are applied: rotation operators are expected to be
    /// near-unit, pure vectors use `w = 0`.
    #[inline]
    pub const fn new(w: f32, i: f32, j: f32, k: f32) -> Self {
        Self { w, i, j, k }
    }

    /// Embed a 3D vector as a pure quaternion (`w = 0`)
    #[inline]
    pub const fn from_vector(v: Vec3) -> Self {
        Self { w: 0.0, i: v.x, j: v.y, k: v.z }
    }

    /// The imaginary vector part
    #[inline]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.i, self.j, self.k)
    }

    /// Compute the squared magnitude of the quaternion
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.w * self.w + self.i * self.i + self.j * self.j + self.k * self.k
    }

    /// Compute the magnitude of the quaternion
    #[inline]
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Normalize the quaternion to unit magnitude
    ///
    /// Normalizing a zero quaternion is a caller contract violation:
    /// construction paths must guarantee non-zero magnitude for rotation
    /// operators. Debug builds assert; release builds propagate the
    /// resulting non-finite components rather than masking the bug with
    /// a substituted identity.
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        debug_assert!(mag > 0.0, "cannot normalize a zero quaternion");
        let inv_mag = 1.0 / mag;
        Self {
            w: self.w * inv_mag,
            i: self.i * inv_mag,
            j: self.j * inv_mag,
            k: self.k * inv_mag,
        }
    }

    /// Compute the conjugate of the quaternion
    /// For unit quaternions, this is the inverse rotation
    /// Conjugation negates the vector part
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }

    /// Hamilton product: result = self * other
    ///
    /// Non-commutative. For rotation operators the composed rotation
    /// applies `other` first, then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let a = self;
        let b = other;

        Self {
            w: a.w * b.w - a.i * b.i - a.j * b.j - a.k * b.k,
            i: a.w * b.i + a.i * b.w + a.j * b.k - a.k * b.j,
            j: a.w * b.j - a.i * b.k + a.j * b.w + a.k * b.i,
            k: a.w * b.k + a.i * b.j - a.j * b.i + a.k * b.w,
        }
    }

    /// Rotate a 3D vector using the sandwich product: v' = q * v * q†
    ///
    /// `self` must be a unit quaternion.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let pure = Self::from_vector(v);
        self.multiply(&pure).multiply(&self.conjugate()).vector()
    }
}
