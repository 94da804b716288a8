use nalgebra as na;
use crate::math::{Vector3, Matrix3, Quaternion};
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A rigid transform: a 3x3 basis followed by a translation
///
/// This is the engine-side world transform of bodies. It carries no scale of
/// its own; render scale is applied on the render side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Rotational basis
    pub basis: Matrix3,

    /// Translation in world space
    pub origin: Vector3,
}

impl Transform {
    /// Creates a transform from a rotation and an origin
    #[inline]
    pub fn new(rotation: Quaternion, origin: Vector3) -> Self {
        Self {
            basis: rotation.to_rotation_matrix(),
            origin,
        }
    }

    /// Creates a transform from a basis and an origin
    #[inline]
    pub fn from_basis_origin(basis: Matrix3, origin: Vector3) -> Self {
        Self { basis, origin }
    }

    /// Creates a new identity transform
    #[inline]
    pub fn identity() -> Self {
        Self {
            basis: Matrix3::identity(),
            origin: Vector3::zero(),
        }
    }

    /// Creates a translation-only transform
    #[inline]
    pub fn from_origin(origin: Vector3) -> Self {
        Self {
            basis: Matrix3::identity(),
            origin,
        }
    }

    /// Returns the translation
    #[inline]
    pub fn get_origin(&self) -> Vector3 {
        self.origin
    }

    /// Sets the translation
    #[inline]
    pub fn set_origin(&mut self, origin: Vector3) {
        self.origin = origin;
    }

    /// Returns the basis as a quaternion
    pub fn get_rotation(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(&self.basis)
    }

    /// Replaces the basis with the given rotation
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.basis = rotation.to_rotation_matrix();
    }

    /// Transforms a point from local to world space
    #[inline]
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.basis * point + self.origin
    }

    /// Transforms a point from world to local space, assuming an orthonormal basis
    #[inline]
    pub fn inverse_transform_point(&self, point: Vector3) -> Vector3 {
        self.basis.transpose() * (point - self.origin)
    }

    /// Inverse of a rigid transform
    pub fn inverse(&self) -> Self {
        let inv_basis = self.basis.transpose();
        Self {
            basis: inv_basis,
            origin: inv_basis * -self.origin,
        }
    }

    /// Writes the transform as a column-major OpenGL matrix
    pub fn get_opengl_matrix(&self) -> [f32; 16] {
        let b = &self.basis.data;
        [
            b[0][0], b[1][0], b[2][0], 0.0,
            b[0][1], b[1][1], b[2][1], 0.0,
            b[0][2], b[1][2], b[2][2], 0.0,
            self.origin.x, self.origin.y, self.origin.z, 1.0,
        ]
    }

    /// Reads the basis and origin from a column-major OpenGL matrix
    ///
    /// The bottom row is ignored.
    pub fn set_from_opengl_matrix(&mut self, m: &[f32; 16]) {
        self.basis = Matrix3::new([
            [m[0], m[4], m[8]],
            [m[1], m[5], m[9]],
            [m[2], m[6], m[10]],
        ]);
        self.origin = Vector3::new(m[12], m[13], m[14]);
    }

    /// Builds a transform from a column-major OpenGL matrix
    pub fn from_opengl_matrix(m: &[f32; 16]) -> Self {
        let mut transform = Self::identity();
        transform.set_from_opengl_matrix(m);
        transform
    }

    /// Convert to a nalgebra isometry
    pub fn to_nalgebra(&self) -> na::Isometry3<f32> {
        let rotation = na::UnitQuaternion::from_quaternion(self.get_rotation().to_nalgebra());
        na::Isometry3::from_parts(na::Translation3::from(self.origin.to_nalgebra()), rotation)
    }

    /// Convert from a nalgebra isometry
    pub fn from_nalgebra(iso: &na::Isometry3<f32>) -> Self {
        Self::new(
            Quaternion::from_nalgebra(iso.rotation.quaternion()),
            Vector3::from_nalgebra(&iso.translation.vector),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Self;

    /// Composes `self * rhs`: `rhs` is applied first
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            basis: self.basis * rhs.basis,
            origin: self.transform_point(rhs.origin),
        }
    }
}
