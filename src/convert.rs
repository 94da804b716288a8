//! Conversions between the engine's math types and glam.
//!
//! Every mapping is component-wise and exact for finite input; nothing here
//! normalizes, validates or fails.

use crate::math::{Quaternion, Transform, Vector3};

use glam::{Mat4, Quat, Vec3};

#[inline]
pub fn to_physics_vector3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

#[inline]
pub fn from_physics_vector3(v: Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Reorders glam's `(x, y, z, w)` into the engine's scalar-first layout
#[inline]
pub fn to_physics_quaternion(q: Quat) -> Quaternion {
    Quaternion::new(q.w, q.x, q.y, q.z)
}

#[inline]
pub fn from_physics_quaternion(q: Quaternion) -> Quat {
    Quat::from_xyzw(q.x, q.y, q.z, q.w)
}

/// Reads the rotation and translation of a column-major matrix
///
/// Any scale or shear in `m` is kept in the basis as-is.
pub fn to_physics_transform(m: &Mat4) -> Transform {
    Transform::from_opengl_matrix(&m.to_cols_array())
}

pub fn from_physics_transform(t: &Transform) -> Mat4 {
    Mat4::from_cols_array(&t.get_opengl_matrix())
}

/// Render-side values that have an engine-side counterpart
pub trait ToPhysics {
    type Output;

    fn to_physics(&self) -> Self::Output;
}

/// Engine-side values that have a render-side counterpart
pub trait ToRender {
    type Output;

    fn to_render(&self) -> Self::Output;
}

impl ToPhysics for Vec3 {
    type Output = Vector3;

    fn to_physics(&self) -> Vector3 {
        to_physics_vector3(*self)
    }
}

impl ToPhysics for Quat {
    type Output = Quaternion;

    fn to_physics(&self) -> Quaternion {
        to_physics_quaternion(*self)
    }
}

impl ToPhysics for Mat4 {
    type Output = Transform;

    fn to_physics(&self) -> Transform {
        to_physics_transform(self)
    }
}

impl ToRender for Vector3 {
    type Output = Vec3;

    fn to_render(&self) -> Vec3 {
        from_physics_vector3(*self)
    }
}

impl ToRender for Quaternion {
    type Output = Quat;

    fn to_render(&self) -> Quat {
        from_physics_quaternion(*self)
    }
}

impl ToRender for Transform {
    type Output = Mat4;

    fn to_render(&self) -> Mat4 {
        from_physics_transform(self)
    }
}
