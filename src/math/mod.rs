//! Engine-side math types.
//!
//! These mirror the physics engine's storage conventions: scalar-first
//! quaternions, row-major bases and rigid (scale-free) transforms. The
//! [`convert`](crate::convert) module maps them onto the render side.

mod vector;
mod matrix;
mod transform;
mod rotation;
mod aabb;

pub use vector::Vector3;
pub use matrix::Matrix3;
pub use transform::Transform;
pub use rotation::Quaternion;
pub use aabb::Aabb;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}
