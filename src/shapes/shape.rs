use crate::math::{Vector3, Aabb, Transform};
use std::any::Any;
use std::fmt::Debug;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Collision margin convex shapes start with
pub const DEFAULT_MARGIN: f32 = 0.04;

/// Concrete kind of a collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ShapeType {
    Sphere,
    Box,
    Cylinder,
    Cone,
    Capsule,
    StaticPlane,
    Heightfield,
    BvhTriangleMesh,
    ConvexHull,
}

/// Base trait for collision shapes
pub trait Shape: Send + Sync + Debug + 'static {
    /// Returns the kind of the shape
    fn shape_type(&self) -> ShapeType;

    /// Returns the volume of the shape with local scaling applied
    fn get_volume(&self) -> f32;

    /// Returns the scaled bounding box in local space, margin excluded
    fn get_local_bounds(&self) -> Aabb;

    /// Returns the bounding box in world space, margin included
    fn get_world_bounds(&self, transform: &Transform) -> Aabb {
        self.get_local_bounds()
            .expand(self.get_margin())
            .transformed(transform)
    }

    /// Returns the non-uniform local scaling
    fn get_local_scaling(&self) -> Vector3;

    /// Sets the non-uniform local scaling
    fn set_local_scaling(&mut self, scaling: Vector3);

    /// Returns the collision margin
    fn get_margin(&self) -> f32;

    /// Sets the collision margin
    fn set_margin(&mut self, margin: f32);

    /// Concave shapes can only be attached to static bodies
    fn is_concave(&self) -> bool {
        false
    }

    /// Returns a dynamic reference to any for downcasting
    fn as_any(&self) -> &dyn Any;
}
