use crate::shapes::{Shape, ShapeType, DEFAULT_MARGIN};
use crate::math::{Vector3, Aabb};
use std::any::Any;

/// A box collision shape, described by its half extents
#[derive(Debug, Clone)]
pub struct BoxShape {
    half_extents: Vector3,
    local_scaling: Vector3,
    margin: f32,
}

impl BoxShape {
    /// Creates a new box from half extents
    pub fn new(half_extents: Vector3) -> Self {
        Self {
            half_extents: half_extents.abs(),
            local_scaling: Vector3::one(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Creates a box from its full edge lengths
    pub fn from_size(size: Vector3) -> Self {
        Self::new(size * 0.5)
    }

    /// Returns the half extents with local scaling applied
    pub fn get_half_extents(&self) -> Vector3 {
        self.half_extents.mul_components(&self.local_scaling.abs())
    }
}

impl Shape for BoxShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Box
    }

    fn get_volume(&self) -> f32 {
        let size = self.get_half_extents() * 2.0;
        size.x * size.y * size.z
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = self.get_half_extents();
        Aabb::new(-half, half)
    }

    fn get_local_scaling(&self) -> Vector3 {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector3) {
        self.local_scaling = scaling;
    }

    fn get_margin(&self) -> f32 {
        self.margin
    }

    fn set_margin(&mut self, margin: f32) {
        self.margin = margin.max(0.0);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
