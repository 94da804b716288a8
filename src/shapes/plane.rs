use crate::shapes::{Shape, ShapeType};
use crate::math::{Vector3, Aabb};
use std::any::Any;

/// Half extent used for the bounds of an infinite plane
const PLANE_EXTENT: f32 = 1.0e18;

/// An infinite static plane: all points `p` with `normal · p = constant`
#[derive(Debug, Clone)]
pub struct StaticPlane {
    normal: Vector3,
    constant: f32,
    local_scaling: Vector3,
    margin: f32,
}

impl StaticPlane {
    /// Creates a new plane; the normal is normalized
    pub fn new(normal: Vector3, constant: f32) -> Self {
        Self {
            normal: normal.normalize(),
            constant,
            local_scaling: Vector3::one(),
            margin: 0.0,
        }
    }

    /// Returns the unit normal
    pub fn get_normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns the plane constant
    pub fn get_constant(&self) -> f32 {
        self.constant
    }
}

impl Shape for StaticPlane {
    fn shape_type(&self) -> ShapeType {
        ShapeType::StaticPlane
    }

    fn get_volume(&self) -> f32 {
        0.0
    }

    fn get_local_bounds(&self) -> Aabb {
        Aabb::new(Vector3::splat(-PLANE_EXTENT), Vector3::splat(PLANE_EXTENT))
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

    fn is_concave(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
