use crate::shapes::{Shape, ShapeType, DEFAULT_MARGIN};
use crate::math::{Vector3, Aabb};
use std::any::Any;
use std::f32::consts::PI;

/// A cylinder aligned with the local Y axis
#[derive(Debug, Clone)]
pub struct Cylinder {
    radius: f32,
    half_height: f32,
    local_scaling: Vector3,
    margin: f32,
}

impl Cylinder {
    /// Creates a new cylinder with the given radius and total height
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            half_height: height.max(0.0) * 0.5,
            local_scaling: Vector3::one(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Returns the unscaled radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the unscaled total height
    pub fn get_height(&self) -> f32 {
        self.half_height * 2.0
    }
}

impl Shape for Cylinder {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn get_volume(&self) -> f32 {
        let s = self.local_scaling.abs();
        PI * self.radius * self.radius * self.get_height() * s.x * s.y * s.z
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = Vector3::new(self.radius, self.half_height, self.radius)
            .mul_components(&self.local_scaling.abs());
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
