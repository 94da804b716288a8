use crate::shapes::{Shape, ShapeType};
use crate::math::{Vector3, Aabb};
use std::any::Any;

/// A spherical collision shape
///
/// Bounds already reach the surface, so the sphere carries no extra margin.
#[derive(Debug, Clone)]
pub struct Sphere {
    radius: f32,
    local_scaling: Vector3,
}

impl Sphere {
    /// Creates a new sphere with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            local_scaling: Vector3::one(),
        }
    }

    /// Returns the unscaled radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    fn get_volume(&self) -> f32 {
        let s = self.local_scaling;
        (4.0 / 3.0) * std::f32::consts::PI * self.radius.powi(3) * s.x * s.y * s.z
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = self.local_scaling.abs() * self.radius;
        Aabb::new(-half, half)
    }

    fn get_local_scaling(&self) -> Vector3 {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector3) {
        self.local_scaling = scaling;
    }

    fn get_margin(&self) -> f32 {
        0.0
    }

    fn set_margin(&mut self, _margin: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}
