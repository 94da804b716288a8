use crate::shapes::{Shape, ShapeType, DEFAULT_MARGIN};
use crate::math::{Vector3, Aabb};
use std::any::Any;
use std::f32::consts::PI;

/// A cone aligned with the local Y axis, apex up, centered on its half height
#[derive(Debug, Clone)]
pub struct Cone {
    radius: f32,
    height: f32,
    local_scaling: Vector3,
    margin: f32,
}

impl Cone {
    /// Creates a new cone with the given base radius and height
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            height: height.max(0.0),
            local_scaling: Vector3::one(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Returns the unscaled base radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the unscaled height
    pub fn get_height(&self) -> f32 {
        self.height
    }
}

impl Shape for Cone {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cone
    }

    fn get_volume(&self) -> f32 {
        let s = self.local_scaling.abs();
        PI * self.radius * self.radius * self.height / 3.0 * s.x * s.y * s.z
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = Vector3::new(self.radius, self.height * 0.5, self.radius)
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
