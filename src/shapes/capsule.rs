use crate::shapes::{Shape, ShapeType};
use crate::math::{Vector3, Aabb};
use std::any::Any;
use std::f32::consts::PI;

/// A capsule aligned with the local Y axis
///
/// `height` is the length of the cylindrical section, caps excluded.
#[derive(Debug, Clone)]
pub struct Capsule {
    radius: f32,
    height: f32,
    local_scaling: Vector3,
}

impl Capsule {
    /// Creates a new capsule
    pub fn new(radius: f32, height: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            height: height.max(0.0),
            local_scaling: Vector3::one(),
        }
    }

    /// Returns the unscaled radius
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Returns the unscaled length of the cylindrical section
    pub fn get_height(&self) -> f32 {
        self.height
    }
}

impl Shape for Capsule {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    fn get_volume(&self) -> f32 {
        let s = self.local_scaling.abs();
        let r2 = self.radius * self.radius;
        let volume = PI * r2 * self.height + (4.0 / 3.0) * PI * r2 * self.radius;
        volume * s.x * s.y * s.z
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = Vector3::new(self.radius, self.height * 0.5 + self.radius, self.radius)
            .mul_components(&self.local_scaling.abs());
        Aabb::new(-half, half)
    }

    fn get_local_scaling(&self) -> Vector3 {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector3) {
        self.local_scaling = scaling;
    }

    // Bounds already include the caps
    fn get_margin(&self) -> f32 {
        0.0
    }

    fn set_margin(&mut self, _margin: f32) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}
