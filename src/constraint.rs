use crate::bodies::RigidBodyType;
use crate::collision_object::CollisionObject;
use crate::constraints::Point2PointConstraint;
use crate::convert::{from_physics_vector3, to_physics_vector3};
use crate::error::PhysicsError;
use crate::geometry::Ray;
use crate::Result;

use glam::Vec3;
use log::debug;

/// Drags a picked rigid body along a ray
///
/// A grab fixes how far along the picking ray the body is held; each
/// [`update`](Constraint::update) moves the target to that distance along the
/// new ray.
#[derive(Debug, Clone)]
pub struct Constraint {
    constraint: Option<Point2PointConstraint>,
    distance: f32,
    position: Vec3,
}

impl Default for Constraint {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint {
    /// Creates an inactive constraint with the distance unset
    pub fn new() -> Self {
        Self {
            constraint: None,
            distance: f32::MAX,
            position: Vec3::splat(f32::MAX),
        }
    }

    /// Takes ownership of `constraint`, holding it `distance` along future rays
    pub fn attach(&mut self, constraint: Point2PointConstraint, distance: f32) {
        self.position = from_physics_vector3(constraint.get_pivot_in_b());
        self.distance = distance;
        self.constraint = Some(constraint);
    }

    /// Pins `object` at `hit_point`, the point where `ray` struck it
    ///
    /// Only movable rigid bodies can be grabbed; static ones are rejected.
    pub fn grab(&mut self, object: &CollisionObject, hit_point: Vec3, ray: &Ray) -> Result<()> {
        let body = object.rigid_body().ok_or_else(|| {
            PhysicsError::InvalidParameter("only rigid bodies can be dragged".to_string())
        })?;
        if body.get_body_type() == RigidBodyType::Static {
            return Err(PhysicsError::InvalidParameter(
                "static bodies cannot be dragged".to_string(),
            ));
        }

        let pivot = body
            .get_center_of_mass_transform()
            .inverse_transform_point(to_physics_vector3(hit_point));
        let constraint = Point2PointConstraint::new(body, pivot);
        let distance = hit_point.distance(ray.get_origin());

        debug!("grabbed body at {} units", distance);
        self.attach(constraint, distance);
        Ok(())
    }

    /// Moves the target to `distance` along `ray`
    pub fn update(&mut self, ray: &Ray) -> Result<()> {
        let constraint = self.constraint.as_mut().ok_or_else(|| {
            PhysicsError::ResourceNotFound("no constraint attached".to_string())
        })?;

        self.position = ray.point_at_distance(self.distance);
        constraint.set_pivot_b(to_physics_vector3(self.position));
        Ok(())
    }

    /// Releases the constraint; the distance returns to unset
    pub fn reset(&mut self) {
        self.constraint = None;
        self.distance = f32::MAX;
        self.position = Vec3::ZERO;
    }

    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    pub fn get_distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    pub fn is_active(&self) -> bool {
        self.constraint.is_some()
    }

    pub fn point_to_point(&self) -> Option<&Point2PointConstraint> {
        self.constraint.as_ref()
    }

    pub fn point_to_point_mut(&mut self) -> Option<&mut Point2PointConstraint> {
        self.constraint.as_mut()
    }
}
