use crate::bodies::{CollisionFlags, MotionState, RigidBodyType};
use crate::error::PhysicsError;
use crate::math::{Vector3, Transform, Aabb};
use crate::shapes::Shape;
use crate::Result;

use std::sync::Arc;

/// A rigid body as seen by the render side
///
/// The body owns its motion state; dropping the body releases both together.
/// Collision shapes are shared between bodies through `Arc`.
#[derive(Debug)]
pub struct RigidBody {
    /// Center-of-mass transform in world space
    world_transform: Transform,

    motion_state: Option<Box<dyn MotionState>>,

    shape: Arc<dyn Shape>,

    mass: f32,

    inv_mass: f32,

    linear_velocity: Vector3,

    angular_velocity: Vector3,

    flags: CollisionFlags,
}

impl RigidBody {
    /// Creates a body; zero mass makes it static
    ///
    /// The initial transform is taken from the motion state when one is given.
    /// Concave shapes are only accepted on static bodies.
    pub fn new(
        mass: f32,
        motion_state: Option<Box<dyn MotionState>>,
        shape: Arc<dyn Shape>,
    ) -> Result<Self> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "rigid body mass must be finite and non-negative, got {}",
                mass
            )));
        }
        if mass > 0.0 && shape.is_concave() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{:?} shapes can only be used by static bodies",
                shape.shape_type()
            )));
        }

        let world_transform = motion_state
            .as_ref()
            .map(|state| state.get_world_transform())
            .unwrap_or_else(Transform::identity);

        let mut flags = CollisionFlags::empty();
        if mass == 0.0 {
            flags.insert(CollisionFlags::STATIC_OBJECT);
        }

        Ok(Self {
            world_transform,
            motion_state,
            shape,
            mass,
            inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            flags,
        })
    }

    /// Returns the center-of-mass transform
    pub fn get_center_of_mass_transform(&self) -> Transform {
        self.world_transform
    }

    /// Returns the center-of-mass position
    pub fn get_center_of_mass_position(&self) -> Vector3 {
        self.world_transform.origin
    }

    /// Sets the center-of-mass transform without touching the motion state
    pub fn set_center_of_mass_transform(&mut self, transform: Transform) {
        self.world_transform = transform;
    }

    /// Sets the center-of-mass transform and forwards it to the motion state,
    /// as the engine does after a simulation step
    pub fn set_world_transform(&mut self, transform: Transform) {
        self.world_transform = transform;
        self.sync_motion_state();
    }

    /// Pushes the current center-of-mass transform into the motion state
    pub fn sync_motion_state(&mut self) {
        if let Some(state) = self.motion_state.as_mut() {
            state.set_world_transform(self.world_transform);
        }
    }

    pub fn get_motion_state(&self) -> Option<&dyn MotionState> {
        self.motion_state.as_deref()
    }

    pub fn get_motion_state_mut(&mut self) -> Option<&mut (dyn MotionState + 'static)> {
        self.motion_state.as_deref_mut()
    }

    /// Transform reported for rendering: the motion state's when present,
    /// otherwise the center-of-mass transform
    pub fn get_interpolated_transform(&self) -> Transform {
        self.motion_state
            .as_ref()
            .map(|state| state.get_world_transform())
            .unwrap_or(self.world_transform)
    }

    /// Returns the collision shape
    pub fn get_shape(&self) -> &Arc<dyn Shape> {
        &self.shape
    }

    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn get_linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vector3) {
        self.linear_velocity = velocity;
    }

    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: Vector3) {
        self.angular_velocity = velocity;
    }

    pub fn get_collision_flags(&self) -> CollisionFlags {
        self.flags
    }

    pub fn set_collision_flags(&mut self, flags: CollisionFlags) {
        self.flags = flags;
    }

    /// Static, kinematic or dynamic, derived from the flags
    pub fn get_body_type(&self) -> RigidBodyType {
        if self.flags.contains(CollisionFlags::STATIC_OBJECT) {
            RigidBodyType::Static
        } else if self.flags.contains(CollisionFlags::KINEMATIC_OBJECT) {
            RigidBodyType::Kinematic
        } else {
            RigidBodyType::Dynamic
        }
    }

    /// World-space bounds of the shape at the center-of-mass transform
    pub fn get_aabb(&self) -> Aabb {
        self.shape.get_world_bounds(&self.world_transform)
    }
}
