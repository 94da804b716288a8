use crate::math::Transform;
use std::fmt::Debug;

/// Bridge between a body's simulated transform and the transform used for rendering
///
/// The engine writes the center-of-mass transform through
/// [`set_world_transform`](MotionState::set_world_transform) after each step,
/// and renderers read it back through
/// [`get_world_transform`](MotionState::get_world_transform).
pub trait MotionState: Send + Debug {
    /// Returns the center-of-mass world transform
    fn get_world_transform(&self) -> Transform;

    /// Receives a new center-of-mass world transform
    fn set_world_transform(&mut self, center_of_mass: Transform);
}

/// Motion state that stores the graphics transform and an optional center-of-mass offset
#[derive(Debug, Clone)]
pub struct DefaultMotionState {
    graphics_world_transform: Transform,
    center_of_mass_offset: Transform,
    start_world_transform: Transform,
}

impl DefaultMotionState {
    /// Creates a motion state starting at `start` with no center-of-mass offset
    pub fn new(start: Transform) -> Self {
        Self::with_offset(start, Transform::identity())
    }

    /// Creates a motion state whose center of mass sits at `offset` in graphics space
    pub fn with_offset(start: Transform, offset: Transform) -> Self {
        Self {
            graphics_world_transform: start,
            center_of_mass_offset: offset,
            start_world_transform: start,
        }
    }

    /// Transform of the graphics origin, offset not removed
    pub fn get_graphics_world_transform(&self) -> Transform {
        self.graphics_world_transform
    }

    /// Transform the motion state was created with
    pub fn get_start_world_transform(&self) -> Transform {
        self.start_world_transform
    }
}

impl MotionState for DefaultMotionState {
    fn get_world_transform(&self) -> Transform {
        self.graphics_world_transform * self.center_of_mass_offset.inverse()
    }

    fn set_world_transform(&mut self, center_of_mass: Transform) {
        self.graphics_world_transform = center_of_mass * self.center_of_mass_offset;
    }
}
