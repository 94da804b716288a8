use crate::bodies::RigidBody;
use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Solver tuning for a point-to-point constraint
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point2PointSettings {
    /// Error reduction factor
    pub tau: f32,

    /// Velocity damping applied while solving
    pub damping: f32,

    /// Maximum impulse per step; zero disables clamping
    pub impulse_clamp: f32,
}

impl Default for Point2PointSettings {
    fn default() -> Self {
        Self {
            tau: 0.3,
            damping: 1.0,
            impulse_clamp: 0.0,
        }
    }
}

/// Pins a point on a rigid body to a point in world space
///
/// With a single body, pivot B is a world-space target; moving it drags the body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point2PointConstraint {
    /// Anchor in the body's local frame
    pivot_in_a: Vector3,

    /// Target in world space
    pivot_in_b: Vector3,

    settings: Point2PointSettings,

    enabled: bool,
}

impl Point2PointConstraint {
    /// Creates a constraint holding `pivot_in_a` where it currently is in the world
    pub fn new(body: &RigidBody, pivot_in_a: Vector3) -> Self {
        let pivot_in_b = body.get_center_of_mass_transform().transform_point(pivot_in_a);
        Self::with_pivots(pivot_in_a, pivot_in_b)
    }

    /// Creates a constraint from explicit pivots
    pub fn with_pivots(pivot_in_a: Vector3, pivot_in_b: Vector3) -> Self {
        Self {
            pivot_in_a,
            pivot_in_b,
            settings: Point2PointSettings::default(),
            enabled: true,
        }
    }

    pub fn get_pivot_in_a(&self) -> Vector3 {
        self.pivot_in_a
    }

    pub fn get_pivot_in_b(&self) -> Vector3 {
        self.pivot_in_b
    }

    pub fn set_pivot_a(&mut self, pivot: Vector3) {
        self.pivot_in_a = pivot;
    }

    /// Moves the world-space target
    pub fn set_pivot_b(&mut self, pivot: Vector3) {
        self.pivot_in_b = pivot;
    }

    /// Pivot A in world space for the body's current transform
    pub fn get_world_pivot_a(&self, body: &RigidBody) -> Vector3 {
        body.get_center_of_mass_transform().transform_point(self.pivot_in_a)
    }

    /// Offset from the body's anchor to the target
    pub fn get_position_error(&self, body: &RigidBody) -> Vector3 {
        self.pivot_in_b - self.get_world_pivot_a(body)
    }

    pub fn get_settings(&self) -> Point2PointSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: Point2PointSettings) {
        self.settings = Point2PointSettings {
            tau: settings.tau.max(0.0),
            damping: settings.damping.max(0.0),
            impulse_clamp: settings.impulse_clamp.max(0.0),
        };
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
