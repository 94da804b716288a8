#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a rigid body takes part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum RigidBodyType {
    /// Fully simulated
    Dynamic,

    /// Moved by the host, pushes dynamic bodies
    Kinematic,

    /// Zero mass, never moves
    Static,
}
