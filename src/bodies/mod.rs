mod rigid_body;
mod soft_body;
mod motion_state;
mod body_type;

pub use self::rigid_body::RigidBody;
pub use self::soft_body::{SoftBody, Node, Face};
pub use self::motion_state::{MotionState, DefaultMotionState};
pub use self::body_type::RigidBodyType;

use bitflags::bitflags;

bitflags! {
    /// Engine-side flags shared by rigid and soft bodies
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionFlags: u32 {
        /// Zero mass, never moved by the simulation
        const STATIC_OBJECT = 0x01;

        /// Moved by the host application, not by the simulation
        const KINEMATIC_OBJECT = 0x02;

        /// Reports contacts but does not respond to them
        const NO_CONTACT_RESPONSE = 0x04;
    }
}
