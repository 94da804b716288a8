pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod constraints;
pub mod geometry;
pub mod convert;
pub mod factory;
pub mod collision_object;
pub mod constraint;

/// Re-export common types for easier usage
pub use crate::core::{BridgeConfig, NormalMerge};
pub use crate::bodies::{RigidBody, SoftBody};
pub use crate::collision_object::{Body, CollisionObject, PrimitiveType};
pub use crate::constraint::Constraint;
pub use crate::convert::{ToPhysics, ToRender};
pub use crate::math::Vector3;

/// Error types for the adapter layer
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
