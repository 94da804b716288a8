#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How soft-body vertex normals are matched to the faces around them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum NormalMerge {
    /// Faces with a node at exactly the same position contribute,
    /// including coincident nodes that are not shared
    #[default]
    Position,

    /// Only faces sharing the vertex's node contribute
    SharedNode,
}

/// Behaviour switches for the adapter layer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BridgeConfig {
    /// Policy used by `CollisionObject::update` to gather face normals
    pub normal_merge: NormalMerge,

    /// Flip soft-body normals after averaging
    pub negate_soft_normals: bool,

    /// Margin given to concave meshes built from render meshes
    pub concave_margin: f32,

    /// Weld identical vertices when filling a triangle soup
    pub remove_duplicate_vertices: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            normal_merge: NormalMerge::Position,
            negate_soft_normals: true,
            concave_margin: 0.0,
            remove_duplicate_vertices: true,
        }
    }
}
