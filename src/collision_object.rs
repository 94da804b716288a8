use crate::bodies::{RigidBody, SoftBody};
use crate::convert::{from_physics_vector3, from_physics_transform};
use crate::core::{BridgeConfig, NormalMerge};
use crate::math::Vector3;

use glam::{Mat4, Vec2, Vec3};
use log::trace;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Built-in shape a collision object was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum PrimitiveType {
    #[default]
    None,
    Box,
    Cone,
    Cylinder,
    Sphere,
    Capsule,
}

/// The engine body behind a collision object
#[derive(Debug)]
pub enum Body {
    Rigid(RigidBody),
    Soft(SoftBody),
}

impl Body {
    pub fn as_rigid(&self) -> Option<&RigidBody> {
        match self {
            Body::Rigid(body) => Some(body),
            Body::Soft(_) => None,
        }
    }

    pub fn as_soft(&self) -> Option<&SoftBody> {
        match self {
            Body::Soft(body) => Some(body),
            Body::Rigid(_) => None,
        }
    }
}

/// An engine body paired with the buffers needed to draw it
///
/// Rigid bodies are drawn from fixed buffers (or a primitive) placed by
/// [`get_transform_matrix`](CollisionObject::get_transform_matrix). Soft bodies
/// deform, so [`update`](CollisionObject::update) rebuilds their positions and
/// normals from the node state every frame.
#[derive(Debug)]
pub struct CollisionObject {
    body: Option<Body>,
    primitive_type: PrimitiveType,
    scale: Vec3,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
    config: BridgeConfig,
}

impl Default for CollisionObject {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionObject {
    /// Creates an object with no body, unit scale and empty buffers
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        Self {
            body: None,
            primitive_type: PrimitiveType::None,
            scale: Vec3::ONE,
            positions: Vec::new(),
            normals: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
            config,
        }
    }

    pub fn is_rigid_body(&self) -> bool {
        matches!(self.body, Some(Body::Rigid(_)))
    }

    pub fn is_soft_body(&self) -> bool {
        matches!(self.body, Some(Body::Soft(_)))
    }

    /// True when the object carries an index buffer
    pub fn is_mesh_body(&self) -> bool {
        !self.indices.is_empty()
    }

    /// True when the object was built from a primitive shape
    pub fn is_primitive_body(&self) -> bool {
        self.primitive_type != PrimitiveType::None
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn rigid_body(&self) -> Option<&RigidBody> {
        self.body.as_ref().and_then(Body::as_rigid)
    }

    pub fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        match self.body.as_mut() {
            Some(Body::Rigid(body)) => Some(body),
            _ => None,
        }
    }

    pub fn soft_body(&self) -> Option<&SoftBody> {
        self.body.as_ref().and_then(Body::as_soft)
    }

    pub fn soft_body_mut(&mut self) -> Option<&mut SoftBody> {
        match self.body.as_mut() {
            Some(Body::Soft(body)) => Some(body),
            _ => None,
        }
    }

    /// Attaches a rigid body, dropping any previous body
    pub fn set_rigid_body(&mut self, body: RigidBody) {
        self.body = Some(Body::Rigid(body));
    }

    /// Attaches a soft body, dropping any previous body
    pub fn set_soft_body(&mut self, body: SoftBody) {
        self.body = Some(Body::Soft(body));
    }

    /// Detaches the body, handing ownership to the caller
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }

    /// World-space center: soft bounds midpoint or rigid center of mass
    pub fn get_center_position(&self) -> Vec3 {
        match &self.body {
            Some(Body::Soft(body)) => from_physics_vector3(body.get_bounds().center()),
            Some(Body::Rigid(body)) => from_physics_vector3(body.get_center_of_mass_position()),
            None => Vec3::ZERO,
        }
    }

    /// World transform of the body with the render scale applied last
    pub fn get_transform_matrix(&self) -> Mat4 {
        let world = match &self.body {
            Some(Body::Soft(body)) => from_physics_transform(&body.get_world_transform()),
            Some(Body::Rigid(body)) => from_physics_transform(&body.get_interpolated_transform()),
            None => Mat4::IDENTITY,
        };
        world * Mat4::from_scale(self.scale)
    }

    /// Rebuilds positions and normals from the soft body's faces
    ///
    /// Positions are unindexed, three per face. Each normal is the average of
    /// the stored normals of the faces gathered by the configured
    /// [`NormalMerge`] policy, negated when `negate_soft_normals` is set.
    /// Texture coordinates and indices are left alone. Rigid bodies are skipped.
    pub fn update(&mut self) {
        let body = match &self.body {
            Some(Body::Soft(body)) => body,
            _ => return,
        };

        let faces = body.faces();
        let corners: Vec<Vector3> = faces
            .iter()
            .flat_map(|face| body.face_positions(face))
            .collect();

        let mut normals = match self.config.normal_merge {
            NormalMerge::Position => merge_by_position(body, &corners),
            NormalMerge::SharedNode => merge_by_node(body),
        };
        if self.config.negate_soft_normals {
            for normal in &mut normals {
                *normal = -*normal;
            }
        }

        trace!("soft body update: {} faces, {} corners", faces.len(), corners.len());

        self.positions.clear();
        self.positions.extend(corners.into_iter().map(from_physics_vector3));
        self.normals.clear();
        self.normals.extend(normals.into_iter().map(from_physics_vector3));
    }

    pub fn get_primitive_type(&self) -> PrimitiveType {
        self.primitive_type
    }

    pub fn set_primitive_type(&mut self, primitive_type: PrimitiveType) {
        self.primitive_type = primitive_type;
    }

    pub fn get_scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn get_positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn get_positions_mut(&mut self) -> &mut Vec<Vec3> {
        &mut self.positions
    }

    pub fn set_positions(&mut self, positions: Vec<Vec3>) {
        self.positions = positions;
    }

    pub fn get_normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn get_normals_mut(&mut self) -> &mut Vec<Vec3> {
        &mut self.normals
    }

    pub fn set_normals(&mut self, normals: Vec<Vec3>) {
        self.normals = normals;
    }

    pub fn get_tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn get_tex_coords_mut(&mut self) -> &mut Vec<Vec2> {
        &mut self.tex_coords
    }

    pub fn set_tex_coords(&mut self, tex_coords: Vec<Vec2>) {
        self.tex_coords = tex_coords;
    }

    pub fn get_indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn get_indices_mut(&mut self) -> &mut Vec<u32> {
        &mut self.indices
    }

    pub fn set_indices(&mut self, indices: Vec<u32>) {
        self.indices = indices;
    }

    pub fn get_config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BridgeConfig) {
        self.config = config;
    }
}

/// For every corner, the mean normal of all faces with a node exactly at that
/// position. Quadratic in the face count.
fn merge_by_position(body: &SoftBody, corners: &[Vector3]) -> Vec<Vector3> {
    corners
        .iter()
        .map(|&position| {
            let mut sum = Vector3::zero();
            let mut count = 0u32;
            for face in body.faces() {
                if body.face_positions(face).contains(&position) {
                    sum += face.normal;
                    count += 1;
                }
            }
            if count > 0 {
                sum / count as f32
            } else {
                sum
            }
        })
        .collect()
}

/// For every corner, the mean normal of the faces sharing its node
fn merge_by_node(body: &SoftBody) -> Vec<Vector3> {
    let mut sums = vec![(Vector3::zero(), 0u32); body.nodes().len()];
    for face in body.faces() {
        for &node in &face.nodes {
            sums[node].0 += face.normal;
            sums[node].1 += 1;
        }
    }

    body.faces()
        .iter()
        .flat_map(|face| face.nodes)
        .map(|node| {
            let (sum, count) = sums[node];
            sum / count as f32
        })
        .collect()
}
