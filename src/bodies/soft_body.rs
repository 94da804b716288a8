use crate::bodies::CollisionFlags;
use crate::error::PhysicsError;
use crate::math::{Vector3, Transform, Aabb};
use crate::Result;

/// A simulated point of a soft body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// World-space position
    pub position: Vector3,

    /// Area-weighted normal, recomputed by [`SoftBody::update_normals`]
    pub normal: Vector3,

    /// Inverse mass; zero pins the node in place
    pub inv_mass: f32,
}

impl Node {
    fn new(position: Vector3) -> Self {
        Self {
            position,
            normal: Vector3::zero(),
            inv_mass: 1.0,
        }
    }
}

/// A triangle of a soft body, referencing three nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Node indices, counter-clockwise
    pub nodes: [usize; 3],

    /// Unit face normal, recomputed by [`SoftBody::update_normals`]
    pub normal: Vector3,
}

/// A deformable body made of nodes and triangular faces
///
/// Node positions are owned by the simulation; the host writes them back
/// after each step and then calls [`update_normals`](SoftBody::update_normals)
/// and [`update_bounds`](SoftBody::update_bounds).
#[derive(Debug, Clone)]
pub struct SoftBody {
    nodes: Vec<Node>,
    faces: Vec<Face>,
    bounds: Aabb,
    world_transform: Transform,
    flags: CollisionFlags,
}

impl SoftBody {
    /// Creates a body with one node per position and no faces
    pub fn new(positions: &[Vector3]) -> Self {
        let mut body = Self {
            nodes: positions.iter().copied().map(Node::new).collect(),
            faces: Vec::new(),
            bounds: Aabb::new(Vector3::zero(), Vector3::zero()),
            world_transform: Transform::identity(),
            flags: CollisionFlags::empty(),
        };
        body.update_bounds();
        body
    }

    /// Creates a body from an indexed triangle list, one node per vertex
    pub fn from_tri_mesh(vertices: &[Vector3], indices: &[u32]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "soft body index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        let mut body = Self::new(vertices);
        for tri in indices.chunks_exact(3) {
            body.append_face(tri[0] as usize, tri[1] as usize, tri[2] as usize)?;
        }
        body.update_normals();
        Ok(body)
    }

    /// Adds a face over three distinct existing nodes
    pub fn append_face(&mut self, a: usize, b: usize, c: usize) -> Result<()> {
        let count = self.nodes.len();
        if a >= count || b >= count || c >= count {
            return Err(PhysicsError::InvalidParameter(format!(
                "face ({}, {}, {}) references a node outside 0..{}",
                a, b, c, count
            )));
        }
        if a == b || b == c || a == c {
            return Err(PhysicsError::InvalidParameter(format!(
                "face ({}, {}, {}) is degenerate",
                a, b, c
            )));
        }

        self.faces.push(Face {
            nodes: [a, b, c],
            normal: Vector3::zero(),
        });
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Positions of the three nodes of `face`
    pub fn face_positions(&self, face: &Face) -> [Vector3; 3] {
        face.nodes.map(|i| self.nodes[i].position)
    }

    /// Moves a node; bounds and normals are left for the next update
    pub fn set_node_position(&mut self, index: usize, position: Vector3) -> Result<()> {
        let count = self.nodes.len();
        let node = self.nodes.get_mut(index).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("soft body node {} of {}", index, count))
        })?;
        node.position = position;
        Ok(())
    }

    /// Shifts every node, then refreshes bounds and normals
    pub fn translate(&mut self, offset: Vector3) {
        for node in &mut self.nodes {
            node.position += offset;
        }
        self.update_bounds();
        self.update_normals();
    }

    /// Recomputes face normals and area-weighted node normals
    pub fn update_normals(&mut self) {
        for node in &mut self.nodes {
            node.normal = Vector3::zero();
        }

        for face in &mut self.faces {
            let [a, b, c] = face.nodes.map(|i| self.nodes[i].position);
            let weighted = (b - a).cross(&(c - a));
            face.normal = weighted.normalize();
            for &i in &face.nodes {
                self.nodes[i].normal += weighted;
            }
        }

        for node in &mut self.nodes {
            node.normal = node.normal.normalize();
        }
    }

    /// Recomputes the world bounds from the node positions
    pub fn update_bounds(&mut self) {
        let positions: Vec<Vector3> = self.nodes.iter().map(|n| n.position).collect();
        self.bounds = Aabb::from_points(&positions)
            .unwrap_or_else(|| Aabb::new(Vector3::zero(), Vector3::zero()));
    }

    /// World bounds as of the last [`update_bounds`](SoftBody::update_bounds)
    pub fn get_bounds(&self) -> Aabb {
        self.bounds
    }

    /// Nodes are stored in world space, so this is normally identity
    pub fn get_world_transform(&self) -> Transform {
        self.world_transform
    }

    pub fn set_world_transform(&mut self, transform: Transform) {
        self.world_transform = transform;
    }

    pub fn get_collision_flags(&self) -> CollisionFlags {
        self.flags
    }

    pub fn set_collision_flags(&mut self, flags: CollisionFlags) {
        self.flags = flags;
    }

    /// Sum of node masses; pinned nodes contribute nothing
    pub fn get_total_mass(&self) -> f32 {
        self.nodes
            .iter()
            .filter(|n| n.inv_mass > 0.0)
            .map(|n| 1.0 / n.inv_mass)
            .sum()
    }
}
