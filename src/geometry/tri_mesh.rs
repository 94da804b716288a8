use crate::error::PhysicsError;
use crate::Result;

use glam::{Vec2, Vec3};

/// Indexed triangle mesh as consumed by the renderer
///
/// Normals and texture coordinates are optional; when present they hold one
/// entry per position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
}

impl TriMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from raw buffers, checking their sizes and index range
    pub fn from_buffers(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        tex_coords: Vec<Vec2>,
        indices: Vec<u32>,
    ) -> Result<Self> {
        if !normals.is_empty() && normals.len() != positions.len() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{} normals for {} positions",
                normals.len(),
                positions.len()
            )));
        }
        if !tex_coords.is_empty() && tex_coords.len() != positions.len() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{} texture coordinates for {} positions",
                tex_coords.len(),
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "index {} out of range for {} positions",
                bad,
                positions.len()
            )));
        }

        Ok(Self {
            positions,
            normals,
            tex_coords,
            indices,
        })
    }

    pub fn append_vertex(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    pub fn append_normal(&mut self, normal: Vec3) {
        self.normals.push(normal);
    }

    pub fn append_tex_coord(&mut self, tex_coord: Vec2) {
        self.tex_coords.push(tex_coord);
    }

    pub fn append_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn get_positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn get_normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn get_tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    pub fn get_indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Replaces the normals with area-weighted vertex normals
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if a.max(b).max(c) >= normals.len() {
                continue;
            }
            let weighted = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += weighted;
            normals[b] += weighted;
            normals[c] += weighted;
        }
        self.normals = normals.into_iter().map(Vec3::normalize_or_zero).collect();
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
    }
}
