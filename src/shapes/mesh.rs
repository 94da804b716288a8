use crate::shapes::{Shape, ShapeType, Bvh};
use crate::math::{Vector3, Aabb};
use std::any::Any;

/// A triangle in a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The vertices of the triangle
    pub vertices: [Vector3; 3],
}

impl Triangle {
    /// Creates a new triangle from three vertices
    pub fn new(a: Vector3, b: Vector3, c: Vector3) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unit normal following the counter-clockwise winding
    pub fn normal(&self) -> Vector3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(&edge2).normalize()
    }

    /// Returns the area of the triangle
    pub fn area(&self) -> f32 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(&edge2).length() * 0.5
    }

    /// Returns the bounding box of the triangle
    pub fn bounds(&self) -> Aabb {
        let [a, b, c] = self.vertices;
        Aabb::new(a.min(&b).min(&c), a.max(&b).max(&c))
    }
}

/// A triangle soup: shared vertex storage plus one index triple per triangle
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    vertices: Vec<Vector3>,
    indices: Vec<u32>,
}

impl TriangleMesh {
    /// Creates a new empty soup
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triangle by position
    ///
    /// With `remove_duplicate_vertices`, a vertex whose position exactly equals
    /// an existing one reuses its index. The lookup is linear in the vertex count.
    pub fn add_triangle(&mut self, a: Vector3, b: Vector3, c: Vector3, remove_duplicate_vertices: bool) {
        for vertex in [a, b, c] {
            let index = self.find_or_add_vertex(vertex, remove_duplicate_vertices);
            self.indices.push(index);
        }
    }

    fn find_or_add_vertex(&mut self, vertex: Vector3, remove_duplicate_vertices: bool) -> u32 {
        if remove_duplicate_vertices {
            if let Some(existing) = self.vertices.iter().position(|v| *v == vertex) {
                return existing as u32;
            }
        }
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Returns the stored vertices
    pub fn get_vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Returns the stored indices, three per triangle
    pub fn get_indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of triangles in the soup
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of stored vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns triangle `index` in unscaled mesh space
    pub fn get_triangle(&self, index: usize) -> Triangle {
        let i = index * 3;
        Triangle::new(
            self.vertices[self.indices[i] as usize],
            self.vertices[self.indices[i + 1] as usize],
            self.vertices[self.indices[i + 2] as usize],
        )
    }

    /// Iterates over every triangle in unscaled mesh space
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(move |i| self.get_triangle(i))
    }

    /// Bounds of all vertices, `None` for an empty soup
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

/// A static concave shape made of a triangle soup with a BVH over its triangles
#[derive(Debug, Clone)]
pub struct BvhTriangleMeshShape {
    mesh: TriangleMesh,
    bvh: Option<Bvh>,
    local_scaling: Vector3,
    margin: f32,
}

impl BvhTriangleMeshShape {
    /// Wraps a soup; with `build_bvh` the hierarchy is built right away
    pub fn new(mesh: TriangleMesh, build_bvh: bool) -> Self {
        let mut shape = Self {
            mesh,
            bvh: None,
            local_scaling: Vector3::one(),
            margin: 0.0,
        };
        if build_bvh {
            shape.build_optimized_bvh();
        }
        shape
    }

    /// (Re)builds the BVH over the current triangles
    pub fn build_optimized_bvh(&mut self) {
        let bounds: Vec<Aabb> = self.mesh.triangles().map(|t| t.bounds()).collect();
        let bvh = Bvh::build(&bounds);
        log::debug!(
            "Built BVH over {} triangles ({} nodes)",
            bounds.len(),
            bvh.node_count()
        );
        self.bvh = Some(bvh);
    }

    /// Returns the underlying soup
    pub fn get_mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Returns the hierarchy, if built
    pub fn get_bvh(&self) -> Option<&Bvh> {
        self.bvh.as_ref()
    }

    /// Returns triangle `index` with local scaling applied
    pub fn get_scaled_triangle(&self, index: usize) -> Triangle {
        let t = self.mesh.get_triangle(index);
        Triangle::new(
            t.vertices[0].mul_components(&self.local_scaling),
            t.vertices[1].mul_components(&self.local_scaling),
            t.vertices[2].mul_components(&self.local_scaling),
        )
    }

    /// Indices of triangles whose bounds overlap `aabb`, given in scaled local space
    ///
    /// Falls back to a linear scan when no BVH has been built.
    pub fn query_triangles(&self, aabb: &Aabb) -> Vec<usize> {
        let unscaled = unscale_aabb(aabb, &self.local_scaling);
        let mut hits = Vec::new();
        match &self.bvh {
            Some(bvh) => bvh.query_aabb(&unscaled, |i| hits.push(i)),
            None => {
                for (i, triangle) in self.mesh.triangles().enumerate() {
                    if triangle.bounds().intersects(&unscaled) {
                        hits.push(i);
                    }
                }
            }
        }
        hits
    }
}

/// Maps a scaled-space box back into mesh space; zero scale axes become unbounded
fn unscale_aabb(aabb: &Aabb, scaling: &Vector3) -> Aabb {
    let mut min = Vector3::zero();
    let mut max = Vector3::zero();
    for axis in 0..3 {
        let s = scaling[axis];
        let (lo, hi) = if s.abs() > crate::math::EPSILON {
            let (a, b) = (aabb.min[axis] / s, aabb.max[axis] / s);
            (a.min(b), a.max(b))
        } else {
            (f32::MIN, f32::MAX)
        };
        min.set_axis(axis, lo);
        max.set_axis(axis, hi);
    }
    Aabb::new(min, max)
}

impl Shape for BvhTriangleMeshShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::BvhTriangleMesh
    }

    fn get_volume(&self) -> f32 {
        // Signed tetrahedra against the origin; only meaningful for closed meshes
        let volume: f32 = (0..self.mesh.triangle_count())
            .map(|i| {
                let [a, b, c] = self.get_scaled_triangle(i).vertices;
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum();
        volume.abs()
    }

    fn get_local_bounds(&self) -> Aabb {
        match self.mesh.bounds() {
            Some(bounds) => {
                let a = bounds.min.mul_components(&self.local_scaling);
                let b = bounds.max.mul_components(&self.local_scaling);
                Aabb::new(a.min(&b), a.max(&b))
            }
            None => Aabb::new(Vector3::zero(), Vector3::zero()),
        }
    }

    fn get_local_scaling(&self) -> Vector3 {
        self.local_scaling
    }

    fn set_local_scaling(&mut self, scaling: Vector3) {
        self.local_scaling = scaling;
    }

    fn get_margin(&self) -> f32 {
        self.margin
    }

    fn set_margin(&mut self, margin: f32) {
        self.margin = margin.max(0.0);
    }

    fn is_concave(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
