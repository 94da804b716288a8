use crate::shapes::{Shape, ShapeType, DEFAULT_MARGIN};
use crate::math::{Vector3, Aabb};
use std::any::Any;

/// A convex shape defined implicitly by a point cloud
///
/// Points are kept as given; the hull is whatever the support mapping over
/// them describes, so interior points are harmless.
#[derive(Debug, Clone)]
pub struct ConvexHullShape {
    points: Vec<Vector3>,
    /// Unscaled bounds of `points`
    bounds: Option<Aabb>,
    local_scaling: Vector3,
    margin: f32,
}

impl Default for ConvexHullShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ConvexHullShape {
    /// Creates a new empty hull
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            bounds: None,
            local_scaling: Vector3::one(),
            margin: DEFAULT_MARGIN,
        }
    }

    /// Creates a hull from a set of points
    pub fn from_points(points: &[Vector3]) -> Self {
        let mut hull = Self::new();
        for point in points {
            hull.add_point(*point);
        }
        hull
    }

    /// Adds a point to the cloud
    pub fn add_point(&mut self, point: Vector3) {
        self.points.push(point);
        match self.bounds.as_mut() {
            Some(bounds) => bounds.expand_to_include_point(point),
            None => self.bounds = Some(Aabb::new(point, point)),
        }
    }

    /// Returns the unscaled points
    pub fn get_unscaled_points(&self) -> &[Vector3] {
        &self.points
    }

    /// Returns the number of points
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns point `index` with local scaling applied
    pub fn get_scaled_point(&self, index: usize) -> Vector3 {
        self.points[index].mul_components(&self.local_scaling)
    }

    /// Furthest scaled point along `direction`, margin excluded
    pub fn get_support_point(&self, direction: Vector3) -> Vector3 {
        (0..self.points.len())
            .map(|i| self.get_scaled_point(i))
            .max_by(|a, b| a.dot(&direction).total_cmp(&b.dot(&direction)))
            .unwrap_or_else(Vector3::zero)
    }
}

impl Shape for ConvexHullShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexHull
    }

    // Bounding-box estimate; an exact hull volume would need the hull faces
    fn get_volume(&self) -> f32 {
        self.get_local_bounds().volume()
    }

    fn get_local_bounds(&self) -> Aabb {
        match self.bounds {
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

    fn as_any(&self) -> &dyn Any {
        self
    }
}
