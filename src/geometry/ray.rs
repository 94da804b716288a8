use glam::Vec3;

/// A half-line used for picking and dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray; the direction is stored as given
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn get_origin(&self) -> Vec3 {
        self.origin
    }

    pub fn get_direction(&self) -> Vec3 {
        self.direction
    }

    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    /// Unit direction, or zero when the direction is degenerate
    pub fn normalized_direction(&self) -> Vec3 {
        self.direction.normalize_or_zero()
    }

    /// `origin + direction * t`, direction not normalized
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Point `distance` units along the normalized direction
    pub fn point_at_distance(&self, distance: f32) -> Vec3 {
        self.origin + self.normalized_direction() * distance
    }
}
