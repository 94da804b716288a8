use crate::error::PhysicsError;
use crate::math::{Vector3, Aabb};
use crate::shapes::{Shape, ShapeType};
use crate::Result;
use std::any::Any;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis along which heightfield samples are displaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum UpAxis {
    X,
    #[default]
    Y,
    Z,
}

impl UpAxis {
    /// Component index of the axis
    #[inline]
    pub fn index(self) -> usize {
        match self {
            UpAxis::X => 0,
            UpAxis::Y => 1,
            UpAxis::Z => 2,
        }
    }
}

/// A static terrain shape sampled on a regular grid
///
/// Samples are stored row by row: `heights[row * width + column]`. The grid
/// spans `width - 1` by `length - 1` units before local scaling, and the shape
/// is centered on the middle of its bounds, so a sample at `min_height` and one
/// at `max_height` sit symmetrically around the local origin.
#[derive(Debug, Clone)]
pub struct HeightfieldTerrainShape {
    width: usize,
    length: usize,
    heights: Vec<f32>,
    height_scale: f32,
    min_height: f32,
    max_height: f32,
    up_axis: UpAxis,
    local_scaling: Vector3,
    margin: f32,
}

impl HeightfieldTerrainShape {
    /// Creates a heightfield from `width * length` float samples
    pub fn new(
        width: usize,
        length: usize,
        heights: Vec<f32>,
        height_scale: f32,
        min_height: f32,
        max_height: f32,
        up_axis: UpAxis,
    ) -> Result<Self> {
        if width < 2 || length < 2 {
            return Err(PhysicsError::InvalidParameter(format!(
                "heightfield needs at least 2x2 samples, got {}x{}",
                width, length
            )));
        }
        if heights.len() != width * length {
            return Err(PhysicsError::InvalidParameter(format!(
                "heightfield of {}x{} expects {} samples, got {}",
                width,
                length,
                width * length,
                heights.len()
            )));
        }
        if min_height > max_height {
            return Err(PhysicsError::InvalidParameter(format!(
                "heightfield min height {} exceeds max height {}",
                min_height, max_height
            )));
        }

        Ok(Self {
            width,
            length,
            heights,
            height_scale,
            min_height,
            max_height,
            up_axis,
            local_scaling: Vector3::one(),
            margin: 0.0,
        })
    }

    /// Number of samples along the first grid axis
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Number of samples along the second grid axis
    pub fn get_length(&self) -> usize {
        self.length
    }

    pub fn get_height_scale(&self) -> f32 {
        self.height_scale
    }

    pub fn get_min_height(&self) -> f32 {
        self.min_height
    }

    pub fn get_max_height(&self) -> f32 {
        self.max_height
    }

    pub fn get_up_axis(&self) -> UpAxis {
        self.up_axis
    }

    /// Raw sample at grid coordinates, `None` outside the grid
    pub fn get_raw_height(&self, column: usize, row: usize) -> Option<f32> {
        if column < self.width && row < self.length {
            Some(self.heights[row * self.width + column])
        } else {
            None
        }
    }

    /// Unscaled bounds with the grid at the origin, before centering
    fn raw_bounds(&self) -> Aabb {
        let up = self.up_axis.index();
        let (grid_a, grid_b) = grid_axes(self.up_axis);

        let mut min = Vector3::zero();
        let mut max = Vector3::zero();
        min.set_axis(up, self.min_height);
        max.set_axis(up, self.max_height);
        max.set_axis(grid_a, (self.width - 1) as f32);
        max.set_axis(grid_b, (self.length - 1) as f32);
        Aabb::new(min, max)
    }

    /// Unscaled offset subtracted from every sample position
    pub fn get_local_origin(&self) -> Vector3 {
        self.raw_bounds().center()
    }

    /// Local-space position of a grid sample, scaled and centered
    pub fn get_vertex(&self, column: usize, row: usize) -> Option<Vector3> {
        let height = self.get_raw_height(column, row)?;
        let (grid_a, grid_b) = grid_axes(self.up_axis);

        let mut raw = Vector3::zero();
        raw.set_axis(self.up_axis.index(), height);
        raw.set_axis(grid_a, column as f32);
        raw.set_axis(grid_b, row as f32);

        Some((raw - self.get_local_origin()).mul_components(&self.local_scaling))
    }
}

/// Axes spanned by the grid columns and rows for a given up axis
fn grid_axes(up_axis: UpAxis) -> (usize, usize) {
    match up_axis {
        UpAxis::X => (1, 2),
        UpAxis::Y => (0, 2),
        UpAxis::Z => (0, 1),
    }
}

impl Shape for HeightfieldTerrainShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Heightfield
    }

    fn get_volume(&self) -> f32 {
        0.0
    }

    fn get_local_bounds(&self) -> Aabb {
        let half = self.raw_bounds().half_extents().mul_components(&self.local_scaling.abs());
        Aabb::new(-half, half)
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
