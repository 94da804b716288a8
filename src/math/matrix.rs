use nalgebra as na;
use crate::math::Vector3;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A row-major 3x3 matrix, used as the rotational basis of a [`Transform`](crate::math::Transform)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    /// `data[row][column]`
    pub data: [[f32; 3]; 3],
}

impl Matrix3 {
    /// Creates a new 3x3 matrix from rows
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    /// Creates a new 3x3 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Creates a new 3x3 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self::new([[0.0; 3]; 3])
    }

    /// Creates a diagonal scaling matrix
    #[inline]
    pub fn from_scale(scale: Vector3) -> Self {
        Self::new([
            [scale.x, 0.0, 0.0],
            [0.0, scale.y, 0.0],
            [0.0, 0.0, scale.z],
        ])
    }

    /// Returns row `i`
    #[inline]
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from(self.data[i])
    }

    /// Returns column `j`
    #[inline]
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self.data[0][j], self.data[1][j], self.data[2][j])
    }

    /// Returns the determinant of the matrix
    pub fn determinant(&self) -> f32 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// Returns the inverse, or `None` when the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        self.to_nalgebra()
            .try_inverse()
            .map(|m| Self::from_nalgebra(&m))
    }

    /// Returns the transpose of the matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.data[i][j] = self.data[j][i];
            }
        }
        result
    }

    /// Multiplies the matrix by a column vector
    #[inline]
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        Vector3::new(self.row(0).dot(&v), self.row(1).dot(&v), self.row(2).dot(&v))
    }

    /// Multiplies the matrix by another matrix
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.data[i][j] = self.row(i).dot(&other.column(j));
            }
        }
        result
    }

    /// Scales each column by the matching component of `scale` (`self * diag(scale)`)
    #[inline]
    pub fn scaled(&self, scale: Vector3) -> Self {
        self.multiply_matrix(&Self::from_scale(scale))
    }

    /// Convert to nalgebra Matrix3
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        let m = &self.data;
        na::Matrix3::new(
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        )
    }

    /// Convert from nalgebra Matrix3
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        Self::new([
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ])
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.multiply_vector(rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply_matrix(&rhs)
    }
}
