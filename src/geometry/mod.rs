//! Render-side geometry: meshes, rays and float images.

mod tri_mesh;
mod ray;

pub use self::tri_mesh::TriMesh;
pub use self::ray::Ray;

use image::{ImageBuffer, Luma, Rgb32FImage};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Single-channel float image, row-major
pub type Channel32f = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Three-channel float image
pub type Surface32f = Rgb32FImage;

/// Colour channel of a [`Surface32f`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ColorChannel {
    #[default]
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Offset of the channel inside an RGB pixel
    pub fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}
