//! Mapping between normalized device coordinates and screen pixels
//!
//! NDC spans `[-1, 1]` on both axes with +Y up. Screen space is in pixels
//! with the origin at the top-left corner and +Y down.

use crate::{MathError, Matrix4, Vector3};

/// Screen dimensions in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self, MathError> {
        if width == 0 || height == 0 {
            return Err(MathError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// NDC to pixels
    pub fn to_screen_matrix(&self) -> Matrix4 {
        let hw = self.width as f32 / 2.0;
        let hh = self.height as f32 / 2.0;
        Matrix4::from_rows([
            [hw, 0.0, 0.0, hw],
            [0.0, -hh, 0.0, hh],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Pixels to NDC, the inverse of [`Viewport::to_screen_matrix`]
    pub fn to_world_matrix(&self) -> Matrix4 {
        let sx = 2.0 / self.width as f32;
        let sy = 2.0 / self.height as f32;
        Matrix4::from_rows([
            [sx, 0.0, 0.0, -1.0],
            [0.0, -sy, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Map an NDC position to pixel coordinates; z passes through
    pub fn to_screen_coords(&self, ndc: Vector3) -> Vector3 {
        self.to_screen_matrix().transform(ndc.to_point()).to_vector3()
    }

    /// Map a pixel position back to NDC; z passes through
    pub fn to_world_coords(&self, screen: Vector3) -> Vector3 {
        self.to_world_matrix().transform(screen.to_point()).to_vector3()
    }
}
