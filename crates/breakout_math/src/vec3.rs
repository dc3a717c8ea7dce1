//! 3D free vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{Vector4, VectorKind};

/// 3D vector with x, y, z components
///
/// Carries no point/direction tag. The game uses it both as a free vector and
/// as a plain position; lift it with [`Vector3::to_point`] or
/// [`Vector3::to_direction`] before transforming it with a `Matrix4`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vector3
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Normalize to unit length, or the zero vector if the length is zero
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::ZERO
        } else {
            Self::new(self.x / len, self.y / len, self.z / len)
        }
    }

    /// Lift into homogeneous space as a point (w = 1)
    #[inline]
    pub const fn to_point(self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, VectorKind::Point)
    }

    /// Lift into homogeneous space as a direction (w = 0)
    #[inline]
    pub const fn to_direction(self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, VectorKind::Direction)
    }

    /// Write the debug dump to stdout
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector3: [{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// `a * b` is the dot product
impl std::ops::Mul for Vector3 {
    type Output = f32;
    #[inline]
    fn mul(self, other: Self) -> f32 {
        self.dot(other)
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
