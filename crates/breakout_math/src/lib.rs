//! Homogeneous Mathematics Library
//!
//! This crate provides the vector and matrix types used by the breakout game
//! to position, rotate, scale and project its geometry.
//!
//! ## Core Types
//!
//! - [`Vector2`] - 2D free vector
//! - [`Vector3`] - 3D free vector with a right-handed cross product
//! - [`Vector4`] - homogeneous vector tagged by `w` as a point or a direction
//! - [`Matrix4`] - row-major 4x4 matrix for homogeneous transforms
//!
//! ## Support
//!
//! - [`MathError`] - precondition violations reported by the `try_*` methods
//! - [`Viewport`] - NDC to screen-pixel mapping

pub mod approx;
mod error;
pub mod mat4;
mod vec2;
mod vec3;
mod vec4;
pub mod viewport;

pub use error::MathError;
pub use mat4::Matrix4;
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::{Vector4, VectorKind};
pub use viewport::Viewport;
