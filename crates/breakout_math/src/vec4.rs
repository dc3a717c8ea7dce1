//! Homogeneous 4D vector type
//!
//! A [`Vector4`] is either a *point* (an affine position, `w != 0`) or a
//! *direction* (a free vector, `w == 0`). The kind is read from `w` alone, so
//! the canonical constructors and the raw homogeneous constructor can never
//! disagree about what a vector is.
//!
//! Which operations are legal depends on the kind:
//!
//! | Operation            | Point            | Direction |
//! |----------------------|------------------|-----------|
//! | `p + d`, `d + d`     | yes              | yes       |
//! | `p + p`              | no               | -         |
//! | `p - p`              | yes (direction)  | -         |
//! | `d - p`              | -                | no        |
//! | dot, cross, scale    | no               | yes       |
//! | length, normalize    | no               | yes       |
//!
//! Illegal operations return a [`MathError`] from the `try_*` methods and
//! panic when reached through the operators.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::approx::approx_eq;
use crate::error::fail_fast;
use crate::{MathError, Vector3};

/// Whether a homogeneous vector is a position or a free vector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorKind {
    /// Affine position, w = 1 once normalized
    Point,
    /// Free vector, w = 0
    Direction,
}

impl VectorKind {
    /// The canonical `w` for this kind
    #[inline]
    pub const fn w(self) -> f32 {
        match self {
            VectorKind::Point => 1.0,
            VectorKind::Direction => 0.0,
        }
    }

    /// Classify a raw homogeneous `w`
    #[inline]
    pub fn from_w(w: f32) -> Self {
        if w == 0.0 {
            VectorKind::Direction
        } else {
            VectorKind::Point
        }
    }
}

/// Homogeneous vector with x, y, z, w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    pub const ORIGIN: Self = Self::point(0.0, 0.0, 0.0);
    pub const ZERO: Self = Self::direction(0.0, 0.0, 0.0);
    pub const X: Self = Self::direction(1.0, 0.0, 0.0);
    pub const Y: Self = Self::direction(0.0, 1.0, 0.0);
    pub const Z: Self = Self::direction(0.0, 0.0, 1.0);

    /// Create a vector of the given kind, with `w` derived from it
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, kind: VectorKind) -> Self {
        Self { x, y, z, w: kind.w() }
    }

    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, VectorKind::Point)
    }

    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, VectorKind::Direction)
    }

    /// Create a vector from raw homogeneous coordinates
    ///
    /// This is the form matrix transforms produce. Any non-zero `w` makes the
    /// vector a point; call [`Vector4::perspective_divide`] to bring it back
    /// to `w = 1`.
    #[inline]
    pub const fn from_homogeneous(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.w
    }

    #[inline]
    pub fn kind(&self) -> VectorKind {
        VectorKind::from_w(self.w)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.kind() == VectorKind::Point
    }

    #[inline]
    pub fn is_direction(&self) -> bool {
        self.kind() == VectorKind::Direction
    }

    /// Components as `[x, y, z, w]`
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drop `w` without dividing by it
    #[inline]
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    fn require_direction(self, operation: &'static str) -> Result<Self, MathError> {
        match self.kind() {
            VectorKind::Direction => Ok(self),
            found => Err(MathError::ExpectedDirection { operation, found }),
        }
    }

    /// Divide x, y, z by `w`
    ///
    /// Directions (`w == 0`) are returned unchanged. Points come back with
    /// `w = 1`, so the divide is idempotent.
    #[inline]
    pub fn perspective_divide(self) -> Self {
        if self.w == 0.0 {
            self
        } else {
            Self::point(self.x / self.w, self.y / self.w, self.z / self.w)
        }
    }

    /// Add two vectors; fails if both are points
    ///
    /// The result has the kind of `self`. Points are perspective divided
    /// before their components are combined.
    pub fn try_add(self, other: Self) -> Result<Self, MathError> {
        if self.is_point() && other.is_point() {
            return Err(MathError::PointAddition);
        }
        let (a, b) = (self.perspective_divide(), other.perspective_divide());
        Ok(Self::new(a.x + b.x, a.y + b.y, a.z + b.z, self.kind()))
    }

    /// Subtract two vectors; fails for `direction - point`
    ///
    /// `point - point` is the direction between them, otherwise the result
    /// has the kind of `self`.
    pub fn try_sub(self, other: Self) -> Result<Self, MathError> {
        let kind = match (self.kind(), other.kind()) {
            (VectorKind::Direction, VectorKind::Point) => {
                return Err(MathError::PointSubtractedFromDirection)
            }
            (VectorKind::Point, VectorKind::Point) => VectorKind::Direction,
            (kind, _) => kind,
        };
        let (a, b) = (self.perspective_divide(), other.perspective_divide());
        Ok(Self::new(a.x - b.x, a.y - b.y, a.z - b.z, kind))
    }

    /// Scale a direction
    pub fn try_scale(self, scalar: f32) -> Result<Self, MathError> {
        let d = self.require_direction("scale")?;
        Ok(Self::direction(d.x * scalar, d.y * scalar, d.z * scalar))
    }

    /// Dot product of two directions over x, y, z
    pub fn try_dot(self, other: Self) -> Result<f32, MathError> {
        let a = self.require_direction("dot")?;
        let b = other.require_direction("dot")?;
        Ok(a.x * b.x + a.y * b.y + a.z * b.z)
    }

    /// Right-handed cross product of two directions
    pub fn try_cross(self, other: Self) -> Result<Self, MathError> {
        let a = self.require_direction("cross")?;
        let b = other.require_direction("cross")?;
        Ok(Self::direction(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        ))
    }

    /// Length of a direction over x, y, z
    pub fn try_length(self) -> Result<f32, MathError> {
        let d = self.require_direction("length")?;
        Ok((d.x * d.x + d.y * d.y + d.z * d.z).sqrt())
    }

    /// Unit direction, or the zero direction if the length is zero
    pub fn try_normalized(self) -> Result<Self, MathError> {
        let d = self.require_direction("normalize")?;
        let len = d.try_length()?;
        if len == 0.0 {
            Ok(Self::ZERO)
        } else {
            Ok(Self::direction(d.x / len, d.y / len, d.z / len))
        }
    }

    /// Dot product; panics unless both are directions
    #[inline]
    #[track_caller]
    pub fn dot(self, other: Self) -> f32 {
        fail_fast(self.try_dot(other))
    }

    /// Cross product; panics unless both are directions
    #[inline]
    #[track_caller]
    pub fn cross(self, other: Self) -> Self {
        fail_fast(self.try_cross(other))
    }

    /// Length; panics on a point
    #[inline]
    #[track_caller]
    pub fn length(self) -> f32 {
        fail_fast(self.try_length())
    }

    /// Normalize; panics on a point
    #[inline]
    #[track_caller]
    pub fn normalized(self) -> Self {
        fail_fast(self.try_normalized())
    }

    /// Write the debug dump to stdout
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl std::fmt::Display for Vector4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}: [{:.2}, {:.2}, {:.2}, {:.2}]",
            self.kind(),
            self.x,
            self.y,
            self.z,
            self.w
        )
    }
}

/// Equal when both sides have the same kind and agree on x, y, z within
/// [`crate::approx::EPSILON`] after perspective division
impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        let a = self.perspective_divide();
        let b = other.perspective_divide();
        a.kind() == b.kind() && approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }
}

// Operator overloads fail fast on illegal operand kinds

impl std::ops::Add for Vector4 {
    type Output = Self;
    #[inline]
    #[track_caller]
    fn add(self, other: Self) -> Self {
        fail_fast(self.try_add(other))
    }
}

impl std::ops::Sub for Vector4 {
    type Output = Self;
    #[inline]
    #[track_caller]
    fn sub(self, other: Self) -> Self {
        fail_fast(self.try_sub(other))
    }
}

/// `a * b` is the dot product
impl std::ops::Mul for Vector4 {
    type Output = f32;
    #[inline]
    #[track_caller]
    fn mul(self, other: Self) -> f32 {
        self.dot(other)
    }
}

impl std::ops::Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    #[track_caller]
    fn mul(self, scalar: f32) -> Self {
        fail_fast(self.try_scale(scalar))
    }
}

impl std::ops::Neg for Vector4 {
    type Output = Self;
    #[inline]
    #[track_caller]
    fn neg(self) -> Self {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_w() {
        let p = Vector4::new(10.0, 20.0, 30.0, VectorKind::Point);
        assert_eq!(p.to_array(), [10.0, 20.0, 30.0, 1.0]);
        assert_eq!(p.kind(), VectorKind::Point);

        let d = Vector4::new(10.0, 20.0, 30.0, VectorKind::Direction);
        assert_eq!(d.to_array(), [10.0, 20.0, 30.0, 0.0]);
        assert_eq!(d.kind(), VectorKind::Direction);
    }

    #[test]
    fn test_from_homogeneous_classifies_by_w() {
        assert!(Vector4::from_homogeneous(1.0, 2.0, 3.0, 0.0).is_direction());
        assert!(Vector4::from_homogeneous(1.0, 2.0, 3.0, 2.0).is_point());
        assert!(Vector4::from_homogeneous(1.0, 2.0, 3.0, -0.5).is_point());
    }

    #[test]
    fn test_point_plus_direction() {
        let p = Vector4::point(1.0, 2.0, 3.0);
        let d = Vector4::direction(1.0, 1.0, 1.0);
        let r = p + d;
        assert_eq!(r.to_array(), [2.0, 3.0, 4.0, 1.0]);

        // Left operand decides the kind
        let r = d + p;
        assert_eq!(r.to_array(), [2.0, 3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_direction_plus_direction() {
        let r = Vector4::X + Vector4::Y;
        assert_eq!(r, Vector4::direction(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_raw_point_is_divided_before_adding() {
        let p = Vector4::from_homogeneous(2.0, 4.0, 6.0, 2.0);
        let r = p + Vector4::X;
        assert_eq!(r.to_array(), [2.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_point_plus_point_is_rejected() {
        let p = Vector4::point(1.0, 2.0, 3.0);
        assert_eq!(p.try_add(p), Err(MathError::PointAddition));
    }

    #[test]
    #[should_panic(expected = "Cannot add two points")]
    fn test_point_plus_point_panics() {
        let _ = Vector4::point(1.0, 2.0, 3.0) + Vector4::ORIGIN;
    }

    #[test]
    fn test_point_minus_point_is_direction() {
        let a = Vector4::point(5.0, 5.0, 5.0);
        let b = Vector4::point(1.0, 2.0, 3.0);
        let d = a - b;
        assert!(d.is_direction());
        assert_eq!(d.to_array(), [4.0, 3.0, 2.0, 0.0]);
    }

    #[test]
    fn test_point_minus_direction_is_point() {
        let r = Vector4::point(5.0, 5.0, 5.0) - Vector4::direction(1.0, 2.0, 3.0);
        assert_eq!(r.to_array(), [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_direction_minus_direction() {
        let r = Vector4::direction(5.0, 5.0, 5.0) - Vector4::X;
        assert_eq!(r.to_array(), [4.0, 5.0, 5.0, 0.0]);
    }

    #[test]
    fn test_direction_minus_point_is_rejected() {
        let err = Vector4::X.try_sub(Vector4::ORIGIN).unwrap_err();
        assert_eq!(err, MathError::PointSubtractedFromDirection);
    }

    #[test]
    #[should_panic(expected = "Cannot subtract a point from a direction")]
    fn test_direction_minus_point_panics() {
        let _ = Vector4::X - Vector4::point(1.0, 1.0, 1.0);
    }

    #[test]
    fn test_scale() {
        let d = Vector4::direction(1.0, -2.0, 3.0) * 2.0;
        assert_eq!(d.to_array(), [2.0, -4.0, 6.0, 0.0]);
        assert_eq!(-Vector4::X, Vector4::direction(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_scale_point_is_rejected() {
        let err = Vector4::ORIGIN.try_scale(2.0).unwrap_err();
        assert_eq!(
            err,
            MathError::ExpectedDirection {
                operation: "scale",
                found: VectorKind::Point
            }
        );
    }

    #[test]
    #[should_panic(expected = "Expected a direction for scale")]
    fn test_scale_point_panics() {
        let _ = Vector4::point(1.0, 2.0, 3.0) * 3.0;
    }

    #[test]
    fn test_dot() {
        let a = Vector4::direction(1.0, 2.0, 3.0);
        let b = Vector4::direction(4.0, 5.0, 6.0);
        assert_eq!(a * b, 32.0);
        assert_eq!(Vector4::X.dot(Vector4::Y), 0.0);
    }

    #[test]
    fn test_dot_with_point_is_rejected() {
        let p = Vector4::point(1.0, 0.0, 0.0);
        assert!(Vector4::X.try_dot(p).is_err());
        assert!(p.try_dot(Vector4::X).is_err());
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vector4::X.cross(Vector4::Y), Vector4::Z);

        let a = Vector4::direction(1.0, -2.0, 3.5);
        let b = Vector4::direction(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vector4::ZERO);
        assert!(a.cross(b).is_direction());
    }

    #[test]
    fn test_cross_with_point_is_rejected() {
        let p = Vector4::point(0.0, 1.0, 0.0);
        assert!(Vector4::X.try_cross(p).is_err());
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector4::direction(2.0, 3.0, 6.0).length(), 7.0);
        assert!(Vector4::point(2.0, 3.0, 6.0).try_length().is_err());
    }

    #[test]
    fn test_normalized() {
        let n = Vector4::direction(3.0, 0.0, 4.0).normalized();
        assert!((n.length() - 1.0).abs() < 0.0001);
        assert_eq!(n, Vector4::direction(0.6, 0.0, 0.8));
        assert_eq!(n.w(), 0.0);
    }

    #[test]
    fn test_normalized_zero() {
        let n = Vector4::ZERO.normalized();
        assert_eq!(n.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "Expected a direction for normalize")]
    fn test_normalize_point_panics() {
        let _ = Vector4::point(1.0, 2.0, 3.0).normalized();
    }

    #[test]
    fn test_perspective_divide() {
        let p = Vector4::from_homogeneous(2.0, 4.0, 8.0, 2.0).perspective_divide();
        assert_eq!(p.to_array(), [1.0, 2.0, 4.0, 1.0]);
        assert_eq!(p.perspective_divide().to_array(), p.to_array());
    }

    #[test]
    fn test_perspective_divide_direction_unchanged() {
        let d = Vector4::direction(2.0, 4.0, 8.0);
        assert_eq!(d.perspective_divide().to_array(), d.to_array());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Vector4::point(1.0, 2.0, 3.0), Vector4::point(1.0, 2.0, 3.0));
        assert_ne!(Vector4::point(1.0, 2.0, 3.0), Vector4::direction(3.0, 2.0, 1.0));
        // Same components, different kind
        assert_ne!(Vector4::point(1.0, 2.0, 3.0), Vector4::direction(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_equality_tolerance() {
        let a = Vector4::direction(1.0, 2.0, 3.0);
        assert_eq!(a, Vector4::direction(1.0005, 2.0, 2.9995));
        assert_ne!(a, Vector4::direction(1.002, 2.0, 3.0));
    }

    #[test]
    fn test_equality_is_projective() {
        let raw = Vector4::from_homogeneous(2.0, 4.0, 6.0, 2.0);
        assert_eq!(raw, Vector4::point(1.0, 2.0, 3.0));
        assert_eq!(raw, Vector4::from_homogeneous(-1.0, -2.0, -3.0, -1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Vector4::point(1.0, 2.0, 3.0)),
            "Point: [1.00, 2.00, 3.00, 1.00]"
        );
        assert_eq!(
            format!("{}", Vector4::direction(0.5, 0.0, -1.0)),
            "Direction: [0.50, 0.00, -1.00, 0.00]"
        );
    }
}
