//! 4x4 matrix for homogeneous transformations
//!
//! Matrices are row-major: `rows[row][col]`. Vectors are columns, so
//! `A * B` applied to `v` runs `B` first, then `A`. A model matrix is built
//! as `translate * rotate * scale`.
//!
//! Every operation is pure. Builders such as [`Matrix4::with_element`] take
//! the matrix by value and return the updated copy, so chaining never
//! mutates a shared matrix.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::approx::{approx_eq, snap_to_zero};
use crate::error::fail_fast;
use crate::{MathError, Vector4};

pub const ROWS: usize = 4;
pub const COLS: usize = 4;

/// Row-major 4x4 matrix
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4 {
    rows: [[f32; COLS]; ROWS],
}

/// Identity matrix
pub const IDENTITY: Matrix4 = Matrix4::from_rows([
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
]);

impl Matrix4 {
    pub const ZERO: Self = Self::from_rows([[0.0; COLS]; ROWS]);
    pub const IDENTITY: Self = IDENTITY;

    #[inline]
    pub const fn from_rows(rows: [[f32; COLS]; ROWS]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> [[f32; COLS]; ROWS] {
        self.rows
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), MathError> {
        if row < ROWS && col < COLS {
            Ok(())
        } else {
            Err(MathError::IndexOutOfBounds { row, col })
        }
    }

    /// Element at `(row, col)`, or an error if either index is outside `0..4`
    pub fn try_get(&self, row: usize, col: usize) -> Result<f32, MathError> {
        Self::check_bounds(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Copy of this matrix with `(row, col)` replaced by `value`
    pub fn try_with_element(mut self, row: usize, col: usize, value: f32) -> Result<Self, MathError> {
        Self::check_bounds(row, col)?;
        self.rows[row][col] = value;
        Ok(self)
    }

    /// Element at `(row, col)`; panics if out of bounds
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        fail_fast(self.try_get(row, col))
    }

    /// Copy with one element replaced; panics if out of bounds
    ///
    /// ```
    /// use breakout_math::Matrix4;
    /// let m = Matrix4::identity().with_element(3, 3, 100.0).with_element(3, 2, 70.0);
    /// assert_eq!(m.get(3, 2), 70.0);
    /// ```
    #[inline]
    #[track_caller]
    pub fn with_element(self, row: usize, col: usize, value: f32) -> Self {
        fail_fast(self.try_with_element(row, col, value))
    }

    /// `value` on the first three diagonal entries, `1` in the bottom-right
    pub fn value(value: f32) -> Self {
        let mut m = Self::ZERO;
        for i in 0..ROWS - 1 {
            m.rows[i][i] = value;
        }
        m.rows[ROWS - 1][COLS - 1] = 1.0;
        m
    }

    #[inline]
    pub fn identity() -> Self {
        Self::value(1.0)
    }

    /// Explicit duplicate; equivalent to a plain copy since `Matrix4: Copy`
    #[inline]
    pub fn copy(&self) -> Self {
        *self
    }

    #[allow(clippy::needless_range_loop)]
    pub fn transpose(&self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                result.rows[i][j] = self.rows[j][i];
            }
        }
        result
    }

    /// Scale matrix from the x, y, z of `factors`; its kind is ignored
    pub fn scale(factors: Vector4) -> Self {
        Self::identity()
            .with_element(0, 0, factors.x())
            .with_element(1, 1, factors.y())
            .with_element(2, 2, factors.z())
    }

    /// Translation by the x, y, z of `offset`
    ///
    /// Points (`w = 1`) move by the offset; directions (`w = 0`) are unaffected.
    pub fn translate(offset: Vector4) -> Self {
        Self::identity()
            .with_element(0, 3, offset.x())
            .with_element(1, 3, offset.y())
            .with_element(2, 3, offset.z())
    }

    /// Rotation about the X axis (Y towards Z)
    pub fn rotate_x(degrees: f32) -> Self {
        plane_rotation(degrees, 1, 2)
    }

    /// Rotation about the Y axis (Z towards X)
    pub fn rotate_y(degrees: f32) -> Self {
        plane_rotation(degrees, 2, 0)
    }

    /// Rotation about the Z axis (X towards Y)
    pub fn rotate_z(degrees: f32) -> Self {
        plane_rotation(degrees, 0, 1)
    }

    /// Multiply `v` as a column vector: `result[i] = Σk m[i][k] * v[k]`
    ///
    /// The result is a raw homogeneous vector; its kind follows from the
    /// resulting `w`.
    pub fn transform(&self, v: Vector4) -> Vector4 {
        let c = v.to_array();
        let r = self.rows.map(|row| row[0] * c[0] + row[1] * c[1] + row[2] * c[2] + row[3] * c[3]);
        Vector4::from_homogeneous(r[0], r[1], r[2], r[3])
    }

    /// Write the debug dump to stdout
    pub fn print(&self) {
        println!("{}", self);
    }
}

/// Right-handed rotation by `degrees` in the plane of axes `p1`, `p2`,
/// turning `p1` towards `p2`
fn plane_rotation(degrees: f32, p1: usize, p2: usize) -> Matrix4 {
    let (sn, cs) = degrees.to_radians().sin_cos();
    let cs = snap_to_zero(cs);
    let sn = snap_to_zero(sn);

    let mut m = Matrix4::identity();
    m.rows[p1][p1] = cs;
    m.rows[p2][p2] = cs;
    m.rows[p1][p2] = -sn;
    m.rows[p2][p1] = sn;
    m
}

impl std::fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Matrix4: {{")?;
        for row in &self.rows {
            write!(f, "    [ ")?;
            for value in row {
                write!(f, "{:3.2} ", value)?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "}}")
    }
}

/// Element-wise comparison within [`crate::approx::EPSILON`]
impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl std::ops::Index<(usize, usize)> for Matrix4 {
    type Output = f32;
    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        fail_fast(Self::check_bounds(row, col));
        &self.rows[row][col]
    }
}

impl std::ops::Add for Matrix4 {
    type Output = Self;
    #[allow(clippy::needless_range_loop)]
    fn add(self, other: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                result.rows[i][j] = self.rows[i][j] + other.rows[i][j];
            }
        }
        result
    }
}

impl std::ops::Sub for Matrix4 {
    type Output = Self;
    #[allow(clippy::needless_range_loop)]
    fn sub(self, other: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                result.rows[i][j] = self.rows[i][j] - other.rows[i][j];
            }
        }
        result
    }
}

/// Matrix product: `result[i][j] = Σk self[i][k] * other[k][j]`
impl std::ops::Mul for Matrix4 {
    type Output = Self;
    #[allow(clippy::needless_range_loop)]
    fn mul(self, other: Self) -> Self {
        let mut result = Self::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                for k in 0..COLS {
                    result.rows[i][j] += self.rows[i][k] * other.rows[k][j];
                }
            }
        }
        result
    }
}

impl std::ops::Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, v: Vector4) -> Vector4 {
        self.transform(v)
    }
}
