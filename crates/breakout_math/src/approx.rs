//! Float comparison tolerances shared by the vector and matrix types

/// Per-component tolerance used by `Vector4` and `Matrix4` equality
pub const EPSILON: f32 = 1e-3;

/// Rotation cosines/sines below this magnitude are snapped to exactly zero
pub const ROTATION_EPSILON: f32 = 1e-5;

/// Returns true if `a` and `b` differ by less than [`EPSILON`]
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Snap values within [`ROTATION_EPSILON`] of zero to exactly zero
#[inline]
pub(crate) fn snap_to_zero(value: f32) -> f32 {
    if value.abs() < ROTATION_EPSILON {
        0.0
    } else {
        value
    }
}
