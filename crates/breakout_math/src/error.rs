//! Math error types
//!
//! Illegal operations on homogeneous vectors and out-of-range matrix accesses
//! are reported as [`MathError`] by the `try_*` methods. The operator forms
//! used by the game loop fail fast instead, panicking with the same message.

use std::fmt;

use crate::VectorKind;

/// Error type for operations whose operands violate a precondition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    /// Two points were added
    PointAddition,
    /// A point was subtracted from a direction
    PointSubtractedFromDirection,
    /// A linear-only operation received a point
    ExpectedDirection {
        operation: &'static str,
        found: VectorKind,
    },
    /// A matrix row or column index outside `0..4`
    IndexOutOfBounds { row: usize, col: usize },
    /// A viewport with a zero-sized dimension
    EmptyViewport { width: u32, height: u32 },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::PointAddition => write!(f, "Cannot add two points"),
            MathError::PointSubtractedFromDirection => {
                write!(f, "Cannot subtract a point from a direction")
            }
            MathError::ExpectedDirection { operation, found } => {
                write!(f, "Expected a direction for {}, found a {:?}", operation, found)
            }
            MathError::IndexOutOfBounds { row, col } => {
                write!(f, "Matrix index ({}, {}) out of bounds", row, col)
            }
            MathError::EmptyViewport { width, height } => {
                write!(f, "Viewport {}x{} has no area", width, height)
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Unwrap a gated result at the fail-fast API boundary
#[inline]
#[track_caller]
pub(crate) fn fail_fast<T>(result: Result<T, MathError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_addition_display() {
        let msg = format!("{}", MathError::PointAddition);
        assert_eq!(msg, "Cannot add two points");
    }

    #[test]
    fn test_expected_direction_display() {
        let err = MathError::ExpectedDirection {
            operation: "dot",
            found: VectorKind::Point,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("dot"));
        assert!(msg.contains("Point"));
    }

    #[test]
    fn test_index_display() {
        let msg = format!("{}", MathError::IndexOutOfBounds { row: 4, col: 1 });
        assert!(msg.contains("(4, 1)"));
        assert!(msg.contains("out of bounds"));
    }

    #[test]
    fn test_fail_fast_passes_ok_through() {
        assert_eq!(fail_fast(Ok::<_, MathError>(3)), 3);
    }

    #[test]
    #[should_panic(expected = "Cannot subtract a point from a direction")]
    fn test_fail_fast_panics_with_message() {
        fail_fast::<()>(Err(MathError::PointSubtractedFromDirection));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        assert!(MathError::PointAddition.source().is_none());
    }
}
