//! Error types for field and curve operations.

use thiserror::Error;

/// Failures of field arithmetic and point decoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Malformed fixed-width input: wrong length, a value not below the
    /// modulus, or a compressed `y` with no matching `x`.
    #[error("invalid encoding")]
    InvalidEncoding,

    /// Coordinates do not satisfy `a*x^2 + y^2 = 1 + d*x^2*y^2`.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// Square root of a quadratic non-residue.
    #[error("value has no square root")]
    NoSquareRoot,

    /// Inverse of zero.
    #[error("division by zero")]
    DivisionByZero,
}
