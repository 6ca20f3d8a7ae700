//! Error types for the EdDSA signature scheme.

use curve::CurveError;
use thiserror::Error;

/// Why a key, signature or verification was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EddsaError {
    /// An encoded key or signature had the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A compressed point did not decode to a curve point.
    ///
    /// This covers both the public key and the commitment `R` of a signature.
    #[error("malformed point: {0}")]
    MalformedPoint(CurveError),

    /// A scalar was not a canonical encoding below its modulus.
    #[error("malformed scalar: {0}")]
    MalformedScalar(CurveError),

    /// The encodings were well formed but `S*G != R + k*A`.
    #[error("signature equation does not hold")]
    EquationMismatch,
}
