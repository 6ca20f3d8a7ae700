//! Error types for the Pedersen hash.

use curve::CurveError;
use thiserror::Error;

/// Errors raised while building a hasher or hashing a preimage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PedersenError {
    /// The preimage does not have the bit length the hasher was built for.
    #[error("preimage length mismatch: expected {expected} bits, got {actual}")]
    LengthMismatch {
        /// Declared length in bits.
        expected: usize,
        /// Supplied length in bits.
        actual: usize,
    },

    /// Generator derivation is impossible for these parameters.
    ///
    /// Raised for over-long personalizations, preimages needing more segments
    /// than the index encoding allows, and exhausted hash-to-point searches.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Curve(#[from] CurveError),
}
