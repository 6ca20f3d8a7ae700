//! Pedersen hash over BabyJubJub.
//!
//! Maps a fixed-length bit string to a curve point as a sum of
//! personalization-derived generators weighted by small signed coefficients.
//! The construction only uses curve additions with a fixed table, which keeps
//! it cheap to verify inside an arithmetic circuit.
//!
//! # Example
//!
//! ```
//! use pedersen::PedersenHasher;
//!
//! // Derive the generator table once
//! let hasher = PedersenHasher::new(b"test", 64).unwrap();
//!
//! // Hash any number of 64-byte preimages against it
//! let a = hasher.digest(&[0u8; 64]).unwrap();
//! let b = hasher.digest(&[1u8; 64]).unwrap();
//! assert_ne!(a, b);
//!
//! // A different personalization gives an unrelated digest
//! let other = PedersenHasher::new(b"other", 64).unwrap();
//! assert_ne!(other.digest(&[0u8; 64]).unwrap(), a);
//! ```

mod constants;
mod errors;
mod generators;
mod hasher;
mod params;

#[cfg(test)]
mod tests;

pub use constants::{
    DEFAULT_PERSONALIZATION, DEFAULT_PREIMAGE_BYTES, DIGEST_SIZE, MAX_PERSONALIZATION_LEN,
    WINDOWS_PER_SEGMENT, WINDOW_BITS,
};
pub use errors::PedersenError;
pub use generators::{hash_to_point, segment_basepoint};
pub use hasher::{bytes_to_bits, windows, PedersenHasher};
pub use params::PedersenParams;
