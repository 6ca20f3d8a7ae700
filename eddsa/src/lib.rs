//! EdDSA signatures over the BabyJubJub curve.
//!
//! This library implements a deterministic EdDSA variant using:
//! - The BabyJubJub twisted Edwards curve over the BN254 scalar field
//! - SHA-256 for the nonce and the Fiat-Shamir challenge
//! - Raw byte strings as messages
//!
//! # Example
//!
//! ```
//! use eddsa::{Signature, keygen};
//!
//! // Generate a random key pair
//! let (signing_key, verifying_key) = keygen(None);
//!
//! // Sign a message
//! let signature = signing_key.sign(b"hello");
//!
//! // Ship the signature as 64 bytes and verify on the other side
//! let bytes = signature.to_bytes();
//! let decoded = Signature::from_bytes(&bytes).expect("well-formed signature");
//! assert!(verifying_key.verify(b"hello", &decoded));
//! ```
//!
//! # Encoding
//!
//! Integers are hashed as 32-byte big-endian values and points contribute
//! only their `x` coordinate. Keys and signatures serialize little-endian,
//! with points in the 32-byte compressed form.

mod constants;
mod errors;
mod keys;
mod signatures;


pub use constants::{PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::EddsaError;
pub use keys::{SigningKey, VerifyingKey, keygen, keygen_with_rng};
pub use signatures::{Signature, derive_nonce, hash_challenge};
