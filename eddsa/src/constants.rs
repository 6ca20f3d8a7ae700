//! Sizes of the serialized EdDSA objects.

/// Size of a serialized verifying key in bytes.
///
/// A verifying key is a compressed BabyJubJub point: `y` little-endian with
/// the parity of `x` in the top bit.
pub const PK_SIZE: usize = 32;

/// Size of a serialized signing key in bytes.
///
/// A signing key is a base field element, stored little-endian.
pub const SK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - A compressed point R (32 bytes)
/// - A scalar S, little-endian (32 bytes)
pub const SIG_SIZE: usize = 64;

/// Width of the big-endian integer encoding fed to SHA-256.
pub(crate) const HASH_INT_SIZE: usize = 32;
