//! Parameters of the windowed Pedersen hash.

/// Bits consumed per window.
pub const WINDOW_BITS: usize = 3;

/// Points precomputed per window: `1·g, 2·g, 3·g, 4·g`.
pub const LOOKUP_SIZE: usize = 4;

/// Windows sharing one segment base point.
///
/// Each window scales the previous generator by `2^4`, so a segment spans
/// at most `4 * 62 < log2(n)` bits of scalar.
pub const WINDOWS_PER_SEGMENT: usize = 62;

/// Personalizations are space-padded to this length before hashing.
pub const MAX_PERSONALIZATION_LEN: usize = 28;

/// Segment indices are encoded as four hex digits.
pub const MAX_SEGMENTS: usize = 0x1_0000;

/// Upper bound on `y` candidates tried by hash-to-point.
pub const HASH_TO_POINT_ATTEMPTS: usize = 256;

/// Personalization used when none is configured.
pub const DEFAULT_PERSONALIZATION: &str = "test";

/// Preimage size in bytes used when none is configured.
pub const DEFAULT_PREIMAGE_BYTES: usize = 64;

/// Size of a digest (a compressed curve point).
pub const DIGEST_SIZE: usize = 32;
