//! Deterministic derivation of the Pedersen generators.

use curve::{Affine, BaseField, Projective};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::constants::{
    HASH_TO_POINT_ATTEMPTS, LOOKUP_SIZE, MAX_PERSONALIZATION_LEN, MAX_SEGMENTS,
    WINDOWS_PER_SEGMENT,
};
use crate::errors::PedersenError;

/// Map arbitrary bytes to a point of the prime-order subgroup.
///
/// `y` starts at `SHA-256(entropy)` read big-endian and reduced mod `p`, and
/// is incremented until it lies on the curve. The even-`x` point is taken and
/// multiplied by the cofactor; a small-order candidate is skipped.
pub fn hash_to_point(entropy: &[u8]) -> Result<Affine, PedersenError> {
    let digest = Sha256::digest(entropy);
    let mut y = BaseField::from_be_bytes_mod_order(&digest);

    for attempt in 0..HASH_TO_POINT_ATTEMPTS {
        match Affine::from_y(y, None) {
            Ok(candidate) => {
                let point = candidate.mul_by_cofactor();
                if !point.is_identity() {
                    return Ok(point);
                }
                trace!(attempt, "hash-to-point candidate has small order");
            }
            Err(err) => trace!(attempt, %err, "hash-to-point candidate rejected"),
        }
        y += BaseField::ONE;
    }

    Err(PedersenError::Configuration(format!(
        "no curve point found after {HASH_TO_POINT_ATTEMPTS} attempts"
    )))
}

/// Base point of segment `segment` for a personalization.
///
/// Hashes `personalization` right-padded with spaces to 28 bytes, followed by
/// the segment index as four uppercase hex digits.
pub fn segment_basepoint(personalization: &[u8], segment: usize) -> Result<Affine, PedersenError> {
    if personalization.len() > MAX_PERSONALIZATION_LEN {
        return Err(PedersenError::Configuration(format!(
            "personalization is {} bytes, at most {MAX_PERSONALIZATION_LEN} allowed",
            personalization.len()
        )));
    }
    if segment >= MAX_SEGMENTS {
        return Err(PedersenError::Configuration(format!(
            "segment index {segment} exceeds {:#x}",
            MAX_SEGMENTS - 1
        )));
    }

    let mut data = Vec::with_capacity(MAX_PERSONALIZATION_LEN + 4);
    data.extend_from_slice(personalization);
    data.resize(MAX_PERSONALIZATION_LEN, b' ');
    data.extend_from_slice(format!("{segment:04X}").as_bytes());

    hash_to_point(&data)
}

/// Lookup table with one row per window: `[g, 2g, 3g, 4g]`.
///
/// Window `w` uses `g = basepoint(w / 62) * 16^(w % 62)`.
pub(crate) fn window_table(
    personalization: &[u8],
    windows: usize,
) -> Result<Vec<[Affine; LOOKUP_SIZE]>, PedersenError> {
    let segments = windows.div_ceil(WINDOWS_PER_SEGMENT);
    if segments > MAX_SEGMENTS {
        return Err(PedersenError::Configuration(format!(
            "{windows} windows need {segments} segments, at most {MAX_SEGMENTS} allowed"
        )));
    }

    let mut multiples = Vec::with_capacity(windows * LOOKUP_SIZE);
    let mut current = Projective::IDENTITY;

    for window in 0..windows {
        if window % WINDOWS_PER_SEGMENT == 0 {
            let base = segment_basepoint(personalization, window / WINDOWS_PER_SEGMENT)?;
            current = Projective::from_affine(&base);
        } else {
            current = current.double().double().double().double();
        }

        let twice = current.double();
        multiples.push(current);
        multiples.push(twice);
        multiples.push(twice + current);
        multiples.push(twice.double());
    }

    let normalized = Projective::batch_normalize(&multiples);
    Ok(normalized
        .chunks_exact(LOOKUP_SIZE)
        .map(|row| [row[0], row[1], row[2], row[3]])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::Group;

    #[test]
    fn test_hash_to_point_is_in_subgroup() {
        let p = hash_to_point(b"some entropy").unwrap();
        assert!(p.is_on_curve());
        assert!(p.is_in_prime_subgroup());
        assert!(!p.is_identity());
        assert_eq!(p, hash_to_point(b"some entropy").unwrap());
    }

    #[test]
    fn test_segment_basepoint_vector() {
        let p = segment_basepoint(b"test", 0).unwrap();
        assert_eq!(
            hex::encode(p.compress()),
            "ffd2aaf1514199fb6cec4dee13a66eab3bb04e201728a7acdaadafb3a38bba21"
        );
    }

    #[test]
    fn test_segment_basepoint_uses_padded_name() {
        let mut padded = b"test".to_vec();
        padded.resize(MAX_PERSONALIZATION_LEN, b' ');
        padded.extend_from_slice(b"0001");
        assert_eq!(
            segment_basepoint(b"test", 1).unwrap(),
            hash_to_point(&padded).unwrap()
        );
    }

    #[test]
    fn test_segments_are_distinct() {
        let a = segment_basepoint(b"test", 0).unwrap();
        let b = segment_basepoint(b"test", 1).unwrap();
        let c = segment_basepoint(b"tesu", 0).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rejects_long_personalization() {
        let name = [b'x'; MAX_PERSONALIZATION_LEN + 1];
        assert!(matches!(
            segment_basepoint(&name, 0),
            Err(PedersenError::Configuration(_))
        ));
        assert!(segment_basepoint(&name[..MAX_PERSONALIZATION_LEN], 0).is_ok());
    }

    #[test]
    fn test_rejects_segment_overflow() {
        assert!(matches!(
            segment_basepoint(b"test", MAX_SEGMENTS),
            Err(PedersenError::Configuration(_))
        ));
    }

    #[test]
    fn test_window_table_rejects_too_many_segments() {
        for windows in [MAX_SEGMENTS * WINDOWS_PER_SEGMENT + 1, usize::MAX] {
            assert!(matches!(
                window_table(b"test", windows),
                Err(PedersenError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_window_table_layout() {
        let table = window_table(b"test", WINDOWS_PER_SEGMENT + 2).unwrap();
        assert_eq!(table.len(), WINDOWS_PER_SEGMENT + 2);

        let base = segment_basepoint(b"test", 0).unwrap();
        assert_eq!(table[0][0], base);
        assert_eq!(table[1][0], base.mul_u64(16));
        for row in &table {
            assert_eq!(row[1], row[0].double());
            assert_eq!(row[2], row[0].mul_u64(3));
            assert_eq!(row[3], row[0].mul_u64(4));
        }

        let next = segment_basepoint(b"test", 1).unwrap();
        assert_eq!(table[WINDOWS_PER_SEGMENT][0], next);
        assert_eq!(table[WINDOWS_PER_SEGMENT + 1][0], next.mul_u64(16));
    }
}
