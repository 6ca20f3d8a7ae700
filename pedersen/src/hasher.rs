//! The windowed Pedersen hash.

use curve::{Affine, Projective};
use tracing::debug;

use crate::constants::{
    DIGEST_SIZE, LOOKUP_SIZE, MAX_SEGMENTS, WINDOWS_PER_SEGMENT, WINDOW_BITS,
};
use crate::errors::PedersenError;
use crate::generators::window_table;
use crate::params::PedersenParams;

/// Pedersen hasher for preimages of one fixed bit length.
///
/// The generator table is derived once from the personalization and then
/// only read, so a hasher can be shared across threads and reused for any
/// number of preimages.
///
/// # Example
///
/// ```
/// use pedersen::PedersenHasher;
///
/// let hasher = PedersenHasher::new(b"test", 64).unwrap();
/// let digest = hasher.digest(&[0u8; 64]).unwrap();
/// assert_eq!(digest.len(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct PedersenHasher {
    personalization: Vec<u8>,
    bit_length: usize,
    table: Vec<[Affine; LOOKUP_SIZE]>,
}

impl PedersenHasher {
    /// Build a hasher for preimages of exactly `preimage_bytes` bytes.
    pub fn new(personalization: &[u8], preimage_bytes: usize) -> Result<Self, PedersenError> {
        let bit_length = preimage_bytes.checked_mul(8).ok_or_else(|| {
            PedersenError::Configuration(format!("preimage of {preimage_bytes} bytes is too long"))
        })?;
        Self::with_bit_length(personalization, bit_length)
    }

    /// Build a hasher for bit strings of exactly `bit_length` bits.
    pub fn with_bit_length(
        personalization: &[u8],
        bit_length: usize,
    ) -> Result<Self, PedersenError> {
        if bit_length == 0 {
            return Err(PedersenError::Configuration(
                "preimage must contain at least one bit".to_owned(),
            ));
        }

        let windows = bit_length.div_ceil(WINDOW_BITS);
        let segments = windows.div_ceil(WINDOWS_PER_SEGMENT);
        if segments > MAX_SEGMENTS {
            return Err(PedersenError::Configuration(format!(
                "{bit_length} bits need {segments} generator segments, at most {MAX_SEGMENTS} allowed"
            )));
        }

        let table = window_table(personalization, windows)?;

        debug!(
            personalization = %String::from_utf8_lossy(personalization),
            bit_length,
            windows,
            segments,
            "derived pedersen generator table"
        );

        Ok(Self {
            personalization: personalization.to_vec(),
            bit_length,
            table,
        })
    }

    pub fn from_params(params: &PedersenParams) -> Result<Self, PedersenError> {
        Self::new(params.personalization.as_bytes(), params.preimage_bytes)
    }

    pub fn personalization(&self) -> &[u8] {
        &self.personalization
    }

    /// Declared preimage length in bits.
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Generator of each window, in window order.
    pub fn generators(&self) -> impl Iterator<Item = Affine> + '_ {
        self.table.iter().map(|row| row[0])
    }

    /// Hash a bit string of the declared length.
    pub fn hash_bits(&self, bits: &[bool]) -> Result<Affine, PedersenError> {
        if bits.len() != self.bit_length {
            return Err(PedersenError::LengthMismatch {
                expected: self.bit_length,
                actual: bits.len(),
            });
        }

        let mut acc = Projective::IDENTITY;
        for (window, row) in windows(bits).into_iter().zip(self.table.iter()) {
            let point = Projective::from_affine(&row[usize::from(window & 0b011)]);
            if window & 0b100 != 0 {
                acc -= point;
            } else {
                acc += point;
            }
        }

        Ok(acc.to_affine())
    }

    /// Hash bytes, read most significant bit first.
    pub fn hash_bytes(&self, preimage: &[u8]) -> Result<Affine, PedersenError> {
        if self.bit_length % 8 != 0 || preimage.len() != self.bit_length / 8 {
            return Err(PedersenError::LengthMismatch {
                expected: self.bit_length,
                actual: preimage.len().saturating_mul(8),
            });
        }
        self.hash_bits(&bytes_to_bits(preimage))
    }

    /// Compressed 32-byte digest of `preimage`.
    pub fn digest(&self, preimage: &[u8]) -> Result<[u8; DIGEST_SIZE], PedersenError> {
        Ok(self.hash_bytes(preimage)?.compress())
    }

    /// Digest many preimages against the same generator table.
    ///
    /// Stops at the first preimage of the wrong length.
    pub fn hash_batch<I>(&self, preimages: I) -> Result<Vec<[u8; DIGEST_SIZE]>, PedersenError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        preimages
            .into_iter()
            .map(|preimage| self.digest(preimage.as_ref()))
            .collect()
    }
}

/// Split bytes into bits, most significant bit of each byte first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect()
}

/// 3-bit windows of a bit string; the first bit of a window is its least
/// significant bit. A short final window is padded with zeros.
///
/// Window `(b0, b1, b2)` selects the coefficient `(1 + b0 + 2*b1) * (-1)^b2`.
pub fn windows(bits: &[bool]) -> Vec<u8> {
    bits.chunks(WINDOW_BITS)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i))
        })
        .collect()
}
