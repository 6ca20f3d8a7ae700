//! Signature type and the SHA-256 nonce and challenge derivations.

use curve::{Affine, BaseField, COMPRESSED_SIZE, ScalarField};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{HASH_INT_SIZE, SIG_SIZE};
use crate::errors::EddsaError;

/// An EdDSA signature consisting of a curve point and a scalar.
///
/// The signature is a pair `(R, S)` where:
/// - `R` is the commitment point `G * r`
/// - `S` is the response `r + k * sk (mod n)`
///
/// It satisfies the verification equation `G * S == R + A * k` where
/// `k = H(R.x || A.x || msg)` and `A` is the signer's public point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment point R = G * r, where r is the derived nonce
    pub r: Affine,
    /// The response scalar S = r + k * sk
    pub s: ScalarField,
}

impl Signature {
    /// Serialize as compressed `R` followed by `S` little-endian.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..COMPRESSED_SIZE].copy_from_slice(&self.r.compress());
        out[COMPRESSED_SIZE..].copy_from_slice(&self.s.to_bytes());
        out
    }

    /// Parse a 64-byte signature.
    ///
    /// `R` must decompress to a curve point and `S` must be canonical,
    /// i.e. strictly below the subgroup order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        if bytes.len() != SIG_SIZE {
            return Err(EddsaError::InvalidLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }
        Self::from_parts(&bytes[..COMPRESSED_SIZE], &bytes[COMPRESSED_SIZE..])
    }

    /// Parse the two halves of a signature separately.
    ///
    /// `S` must be below the subgroup order `n`. Signers that reduce `S`
    /// modulo the full curve order `8n` can emit values in `[n, 8n)`; use
    /// [`Signature::from_parts_reduced`] for those.
    pub fn from_parts(r_bytes: &[u8], s_bytes: &[u8]) -> Result<Self, EddsaError> {
        check_part_lengths(r_bytes, s_bytes)?;
        let r = Affine::decompress(r_bytes).map_err(EddsaError::MalformedPoint)?;
        let s = ScalarField::from_bytes(s_bytes).map_err(EddsaError::MalformedScalar)?;
        Ok(Signature { r, s })
    }

    /// Like [`Signature::from_parts`], but reduces any 32-byte `S` modulo `n`.
    ///
    /// `G` has order `n`, so the reduced signature verifies exactly when the
    /// original does.
    pub fn from_parts_reduced(r_bytes: &[u8], s_bytes: &[u8]) -> Result<Self, EddsaError> {
        check_part_lengths(r_bytes, s_bytes)?;
        let r = Affine::decompress(r_bytes).map_err(EddsaError::MalformedPoint)?;
        let s = ScalarField::from_le_bytes_mod_order(s_bytes);
        Ok(Signature { r, s })
    }
}

fn check_part_lengths(r_bytes: &[u8], s_bytes: &[u8]) -> Result<(), EddsaError> {
    if r_bytes.len() != COMPRESSED_SIZE {
        return Err(EddsaError::InvalidLength {
            expected: COMPRESSED_SIZE,
            actual: r_bytes.len(),
        });
    }
    if s_bytes.len() != HASH_INT_SIZE {
        return Err(EddsaError::InvalidLength {
            expected: HASH_INT_SIZE,
            actual: s_bytes.len(),
        });
    }
    Ok(())
}

/// Deterministic nonce `r = H(be32(sk) || msg) mod n`.
pub fn derive_nonce(secret: &BaseField, msg: &[u8]) -> ScalarField {
    let digest = Sha256::new()
        .chain_update(secret.to_be_bytes())
        .chain_update(msg)
        .finalize();
    ScalarField::from_be_bytes_mod_order(&digest)
}

/// Fiat-Shamir challenge `k = H(be32(R.x) || be32(A.x) || msg) mod n`.
///
/// Only the `x` coordinates of the points are hashed.
pub fn hash_challenge(r: &Affine, pk: &Affine, msg: &[u8]) -> ScalarField {
    let digest = Sha256::new()
        .chain_update(r.x().to_be_bytes())
        .chain_update(pk.x().to_be_bytes())
        .chain_update(msg)
        .finalize();
    ScalarField::from_be_bytes_mod_order(&digest)
}
