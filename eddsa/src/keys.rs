//! Signing and verifying keys for the EdDSA signature scheme.

use curve::{Affine, BaseField, RandomField, ScalarField};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::EddsaError;
use crate::signatures::{Signature, derive_nonce, hash_challenge};

/// A secret signing key for creating EdDSA signatures.
///
/// The key is a base field element used exactly as supplied; it is reduced
/// modulo the subgroup order only when it enters the response scalar.
///
/// # Example
///
/// ```
/// use eddsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningKey {
    scalar: BaseField,
}

/// A public verifying key, `A = G * sk`.
///
/// # Example
///
/// ```
/// use eddsa::SigningKey;
///
/// let mut rng = rand::rng();
/// let signing_key = SigningKey::random(&mut rng);
/// let verifying_key = signing_key.verifying_key();
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Generates a uniformly random signing key.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: BaseField::random(rng),
        }
    }

    pub fn from_scalar(scalar: BaseField) -> Self {
        Self { scalar }
    }

    pub fn scalar(&self) -> BaseField {
        self.scalar
    }

    /// Parse a 32-byte little-endian key; the value must be below `p`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        if bytes.len() != SK_SIZE {
            return Err(EddsaError::InvalidLength {
                expected: SK_SIZE,
                actual: bytes.len(),
            });
        }
        let scalar = BaseField::from_bytes(bytes).map_err(EddsaError::MalformedScalar)?;
        Ok(Self { scalar })
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes()
    }

    /// Derives the public verifying key `G * sk`.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Affine::mul_generator(&self.scalar),
        }
    }

    /// Signs a message.
    ///
    /// Signing is deterministic:
    /// 1. `r = H(sk || msg) mod n`
    /// 2. `R = G * r`
    /// 3. `k = H(R.x || A.x || msg) mod n`
    /// 4. `S = r + k * sk (mod n)`
    ///
    /// # Example
    ///
    /// ```
    /// use eddsa::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let signature = signing_key.sign(b"hello");
    /// assert_eq!(signature, signing_key.sign(b"hello"));
    /// ```
    pub fn sign(&self, msg: &[u8]) -> Signature {
        let nonce = derive_nonce(&self.scalar, msg);
        let r = Affine::mul_generator(&nonce);
        let pk = self.verifying_key();

        let k = hash_challenge(&r, &pk.point, msg);
        let sk = ScalarField::from_limbs_reduced(self.scalar.to_canonical_limbs());
        let s = nonce + k * sk;

        Signature { r, s }
    }
}

impl VerifyingKey {
    /// Wrap a curve point. The point is not checked for subgroup membership.
    pub fn from_point(point: Affine) -> Self {
        Self { point }
    }

    pub fn point(&self) -> Affine {
        self.point
    }

    /// Decode a compressed public point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EddsaError> {
        if bytes.len() != PK_SIZE {
            return Err(EddsaError::InvalidLength {
                expected: PK_SIZE,
                actual: bytes.len(),
            });
        }
        let point = Affine::decompress(bytes).map_err(EddsaError::MalformedPoint)?;
        Ok(Self { point })
    }

    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        self.point.compress()
    }

    /// Verifies a signature on a message.
    ///
    /// Accepts iff `G * S == R + A * k` with `k = H(R.x || A.x || msg)`.
    /// Never fails; use [`VerifyingKey::check`] to learn why a signature was
    /// rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use eddsa::SigningKey;
    ///
    /// let mut rng = rand::rng();
    /// let signing_key = SigningKey::random(&mut rng);
    /// let verifying_key = signing_key.verifying_key();
    ///
    /// let signature = signing_key.sign(b"hello");
    /// assert!(verifying_key.verify(b"hello", &signature));
    /// assert!(!verifying_key.verify(b"hullo", &signature));
    /// ```
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        self.check(msg, sig).is_ok()
    }

    /// Like [`VerifyingKey::verify`], reporting a mismatch as an error.
    pub fn check(&self, msg: &[u8], sig: &Signature) -> Result<(), EddsaError> {
        let k = hash_challenge(&sig.r, &self.point, msg);
        // S*G - k*A == R
        let lhs = Affine::double_scalar_mul_basepoint(&sig.s, &k, &-self.point);

        if lhs == sig.r {
            Ok(())
        } else {
            trace!(msg_len = msg.len(), "signature equation mismatch");
            Err(EddsaError::EquationMismatch)
        }
    }

    /// Decode `R` and `S` from bytes, then verify.
    pub fn verify_encoded(
        &self,
        msg: &[u8],
        r_bytes: &[u8],
        s_bytes: &[u8],
    ) -> Result<(), EddsaError> {
        let sig = Signature::from_parts(r_bytes, s_bytes)?;
        self.check(msg, &sig)
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

/// Generate a key pair using the thread-local RNG.
///
/// A supplied `seed` is used verbatim as the private scalar.
pub fn keygen(seed: Option<BaseField>) -> (SigningKey, VerifyingKey) {
    keygen_with_rng(&mut rand::rng(), seed)
}

/// Generate a key pair, drawing from `rng` only when no seed is given.
pub fn keygen_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    seed: Option<BaseField>,
) -> (SigningKey, VerifyingKey) {
    let sk = match seed {
        Some(scalar) => SigningKey::from_scalar(scalar),
        None => SigningKey::random(rng),
    };
    let vk = sk.verifying_key();
    (sk, vk)
}
