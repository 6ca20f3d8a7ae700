use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::field::{FieldParams, Fp};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl<P: FieldParams> RandomField for Fp<P> {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

/// Uniform over `[0, modulus)` by rejection on values masked to the modulus bit length.
impl<P: FieldParams> Distribution<Fp<P>> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P> {
        let top_mask = u64::MAX >> P::MODULUS[3].leading_zeros();
        loop {
            let mut limbs: [u64; 4] = rng.random();
            limbs[3] &= top_mask;

            if let Ok(value) = Fp::from_canonical_limbs(limbs) {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseField, ScalarField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_are_canonical_and_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = BaseField::random(&mut rng);
        let b = BaseField::random(&mut rng);
        assert_ne!(a, b);
        assert!(a.as_canonical_biguint() < BaseField::modulus());

        let s = ScalarField::random(&mut rng);
        assert!(s.as_canonical_biguint() < ScalarField::modulus());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = ScalarField::random(&mut StdRng::seed_from_u64(99));
        let b = ScalarField::random(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
