use crate::group::ScalarBits;
use crate::projective::Projective;

/// Compute a * P + b * Q with one shared doubling chain (Shamir's trick).
pub fn double_scalar_mul<A, B>(a: &A, p: &Projective, b: &B, q: &Projective) -> Projective
where
    A: ScalarBits + ?Sized,
    B: ScalarBits + ?Sized,
{
    let table = [Projective::IDENTITY, *p, *q, *p + *q];

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = Projective::IDENTITY;

    for limb_idx in (0..4).rev() {
        let a_limb = a_limbs[limb_idx];
        let b_limb = b_limbs[limb_idx];
        for shift in (0..64).rev() {
            result = result.double();

            let index = ((a_limb >> shift) & 1) | (((b_limb >> shift) & 1) << 1);
            result += table[index as usize];
        }
    }

    result
}
