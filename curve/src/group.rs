use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::field::{FieldParams, Fp};

/// Anything that can drive a scalar multiplication: a little-endian 256-bit integer.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

impl<P: FieldParams> ScalarBits for Fp<P> {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

impl ScalarBits for [u64; 4] {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        *self
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Double-and-add over all 256 bits, most significant first.
    ///
    /// Every bit costs one doubling and one addition; a zero bit adds the
    /// identity, so the operation sequence does not depend on the scalar.
    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let table = [Self::identity(), *self];
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).rev() {
                result = result.double();
                result += table[((limb >> shift) & 1) as usize];
            }
        }

        result
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((limb >> shift) & 0xF) as usize;
                result += table[window];
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }

        let mut result = Self::identity();
        for shift in (0..(64 - n.leading_zeros())).rev() {
            result = result.double();
            if (n >> shift) & 1 == 1 {
                result += *self;
            }
        }

        result
    }
}
