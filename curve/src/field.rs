//! Prime field arithmetic shared by the base field and the scalar field.
//!
//! Elements are stored in Montgomery form as `[u64; 4]` in little-endian limb
//! order. The modulus is selected by a zero-sized [`FieldParams`] type, so
//! coordinates and scalars are distinct types and cannot be mixed.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CurveError;

/// Constants describing one prime modulus.
pub trait FieldParams:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Short name used by `Debug`.
    const NAME: &'static str;
    /// The modulus `m`.
    const MODULUS: [u64; 4];
    /// `2^256 mod m`
    const R: [u64; 4];
    /// `2^512 mod m`
    const R2: [u64; 4];
    /// `-m^{-1} mod 2^64`
    const MU: u64;
    /// `s` such that `m - 1 = 2^s * t` with `t` odd.
    const TWO_ADICITY: u32;
    /// `(t - 1) / 2`
    const TRACE_MINUS_ONE_DIV_TWO: [u64; 4];
    /// A primitive `2^s`-th root of unity (canonical form), `z^t` for a non-residue `z`.
    const ROOT_OF_UNITY: [u64; 4];
}

/// Element of the prime field described by `P`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fp<P: FieldParams> {
    /// Montgomery form: value * R mod m
    limbs: [u64; 4],
    _params: PhantomData<P>,
}

impl<P: FieldParams> Fp<P> {
    pub const ZERO: Self = Fp {
        limbs: [0, 0, 0, 0],
        _params: PhantomData,
    };

    /// The modulus as little-endian limbs, e.g. to multiply by the group order.
    pub const MODULUS_LIMBS: [u64; 4] = P::MODULUS;

    /// One element (in Montgomery form: R mod m)
    pub const ONE: Self = Fp {
        limbs: P::R,
        _params: PhantomData,
    };

    #[inline]
    const fn from_montgomery(limbs: [u64; 4]) -> Self {
        Fp {
            limbs,
            _params: PhantomData,
        }
    }

    /// Create a field element from a `u64` value.
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Self::from_limbs_unchecked([val, 0, 0, 0])
    }

    /// Create a field element from canonical little-endian limbs.
    ///
    /// Fails with [`CurveError::InvalidEncoding`] if the value is not below the modulus.
    pub fn from_canonical_limbs(limbs: [u64; 4]) -> Result<Self, CurveError> {
        if !is_canonical::<P>(limbs) {
            return Err(CurveError::InvalidEncoding);
        }
        Ok(Self::from_limbs_unchecked(limbs))
    }

    /// Reduce an arbitrary 256-bit integer modulo the field order.
    pub fn from_limbs_reduced(limbs: [u64; 4]) -> Self {
        if is_canonical::<P>(limbs) {
            return Self::from_limbs_unchecked(limbs);
        }
        Self::from_biguint(&limbs_to_biguint(&limbs))
    }

    /// Caller guarantees `limbs < MODULUS`.
    #[inline]
    pub(crate) fn from_limbs_unchecked(limbs: [u64; 4]) -> Self {
        montgomery_mul::<P>(limbs, P::R2)
    }

    /// Canonical (non-Montgomery) little-endian limbs.
    #[inline]
    pub fn to_canonical_limbs(&self) -> [u64; 4] {
        montgomery_mul::<P>(self.limbs, [1, 0, 0, 0]).limbs
    }

    /// Reduce a big integer modulo the field order.
    pub fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % Self::modulus();
        let digits = reduced.to_u64_digits();
        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(digits) {
            *limb = digit;
        }
        Self::from_limbs_unchecked(limbs)
    }

    pub fn as_canonical_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.to_canonical_limbs())
    }

    /// The field modulus.
    pub fn modulus() -> BigUint {
        limbs_to_biguint(&P::MODULUS)
    }

    /// Interpret `bytes` as a big-endian integer of any length and reduce it.
    pub fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_be(bytes))
    }

    /// Interpret `bytes` as a little-endian integer of any length and reduce it.
    pub fn from_le_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::from_biguint(&BigUint::from_bytes_le(bytes))
    }

    /// Fixed-width little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let canonical = self.to_canonical_limbs();
        let mut out = [0u8; 32];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(canonical.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Fixed-width big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = self.to_bytes();
        out.reverse();
        out
    }

    /// Parse a 32-byte little-endian encoding.
    ///
    /// Rejects inputs of the wrong length and values not below the modulus.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != 32 {
            return Err(CurveError::InvalidEncoding);
        }
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Self::from_canonical_limbs(limbs)
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    /// Whether the canonical representative is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    #[inline]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^{m-2}`.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        if self.is_zero() {
            return Err(CurveError::DivisionByZero);
        }
        Ok(self.invert_or_zero())
    }

    /// Inverse that maps zero to zero. Only for denominators known to be nonzero.
    pub(crate) fn invert_or_zero(&self) -> Self {
        let exp = sub_mod::<P>(P::MODULUS, [2, 0, 0, 0]);
        self.pow(&exp)
    }

    /// Raise to a 256-bit exponent given as little-endian limbs.
    pub fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut result = Self::ONE;
        for &limb in exp.iter().rev() {
            for shift in (0..64).rev() {
                result = result.square();
                if (limb >> shift) & 1 == 1 {
                    result *= *self;
                }
            }
        }
        result
    }

    /// Legendre symbol: `1` for nonzero squares, `-1` for non-squares, `0` for zero.
    pub fn legendre(&self) -> i8 {
        if self.is_zero() {
            return 0;
        }
        let exp = shr1(sub_mod::<P>(P::MODULUS, [1, 0, 0, 0]));
        if self.pow(&exp) == Self::ONE {
            1
        } else {
            -1
        }
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.legendre() >= 0
    }

    /// Modular square root by Tonelli–Shanks.
    ///
    /// Returns one of the two roots; callers pick the sign they need.
    pub fn sqrt(&self) -> Result<Self, CurveError> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }

        // w = a^((t-1)/2), x = a^((t+1)/2), b = a^t
        let w = self.pow(&P::TRACE_MINUS_ONE_DIV_TWO);
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = Self::from_limbs_unchecked(P::ROOT_OF_UNITY);
        let mut v = P::TWO_ADICITY;

        while b != Self::ONE {
            // Least k with b^(2^k) = 1; k == v means a is a non-residue.
            let mut k = 0;
            let mut b2k = b;
            while b2k != Self::ONE {
                b2k = b2k.square();
                k += 1;
                if k == v {
                    return Err(CurveError::NoSquareRoot);
                }
            }

            let mut t = z;
            for _ in 0..(v - k - 1) {
                t = t.square();
            }
            z = t.square();
            b *= z;
            x *= t;
            v = k;
        }

        if x.square() == *self {
            Ok(x)
        } else {
            Err(CurveError::NoSquareRoot)
        }
    }
}

fn limbs_to_biguint(limbs: &[u64; 4]) -> BigUint {
    let mut bytes = Vec::with_capacity(32);
    for &limb in limbs {
        bytes.extend_from_slice(&limb.to_le_bytes());
    }
    BigUint::from_bytes_le(&bytes)
}

#[inline]
const fn shr1(a: [u64; 4]) -> [u64; 4] {
    [
        (a[0] >> 1) | (a[1] << 63),
        (a[1] >> 1) | (a[2] << 63),
        (a[2] >> 1) | (a[3] << 63),
        a[3] >> 1,
    ]
}

/// Helper: Add two 256-bit numbers mod m
#[inline]
fn add_mod<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let m = P::MODULUS;
    let (s0, borrow) = r0.overflowing_sub(m[0]);
    let (s1, borrow) = borrowing_sub(r1, m[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, m[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, m[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Helper: Subtract two 256-bit numbers mod m
#[inline]
fn sub_mod<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let m = P::MODULUS;
        let (r0, carry) = r0.overflowing_add(m[0]);
        let (r1, carry) = carrying_add(r1, m[1], carry);
        let (r2, carry) = carrying_add(r2, m[2], carry);
        let (r3, _) = carrying_add(r3, m[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

#[inline]
fn neg_mod<P: FieldParams>(a: [u64; 4]) -> [u64; 4] {
    if a == [0, 0, 0, 0] {
        return a;
    }
    sub_mod::<P>(P::MODULUS, a)
}

#[inline]
fn is_canonical<P: FieldParams>(limbs: [u64; 4]) -> bool {
    let m = P::MODULUS;
    let (_, borrow) = limbs[0].overflowing_sub(m[0]);
    let (_, borrow) = borrowing_sub(limbs[1], m[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], m[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], m[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod m
#[inline]
fn montgomery_mul<P: FieldParams>(a: [u64; 4], b: [u64; 4]) -> Fp<P> {
    let modulus = P::MODULUS;
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    for i in 0..4 {
        let k = t[i].wrapping_mul(P::MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    let result = [t[4], t[5], t[6], t[7]];
    if is_canonical::<P>(result) {
        Fp::from_montgomery(result)
    } else {
        Fp::from_montgomery(sub_mod::<P>(result, modulus))
    }
}

impl<P: FieldParams> From<u64> for Fp<P> {
    fn from(val: u64) -> Self {
        Self::from_canonical_u64(val)
    }
}

impl<P: FieldParams> Add for Fp<P> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_montgomery(add_mod::<P>(self.limbs, rhs.limbs))
    }
}

impl<P: FieldParams> AddAssign for Fp<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: FieldParams> Sub for Fp<P> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_montgomery(sub_mod::<P>(self.limbs, rhs.limbs))
    }
}

impl<P: FieldParams> SubAssign for Fp<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: FieldParams> Neg for Fp<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_montgomery(neg_mod::<P>(self.limbs))
    }
}

impl<P: FieldParams> Mul for Fp<P> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul::<P>(self.limbs, rhs.limbs)
    }
}

impl<P: FieldParams> MulAssign for Fp<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<P: FieldParams> Sum for Fp<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for Fp<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<P: FieldParams> Display for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl<P: FieldParams> Debug for Fp<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", P::NAME, self)
    }
}

impl<P: FieldParams> Serialize for Fp<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de, P: FieldParams> Deserialize<'de> for Fp<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}
