// BabyJubJub, the twisted Edwards curve embedded in BN254:
//   E: 168700*x^2 + y^2 = 1 + 168696*x^2*y^2   over F_p
//   p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
// Curve order: 8 * n
// Prime subgroup order n: 2736030358979909402780800718157159386076813972158567259200215660948447373041
// a is a square and d is not, so the addition law is complete.
// Generator of the prime-order subgroup:
//   x = 16540640123574156134436876038791482806971768689494387082833631921987005038935
//   y = 20819045374670962167435360035096875258406992893633759881276124905556507972311

use crate::errors::CurveError;
use crate::projective::Projective;
use crate::{double_scalar_mul, BaseField, Group, ScalarBits, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Curve cofactor.
pub const COFACTOR: u64 = 8;

/// Size of a compressed point in bytes.
pub const COMPRESSED_SIZE: usize = 32;

const GENERATOR_X: [u64; 4] = [
    0x79f2349047d5c157,
    0xc88fee14d607cbe7,
    0x6e35bc47bd9afe6c,
    0x2491aba8d3a191a7,
];

const GENERATOR_Y: [u64; 4] = [
    0x348dd8f7f99152d7,
    0xf9a9d4ed0cb0c1d1,
    0x18dbddfd24c35583,
    0x2e07297f8d3c3d78,
];

/// Affine point on the curve.
///
/// Every value of this type satisfies the curve equation: the public
/// constructors check it, and the group law preserves it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Affine {
    x: BaseField,
    y: BaseField,
}

impl Affine {
    /// The 'a' coefficient: 168700
    #[inline]
    pub fn curve_a() -> BaseField {
        BaseField::from_canonical_u64(168700)
    }

    /// The 'd' coefficient: 168696
    #[inline]
    pub fn curve_d() -> BaseField {
        BaseField::from_canonical_u64(168696)
    }

    /// The neutral element (0, 1)
    pub const IDENTITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ONE,
    };

    /// Create a point, checking the curve equation.
    pub fn new(x: BaseField, y: BaseField) -> Result<Self, CurveError> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CurveError::PointNotOnCurve)
        }
    }

    #[inline]
    pub(crate) fn new_unchecked(x: BaseField, y: BaseField) -> Self {
        Affine { x, y }
    }

    #[inline]
    pub fn x(&self) -> BaseField {
        self.x
    }

    #[inline]
    pub fn y(&self) -> BaseField {
        self.y
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == BaseField::ONE
    }

    /// Check if a point is on the curve: a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let lhs = Self::curve_a() * x2 + y2;
        let rhs = BaseField::ONE + Self::curve_d() * x2 * y2;
        lhs == rhs
    }

    /// Base point of the prime-order subgroup.
    pub fn generator() -> Self {
        Affine::new_unchecked(
            BaseField::from_limbs_unchecked(GENERATOR_X),
            BaseField::from_limbs_unchecked(GENERATOR_Y),
        )
    }

    /// Recover the point with the given `y`.
    ///
    /// `x^2 = (y^2 - 1) / (d*y^2 - a)`. With `sign = Some(bit)` the root whose
    /// parity equals `bit` is chosen; with `None` the even root is chosen.
    pub fn from_y(y: BaseField, sign: Option<bool>) -> Result<Self, CurveError> {
        let y2 = y.square();
        let numerator = y2 - BaseField::ONE;
        // a/d is a non-square, so the denominator only vanishes off the curve.
        let denominator = Self::curve_d() * y2 - Self::curve_a();
        let x2 = numerator * denominator.inverse()?;

        let mut x = x2.sqrt()?;
        let want_odd = sign.unwrap_or(false);
        if x.is_odd() != want_odd {
            x = -x;
        }
        if x.is_odd() != want_odd {
            // x = 0 has no odd representative
            return Err(CurveError::InvalidEncoding);
        }

        Self::new(x, y)
    }

    /// Encode `y` little-endian with the parity of `x` in bit 255.
    pub fn compress(&self) -> [u8; COMPRESSED_SIZE] {
        let mut out = self.y.to_bytes();
        if self.x.is_odd() {
            out[31] |= 0x80;
        }
        out
    }

    /// Inverse of [`Affine::compress`].
    pub fn decompress(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != COMPRESSED_SIZE {
            return Err(CurveError::InvalidEncoding);
        }

        let mut y_bytes = [0u8; COMPRESSED_SIZE];
        y_bytes.copy_from_slice(bytes);
        let sign = y_bytes[31] & 0x80 != 0;
        y_bytes[31] &= 0x7f;

        let y = BaseField::from_bytes(&y_bytes)?;
        match Self::from_y(y, Some(sign)) {
            Err(CurveError::NoSquareRoot) | Err(CurveError::DivisionByZero) => {
                Err(CurveError::InvalidEncoding)
            }
            other => other,
        }
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        Projective::from_affine(self).double().to_affine()
    }

    /// Negate a point: (-x, y).
    pub fn negate(&self) -> Self {
        Affine::new_unchecked(-self.x, self.y)
    }

    /// Multiply by the cofactor, projecting into the prime-order subgroup.
    pub fn mul_by_cofactor(&self) -> Self {
        Projective::from_affine(self).double().double().double().to_affine()
    }

    /// Whether `n * P` is the neutral element.
    pub fn is_in_prime_subgroup(&self) -> bool {
        let order = ScalarField::MODULUS_LIMBS;
        Projective::from_affine(self).scalar_mul(&order).is_identity()
    }

    /// Whether the point is annihilated by the cofactor.
    pub fn is_small_order(&self) -> bool {
        self.mul_by_cofactor().is_identity()
    }

    /// Multiply the fixed generator.
    pub fn mul_generator<S: ScalarBits + ?Sized>(scalar: &S) -> Self {
        Projective::generator().scalar_mul(scalar).to_affine()
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint<A, B>(a: &A, b: &B, point: &Self) -> Self
    where
        A: ScalarBits + ?Sized,
        B: ScalarBits + ?Sized,
    {
        double_scalar_mul(a, &Projective::generator(), b, &Projective::from_affine(point))
            .to_affine()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Group for Affine {
    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        Self::is_identity(self)
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    // Run the ladder in extended coordinates and normalize once.
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        Projective::from_affine(self).scalar_mul(scalar).to_affine()
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        Projective::from_affine(self)
            .scalar_mul_windowed(scalar)
            .to_affine()
    }

    fn mul_u64(&self, n: u64) -> Self {
        Projective::from_affine(self).mul_u64(n).to_affine()
    }
}

// Twisted Edwards addition:
//   x3 = (x1*y2 + y1*x2) / (1 + d*x1*x2*y1*y2)
//   y3 = (y1*y2 - a*x1*x2) / (1 - d*x1*x2*y1*y2)
impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        (Projective::from_affine(&self) + Projective::from_affine(&other)).to_affine()
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<S: ScalarBits> Mul<&S> for Affine {
    type Output = Self;

    fn mul(self, scalar: &S) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

impl Serialize for Affine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.compress().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Affine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <[u8; COMPRESSED_SIZE]>::deserialize(deserializer)?;
        Self::decompress(&bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn field(decimal: &str) -> BaseField {
        BaseField::from_biguint(&BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap())
    }

    #[test]
    fn test_identity() {
        let id = <Affine as Group>::identity();
        assert!(id.is_identity());
        assert!(id.is_on_curve());

        let g = Affine::generator();
        assert_eq!(g + id, g);
        assert_eq!(id + g, g);
        assert_eq!(id + id, id);
    }

    #[test]
    fn test_generator_constants() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "Generator point is not on the curve");
        assert_eq!(
            g.x(),
            field("16540640123574156134436876038791482806971768689494387082833631921987005038935")
        );
        assert_eq!(
            g.y(),
            field("20819045374670962167435360035096875258406992893633759881276124905556507972311")
        );
    }

    #[test]
    fn test_generator_has_prime_order() {
        let g = Affine::generator();
        assert!(g.is_in_prime_subgroup());
        assert!(!g.is_small_order());
        let n = ScalarField::MODULUS_LIMBS;
        assert_eq!(g.scalar_mul(&n), Affine::IDENTITY);
    }

    #[test]
    fn test_new_rejects_off_curve() {
        let g = Affine::generator();
        assert_eq!(
            Affine::new(g.x(), g.y() + BaseField::ONE),
            Err(CurveError::PointNotOnCurve)
        );
        assert_eq!(Affine::new(g.x(), g.y()), Ok(g));
    }

    #[test]
    fn test_point_doubling() {
        let g = Affine::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(g + g, g2);
        assert_eq!(
            hex::encode(g2.compress()),
            "0f149fbc582019b869da8799f6e9878c6433a85f107023ff630b49c2a725442c"
        );
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, Affine::IDENTITY);
        assert_eq!(g - g, Affine::IDENTITY);
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = Affine::generator();
        assert_eq!(g.scalar_mul(&ScalarField::ZERO), Affine::IDENTITY);
        assert_eq!(g.scalar_mul(&ScalarField::ONE), g);
        assert_eq!(g.mul_u64(0), Affine::IDENTITY);
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Affine::generator();
        let scalar = ScalarField::from_canonical_u64(5);
        let expected = g + g + g + g + g;
        assert_eq!(g.scalar_mul(&scalar), expected);
        assert_eq!(g * &scalar, expected);
    }

    #[test]
    fn test_distributivity() {
        let g = Affine::generator();
        let a = ScalarField::from_canonical_u64(3);
        let b = ScalarField::from_canonical_u64(5);

        let left = g.scalar_mul(&(a + b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);
        assert_eq!(left, right);
    }

    #[test]
    fn test_windowed_scalar_mul() {
        let g = Affine::generator();
        let scalar = ScalarField::from_canonical_u64(123456);

        let result1 = g.scalar_mul(&scalar);
        let result2 = g.scalar_mul_windowed(&scalar);
        assert_eq!(result1, result2);
        assert_eq!(result1, g.mul_u64(123456));
    }

    #[test]
    fn test_base_field_scalar_matches_reduced_scalar() {
        // G has order n, so a base-field scalar acts through its residue mod n.
        let k = -BaseField::ONE;
        let reduced = ScalarField::from_limbs_reduced(k.to_canonical_limbs());
        let g = Affine::generator();
        assert_eq!(g.scalar_mul(&k), g.scalar_mul(&reduced));
    }

    #[test]
    fn test_compress_generator() {
        assert_eq!(
            hex::encode(Affine::generator().compress()),
            "d75291f9f7d88d34d1c1b00cedd4a9f98355c324fddddb18783d3c8d7f2907ae"
        );
    }

    #[test]
    fn test_compress_roundtrip() {
        let g = Affine::generator();
        for k in [1u64, 2, 3, 1000, 987_654_321] {
            let p = g.mul_u64(k);
            assert_eq!(Affine::decompress(&p.compress()).unwrap(), p);
            let neg = -p;
            assert_eq!(Affine::decompress(&neg.compress()).unwrap(), neg);
        }
        assert_eq!(
            Affine::decompress(&Affine::IDENTITY.compress()).unwrap(),
            Affine::IDENTITY
        );
    }

    #[test]
    fn test_decompress_without_root_fails() {
        // y = 2 gives a non-residue x^2
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert_eq!(Affine::decompress(&bytes), Err(CurveError::InvalidEncoding));
        assert_eq!(
            Affine::from_y(BaseField::from_canonical_u64(2), None),
            Err(CurveError::NoSquareRoot)
        );
    }

    #[test]
    fn test_decompress_rejects_bad_input() {
        assert_eq!(Affine::decompress(&[0u8; 31]), Err(CurveError::InvalidEncoding));

        // y >= p
        let mut bytes = [0xffu8; 32];
        bytes[31] = 0x7f;
        assert_eq!(Affine::decompress(&bytes), Err(CurveError::InvalidEncoding));

        // identity with the sign bit set: x = 0 has no odd root
        let mut bytes = Affine::IDENTITY.compress();
        bytes[31] |= 0x80;
        assert_eq!(Affine::decompress(&bytes), Err(CurveError::InvalidEncoding));
    }

    #[test]
    fn test_from_y_picks_requested_parity() {
        let y = BaseField::from_canonical_u64(3);
        let even = Affine::from_y(y, None).unwrap();
        let odd = Affine::from_y(y, Some(true)).unwrap();
        assert!(!even.x().is_odd());
        assert!(odd.x().is_odd());
        assert_eq!(even, -odd);
        assert_eq!(Affine::from_y(y, Some(false)).unwrap(), even);
    }

    #[test]
    fn test_cofactor_clearing() {
        let p = Affine::from_y(BaseField::from_canonical_u64(3), None).unwrap();
        let cleared = p.mul_by_cofactor();
        assert!(cleared.is_in_prime_subgroup());
        assert_eq!(cleared, p.mul_u64(COFACTOR));
    }

    #[test]
    fn test_small_order_point() {
        // (0, -1) has order 2
        let p = Affine::new(BaseField::ZERO, -BaseField::ONE).unwrap();
        assert!(p.is_small_order());
        assert!(!p.is_in_prime_subgroup());
        assert_eq!(p + p, Affine::IDENTITY);
    }

    #[test]
    fn test_double_scalar_mul_basepoint() {
        let g = Affine::generator();
        let p = g.mul_u64(77);
        let a = ScalarField::from_canonical_u64(11);
        let b = ScalarField::from_canonical_u64(13);
        let expected = g.scalar_mul(&a) + p.scalar_mul(&b);
        assert_eq!(Affine::double_scalar_mul_basepoint(&a, &b, &p), expected);
        assert_eq!(Affine::mul_generator(&a), g.scalar_mul(&a));
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Affine::generator().mul_u64(42);
        let bytes = bincode::serialize(&p).unwrap();
        let back: Affine = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, p);
    }
}
