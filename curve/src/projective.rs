use crate::affine::Affine;
use crate::{BaseField, Group};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Point in extended twisted Edwards coordinates (X:Y:Z:T).
///
/// `x = X/Z`, `y = Y/Z` and `T = X*Y/Z`. The neutral element is (0:1:1:0).
/// Addition uses the complete formulas of Hisil–Wong–Carter–Dawson, valid for
/// every pair of points because `a` is a square and `d` is not.
#[derive(Copy, Clone, Debug)]
pub struct Projective {
    x: BaseField,
    y: BaseField,
    z: BaseField,
    t: BaseField,
}

impl Projective {
    /// The neutral element (0:1:1:0)
    pub const IDENTITY: Self = Projective {
        x: BaseField::ZERO,
        y: BaseField::ONE,
        z: BaseField::ONE,
        t: BaseField::ZERO,
    };

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine {
        // Z never vanishes on points built through the complete formulas.
        let z_inv = self.z.invert_or_zero();
        Affine::new_unchecked(self.x * z_inv, self.y * z_inv)
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        let (x, y) = (point.x(), point.y());
        Projective {
            x,
            y,
            z: BaseField::ONE,
            t: x * y,
        }
    }

    /// Check `(a*X^2 + Y^2)*Z^2 = Z^4 + d*X^2*Y^2` and `X*Y = T*Z`.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }

        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();

        let lhs = (Affine::curve_a() * x2 + y2) * z2;
        let rhs = z2.square() + Affine::curve_d() * x2 * y2;

        lhs == rhs && self.x * self.y == self.t * self.z
    }

    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Point doubling (dbl-2008-hwcd).
    pub fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = Affine::curve_a() * a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        Projective {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        Projective {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }

    /// Convert many points to affine with a single field inversion.
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine> {
        if points.is_empty() {
            return Vec::new();
        }

        // prefix[i] = z_0 * ... * z_{i-1}
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = BaseField::ONE;
        for p in points {
            prefix.push(acc);
            acc *= p.z;
        }

        let mut inv = acc.invert_or_zero();
        let mut out = vec![Affine::IDENTITY; points.len()];
        for (i, p) in points.iter().enumerate().rev() {
            let z_inv = inv * prefix[i];
            inv *= p.z;
            out[i] = Affine::new_unchecked(p.x * z_inv, p.y * z_inv);
        }
        out
    }
}

impl Default for Projective {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for Projective {}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Self::from_affine(&point)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Self::from_affine(point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl Group for Projective {
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
        Projective::generator()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

// add-2008-hwcd
impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = Affine::curve_d() * self.t * other.t;
        let d = self.z * other.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - Affine::curve_a() * a;

        Projective {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<S: crate::ScalarBits> Mul<&S> for Projective {
    type Output = Self;

    fn mul(self, scalar: &S) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}
