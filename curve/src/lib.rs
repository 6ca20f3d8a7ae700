//! BabyJubJub: the twisted Edwards curve defined over the BN254 scalar field.
//!
//! This crate provides the base and scalar fields, affine and extended
//! projective curve points with 32-byte compression, and helpers for random
//! sampling. The curve parameters and generator are fixed in the `affine`
//! module.

mod affine;
mod basefield;
mod errors;
mod field;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, COFACTOR, COMPRESSED_SIZE};
pub use basefield::{BaseField, FqParams};
pub use errors::CurveError;
pub use field::{FieldParams, Fp};
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul;
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::{FrParams, ScalarField};
