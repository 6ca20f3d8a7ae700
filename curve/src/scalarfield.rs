//! Scalar field of the prime-order subgroup.
//! n = 2736030358979909402780800718157159386076813972158567259200215660948447373041
//!
//! Signature scalars and challenges live here. The full curve order is `8 * n`.

use crate::field::{FieldParams, Fp};

/// Marker for the subgroup-order field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrParams;

impl FieldParams for FrParams {
    const NAME: &'static str = "ScalarField";
    const MODULUS: [u64; 4] = [
        0x677297dc392126f1,
        0xab3eedb83920ee0a,
        0x370a08b6d0302b0b,
        0x060c89ce5c263405,
    ];
    const R: [u64; 4] = [
        0x073315dea08f9c76,
        0xe7acffc6a098f24b,
        0xf85a9201d818f015,
        0x01f16424e1bb7724,
    ];
    const R2: [u64; 4] = [
        0x35e44abee7ecb21e,
        0x74646cacf5f84ec4,
        0xe472df203faa158f,
        0x0445b524f1ba50a8,
    ];
    const MU: u64 = 0x532ce5aebc48f5ef;
    const TWO_ADICITY: u32 = 4;
    const TRACE_MINUS_ONE_DIV_TWO: [u64; 4] = [
        0x533b94bee1c90937,
        0x5d59f76dc1c90770,
        0x29b85045b6818158,
        0x0030644e72e131a0,
    ];
    // 19^t
    const ROOT_OF_UNITY: [u64; 4] = [
        0xaa5f1ef09efcfc0b,
        0xc052c295d8aa6795,
        0x5e197770aef1311e,
        0x03a66642c6eefa63,
    ];
}

/// Field of scalars modulo the prime subgroup order.
pub type ScalarField = Fp<FrParams>;
