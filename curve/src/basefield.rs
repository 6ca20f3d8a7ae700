//! Base field of BabyJubJub (the BN254 scalar field).
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617

use crate::field::{FieldParams, Fp};

pub(crate) const MODULUS: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// Marker for the coordinate field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FqParams;

impl FieldParams for FqParams {
    const NAME: &'static str = "BaseField";
    const MODULUS: [u64; 4] = MODULUS;
    const R: [u64; 4] = [
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0x0e0a77c19a07df2f,
    ];
    const R2: [u64; 4] = [
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x0216d0b17f4e44a5,
    ];
    const MU: u64 = 0xc2e1f593efffffff;
    const TWO_ADICITY: u32 = 28;
    const TRACE_MINUS_ONE_DIV_TWO: [u64; 4] = [
        0xcdcb848a1f0fac9f,
        0x0c0ac2e9419f4243,
        0x098d014dc2822db4,
        0x0000000183227397,
    ];
    // 5^t
    const ROOT_OF_UNITY: [u64; 4] = [
        0x9bd61b6e725b19f0,
        0x402d111e41112ed4,
        0x00e0a7eb8ef62abc,
        0x2a3c09f0a58a7e85,
    ];
}

/// Field of curve coordinates.
pub type BaseField = Fp<FqParams>;
