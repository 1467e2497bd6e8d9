use crate::bls12_377::{BLS377Gt, BLS377Scalar, BLS377G1, BLS377G2};
use crate::traits::Pairing;
use ark_bls12_377::Bls12_377;
use ark_ec::{pairing::Pairing as ArkPairing, CurveGroup};

/// The pairing engine for BLS12-377
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BLS377PairingEngine;

impl Pairing for BLS377PairingEngine {
    type ScalarField = BLS377Scalar;
    type G1 = BLS377G1;
    type G2 = BLS377G2;
    type Gt = BLS377Gt;

    #[inline]
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt {
        BLS377Gt(Bls12_377::pairing(a.0.into_affine(), b.0.into_affine()))
    }

    #[inline]
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
        BLS377Gt(Bls12_377::multi_pairing(
            a.iter().map(|x| x.0.into_affine()),
            b.iter().map(|x| x.0.into_affine()),
        ))
    }
}
