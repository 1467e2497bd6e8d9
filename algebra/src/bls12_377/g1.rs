use crate::bls12_377::BLS377Scalar;
use crate::prelude::*;
use ark_bls12_377::{G1Affine, G1Projective};
use ark_ec::{CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::{
    fmt::{Debug, Display, Formatter},
    vec::Vec,
};

/// The wrapped struct for `ark_bls12_377::G1Projective`
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BLS377G1(pub(crate) G1Projective);

impl Debug for BLS377G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G1Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl BLS377G1 {
    /// Get the raw data.
    pub fn get_raw(&self) -> G1Projective {
        self.0
    }

    /// From the raw data.
    pub fn from_raw(raw: G1Projective) -> Self {
        Self(raw)
    }
}

impl Group for BLS377G1 {
    type ScalarType = BLS377Scalar;
    const COMPRESSED_LEN: usize = 48;
    const UNCOMPRESSED_LEN: usize = 96;

    #[inline]
    fn double(&self) -> Self {
        Self(ArkGroup::double(&self.0))
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G1Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G1Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G1Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = self.0.into_affine();
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        affine.serialize_with_mode(&mut buf, Compress::Yes).unwrap();

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(affine.into()))
    }

    #[inline]
    fn to_unchecked_bytes(&self) -> Vec<u8> {
        let affine = self.0.into_affine();
        let mut buf = Vec::with_capacity(Self::UNCOMPRESSED_LEN);
        affine.serialize_with_mode(&mut buf, Compress::No).unwrap();

        buf
    }

    #[inline]
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::No, Validate::No)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(affine.into()))
    }

    #[inline]
    fn unchecked_size() -> usize {
        G1Affine::default().serialized_size(Compress::No)
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        if scalars.is_empty() || points.is_empty() {
            return Self::get_identity();
        }
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G1Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G1Projective>>(),
        );

        Self(G1Projective::msm_unchecked(&points_raw, &scalars_raw))
    }
}

impl<'a> Add<&'a BLS377G1> for BLS377G1 {
    type Output = BLS377G1;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a BLS377G1> for BLS377G1 {
    type Output = BLS377G1;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> Mul<&'a BLS377Scalar> for BLS377G1 {
    type Output = BLS377G1;

    #[inline]
    fn mul(self, rhs: &BLS377Scalar) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> AddAssign<&'a BLS377G1> for BLS377G1 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BLS377G1) {
        self.0 += rhs.0
    }
}

impl<'a> SubAssign<&'a BLS377G1> for BLS377G1 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BLS377G1) {
        self.0 -= rhs.0
    }
}

impl<'a> MulAssign<&'a BLS377Scalar> for BLS377G1 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BLS377Scalar) {
        self.0 *= rhs.0
    }
}

impl Neg for BLS377G1 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

to_from_bytes_group!(BLS377G1);
serialize_deserialize!(BLS377G1);
