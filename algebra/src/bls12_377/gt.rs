use crate::bls12_377::BLS377Scalar;
use crate::prelude::*;
use ark_bls12_377::Bls12_377;
use ark_ec::{pairing::PairingOutput, Group as ArkGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::vec::Vec;

/// The wrapped struct for the BLS12-377 pairing target group, written additively.
#[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
pub struct BLS377Gt(pub(crate) PairingOutput<Bls12_377>);

impl Neg for BLS377Gt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<'a> Add<&'a BLS377Gt> for BLS377Gt {
    type Output = BLS377Gt;

    #[inline]
    fn add(self, rhs: &'a BLS377Gt) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a BLS377Gt> for BLS377Gt {
    type Output = BLS377Gt;

    #[inline]
    fn sub(self, rhs: &'a BLS377Gt) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<'a> AddAssign<&'a BLS377Gt> for BLS377Gt {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BLS377Gt) {
        self.0 += rhs.0
    }
}

impl<'a> SubAssign<&'a BLS377Gt> for BLS377Gt {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BLS377Gt) {
        self.0 -= rhs.0
    }
}

impl<'a> Mul<&'a BLS377Scalar> for BLS377Gt {
    type Output = BLS377Gt;

    #[inline]
    fn mul(self, rhs: &'a BLS377Scalar) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> MulAssign<&'a BLS377Scalar> for BLS377Gt {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BLS377Scalar) {
        self.0 *= rhs.0
    }
}

impl Group for BLS377Gt {
    type ScalarType = BLS377Scalar;
    const COMPRESSED_LEN: usize = 576;
    const UNCOMPRESSED_LEN: usize = 576;

    #[inline]
    fn double(&self) -> Self {
        Self(ArkGroup::double(&self.0))
    }

    #[inline]
    fn get_identity() -> Self {
        Self(PairingOutput::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(PairingOutput::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(PairingOutput::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        self.0.serialize_with_mode(&mut buf, Compress::Yes).unwrap();

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        PairingOutput::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map(Self)
            .map_err(|_| AlgebraError::DeserializationError)
    }

    #[inline]
    fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::UNCOMPRESSED_LEN);
        self.0.serialize_with_mode(&mut buf, Compress::No).unwrap();

        buf
    }

    #[inline]
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
        PairingOutput::deserialize_with_mode(bytes, Compress::No, Validate::No)
            .map(Self)
            .map_err(|_| AlgebraError::DeserializationError)
    }

    #[inline]
    fn unchecked_size() -> usize {
        PairingOutput::<Bls12_377>::default().serialized_size(Compress::No)
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

to_from_bytes_group!(BLS377Gt);
serialize_deserialize!(BLS377Gt);
