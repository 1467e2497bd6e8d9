use crate::plonk::domain::EvaluationDomain;
use crate::poly_commit::{
    errors::PolyComSchemeError,
    field_polynomial::FpPolynomial,
    pcs::{PolyComScheme, ToBytes},
};
use ark_poly::EvaluationDomain as _;
use ark_std::{end_timer, start_timer};
use lyra_algebra::{
    bls12_377::{BLS377PairingEngine, BLS377Scalar, BLS377G1, BLS377G2},
    prelude::*,
};

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> ToBytes for KZGCommitment<G> {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

/// The verifier side of a KZG reference string.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct KZGVerifierParams<P: Pairing> {
    /// The generator of G1.
    pub g1: P::G1,
    /// The generator of G2.
    pub g2: P::G2,
    /// `[τ]G2`.
    pub tau_g2: P::G2,
}

/// KZG commitment scheme about `PairingEngine`.
///
/// `public_parameter_group_1` either holds the monomial form `[τ^i]G1`, or, after
/// [`KZGCommitmentScheme::to_lagrange`], the Lagrange form `[L_i(τ)]G1` over a domain.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2, `[G2, τG2]`.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);
        Self::new_with_secret(max_degree, &s)
    }

    /// Create the reference string for a known trapdoor `s`. Only meant for tests and
    /// benchmarks, since anyone knowing `s` can forge openings.
    pub fn new_with_secret(max_degree: usize, s: &P::ScalarField) -> KZGCommitmentScheme<P> {
        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree + 1);

        let mut elem_g1 = P::G1::get_base();

        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(s);
        }

        let elem_g2 = P::G2::get_base();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(s)];

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes.
    pub fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        if bytes.len() < 8 {
            return Err(AlgebraError::DeserializationError);
        }
        let len_1 = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let len_2 = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
        let n_1 = P::G1::unchecked_size();
        let n_2 = P::G2::unchecked_size();
        if bytes.len() != 8 + n_1 * len_1 + n_2 * len_2 {
            return Err(AlgebraError::DeserializationError);
        }

        let (bytes_1, bytes_2) = bytes[8..].split_at(n_1 * len_1);
        let public_parameter_group_1 = bytes_1
            .chunks_exact(n_1)
            .map(P::G1::from_unchecked_bytes)
            .collect::<Result<Vec<_>, _>>()?;
        let public_parameter_group_2 = bytes_2
            .chunks_exact(n_2)
            .map(P::G2::from_unchecked_bytes)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            public_parameter_group_1,
            public_parameter_group_2,
        })
    }
}

/// KZG commitment scheme over the BLS12-377 curve
pub type KZGCommitmentSchemeBLS377 = KZGCommitmentScheme<BLS377PairingEngine>;

impl KZGCommitmentSchemeBLS377 {
    /// Convert a monomial reference string into the Lagrange basis of `domain`.
    ///
    /// The `j`-th output point is `[L_j(τ)]G1 = (1/n) Σ_i ω^{-ij} [τ^i]G1`, the inverse
    /// FFT over the domain of the first `n = domain.cardinality()` monomial points.
    pub fn to_lagrange(
        &self,
        domain: &EvaluationDomain<BLS377Scalar>,
    ) -> Result<Self, PolyComSchemeError> {
        let n = domain.cardinality();
        if self.public_parameter_group_1.len() < n {
            return Err(PolyComSchemeError::ParameterError);
        }

        let timer = start_timer!(|| format!("KZG SRS to Lagrange basis, n = {}", n));
        let monomial: Vec<_> = self.public_parameter_group_1[..n]
            .iter()
            .map(BLS377G1::get_raw)
            .collect();
        let public_parameter_group_1 = domain
            .inner()
            .ifft(&monomial)
            .into_iter()
            .map(BLS377G1::from_raw)
            .collect();
        end_timer!(timer);

        Ok(Self {
            public_parameter_group_1,
            public_parameter_group_2: self.public_parameter_group_2.clone(),
        })
    }
}

impl PolyComScheme for KZGCommitmentSchemeBLS377 {
    type Field = BLS377Scalar;
    type Commitment = KZGCommitment<BLS377G1>;
    type VerifierParams = KZGVerifierParams<BLS377PairingEngine>;

    fn len(&self) -> usize {
        self.public_parameter_group_1.len()
    }

    fn commit(
        &self,
        polynomial: &FpPolynomial<BLS377Scalar>,
    ) -> Result<Self::Commitment, PolyComSchemeError> {
        let coefs = polynomial.get_coefs_ref();
        if coefs.len() > self.public_parameter_group_1.len() {
            return Err(PolyComSchemeError::DegreeError);
        }

        let coefs_ref: Vec<&BLS377Scalar> = coefs.iter().collect();
        let pub_param_group_1_as_ref: Vec<&BLS377G1> = self.public_parameter_group_1
            [..coefs.len()]
            .iter()
            .collect();

        let commitment_value = BLS377G1::multi_exp(&coefs_ref[..], &pub_param_group_1_as_ref[..]);

        Ok(KZGCommitment(commitment_value))
    }

    fn truncate(&self, len: usize) -> Self {
        let len = len.min(self.public_parameter_group_1.len());
        Self {
            public_parameter_group_1: self.public_parameter_group_1[..len].to_vec(),
            public_parameter_group_2: self.public_parameter_group_2.clone(),
        }
    }

    fn verifier_params(&self) -> Result<Self::VerifierParams, PolyComSchemeError> {
        match (
            self.public_parameter_group_1.first(),
            self.public_parameter_group_2.as_slice(),
        ) {
            (Some(g1), [g2, tau_g2, ..]) => Ok(KZGVerifierParams {
                g1: *g1,
                g2: *g2,
                tau_g2: *tau_g2,
            }),
            _ => Err(PolyComSchemeError::ParameterError),
        }
    }
}
