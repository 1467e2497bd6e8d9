use crate::poly_commit::{errors::PolyComSchemeError, field_polynomial::FpPolynomial};
use ark_std::fmt::Debug;
use lyra_algebra::prelude::*;
use serde::{Deserialize, Serialize};

/// The trait for help serialize to bytes,
/// implement by polynomial commitment.
pub trait ToBytes {
    /// Convert to bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Trait for polynomial commitment scheme.
///
/// Setup only needs the binding `commit` operation and the parameters a verifier keeps;
/// opening and evaluation proofs belong to the proving protocol.
pub trait PolyComScheme: Sized + Sync {
    /// Type of prime field.
    type Field: Domain;

    /// Type of commitment produced.
    type Commitment: ToBytes
        + Debug
        + PartialEq
        + Eq
        + Clone
        + Send
        + Sync
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Parameters kept by the verifier.
    type VerifierParams: Debug + PartialEq + Eq + Clone + Serialize + for<'de> Deserialize<'de>;

    /// Return the number of proving-side elements, i.e. the maximum number of
    /// coefficients (or evaluations) that can be committed.
    fn len(&self) -> usize;

    /// Return true if there are no proving-side elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Commits to the polynomial, commitment is binding.
    fn commit(
        &self,
        polynomial: &FpPolynomial<Self::Field>,
    ) -> Result<Self::Commitment, PolyComSchemeError>;

    /// Keep the first `min(len, self.len())` proving-side elements.
    fn truncate(&self, len: usize) -> Self;

    /// Return the verifier side of the parameters, failing with
    /// `PolyComSchemeError::ParameterError` if they are malformed.
    fn verifier_params(&self) -> Result<Self::VerifierParams, PolyComSchemeError>;
}
