use crate::errors::{PlonkError, Result};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::{EvaluationDomain as ArkEvaluationDomain, Radix2EvaluationDomain};
use ark_std::borrow::Cow;
use lyra_algebra::prelude::*;

/// A multiplicative subgroup of order `2^k` of the scalar field, used as the
/// interpolation grid of the trace columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain<F: Domain> {
    inner: Radix2EvaluationDomain<F::Field>,
    elements: Option<Vec<F>>,
}

impl<F: Domain> EvaluationDomain<F> {
    /// Return the smallest power-of-two domain with at least `min_size` elements,
    /// caching its elements `g^0, ..., g^{n-1}`.
    pub fn new(min_size: usize) -> Result<Self> {
        let mut domain = Self::new_without_precompute(min_size)?;
        domain.elements = Some(domain.compute_elements());
        Ok(domain)
    }

    /// Same as [`EvaluationDomain::new`], without caching the domain elements.
    pub fn new_without_precompute(min_size: usize) -> Result<Self> {
        let inner = Radix2EvaluationDomain::<F::Field>::new(min_size)
            .ok_or(PlonkError::GroupNotFound(min_size))?;
        Ok(Self {
            inner,
            elements: None,
        })
    }

    /// Return the number of elements `n` of the domain.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.inner.size()
    }

    /// Return `1/n`.
    #[inline]
    pub fn cardinality_inv(&self) -> F {
        F::from_field(self.inner.size_inv)
    }

    /// Return the generator `g` of the domain, of multiplicative order `n`.
    #[inline]
    pub fn generator(&self) -> F {
        F::from_field(self.inner.group_gen)
    }

    /// Return `g^{-1}`.
    #[inline]
    pub fn generator_inv(&self) -> F {
        F::from_field(self.inner.group_gen_inv)
    }

    /// Return the shift of the two cosets used by the copy permutation. This is the
    /// multiplicative generator of the field, which lies outside every proper subgroup.
    #[inline]
    pub fn coset_shift(&self) -> F {
        F::multiplicative_generator()
    }

    /// Return `g^0, ..., g^{n-1}`.
    pub fn elements(&self) -> Cow<'_, [F]> {
        match &self.elements {
            Some(elements) => Cow::Borrowed(elements.as_slice()),
            None => Cow::Owned(self.compute_elements()),
        }
    }

    fn compute_elements(&self) -> Vec<F> {
        self.inner.elements().map(F::from_field).collect()
    }

    /// Return the underlying arkworks domain.
    #[inline]
    pub fn inner(&self) -> &Radix2EvaluationDomain<F::Field> {
        &self.inner
    }

    /// Interpolate the polynomial taking `evals` over the domain.
    pub fn ifft(&self, evals: &[F]) -> FpPolynomial<F> {
        FpPolynomial::ifft_with_domain(&self.inner, evals)
    }

    /// Evaluate `poly` over the domain.
    pub fn fft(&self, poly: &FpPolynomial<F>) -> Vec<F> {
        poly.fft_with_domain(&self.inner)
    }
}
