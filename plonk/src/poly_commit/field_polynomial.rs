use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use lyra_algebra::prelude::*;

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients (or evaluations) of the polynomial
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use lyra_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use lyra_algebra::bls12_377::BLS377Scalar;
    /// use lyra_algebra::{Zero, One};
    /// let zero = BLS377Scalar::zero();
    /// let one = BLS377Scalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, one, zero, zero]);
    /// assert_eq!(poly.degree(), 1);
    /// assert_eq!(poly.get_coefs_ref().len(), 2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Remove high degree zero-coefficients, keeping at least one coefficient.
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate the polynomial at `point` with Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        let mut result = F::zero();
        for coef in self.coefs.iter().rev() {
            result.mul_assign(point);
            result.add_assign(coef);
        }
        result
    }
}

impl<F: Domain> FpPolynomial<F> {
    /// Interpolate the polynomial whose evaluations over `domain` are `values`.
    pub fn ifft_with_domain(domain: &Radix2EvaluationDomain<F::Field>, values: &[F]) -> Self {
        let values = values.iter().map(|x| x.get_field()).collect::<Vec<_>>();
        let coefs = domain.ifft(&values);
        Self::from_coefs(coefs.into_iter().map(F::from_field).collect())
    }

    /// Evaluate the polynomial over every element of `domain`.
    pub fn fft_with_domain(&self, domain: &Radix2EvaluationDomain<F::Field>) -> Vec<F> {
        let coefs = self.coefs.iter().map(|x| x.get_field()).collect::<Vec<_>>();
        domain.fft(&coefs).into_iter().map(F::from_field).collect()
    }
}

#[cfg(test)]
mod test {
    use super::FpPolynomial;
    use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
    use lyra_algebra::{bls12_377::BLS377Scalar, prelude::*};

    type F = BLS377Scalar;

    #[test]
    fn test_from_coefs_trims_and_keeps_zero() {
        let poly = FpPolynomial::<F>::from_coefs(vec![F::zero(), F::zero()]);
        assert!(poly.is_zero());
        assert_eq!(poly.get_coefs_ref(), &[F::zero()]);

        let poly = FpPolynomial::<F>::from_coefs(vec![]);
        assert!(poly.is_zero());
        assert_eq!(poly, FpPolynomial::zero());
    }

    #[test]
    fn test_eval() {
        // 1 + 2X + 3X^2 at X = 5 is 86
        let poly = FpPolynomial::from_coefs(vec![F::from(1u32), F::from(2u32), F::from(3u32)]);
        assert_eq!(poly.degree(), 2);
        assert_eq!(poly.eval(&F::from(5u32)), F::from(86u32));
        assert_eq!(poly.eval(&F::zero()), F::one());
    }

    #[test]
    fn test_fft_interpolation() {
        let mut prng = test_rng();
        let domain = Radix2EvaluationDomain::<<F as Domain>::Field>::new(8).unwrap();
        let evals: Vec<F> = (0..8).map(|_| F::random(&mut prng)).collect();

        let poly = FpPolynomial::ifft_with_domain(&domain, &evals);
        assert!(poly.degree() < 8);
        for (x, y) in domain.elements().zip(evals.iter()) {
            assert_eq!(poly.eval(&F::from_field(x)), *y);
        }
        assert_eq!(poly.fft_with_domain(&domain), evals);
    }
}
