use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::ConstraintSystem,
    domain::EvaluationDomain,
    trace::{Trace, TraceColumn},
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_std::{end_timer, start_timer, sync::Arc};
use lyra_algebra::prelude::*;
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// PLONK prover parameters.
#[derive(Debug)]
pub struct PlonkProverParams<PCS: PolyComScheme> {
    /// the monomial reference string, `n + 3` points.
    pub kzg: PCS,
    /// the Lagrange reference string over the domain, `n` points.
    pub kzg_lagrange: PCS,
    /// the verifier parameters, shared with the caller of [`setup`].
    pub verifier_params: Arc<PlonkVK<PCS>>,
}

/// Define the PLONK prover params by given `PolyComScheme`.
pub type PlonkPK<PCS> = PlonkProverParams<PCS>;

/// PLONK verifier parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlonkVerifierParams<C, F, V> {
    /// the domain size `n`.
    pub size: u64,
    /// `1/n`.
    pub size_inv: F,
    /// the generator of the domain.
    pub generator: F,
    /// the number of public variables.
    pub nb_public_variables: u64,
    /// the verifier side of the commitment scheme.
    pub kzg: V,
    /// the shift of the cosets used by the copy permutation.
    pub coset_shift: F,
    /// commitments of `s1, s2, s3`.
    pub s: [C; 3],
    /// commitment of the left selector.
    pub ql: C,
    /// commitment of the right selector.
    pub qr: C,
    /// commitment of the multiplication selector.
    pub qm: C,
    /// commitment of the output selector.
    pub qo: C,
    /// commitment of the constant selector.
    pub qk: C,
    /// commitments of the commitment-group selectors.
    pub qcp: Vec<C>,
    /// the constraint binding each commitment group.
    pub commitment_constraint_indexes: Vec<u64>,
}

/// Define the PLONK verifier params by given `PolyComScheme`.
pub type PlonkVK<PCS> = PlonkVerifierParams<
    <PCS as PolyComScheme>::Commitment,
    <PCS as PolyComScheme>::Field,
    <PCS as PolyComScheme>::VerifierParams,
>;

impl<C, F, V> PlonkVerifierParams<C, F, V> {
    /// Return the number of public inputs a proof carries.
    pub fn nb_public_witness(&self) -> u64 {
        self.nb_public_variables
    }
}

/// Return the smallest domain that holds the public-input rows and the constraints.
pub fn init_domain<CS: ConstraintSystem>(cs: &CS) -> Result<EvaluationDomain<CS::Field>>
where
    CS::Field: Domain,
{
    let nb_rows = cs.nb_constraints() + cs.nb_public_variables();
    EvaluationDomain::new_without_precompute(nb_rows)
}

/// Run the PLONK setup of `cs` against the monomial reference string `srs` and its
/// Lagrange form `srs_lagrange`.
///
/// `srs` needs at least `n + 3` points and `srs_lagrange` exactly `n`, where `n` is
/// the domain size. On success, the prover parameters hold the same verifier
/// parameters as the ones returned.
#[instrument(
    skip_all,
    fields(
        nb_constraints = cs.nb_constraints(),
        nb_public = cs.nb_public_variables()
    )
)]
pub fn setup<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    srs: &PCS,
    srs_lagrange: &PCS,
) -> Result<(PlonkPK<PCS>, Arc<PlonkVK<PCS>>)> {
    let setup_time = start_timer!(|| "PLONK setup");

    let domain = init_domain(cs)?;
    let n = domain.cardinality();
    if n < 2 {
        let nb_constraints = cs.nb_constraints() + cs.nb_public_variables();
        warn!(nb_constraints, "circuit is too small for a PLONK domain");
        return Err(PlonkError::DomainTooSmall { nb_constraints });
    }
    debug!(domain_size = n, srs = srs.len(), srs_lagrange = srs_lagrange.len());

    if srs.len() < n + 3 {
        warn!(got = srs.len(), need = n + 3, "KZG SRS is too small");
        return Err(PlonkError::SRSTooSmall {
            got: srs.len(),
            need: n + 3,
        });
    }
    if srs_lagrange.len() != n {
        warn!(got = srs_lagrange.len(), need = n, "KZG Lagrange SRS has the wrong size");
        return Err(PlonkError::SRSLagrangeSizeMismatch {
            got: srs_lagrange.len(),
            need: n,
        });
    }

    let kzg_verifier_params = srs.verifier_params().map_err(|e| {
        warn!(error = %e, "cannot derive verifier parameters from the KZG SRS");
        PlonkError::SetupError(e)
    })?;

    let trace_time = start_timer!(|| "Build trace");
    let trace = Trace::new(cs, &domain);
    end_timer!(trace_time);

    // The commitment selectors come first, then the gate selectors, then the
    // permutation columns.
    let commit_time = start_timer!(|| "Commit trace");
    let qcp = commit_selectors(&trace, srs_lagrange)?;
    let commit = |column: TraceColumn, evals: &[PCS::Field]| {
        commit_column(srs_lagrange, column, evals)
    };
    let ql = commit(TraceColumn::Ql, &trace.ql)?;
    let qr = commit(TraceColumn::Qr, &trace.qr)?;
    let qm = commit(TraceColumn::Qm, &trace.qm)?;
    let qo = commit(TraceColumn::Qo, &trace.qo)?;
    let qk = commit(TraceColumn::Qk, &trace.qk)?;
    let s = [
        commit(TraceColumn::S1, &trace.s1)?,
        commit(TraceColumn::S2, &trace.s2)?,
        commit(TraceColumn::S3, &trace.s3)?,
    ];
    end_timer!(commit_time);

    let verifier_params = Arc::new(PlonkVerifierParams {
        size: n as u64,
        size_inv: domain.cardinality_inv(),
        generator: domain.generator(),
        nb_public_variables: cs.nb_public_variables() as u64,
        kzg: kzg_verifier_params,
        coset_shift: domain.coset_shift(),
        s,
        ql,
        qr,
        qm,
        qo,
        qk,
        qcp,
        commitment_constraint_indexes: cs
            .commitment_groups()
            .iter()
            .map(|g| g.commitment_constraint_index as u64)
            .collect(),
    });

    let prover_params = PlonkProverParams {
        kzg: srs.truncate(n + 3),
        kzg_lagrange: srs_lagrange.truncate(n),
        verifier_params: verifier_params.clone(),
    };

    end_timer!(setup_time);
    Ok((prover_params, verifier_params))
}

/// Commit the commitment selectors of `trace` under the Lagrange reference string.
/// The first failure aborts.
fn commit_selectors<PCS: PolyComScheme>(
    trace: &Trace<PCS::Field>,
    srs_lagrange: &PCS,
) -> Result<Vec<PCS::Commitment>> {
    let selectors = trace.commitment_selectors();

    #[cfg(not(feature = "parallel"))]
    let commitments = selectors
        .iter()
        .map(|(column, evals)| commit_column(srs_lagrange, *column, evals))
        .collect::<Result<Vec<_>>>();

    #[cfg(feature = "parallel")]
    let commitments = selectors
        .par_iter()
        .map(|(column, evals)| commit_column(srs_lagrange, *column, evals))
        .collect::<Result<Vec<_>>>();

    commitments
}

fn commit_column<PCS: PolyComScheme>(
    srs_lagrange: &PCS,
    column: TraceColumn,
    evals: &[PCS::Field],
) -> Result<PCS::Commitment> {
    debug!(%column, "committing trace column");
    srs_lagrange
        .commit(&FpPolynomial::from_coefs(evals.to_vec()))
        .map_err(|error| {
            warn!(%column, %error, "cannot commit trace column");
            PlonkError::CommitmentFailure { column, error }
        })
}
