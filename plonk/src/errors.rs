use crate::plonk::trace::TraceColumn;
use crate::poly_commit::errors::PolyComSchemeError;
use ark_std::{error, fmt};
use lyra_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// No multiplicative subgroup of the field can hold the requested number of rows.
    GroupNotFound(usize),
    /// The circuit has fewer than two rows once public inputs are counted.
    DomainTooSmall { nb_constraints: usize },
    /// The monomial reference string is shorter than `domain size + 3`.
    SRSTooSmall { got: usize, need: usize },
    /// The Lagrange reference string does not match the domain size.
    SRSLagrangeSizeMismatch { got: usize, need: usize },
    /// The reference string cannot produce verifier parameters.
    SetupError(PolyComSchemeError),
    /// Committing to a trace column failed.
    CommitmentFailure {
        column: TraceColumn,
        error: PolyComSchemeError,
    },
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            GroupNotFound(n) => write!(f, "Group not found for {} rows.", n),
            DomainTooSmall { nb_constraints } => write!(
                f,
                "Circuit has only {} constraints, at least 2 are required.",
                nb_constraints
            ),
            SRSTooSmall { got, need } => {
                write!(f, "KZG SRS is too small: got {}, need {}.", got, need)
            }
            SRSLagrangeSizeMismatch { got, need } => write!(
                f,
                "KZG Lagrange SRS has the wrong size: got {}, need {}.",
                got, need
            ),
            SetupError(e) => write!(f, "Malformed KZG SRS: {}", e),
            CommitmentFailure { column, error } => {
                write!(f, "Cannot commit to column {}: {}", column, error)
            }
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}
