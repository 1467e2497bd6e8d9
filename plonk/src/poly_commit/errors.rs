use ark_std::{error, fmt};

/// Polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PolyComSchemeError {
    /// Polynomial degree does not match the public parameters size.
    PCSCommitError,
    /// The degree of the polynomial is higher than the maximum degree allowed.
    DegreeError,
    /// The public parameters cannot be used for the requested operation.
    ParameterError,
}

impl fmt::Display for PolyComSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PolyComSchemeError::PCSCommitError => {
                "Polynomial degree does not match the public parameters size."
            }
            PolyComSchemeError::DegreeError => {
                "The degree of the polynomial is higher than the maximum degree allowed."
            }
            PolyComSchemeError::ParameterError => {
                "The public parameters cannot be used for this operation."
            }
        };

        write!(f, "{}", c)
    }
}

impl error::Error for PolyComSchemeError {}
