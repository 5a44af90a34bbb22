//! Unsatisfiability detection and reporting.

use reqmin_core::Requirement;
use reqmin_util::errors::ReqminError;
use thiserror::Error;

/// The pair of requirements that made a set unsatisfiable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    /// Two requirements on the same version with no combined form.
    #[error("{0} cannot be combined with {1}")]
    NoCombination(Requirement, Requirement),

    /// More than one distinct `==` requirement.
    #[error("{0} and {1} pin different versions")]
    MultiplePins(Requirement, Requirement),

    /// An upper bound below the pinned version.
    #[error("{0} excludes the pinned {1}")]
    UpperBelowPin(Requirement, Requirement),

    /// A lower bound above the pinned version.
    #[error("{1} excludes the pinned {0}")]
    LowerAbovePin(Requirement, Requirement),

    /// An upper bound below a lower bound.
    #[error("{0} is below {1}")]
    UpperBelowLower(Requirement, Requirement),
}

impl From<Conflict> for ReqminError {
    fn from(conflict: Conflict) -> Self {
        ReqminError::Unsatisfiable {
            reason: conflict.to_string(),
        }
    }
}
