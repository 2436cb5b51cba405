//! Domain-specific errors.

use thiserror::Error;

/// Reasons a candidate target is rejected during the prompt loop.
///
/// Both variants force a re-prompt; an out-of-range but positive value is
/// not an error (see [`crate::app::validate::vet_target`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("'{0}' is not a valid integer")]
    NotAnInteger(String),
    #[error("{0} is not strictly positive")]
    NotPositive(i64),
}
