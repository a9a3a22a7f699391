//! Error types for spell-checking operations.

use crate::alphabet::error::NotSuitableError;

/// Errors that can occur while checking a query.
///
/// Both abort the check before any candidate is generated.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpellerError {
    /// The caller asked for zero matches or passed an empty query
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The query has more foreign characters than the mismatch budget allows
    #[error(transparent)]
    NotSuitable(#[from] NotSuitableError),
}
