//! Vocabulary loading errors.
use std::io::Error;

use crate::alphabet::error::{ConfigError, NotSuitableError};
use crate::vocabulary::Frequency;

/// Errors that can occur while reading a vocabulary source.
///
/// Any of them aborts loading of that one source.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    /// I/O error while reading the source
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] Error),

    /// The source ended before both alphabet lines were read
    #[error("Missing alphabet lines")]
    MissingAlphabet,

    /// The alphabet lines do not form a valid bijection
    #[error("Invalid alphabet")]
    Config(#[from] ConfigError),

    /// A word could not be put into canonical form
    #[error("Word in entry {entry} is not suitable for the alphabet")]
    NotSuitable {
        /// 1-based index of the offending entry
        entry: usize,
        /// the alignment failure
        #[source]
        source: NotSuitableError,
    },

    /// A frequency was unparsable or not positive
    #[error("Invalid frequency {token:?} in entry {entry}")]
    InvalidFrequency {
        /// the offending token
        token: String,
        /// 1-based index of the offending entry
        entry: usize,
    },

    /// The source ended right after a frequency
    #[error("Missing word after frequency {frequency}")]
    MissingWord {
        /// the dangling frequency
        frequency: Frequency,
    },
}
