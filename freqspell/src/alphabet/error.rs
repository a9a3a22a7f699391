//! Alphabet-related errors.

/// Errors raised while building an [`Alphabet`](super::Alphabet) from its
/// two character sequences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The lower and upper sequences differ in length
    #[error("Length mismatch: {lower} lower characters, {upper} upper characters")]
    LengthMismatch {
        /// number of lower case characters
        lower: usize,
        /// number of upper case characters
        upper: usize,
    },

    /// A character is mapped twice within one direction of the bijection
    #[error("Duplicated char {0:?}")]
    DuplicateChar(char),
}

/// A string held more characters from outside the alphabet than the
/// mismatch budget allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("String {input:?} contains symbols from a different alphabet (first over budget: {foreign:?})")]
pub struct NotSuitableError {
    /// the string that was being aligned
    pub input: String,
    /// the foreign character that exhausted the budget
    pub foreign: char,
}
