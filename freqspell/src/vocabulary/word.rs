//! A known word and its usage frequency.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

/// Usage count of a vocabulary word. Loaders only accept positive values.
pub type Frequency = u64;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Vocabulary word in canonical form, ranked by frequency
pub struct Word {
    /// the canonical word-form
    pub value: SmolStr,
    /// how often the word-form is used
    pub frequency: Frequency,
}

impl Word {
    /// creates a ranked word
    pub fn new(value: SmolStr, frequency: Frequency) -> Word {
        Word { value, frequency }
    }

    /// gets the word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the usage frequency
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Frequency first, then the word-form. Rarer words sort first.
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| self.value.cmp(&other.value))
    }
}
