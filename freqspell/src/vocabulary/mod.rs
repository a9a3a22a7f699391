//! Canonical word to frequency table.
use std::sync::Arc;

use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::alphabet::Alphabet;

pub mod error;
pub mod loader;
mod word;

pub use self::word::{Frequency, Word};

/// Table of known words, bound to one [`Alphabet`] for its lifetime.
///
/// Keys are expected in canonical form, that is already aligned to the
/// alphabet's lower case with a zero mismatch budget. The table never
/// re-normalizes what it is given.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    alphabet: Arc<Alphabet>,
    words: HashMap<SmolStr, Frequency>,
}

impl Vocabulary {
    /// Creates an empty vocabulary over `alphabet`.
    pub fn new(alphabet: Arc<Alphabet>) -> Vocabulary {
        Vocabulary {
            alphabet,
            words: HashMap::new(),
        }
    }

    /// Stores `word` with `frequency`, replacing any earlier frequency.
    /// Returns the replaced frequency, if there was one.
    pub fn insert_word(&mut self, word: &str, frequency: Frequency) -> Option<Frequency> {
        self.words.insert(SmolStr::new(word), frequency)
    }

    /// Exact lookup of a canonical word-form.
    pub fn search(&self, word: &str) -> Option<Word> {
        self.words
            .get_key_value(word)
            .map(|(value, &frequency)| Word::new(value.clone(), frequency))
    }

    /// The alphabet keys are canonical under.
    #[inline(always)]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// A shared handle on the alphabet, for building sibling vocabularies.
    #[inline(always)]
    pub fn alphabet_arc(&self) -> Arc<Alphabet> {
        Arc::clone(&self.alphabet)
    }

    /// Number of distinct words.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// whether nothing was inserted yet
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stored words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words
            .iter()
            .map(|(value, &frequency)| Word::new(value.clone(), frequency))
    }
}
