//! One-edit spelling suggestions against a [`Vocabulary`].
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use self::case_handling::CaseMutation;
use self::edits::Candidates;
use self::error::SpellerError;
use self::ranking::Ranking;
use crate::vocabulary::{Vocabulary, Word};

pub mod case_handling;
pub mod edits;
pub mod error;
mod ranking;

/// Limits and options for [`Engine::check_with_config`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// maximum number of suggestions, must be positive
    pub n_best: usize,
    /// characters outside the alphabet tolerated in a query
    pub max_mismatch: usize,
    /// re-case suggestions to match the query's capitalisation
    pub case_handling: bool,
}

impl SpellerConfig {
    /// Two suggestions, one foreign character, canonical output.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: 2,
            max_mismatch: 1,
            case_handling: false,
        }
    }
}

impl Default for SpellerConfig {
    fn default() -> Self {
        SpellerConfig::default()
    }
}

/// The suggestion engine.
///
/// Holds no state: one engine can serve any number of vocabularies, from any
/// number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Engine {
    /// creates an engine
    pub const fn new() -> Engine {
        Engine
    }

    /// Returns at most `max_matches` known words for `query`, most frequent
    /// first.
    ///
    /// A query that is itself a known word yields exactly that word. Otherwise
    /// every word one deletion, substitution, insertion or adjacent
    /// transposition away is a candidate. An empty result is not an error.
    #[inline]
    pub fn check(
        &self,
        query: &str,
        max_matches: usize,
        vocabulary: &Vocabulary,
    ) -> Result<Vec<Word>, SpellerError> {
        let config = SpellerConfig {
            n_best: max_matches,
            ..SpellerConfig::default()
        };

        self.check_with_config(query, &config, vocabulary)
    }

    /// [`Engine::check`] with explicit limits and case handling.
    pub fn check_with_config(
        &self,
        query: &str,
        config: &SpellerConfig,
        vocabulary: &Vocabulary,
    ) -> Result<Vec<Word>, SpellerError> {
        if config.n_best == 0 {
            return Err(SpellerError::InvalidArgument(
                "maximum number of matches must be greater than zero",
            ));
        }

        if query.is_empty() {
            return Err(SpellerError::InvalidArgument("cannot check an empty string"));
        }

        let alphabet = vocabulary.alphabet();
        let aligned = alphabet.aligned_lower(query, config.max_mismatch)?;

        let mut words = match vocabulary.search(&aligned) {
            Some(word) => vec![word],
            None => self.suggest(&aligned, config.n_best, vocabulary),
        };

        if config.case_handling {
            let mutation = case_handling::case_mutation(alphabet, query);

            if mutation != CaseMutation::None {
                words.iter_mut().for_each(|x| {
                    x.value = case_handling::apply(alphabet, mutation, x.value());
                });
            }
        }

        Ok(words)
    }

    fn suggest(&self, aligned: &str, n_best: usize, vocabulary: &Vocabulary) -> Vec<Word> {
        let mut ranking = Ranking::new(n_best);

        Candidates::new(aligned, vocabulary.alphabet().lower_chars())
            .unique()
            .filter_map(|candidate| vocabulary.search(&candidate))
            .for_each(|word| ranking.insert(word));

        ranking.into_descending()
    }
}
