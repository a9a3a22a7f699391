use std::collections::BTreeSet;

use crate::vocabulary::Word;

/// Keeps the `limit` best distinct words seen so far.
#[derive(Debug, Clone)]
pub(crate) struct Ranking {
    limit: usize,
    words: BTreeSet<Word>,
}

impl Ranking {
    #[inline(always)]
    pub(crate) fn new(limit: usize) -> Ranking {
        Ranking {
            limit,
            words: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, word: Word) {
        self.words.insert(word);

        // Evicts the rarest word, ties going to the smallest word-form.
        if self.words.len() > self.limit {
            self.words.pop_first();
        }
    }

    /// Most frequent first; equal frequencies by descending word-form.
    pub(crate) fn into_descending(self) -> Vec<Word> {
        self.words.into_iter().rev().collect()
    }
}
