/*! Frequency-ranked spelling suggestions.

Given a misspelled word and a vocabulary of known words with usage
frequencies, the [`speller::Engine`] returns the most frequent known words
that are exactly one edit away: a deletion, a substitution, an insertion or
a transposition of two adjacent characters.

Case is handled through an explicit [`alphabet::Alphabet`], a bijection
between a lower and an upper character sequence supplied by the caller.
Vocabulary keys are stored in the lower (reference) case.

# Usage examples

```
use std::sync::Arc;

use freqspell::alphabet::Alphabet;
use freqspell::speller::Engine;
use freqspell::vocabulary::Vocabulary;

let alphabet = Arc::new(Alphabet::new("abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap());
let mut vocabulary = Vocabulary::new(alphabet);
vocabulary.insert_word("cat", 5);
vocabulary.insert_word("cot", 9);

let words = Engine::new().check("Cbt", 2, &vocabulary).unwrap();
assert_eq!(words[0].value(), "cot");
assert_eq!(words[1].value(), "cat");
```

Vocabularies are usually read from disk with [`vocabulary::Vocabulary::open`];
see the `freqspell-bin` crate in the same repository for an interactive
frontend.
*/

#![warn(missing_docs)]
pub mod alphabet;
pub mod speller;
pub mod vocabulary;
