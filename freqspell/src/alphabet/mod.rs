//! Case alphabet: a bijection between lower and upper characters.
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

pub mod error;

use self::error::{ConfigError, NotSuitableError};

/// One side of the lower/upper bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// lower case, the reference case for vocabulary keys
    Lower,
    /// upper case
    Upper,
}

impl Case {
    /// the other side of the bijection
    #[inline(always)]
    pub fn opposite(self) -> Case {
        match self {
            Case::Lower => Case::Upper,
            Case::Upper => Case::Lower,
        }
    }
}

/// Immutable lower/upper character mapping with tolerant case alignment.
///
/// Built once from two position-paired sequences. The characters of each
/// case keep the order in which they appeared in the configuration strings,
/// so enumeration over [`Alphabet::chars`] is reproducible.
#[derive(Debug, Clone)]
pub struct Alphabet {
    lower: Vec<char>,
    upper: Vec<char>,
    lower_to_upper: HashMap<char, char>,
    upper_to_lower: HashMap<char, char>,
}

impl Alphabet {
    /// Builds the bijection pairing `lower[i]` with `upper[i]`.
    ///
    /// Fails when the sequences differ in length, or when a character repeats
    /// within either of them.
    pub fn new(lower: &str, upper: &str) -> Result<Alphabet, ConfigError> {
        let lower_len = lower.chars().count();
        let upper_len = upper.chars().count();

        if lower_len != upper_len {
            return Err(ConfigError::LengthMismatch {
                lower: lower_len,
                upper: upper_len,
            });
        }

        let mut alphabet = Alphabet {
            lower: Vec::with_capacity(lower_len),
            upper: Vec::with_capacity(upper_len),
            lower_to_upper: HashMap::with_capacity(lower_len),
            upper_to_lower: HashMap::with_capacity(upper_len),
        };

        for (l, u) in lower.chars().zip(upper.chars()) {
            if alphabet.upper_to_lower.insert(u, l).is_some() {
                return Err(ConfigError::DuplicateChar(u));
            }
            if alphabet.lower_to_upper.insert(l, u).is_some() {
                return Err(ConfigError::DuplicateChar(l));
            }

            alphabet.lower.push(l);
            alphabet.upper.push(u);
        }

        Ok(alphabet)
    }

    /// Rewrites `s` into `case`.
    ///
    /// Characters of the requested case are kept, characters of the opposite
    /// case are mapped across. Characters foreign to the alphabet pass through
    /// unchanged, each one consuming a unit of `max_mismatch`; one more than the
    /// budget allows fails the whole alignment.
    pub fn aligned(
        &self,
        s: &str,
        case: Case,
        max_mismatch: usize,
    ) -> Result<SmolStr, NotSuitableError> {
        let (own, opposite) = self.maps(case);
        let mut budget = max_mismatch;

        s.chars()
            .map(|ch| {
                if own.contains_key(&ch) {
                    Ok(ch)
                } else if let Some(&mapped) = opposite.get(&ch) {
                    Ok(mapped)
                } else if budget == 0 {
                    Err(NotSuitableError {
                        input: s.to_string(),
                        foreign: ch,
                    })
                } else {
                    budget -= 1;
                    Ok(ch)
                }
            })
            .collect()
    }

    /// [`Alphabet::aligned`] into the reference (lower) case.
    #[inline(always)]
    pub fn aligned_lower(&self, s: &str, max_mismatch: usize) -> Result<SmolStr, NotSuitableError> {
        self.aligned(s, Case::Lower, max_mismatch)
    }

    /// The characters registered for `case`, in configuration order.
    #[inline(always)]
    pub fn chars(&self, case: Case) -> &[char] {
        match case {
            Case::Lower => &self.lower,
            Case::Upper => &self.upper,
        }
    }

    /// The reference case characters.
    #[inline(always)]
    pub fn lower_chars(&self) -> &[char] {
        &self.lower
    }

    /// Which side of the bijection `ch` belongs to. A character registered
    /// on both sides reports [`Case::Lower`].
    #[inline(always)]
    pub fn case_of(&self, ch: char) -> Option<Case> {
        if self.lower_to_upper.contains_key(&ch) {
            Some(Case::Lower)
        } else if self.upper_to_lower.contains_key(&ch) {
            Some(Case::Upper)
        } else {
            None
        }
    }

    /// `ch` expressed in `case`, or `None` when it is foreign.
    #[inline(always)]
    pub fn to_case(&self, ch: char, case: Case) -> Option<char> {
        let (own, opposite) = self.maps(case);

        if own.contains_key(&ch) {
            Some(ch)
        } else {
            opposite.get(&ch).copied()
        }
    }

    /// whether `ch` belongs to either case
    #[inline(always)]
    pub fn contains(&self, ch: char) -> bool {
        self.case_of(ch).is_some()
    }

    /// Number of lower/upper pairs.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// whether no pairs were configured
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    // (keys of `case`, keys of the opposite case mapped into `case`)
    #[inline(always)]
    fn maps(&self, case: Case) -> (&HashMap<char, char>, &HashMap<char, char>) {
        match case {
            Case::Lower => (&self.lower_to_upper, &self.upper_to_lower),
            Case::Upper => (&self.upper_to_lower, &self.lower_to_upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet {
        Alphabet::new("abc", "ABC").unwrap()
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            Alphabet::new("abc", "AB").unwrap_err(),
            ConfigError::LengthMismatch { lower: 3, upper: 2 }
        );
    }

    #[test]
    fn duplicated_chars() {
        assert_eq!(
            Alphabet::new("aba", "ABC").unwrap_err(),
            ConfigError::DuplicateChar('a')
        );
        assert_eq!(
            Alphabet::new("abc", "ABA").unwrap_err(),
            ConfigError::DuplicateChar('A')
        );
    }

    #[test]
    fn same_char_on_both_sides() {
        let alphabet = Alphabet::new("ab1", "AB1").unwrap();
        assert_eq!(alphabet.aligned_lower("A1", 0).unwrap(), "a1");
        assert_eq!(alphabet.aligned("a1", Case::Upper, 0).unwrap(), "A1");
        assert_eq!(alphabet.case_of('1'), Some(Case::Lower));
    }

    #[test]
    fn aligns_to_requested_case() {
        let alphabet = abc();
        assert_eq!(alphabet.aligned_lower("AbC", 0).unwrap(), "abc");
        assert_eq!(alphabet.aligned("AbC", Case::Upper, 0).unwrap(), "ABC");
    }

    #[test]
    fn foreign_chars_consume_budget() {
        let alphabet = abc();
        assert_eq!(alphabet.aligned("aXc", Case::Lower, 1).unwrap(), "aXc");
        assert_eq!(
            alphabet.aligned("aXc", Case::Lower, 0).unwrap_err(),
            NotSuitableError {
                input: "aXc".into(),
                foreign: 'X'
            }
        );
        assert!(alphabet.aligned("X!c", Case::Lower, 1).is_err());
        assert_eq!(alphabet.aligned("X!C", Case::Lower, 2).unwrap(), "X!c");
    }

    #[test]
    fn empty_string_aligns() {
        assert_eq!(abc().aligned_lower("", 0).unwrap(), "");
    }

    #[test]
    fn canonical_form_keeps_length_and_order() {
        let alphabet = Alphabet::new("абвгд", "АБВГД").unwrap();
        for word in &["ДВА", "гдАБ", "вв", "Б"] {
            let aligned = alphabet.aligned_lower(word, 0).unwrap();
            assert_eq!(aligned.chars().count(), word.chars().count());
            assert!(aligned
                .chars()
                .all(|c| alphabet.case_of(c) == Some(Case::Lower)));
            for (a, b) in aligned.chars().zip(word.chars()) {
                assert_eq!(alphabet.to_case(b, Case::Lower), Some(a));
            }
        }
    }

    #[test]
    fn chars_in_configuration_order() {
        let alphabet = Alphabet::new("zyx", "ZYX").unwrap();
        assert_eq!(alphabet.chars(Case::Lower), &['z', 'y', 'x']);
        assert_eq!(alphabet.chars(Case::Upper), &['Z', 'Y', 'X']);
        assert_eq!(alphabet.lower_chars(), alphabet.chars(Case::Lower));
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn char_lookup() {
        let alphabet = abc();
        assert_eq!(alphabet.case_of('B'), Some(Case::Upper));
        assert_eq!(alphabet.case_of('b'), Some(Case::Lower));
        assert_eq!(alphabet.case_of('?'), None);
        assert_eq!(alphabet.to_case('b', Case::Upper), Some('B'));
        assert_eq!(alphabet.to_case('?', Case::Upper), None);
        assert!(!alphabet.contains('d'));
        assert_eq!(Case::Lower.opposite(), Case::Upper);
    }
}
