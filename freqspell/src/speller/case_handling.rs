//! Re-casing suggestions to the capitalisation of the query.
use smol_str::SmolStr;

use crate::alphabet::{Alphabet, Case};

/// How the query was capitalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    /// first letter upper case, for example `Cbt`
    FirstCaps,
    /// every alphabet letter upper case, at least two of them
    AllCaps,
    /// anything else
    None,
}

/// Detects the capitalisation of `word` using the alphabet's case sets.
/// Characters foreign to the alphabet are ignored.
pub fn case_mutation(alphabet: &Alphabet, word: &str) -> CaseMutation {
    let cases: Vec<Case> = word.chars().filter_map(|c| alphabet.case_of(c)).collect();

    match cases.first() {
        Some(Case::Upper) if cases.len() > 1 && cases.iter().all(|&c| c == Case::Upper) => {
            CaseMutation::AllCaps
        }
        Some(Case::Upper) => CaseMutation::FirstCaps,
        _ => CaseMutation::None,
    }
}

/// `s` with every alphabet character in upper case.
#[inline(always)]
pub fn upper_case(alphabet: &Alphabet, s: &str) -> SmolStr {
    s.chars()
        .map(|c| alphabet.to_case(c, Case::Upper).unwrap_or(c))
        .collect()
}

/// `s` with its first character in upper case.
#[inline(always)]
pub fn upper_first(alphabet: &Alphabet, s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => {
            let mut out = String::with_capacity(s.len());
            out.push(alphabet.to_case(f, Case::Upper).unwrap_or(f));
            out.push_str(c.as_str());
            SmolStr::from(out)
        }
    }
}

/// Applies `mutation` to a canonical word-form.
pub fn apply(alphabet: &Alphabet, mutation: CaseMutation, s: &str) -> SmolStr {
    match mutation {
        CaseMutation::FirstCaps => upper_first(alphabet, s),
        CaseMutation::AllCaps => upper_case(alphabet, s),
        CaseMutation::None => SmolStr::new(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new("abcdefghijklmnopqrstuvwxyzæøå", "ABCDEFGHIJKLMNOPQRSTUVWXYZÆØÅ").unwrap()
    }

    #[test]
    fn detects_mutation() {
        let a = alphabet();
        assert_eq!(case_mutation(&a, "ÆRE"), CaseMutation::AllCaps);
        assert_eq!(case_mutation(&a, "Ære"), CaseMutation::FirstCaps);
        assert_eq!(case_mutation(&a, "McDonald"), CaseMutation::FirstCaps);
        assert_eq!(case_mutation(&a, "A"), CaseMutation::FirstCaps);
        assert_eq!(case_mutation(&a, "-AB"), CaseMutation::AllCaps);
        assert_eq!(case_mutation(&a, "mcDonald"), CaseMutation::None);
        assert_eq!(case_mutation(&a, "123"), CaseMutation::None);
    }

    #[test]
    fn applies_mutation() {
        let a = alphabet();
        assert_eq!(apply(&a, CaseMutation::AllCaps, "øre"), "ØRE");
        assert_eq!(apply(&a, CaseMutation::FirstCaps, "øre"), "Øre");
        assert_eq!(apply(&a, CaseMutation::None, "øre"), "øre");
        assert_eq!(apply(&a, CaseMutation::FirstCaps, ""), "");
        assert_eq!(apply(&a, CaseMutation::AllCaps, "a-b"), "A-B");
    }
}
