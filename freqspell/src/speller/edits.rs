//! Edit-distance-1 candidate generation.
//!
//! Each [`EditKind`] is driven by a small cursor that produces the next
//! candidate or reports exhaustion. [`Candidates`] runs the cursors one after
//! another. Positions are counted in characters, not bytes.
use std::vec::IntoIter;

/// The single-edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// remove one character
    Deletion,
    /// replace one character with a different alphabet character
    Substitution,
    /// insert one alphabet character, ends included
    Insertion,
    /// swap two adjacent, different characters
    Transposition,
}

impl EditKind {
    /// Every operation, in generation order.
    pub const ALL: [EditKind; 4] = [
        EditKind::Deletion,
        EditKind::Substitution,
        EditKind::Insertion,
        EditKind::Transposition,
    ];
}

#[derive(Debug, Clone, Copy)]
enum Cursor {
    Deletion { pos: usize },
    Substitution { pos: usize, alpha: usize },
    Insertion { pos: usize, alpha: usize },
    Transposition { pos: usize },
}

impl Cursor {
    #[inline(always)]
    fn start(kind: EditKind) -> Cursor {
        match kind {
            EditKind::Deletion => Cursor::Deletion { pos: 0 },
            EditKind::Substitution => Cursor::Substitution { pos: 0, alpha: 0 },
            EditKind::Insertion => Cursor::Insertion { pos: 0, alpha: 0 },
            EditKind::Transposition => Cursor::Transposition { pos: 0 },
        }
    }

    fn next_candidate(&mut self, source: &[char], chars: &[char]) -> Option<String> {
        let len = source.len();

        match self {
            Cursor::Deletion { pos } => {
                // Deleting the only character leaves nothing to look up.
                if len < 2 || *pos >= len {
                    return None;
                }

                let at = *pos;
                *pos += 1;

                Some(
                    source[..at]
                        .iter()
                        .chain(source[at + 1..].iter())
                        .collect(),
                )
            }
            Cursor::Substitution { pos, alpha } => loop {
                if *pos >= len {
                    return None;
                }
                if *alpha >= chars.len() {
                    *pos += 1;
                    *alpha = 0;
                    continue;
                }

                let (at, ch) = (*pos, chars[*alpha]);
                *alpha += 1;

                if source[at] == ch {
                    continue;
                }

                let mut out = source.to_vec();
                out[at] = ch;
                return Some(out.into_iter().collect());
            },
            Cursor::Insertion { pos, alpha } => {
                if chars.is_empty() {
                    return None;
                }
                if *alpha >= chars.len() {
                    *pos += 1;
                    *alpha = 0;
                }
                if *pos > len {
                    return None;
                }

                let (at, ch) = (*pos, chars[*alpha]);
                *alpha += 1;

                Some(
                    source[..at]
                        .iter()
                        .chain(std::iter::once(&ch))
                        .chain(source[at..].iter())
                        .collect(),
                )
            }
            Cursor::Transposition { pos } => loop {
                if len < 2 || *pos >= len - 1 {
                    return None;
                }

                let at = *pos;
                *pos += 1;

                if source[at] == source[at + 1] {
                    continue;
                }

                let mut out = source.to_vec();
                out.swap(at, at + 1);
                return Some(out.into_iter().collect());
            },
        }
    }
}

/// Every string one edit away from a source word, over a given alphabet.
///
/// The same string can be produced by more than one operation.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    source: Vec<char>,
    chars: &'a [char],
    current: Option<Cursor>,
    pending: IntoIter<EditKind>,
}

impl<'a> Candidates<'a> {
    /// Candidates from all four operations.
    pub fn new(source: &str, chars: &'a [char]) -> Candidates<'a> {
        Candidates::with_edits(source, chars, &EditKind::ALL)
    }

    /// Candidates from the given operations only, in the given order.
    pub fn with_edits(source: &str, chars: &'a [char], edits: &[EditKind]) -> Candidates<'a> {
        let mut pending = edits.to_vec().into_iter();
        let current = pending.next().map(Cursor::start);

        Candidates {
            source: source.chars().collect(),
            chars,
            current,
            pending,
        }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let cursor = self.current.as_mut()?;

            if let Some(candidate) = cursor.next_candidate(&self.source, self.chars) {
                return Some(candidate);
            }

            self.current = self.pending.next().map(Cursor::start);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &[char] = &['a', 'b', 'c'];

    fn generate(source: &str, edit: EditKind) -> Vec<String> {
        Candidates::with_edits(source, ABC, &[edit]).collect()
    }

    #[test]
    fn deletions() {
        assert_eq!(generate("abc", EditKind::Deletion), vec!["bc", "ac", "ab"]);
        assert!(generate("a", EditKind::Deletion).is_empty());
    }

    #[test]
    fn substitutions_skip_noops() {
        assert_eq!(
            generate("ab", EditKind::Substitution),
            vec!["bb", "cb", "aa", "ac"]
        );
    }

    #[test]
    fn insertions_cover_both_ends() {
        assert_eq!(
            generate("a", EditKind::Insertion),
            vec!["aa", "ba", "ca", "aa", "ab", "ac"]
        );
    }

    #[test]
    fn transpositions() {
        assert_eq!(
            generate("abcc", EditKind::Transposition),
            vec!["bacc", "acbc"]
        );
        assert!(generate("a", EditKind::Transposition).is_empty());
    }

    #[test]
    fn multibyte_positions() {
        let chars = ['ж'];
        let all: Vec<String> =
            Candidates::with_edits("щё", &chars, &[EditKind::Substitution]).collect();
        assert_eq!(all, vec!["жё", "щж"]);
    }

    #[test]
    fn counts() {
        // 4 deletions, 4 * 3 - 4 substitutions, 5 * 3 insertions, 3 transpositions
        let all: Vec<String> = Candidates::new("abca", ABC).collect();
        assert_eq!(all.len(), 4 + 8 + 15 + 3);
    }

    #[test]
    fn empty_alphabet() {
        let all: Vec<String> = Candidates::new("xy", &[]).collect();
        assert_eq!(all, vec!["y", "x", "yx"]);
    }

    #[test]
    fn all_one_edit_away() {
        for candidate in Candidates::new("cab", ABC) {
            assert_eq!(strsim::osa_distance("cab", &candidate), 1, "{}", candidate);
        }
    }
}
