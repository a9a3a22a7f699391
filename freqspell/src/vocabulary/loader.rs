//! Reading vocabularies from their text format.
//!
//! The first line holds the lower case characters, the second line the
//! matching upper case characters. The rest of the source is a sequence of
//! whitespace-separated `frequency word` pairs.
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::vocabulary::error::LoadError;
use crate::vocabulary::{Frequency, Vocabulary};

const READER_NAME: &str = "<reader>";

impl Vocabulary {
    /// Reads a vocabulary from the file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Vocabulary, LoadError> {
        let path = path.as_ref();
        let name = path.to_string_lossy().to_string();
        let file = File::open(path).map_err(|e| LoadError::Io(name.clone(), e))?;

        load(BufReader::new(file), &name)
    }

    /// Reads a vocabulary from any buffered source.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Vocabulary, LoadError> {
        load(reader, READER_NAME)
    }
}

fn load<R: BufRead>(mut reader: R, name: &str) -> Result<Vocabulary, LoadError> {
    let lower = read_alphabet_line(&mut reader, name)?;
    let upper = read_alphabet_line(&mut reader, name)?;
    let alphabet = Arc::new(Alphabet::new(&lower, &upper)?);

    log::debug!("{}: alphabet of {} pairs", name, alphabet.len());

    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| LoadError::Io(name.to_string(), e))?;

    let mut vocabulary = Vocabulary::new(alphabet);
    let mut tokens = body.split_whitespace();
    let mut entry = 0usize;

    while let Some(token) = tokens.next() {
        entry += 1;

        let frequency = parse_frequency(token).ok_or_else(|| LoadError::InvalidFrequency {
            token: token.to_string(),
            entry,
        })?;

        let word = tokens.next().ok_or(LoadError::MissingWord { frequency })?;
        let word = vocabulary
            .alphabet()
            .aligned_lower(word, 0)
            .map_err(|source| LoadError::NotSuitable { entry, source })?;

        if let Some(previous) = vocabulary.insert_word(&word, frequency) {
            log::trace!("{}: {} overwritten ({} -> {})", name, word, previous, frequency);
        }
    }

    log::debug!("{}: {} entries, {} words", name, entry, vocabulary.len());

    Ok(vocabulary)
}

fn read_alphabet_line<R: BufRead>(reader: &mut R, name: &str) -> Result<String, LoadError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| LoadError::Io(name.to_string(), e))?;

    if read == 0 {
        return Err(LoadError::MissingAlphabet);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

#[inline(always)]
fn parse_frequency(token: &str) -> Option<Frequency> {
    token.parse::<Frequency>().ok().filter(|&f| f > 0)
}
