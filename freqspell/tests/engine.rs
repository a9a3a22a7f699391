use std::io::Cursor;

use freqspell::speller::error::SpellerError;
use freqspell::speller::{Engine, SpellerConfig};
use freqspell::vocabulary::Vocabulary;

const RUSSIAN: &str = "\
абвгдеёжзийклмнопрстуфхцчшщъыьэюя
АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ
120 кот 45 кит 30 код
17 КОТЫ 9 ток 3 кто
";

fn load() -> Vocabulary {
    Vocabulary::from_reader(Cursor::new(RUSSIAN)).unwrap()
}

fn values(words: &[freqspell::vocabulary::Word]) -> Vec<(&str, u64)> {
    words.iter().map(|w| (w.value(), w.frequency())).collect()
}

#[test]
fn suggests_from_loaded_vocabulary() {
    let vocabulary = load();
    let engine = Engine::new();

    let words = engine.check("КАТ", 2, &vocabulary).unwrap();
    assert_eq!(values(&words), vec![("кот", 120), ("кит", 45)]);

    let words = engine.check("кт", 5, &vocabulary).unwrap();
    assert_eq!(values(&words), vec![("кот", 120), ("кит", 45), ("кто", 3)]);

    let words = engine.check("окт", 5, &vocabulary).unwrap();
    assert_eq!(values(&words), vec![("кот", 120)]);
}

#[test]
fn known_word_is_returned_alone() {
    let vocabulary = load();
    let words = Engine::new().check("Коты", 10, &vocabulary).unwrap();
    assert_eq!(values(&words), vec![("коты", 17)]);
}

#[test]
fn latin_query_is_not_suitable() {
    let vocabulary = load();
    let result = Engine::new().check("cat", 2, &vocabulary);
    assert!(matches!(result, Err(SpellerError::NotSuitable(_))));
}

#[test]
fn configured_check() {
    let vocabulary = load();
    let config = SpellerConfig {
        n_best: 1,
        case_handling: true,
        ..SpellerConfig::default()
    };
    let words = Engine::new()
        .check_with_config("Кат", &config, &vocabulary)
        .unwrap();
    assert_eq!(values(&words), vec![("Кот", 120)]);
}
