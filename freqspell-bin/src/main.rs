use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use freqspell::alphabet::Case;
use freqspell::speller::error::SpellerError;
use freqspell::speller::{Engine, SpellerConfig};
use freqspell::vocabulary::{Vocabulary, Word};

const EXIT_WORD: &str = "exit";

trait OutputWriter {
    fn write_words(&mut self, source: &str, word: &str, words: &[Word]);
    fn write_unsuitable(&mut self, source: &str, word: &str);
    fn finish(&mut self);
}

struct StdoutWriter {
    show_source: bool,
}

impl OutputWriter for StdoutWriter {
    fn write_words(&mut self, source: &str, _word: &str, words: &[Word]) {
        if self.show_source {
            println!("[{}]", source);
        }

        for w in words {
            println!("{} : {}", w.value(), w.frequency());
        }

        if words.is_empty() {
            println!("Not found");
        }
    }

    fn write_unsuitable(&mut self, source: &str, word: &str) {
        if self.show_source {
            println!("[{}]", source);
        }
        println!("{}: not suitable for this alphabet", word);
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckResult {
    vocabulary: String,
    word: String,
    is_suitable: bool,
    suggestions: Vec<Word>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<CheckResult>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_words(&mut self, source: &str, word: &str, words: &[Word]) {
        self.results.push(CheckResult {
            vocabulary: source.to_owned(),
            word: word.to_owned(),
            is_suitable: true,
            suggestions: words.to_vec(),
        });
    }

    fn write_unsuitable(&mut self, source: &str, word: &str) {
        self.results.push(CheckResult {
            vocabulary: source.to_owned(),
            word: word.to_owned(),
            is_suitable: false,
            suggestions: vec![],
        });
    }

    fn finish(&mut self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize results: {}", e),
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "get suggestions for provided input")]
    Check(CheckArgs),

    #[options(help = "print the alphabet of each vocabulary")]
    Alphabet(AlphabetArgs),
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(
        long = "vocabulary",
        help = "vocabulary file to be used (may be repeated)"
    )]
    vocabularies: Vec<PathBuf>,

    #[options(help = "JSON speller configuration")]
    config: Option<PathBuf>,

    #[options(help = "maximum number of results")]
    nbest: Option<usize>,

    #[options(help = "characters outside the alphabet tolerated per word")]
    mismatch: Option<usize>,

    #[options(
        no_short,
        long = "keep-case",
        help = "give suggestions the capitalisation of the input"
    )]
    keep_case: bool,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct AlphabetArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(long = "vocabulary", help = "vocabulary file to be used (may be repeated)")]
    vocabularies: Vec<PathBuf>,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SpellerConfig> {
    let path = match path {
        Some(v) => v,
        None => return Ok(SpellerConfig::default()),
    };

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(config)
}

/// Loads every vocabulary it can. A broken file is reported and skipped.
fn load_vocabularies(paths: &[PathBuf]) -> anyhow::Result<Vec<(String, Vocabulary)>> {
    if paths.is_empty() {
        anyhow::bail!("at least one --vocabulary is required");
    }

    let mut out = Vec::with_capacity(paths.len());

    for path in paths {
        let name = path.display().to_string();
        log::info!("Loading {}", name);

        match Vocabulary::open(path) {
            Ok(vocabulary) => {
                log::info!(
                    "{}: {} words, {} letters",
                    name,
                    vocabulary.len(),
                    vocabulary.alphabet().len()
                );
                out.push((name, vocabulary));
            }
            Err(e) => {
                log::warn!("{}: {:?}", name, e);
                eprintln!("{}: {:#}", name, anyhow::Error::from(e));
            }
        }
    }

    if out.is_empty() {
        anyhow::bail!("no vocabulary could be loaded");
    }

    Ok(out)
}

fn run(
    engine: Engine,
    vocabularies: &[(String, Vocabulary)],
    word: &str,
    writer: &mut dyn OutputWriter,
    config: &SpellerConfig,
) -> anyhow::Result<()> {
    for (name, vocabulary) in vocabularies {
        match engine.check_with_config(word, config, vocabulary) {
            Ok(words) => writer.write_words(name, word, &words),
            Err(SpellerError::NotSuitable(e)) => {
                log::warn!("{}: {}", name, e);
                writer.write_unsuitable(name, word);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(v) = args.nbest {
        config.n_best = v;
    }
    if let Some(v) = args.mismatch {
        config.max_mismatch = v;
    }
    if args.keep_case {
        config.case_handling = true;
    }

    anyhow::ensure!(config.n_best > 0, "maximum number of results must be positive");

    let vocabularies = load_vocabularies(&args.vocabularies)?;
    let engine = Engine::new();

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter {
            show_source: vocabularies.len() > 1,
        })
    };

    if args.inputs.is_empty() {
        eprintln!("Print word ('{}' to quit)", EXIT_WORD);

        'lines: for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;

            for word in line.split_whitespace() {
                if word == EXIT_WORD {
                    break 'lines;
                }
                run(engine, &vocabularies, word, &mut *writer, &config)?;
            }
        }
    } else {
        for word in &args.inputs {
            run(engine, &vocabularies, word, &mut *writer, &config)?;
        }
    }

    writer.finish();

    Ok(())
}

fn alphabet(args: AlphabetArgs) -> anyhow::Result<()> {
    for (name, vocabulary) in load_vocabularies(&args.vocabularies)? {
        let alphabet = vocabulary.alphabet();
        println!("{}", name);
        println!("  lower: {}", alphabet.chars(Case::Lower).iter().collect::<String>());
        println!("  upper: {}", alphabet.chars(Case::Upper).iter().collect::<String>());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Check(args)) => check(args),
        Some(Command::Alphabet(args)) => alphabet(args),
    }
}
