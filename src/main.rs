use std::error::Error;
use std::{env, fs};

use log::info;
use sliced_art::{build_engine_from_corpus, ClueEngine, Corpus, EngineConfig, Variant};

const USAGE: &str =
    "usage: sliced_art [substitution|anagram|length_diff] [WORD_FILE] [label=word ...]";

const DEMO_WORDS: &str = "the big bag of gob words let me tell a tale late teal \
    of a bland land rail liar sail lira rails";

fn demo_assignments(variant: Variant) -> Vec<(String, String)> {
    let pairs: &[(&str, &str)] = match variant {
        Variant::Substitution => &[("a", "bag"), ("o", "bog"), ("w", "towards")],
        Variant::Anagram => &[("a", "tale"), ("e", "latE"), ("i", "rail")],
        Variant::LengthDiff => &[("a", "tale"), ("b", "bland"), ("r", "rails"), ("", "let")],
    };
    pairs
        .iter()
        .map(|&(label, word)| (label.to_string(), word.to_string()))
        .collect()
}

fn parse_assignment(arg: &str) -> Result<(String, String), Box<dyn Error>> {
    let (label, word) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected label=word, got {arg:?}\n{USAGE}"))?;
    Ok((label.to_string(), word.to_string()))
}

fn print_puzzle(
    engine: &mut dyn ClueEngine,
    assignments: &[(String, String)],
) -> Result<(), Box<dyn Error>> {
    for (label, word) in assignments {
        engine.set(label, word)?;
    }
    for (label, _) in assignments {
        let shown = if label.is_empty() { "-" } else { label.as_str() };
        println!("{shown}: {}", engine.make_display(label));
    }
    println!("--- Clues ---");
    for (letter, clue) in engine.make_clues() {
        println!("{}:\n{clue}", letter.to_ascii_uppercase());
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let variant = match args.first() {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::default(),
    };
    let corpus = match args.get(1) {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read word file {path}: {e}"))?;
            Corpus::from_text(&text)
        }
        None => Corpus::new(DEMO_WORDS.split(' ')),
    };
    let assignments = if args.len() > 2 {
        args[2..]
            .iter()
            .map(|a| parse_assignment(a))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        demo_assignments(variant)
    };
    // only the cells given on the command line exist, so nothing extra gates the clues
    let config = EngineConfig {
        variant,
        min_words: 0,
        seed: None,
    };
    info!("Loaded {} words for the {} engine", corpus.len(), variant.name());
    let mut engine = build_engine_from_corpus(&config, corpus);
    print_puzzle(engine.as_mut(), &assignments)
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
