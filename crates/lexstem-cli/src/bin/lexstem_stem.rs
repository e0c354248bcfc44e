// lexstem-stem: Stem French or Spanish words.
//
// Reads words from stdin (one per line) unless words are given as arguments,
// and prints each word with its stem, separated by a tab.
//
// Usage:
//   lexstem-stem [-l LANG] [-d DATA_DIR] [WORD...]
//
// Options:
//   -l, --lang LANG        Language code (fr, es); default fr
//   -d, --data-path DIR    Directory with <lang>.json rule table overrides
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use lexstem_lang::Stemmer;

fn main() {
    lexstem_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexstem_cli::parse_option(&args, "data-path", "-d");
    let (lang, args) = lexstem_cli::parse_option(&args, "lang", "-l");

    if lexstem_cli::wants_help(&args) {
        println!("lexstem-stem: Stem French or Spanish words.");
        println!();
        println!("Usage: lexstem-stem [-l LANG] [-d DATA_DIR] [WORD...]");
        println!();
        println!("If WORD arguments are given, stems each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --lang LANG        Language code (fr, es); default fr");
        println!("  -d, --data-path DIR    Directory with <lang>.json rule table overrides");
        println!("  -h, --help             Print this help");
        return;
    }

    let lang = lang.unwrap_or_else(|| "fr".to_string());
    let registry = lexstem_cli::load_registry(data_path.as_deref())
        .unwrap_or_else(|e| lexstem_cli::fatal(&e));
    if !registry.contains(&lang) {
        lexstem_cli::fatal(&format!(
            "no rule table for language {lang:?} (available: {})",
            registry.languages().join(", ")
        ));
    }
    let stemmer = registry.stemmer(&lang);

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stem_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let _ = writeln!(out, "{word}\t{}", stemmer.stem(word));
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            stem_word(word, &mut out);
        }
    } else {
        for word in &words {
            stem_word(word, &mut out);
        }
    }
}
