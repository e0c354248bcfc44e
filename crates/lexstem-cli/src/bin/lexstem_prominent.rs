// lexstem-prominent: Prominent words of a text.
//
// Reads a whole text from stdin and prints its most prominent words, one per
// line, as stem, most frequent surface form and occurrence count separated
// by tabs.
//
// Usage:
//   lexstem-prominent [-l LOCALE] [-d DATA_DIR] [--min N] [--max N]
//
// Options:
//   -l, --locale LOCALE    Locale of the text (fr_FR, es_ES, ...); default fr
//   -d, --data-path DIR    Directory with <lang>.json rule table overrides
//       --min N            Minimum occurrences of a stem (default 5)
//       --max N            Maximum number of words printed (default 20)
//   -h, --help             Print help

use std::io::{self, Read, Write};

use lexstem_lang::prominent::{ExtractorOptions, Paper, Researcher, extract};

fn main() {
    lexstem_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexstem_cli::parse_option(&args, "data-path", "-d");
    let (locale, args) = lexstem_cli::parse_option(&args, "locale", "-l");
    let (min, args) = lexstem_cli::parse_option(&args, "min", "");
    let (max, args) = lexstem_cli::parse_option(&args, "max", "");

    if lexstem_cli::wants_help(&args) {
        println!("lexstem-prominent: Prominent words of a text read from stdin.");
        println!();
        println!("Usage: lexstem-prominent [-l LOCALE] [-d DATA_DIR] [--min N] [--max N]");
        println!();
        println!("Prints stem, most frequent form and count, tab separated.");
        println!("Languages without a rule table are grouped by lowercased form.");
        println!();
        println!("Options:");
        println!("  -l, --locale LOCALE    Locale of the text (fr_FR, es_ES, ...); default fr");
        println!("  -d, --data-path DIR    Directory with <lang>.json rule table overrides");
        println!("      --min N            Minimum occurrences of a stem (default 5)");
        println!("      --max N            Maximum number of words printed (default 20)");
        println!("  -h, --help             Print this help");
        return;
    }

    let defaults = ExtractorOptions::default();
    let options = ExtractorOptions {
        min_occurrences: lexstem_cli::parse_count("min", min, defaults.min_occurrences),
        max_words: lexstem_cli::parse_count("max", max, defaults.max_words),
        ..defaults
    };

    let registry = lexstem_cli::load_registry(data_path.as_deref())
        .unwrap_or_else(|e| lexstem_cli::fatal(&e));
    let researcher = Researcher::new(registry).with_options(options);

    let mut text = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut text) {
        lexstem_cli::fatal(&format!("error reading stdin: {e}"));
    }

    let paper = Paper::new(text, locale.unwrap_or_else(|| "fr".to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in extract(&paper, &researcher) {
        let _ = writeln!(out, "{}\t{}\t{}", word.stem, word.word, word.occurrences);
    }
}
