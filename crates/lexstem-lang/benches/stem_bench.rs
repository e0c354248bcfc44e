// Criterion benchmarks for lexstem-lang.
//
// Words come from tests/golden/stems.json; the built-in rule tables are used
// throughout, so no external data is needed.
//
// Run:
//   cargo bench -p lexstem-lang

use criterion::{Criterion, criterion_group, criterion_main};

use lexstem_lang::prominent::{ExtractorOptions, Paper, Researcher, extract};
use lexstem_lang::registry::builtin;
use lexstem_lang::{MorphologyRegistry, StemCache, stem};

// ---------------------------------------------------------------------------
// Word lists
// ---------------------------------------------------------------------------

fn load_golden_words(language: &str) -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/stems.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let golden: serde_json::Value = serde_json::from_str(&contents).unwrap_or_default();
    golden[language]
        .as_array()
        .map(|pairs| {
            pairs
                .iter()
                .filter_map(|pair| pair[0].as_str())
                .map(|w| w.to_string())
                .collect()
        })
        .unwrap_or_default()
}

const FRENCH_TEXT: &str = "Les chevaux galopent dans la plaine. Le cheval blanc galope \
                           plus vite que les autres chevaux, et continuellement les \
                           cavaliers admirent la nationalité des chevaux de la région.";

const SPANISH_TEXT: &str = "Los niños saltaron en la plaza. Saltan y saltaron otra vez \
                            mientras sus abuelas miraban, y nadie salta como ellos \
                            cuando la puertecita se abre.";

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Stem every French golden word.
fn bench_stem_french(c: &mut Criterion) {
    let data = builtin("fr").expect("built-in French table");
    let words = load_golden_words("fr");

    c.bench_function("stem_french_golden", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stem(word, &data));
            }
        });
    });
}

/// Stem every Spanish golden word, exception lookups included.
fn bench_stem_spanish(c: &mut Criterion) {
    let data = builtin("es").expect("built-in Spanish table");
    let words = load_golden_words("es");

    c.bench_function("stem_spanish_golden", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(stem(word, &data));
            }
        });
    });
}

/// Repeated words through the stem cache.
fn bench_cached_stemming(c: &mut Criterion) {
    let registry = MorphologyRegistry::with_builtin();
    let stemmer = registry.stemmer("fr");
    let words = load_golden_words("fr");

    c.bench_function("stem_french_cached_x10", |b| {
        b.iter(|| {
            let mut cache = StemCache::new(1024);
            for _ in 0..10 {
                for word in &words {
                    std::hint::black_box(cache.stem(word, stemmer.as_ref()));
                }
            }
        });
    });
}

/// Full prominent-word extraction on a short paragraph per language.
fn bench_extract(c: &mut Criterion) {
    let researcher = Researcher::new(MorphologyRegistry::with_builtin()).with_options(ExtractorOptions {
        min_occurrences: 2,
        ..ExtractorOptions::default()
    });
    let papers = [Paper::new(FRENCH_TEXT, "fr_FR"), Paper::new(SPANISH_TEXT, "es_ES")];

    c.bench_function("extract_2_paragraphs", |b| {
        b.iter(|| {
            for paper in &papers {
                std::hint::black_box(extract(paper, &researcher));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_stem_french,
    bench_stem_spanish,
    bench_cached_stemming,
    bench_extract,
);
criterion_main!(benches);
