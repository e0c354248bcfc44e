//! Prominent-word extraction over real French and Spanish text.
//!
//! Run: cargo test -p lexstem-lang --test prominent

#![cfg(feature = "prominent")]

use lexstem_lang::MorphologyRegistry;
use lexstem_lang::prominent::{ExtractorOptions, Paper, ProminentWord, Researcher, extract};

fn researcher(min_occurrences: usize) -> Researcher {
    Researcher::new(MorphologyRegistry::with_builtin()).with_options(ExtractorOptions {
        min_occurrences,
        ..ExtractorOptions::default()
    })
}

fn find<'a>(words: &'a [ProminentWord], stem: &str) -> Option<&'a ProminentWord> {
    words.iter().find(|w| w.stem == stem)
}

#[test]
fn french_inflections_group_under_one_stem() {
    let text = "Le cheval galope. Les chevaux galopent. Un cheval blanc et deux chevaux noirs. \
                Les chevaux sont fatigués.";
    let words = extract(&Paper::new(text, "fr_FR"), &researcher(2));

    let cheval = find(&words, "cheval").expect("cheval group");
    assert_eq!(cheval.occurrences, 5);
    assert_eq!(cheval.word, "chevaux");
    assert_eq!(words[0].stem, "cheval");
}

#[test]
fn spanish_verb_forms_group_under_one_stem() {
    let text = "Los niños saltaron. Ellos saltan y saltaron otra vez. Nadie salta como ellos.";
    let words = extract(&Paper::new(text, "es_ES"), &researcher(1));

    let salt = find(&words, "salt").expect("salt group");
    assert_eq!(salt.occurrences, 4);
    assert_eq!(salt.word, "saltaron");
    // function words never show up
    assert!(find(&words, "los").is_none());
    assert!(find(&words, "y").is_none());
}

#[test]
fn unknown_language_uses_identity_stemming() {
    let text = "koty kot koty psy";
    let words = extract(&Paper::new(text, "pl_PL"), &researcher(1));
    assert_eq!(
        words,
        vec![
            ProminentWord {
                stem: "koty".to_string(),
                word: "koty".to_string(),
                occurrences: 2,
            },
            ProminentWord {
                stem: "kot".to_string(),
                word: "kot".to_string(),
                occurrences: 1,
            },
            ProminentWord {
                stem: "psy".to_string(),
                word: "psy".to_string(),
                occurrences: 1,
            },
        ]
    );
}

#[test]
fn registry_without_tables_uses_identity_stemming() {
    let researcher = Researcher::new(MorphologyRegistry::new()).with_options(ExtractorOptions {
        min_occurrences: 1,
        ..ExtractorOptions::default()
    });
    let words = extract(&Paper::new("chevaux cheval", "fr"), &researcher);
    assert_eq!(words.len(), 2);
}

#[test]
fn abbreviations_are_not_stemmed() {
    let text = "L'ONU et l'ONU. Les nations de l'ONU.";
    let words = extract(&Paper::new(text, "fr"), &researcher(2));
    let onu = find(&words, "ONU").expect("ONU group");
    assert_eq!(onu.occurrences, 3);
    assert_eq!(onu.word, "ONU");
}

#[test]
fn default_options_need_five_occurrences() {
    let text = "maison maison maison maison jardin jardin maison";
    let words = extract(&Paper::new(text, "fr"), &Researcher::new(MorphologyRegistry::with_builtin()));
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].stem, "maison");
    assert_eq!(words[0].occurrences, 5);
}
