// Word tokens for prominent-word extraction.

use lexstem_core::character::{CharType, get_char_type, is_word_char};

/// Split `text` into runs of letters and digits.
///
/// Tokens made only of digits are dropped. Everything else (whitespace,
/// punctuation, apostrophes, symbols) separates tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .filter(|token| !token.chars().all(|c| get_char_type(c) == CharType::Digit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(
            tokenize("Le chat, le chien; les oiseaux!"),
            vec!["Le", "chat", "le", "chien", "les", "oiseaux"]
        );
    }

    #[test]
    fn apostrophes_split_elisions() {
        assert_eq!(tokenize("l'été d\u{2019}hiver"), vec!["l", "été", "d", "hiver"]);
    }

    #[test]
    fn spanish_marks_are_separators() {
        assert_eq!(tokenize("¿Qué pasó? ¡Nada!"), vec!["Qué", "pasó", "Nada"]);
    }

    #[test]
    fn digit_only_tokens_are_dropped() {
        assert_eq!(tokenize("en 2024 el G7 y 3D"), vec!["en", "el", "G7", "y", "3D"]);
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ... ").is_empty());
    }
}
