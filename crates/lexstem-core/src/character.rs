// Character classification used by the tokenizer.

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters and digits follow Unicode's alphabetic and numeric properties, so
/// accented Latin letters (é, ñ, ç, ü) count as letters.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | ':'
            | '!'
            | '?'
            | '¡'
            | '¿'
            | '-'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '«'
            | '»'
            | '\u{2013}' // en dash
            | '\u{2014}' // em dash
            | '\u{2018}'
            | '\u{2019}'
            | '\u{201C}'
            | '\u{201D}'
            | '\u{2026}' // ellipsis
    ) || c.is_ascii_punctuation()
}

/// Whether `c` can be part of a word token.
pub fn is_word_char(c: char) -> bool {
    matches!(get_char_type(c), CharType::Letter | CharType::Digit)
}
