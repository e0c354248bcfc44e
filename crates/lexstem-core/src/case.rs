// Case detection and case folding for word tokens.

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "maison".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Maison".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "maiSon".
    Complex,
    /// All letters are uppercase: "ONU".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Characters that are neither upper- nor lowercase (digits, punctuation,
/// caseless scripts) are ignored.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if first.is_uppercase() {
        first_uc = true;
        no_letters = false;
    }
    if first.is_lowercase() {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Fold a word to lowercase.
///
/// Uses full Unicode lowercasing, so the result may differ in byte length
/// from the input.
pub fn lowercase(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case("2024"), CaseType::NoLetters);
        assert_eq!(detect_case("..."), CaseType::NoLetters);
    }

    #[test]
    fn detect_all_lower() {
        assert_eq!(detect_case("maison"), CaseType::AllLower);
        assert_eq!(detect_case("été"), CaseType::AllLower);
    }

    #[test]
    fn detect_first_upper() {
        assert_eq!(detect_case("Maison"), CaseType::FirstUpper);
        assert_eq!(detect_case("Élan"), CaseType::FirstUpper);
    }

    #[test]
    fn detect_all_upper() {
        assert_eq!(detect_case("ONU"), CaseType::AllUpper);
        assert_eq!(detect_case("ÉTÉ"), CaseType::AllUpper);
    }

    #[test]
    fn detect_complex() {
        assert_eq!(detect_case("maiSon"), CaseType::Complex);
        assert_eq!(detect_case("McDonald"), CaseType::Complex);
    }

    #[test]
    fn digits_do_not_affect_case() {
        assert_eq!(detect_case("G7"), CaseType::AllUpper);
        assert_eq!(detect_case("covid19"), CaseType::AllLower);
    }

    #[test]
    fn lowercase_handles_accents() {
        assert_eq!(lowercase("ÉLÉPHANT"), "éléphant");
        assert_eq!(lowercase("Canción"), "canción");
    }
}
