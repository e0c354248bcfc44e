// Function words excluded from prominent-word extraction.

use hashbrown::HashSet;
use once_cell::sync::Lazy;

const FRENCH: &[&str] = &[
    // articles and determiners
    "le", "la", "les", "l", "un", "une", "des", "du", "de", "d", "au", "aux", "ce", "cet",
    "cette", "ces", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "notre", "nos",
    "votre", "vos", "leur", "leurs", "quel", "quelle", "quels", "quelles", "tout", "toute",
    "tous", "toutes", "chaque", "plusieurs", "quelques",
    // pronouns
    "je", "j", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "me", "m", "te", "t",
    "se", "s", "lui", "y", "en", "moi", "toi", "soi", "eux", "qui", "que", "qu", "quoi", "dont",
    "où", "ceci", "cela", "ça",
    // prepositions and conjunctions
    "à", "dans", "par", "pour", "sur", "sous", "avec", "sans", "chez", "entre", "vers", "contre",
    "depuis", "pendant", "avant", "après", "et", "ou", "mais", "donc", "or", "ni", "car", "si",
    "comme", "quand", "lorsque", "puisque",
    // adverbs and auxiliaries
    "ne", "n", "pas", "plus", "moins", "très", "trop", "aussi", "bien", "déjà", "encore",
    "toujours", "jamais", "est", "sont", "être", "été", "était", "a", "ont", "avoir", "avait",
    "fait", "faire", "peut", "c",
];

const SPANISH: &[&str] = &[
    // articles and determiners
    "el", "la", "los", "las", "un", "una", "unos", "unas", "lo", "al", "del", "este", "esta",
    "estos", "estas", "ese", "esa", "esos", "esas", "aquel", "aquella", "mi", "mis", "tu", "tus",
    "su", "sus", "nuestro", "nuestra", "nuestros", "nuestras", "todo", "toda", "todos", "todas",
    "cada", "otro", "otra", "otros", "otras",
    // pronouns
    "yo", "tú", "él", "ella", "nosotros", "nosotras", "vosotros", "ellos", "ellas", "usted",
    "ustedes", "me", "te", "se", "nos", "os", "le", "les", "que", "qué", "quien", "quién",
    "cual", "cuál", "esto", "eso",
    // prepositions and conjunctions
    "a", "ante", "bajo", "con", "contra", "de", "desde", "en", "entre", "hacia", "hasta", "para",
    "por", "según", "sin", "sobre", "tras", "y", "e", "o", "u", "ni", "pero", "sino", "porque",
    "como", "cuando", "donde", "si",
    // adverbs and auxiliaries
    "no", "sí", "muy", "más", "menos", "ya", "también", "tampoco", "siempre", "nunca", "es",
    "son", "ser", "fue", "era", "está", "están", "estar", "ha", "han", "haber", "hay", "había",
    "puede", "hace",
];

static FRENCH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| FRENCH.iter().copied().collect());
static SPANISH_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| SPANISH.iter().copied().collect());
static EMPTY: Lazy<HashSet<&'static str>> = Lazy::new(HashSet::new);

/// Function words for `language`. Languages without a list get an empty set.
pub fn function_words(language: &str) -> &'static HashSet<&'static str> {
    match language {
        "fr" => &FRENCH_SET,
        "es" => &SPANISH_SET,
        _ => &EMPTY,
    }
}

/// Whether the lowercase `word` is a function word in `language`.
pub fn is_function_word(language: &str, word: &str) -> bool {
    function_words(language).contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_function_words() {
        assert!(is_function_word("fr", "les"));
        assert!(is_function_word("fr", "à"));
        assert!(!is_function_word("fr", "maison"));
    }

    #[test]
    fn spanish_function_words() {
        assert!(is_function_word("es", "los"));
        assert!(is_function_word("es", "según"));
        assert!(!is_function_word("es", "casa"));
    }

    #[test]
    fn unknown_language_has_no_function_words() {
        assert!(function_words("pl").is_empty());
        assert!(!is_function_word("pl", "i"));
    }

    #[test]
    fn lists_have_no_duplicates() {
        assert_eq!(function_words("fr").len(), FRENCH.len());
        assert_eq!(function_words("es").len(), SPANISH.len());
    }
}
