// Unconditional rewrite lists (pre-processing, undoubling, unaccenting).

use lexstem_core::pattern::Rewrite;

/// Apply every rewrite in `rewrites` to `word`, in order.
///
/// Each rewrite sees the output of the previous one.
pub fn apply_rewrites(word: &str, rewrites: &[Rewrite]) -> String {
    rewrites
        .iter()
        .fold(word.to_string(), |acc, rewrite| rewrite.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_identity() {
        assert_eq!(apply_rewrites("jouer", &[]), "jouer");
    }

    #[test]
    fn rewrites_chain_in_order() {
        let rewrites = [Rewrite::first("qu", "qU"), Rewrite::first("qU", "k")];
        assert_eq!(apply_rewrites("quand", &rewrites), "kand");
    }

    #[test]
    fn first_only_touches_leftmost_match() {
        let rewrites = [Rewrite::first("([aeiou])u([aeiou])", "${1}U${2}")];
        assert_eq!(apply_rewrites("ouaoua", &rewrites), "oUaoua");
    }

    #[test]
    fn all_touches_every_match() {
        let rewrites = [Rewrite::all("á", "a"), Rewrite::all("ó", "o")];
        assert_eq!(apply_rewrites("cómodá", &rewrites), "comoda");
    }

    #[test]
    fn undoubling_with_captures() {
        let rewrites = [
            Rewrite::first("(en|on)n$", "${1}"),
            Rewrite::first("(et)t$", "${1}"),
            Rewrite::first("(e|ei)ll$", "${1}l"),
        ];
        assert_eq!(apply_rewrites("bonn", &rewrites), "bon");
        assert_eq!(apply_rewrites("nett", &rewrites), "net");
        assert_eq!(apply_rewrites("pareill", &rewrites), "pareil");
    }
}
