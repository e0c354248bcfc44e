// Region computation.
//
// All boundaries are byte offsets into the word, taken from regex match
// ends, so they always fall on character boundaries.

use lexstem_core::region::{Region, RegionPatterns, Regions};

/// Locate R1, R2 and RV in `word`.
///
/// - RV starts at the end of the first `rv_prefixes` pattern that matches.
///   Failing that, it starts after the first `rv_fallback` match found past
///   the first character. Otherwise RV is the end-of-word sentinel.
/// - R1 starts after the first `r1` match; R2 after the first `r1` match
///   inside R1. Missing boundaries are end-of-word sentinels.
/// - A found R1 shorter than `r1_min_chars` characters into the word is moved
///   forward. R2 is computed from the unadjusted R1.
pub fn compute_regions(word: &str, patterns: &RegionPatterns) -> Regions {
    let rv = compute_rv(word, patterns);

    let (r1, r2) = match patterns.r1.find(word) {
        Some((_, r1_end)) => {
            let r2 = match patterns.r1.find(&word[r1_end..]) {
                Some((_, end)) => Region::at(r1_end + end),
                None => Region::end_of(word),
            };
            (Region::at(clamp_to_min_chars(word, r1_end, patterns.r1_min_chars)), r2)
        }
        None => (Region::end_of(word), Region::end_of(word)),
    };

    Regions { r1, r2, rv }
}

fn compute_rv(word: &str, patterns: &RegionPatterns) -> Region {
    for prefix in &patterns.rv_prefixes {
        if let Some((_, end)) = prefix.find(word) {
            return Region::at(end);
        }
    }

    let Some(fallback) = &patterns.rv_fallback else {
        return Region::end_of(word);
    };
    let Some(first) = word.chars().next() else {
        return Region::end_of(word);
    };
    let skip = first.len_utf8();
    match fallback.find(&word[skip..]) {
        Some((_, end)) => Region::at(skip + end),
        None => Region::end_of(word),
    }
}

/// Move `start` forward so that at least `min_chars` characters precede it.
fn clamp_to_min_chars(word: &str, start: usize, min_chars: usize) -> usize {
    if word[..start].chars().count() >= min_chars {
        return start;
    }
    word.char_indices()
        .nth(min_chars)
        .map_or(word.len(), |(idx, _)| idx)
}
