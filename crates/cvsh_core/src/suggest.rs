//! Edit-distance "did you mean" engine.
//!
//! When the first token of an input line matches no known command (or
//! no known `set` / `customize` target), the dispatcher asks this
//! module for the closest known name. Matching is case-insensitive and
//! a name is only ever proposed when its Levenshtein distance to the
//! candidate is strictly below the threshold. Ties keep the
//! first-seen lexicon entry; callers rely on that for deterministic
//! messaging.

/// Distance below which a lexicon entry qualifies as a suggestion.
pub const SUGGEST_THRESHOLD: usize = 3;

/// Classic dynamic-programming Levenshtein distance, case-insensitive.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().flat_map(|c| c.to_lowercase()).collect();
    let b: Vec<char> = b.chars().flat_map(|c| c.to_lowercase()).collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two-row rolling table; prev[j] is table[i-1][j].
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Find the closest lexicon entry to `candidate`, if any lies strictly
/// below `threshold`.
///
/// The running minimum starts at `threshold`, so only strictly better
/// distances are ever retained, and the first entry to reach the
/// minimum wins over later ties.
pub fn suggest<'a, I, S>(candidate: &str, lexicon: I, threshold: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a + ?Sized,
{
    let mut best_distance = threshold;
    let mut best: Option<&'a str> = None;
    for entry in lexicon {
        let entry = entry.as_ref();
        let distance = levenshtein(candidate, entry);
        if distance < best_distance {
            best_distance = distance;
            best = Some(entry);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_strings_have_distance_zero() {
        assert_eq!(levenshtein("skills", "skills"), 0);
        assert_eq!(levenshtein("SKILLS", "skills"), 0);
    }

    #[test]
    fn empty_string_distance_is_other_length() {
        assert_eq!(levenshtein("", "about"), 5);
        assert_eq!(levenshtein("about", ""), 5);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn single_edits() {
        assert_eq!(levenshtein("hepl", "help"), 2); // transposition = 2 plain edits
        assert_eq!(levenshtein("hel", "help"), 1);
        assert_eq!(levenshtein("helpp", "help"), 1);
        assert_eq!(levenshtein("kelp", "help"), 1);
    }

    #[test]
    fn suggest_finds_close_command() {
        let lexicon = ["help", "about", "skills"];
        assert_eq!(suggest("hepl", &lexicon, 3), Some("help"));
        assert_eq!(suggest("skils", &lexicon, 3), Some("skills"));
        assert_eq!(suggest("ABOUT", &lexicon, 3), Some("about"));
    }

    #[test]
    fn suggest_rejects_distant_candidates() {
        let lexicon = ["help", "about", "skills"];
        assert_eq!(suggest("xyz123", &lexicon, 3), None);
        // Distance exactly equal to the threshold does not qualify.
        assert_eq!(suggest("hxxx", &["help"], 3), None);
    }

    #[test]
    fn suggest_ties_keep_first_seen_entry() {
        // "st" is distance 2 from both entries; iteration order decides.
        assert_eq!(suggest("st", &["sa", "so"], 3), Some("sa"));
        assert_eq!(suggest("st", &["so", "sa"], 3), Some("so"));
    }

    #[test]
    fn suggest_empty_lexicon_yields_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(suggest("help", &empty, 3), None);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in "[a-zA-Z]{0,12}", b in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn distance_identity(a in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn distance_bounded_by_longer_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            prop_assert!(levenshtein(&a, &b) <= a.len().max(b.len()));
        }
    }
}
