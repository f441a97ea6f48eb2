//! Approximate string matching used by the catalog search.
//!
//! A field matches when some substring of it is within a small edit distance
//! of the search term and that substring starts close to the beginning of the
//! field. Scores are normalised so `0.0` is an exact hit at the start and
//! `1.0` means nothing in common.

use triple_accel::levenshtein_search;

/// Weight of the title in the combined relevance score.
pub const TITLE_WEIGHT: f64 = 0.6;
/// Weight of the best-matching tag name in the combined relevance score.
pub const TAG_WEIGHT: f64 = 0.4;
/// Highest field score still counted as a match.
pub const MATCH_THRESHOLD: f64 = 0.3;
/// Offset (in bytes) from the start of a field that costs as much as a full mismatch.
const PROXIMITY_SPAN: f64 = 100.0;

/// Case-insensitive approximate substring matcher for a single term.
///
/// Distances are counted over UTF-8 bytes, so a non-ASCII character may
/// weigh more than one edit.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    pattern: Vec<u8>,
    threshold: f64,
}

impl TermMatcher {
    pub fn new(term: &str) -> Self {
        Self::with_threshold(term, MATCH_THRESHOLD)
    }

    pub fn with_threshold(term: &str, threshold: f64) -> Self {
        Self {
            pattern: term.trim().to_lowercase().into_bytes(),
            threshold,
        }
    }

    /// Edit distance to the closest substring of `text`, relative to the term
    /// length, plus a penalty growing with how far into `text` it starts.
    pub fn score(&self, text: &str) -> f64 {
        if self.pattern.is_empty() {
            return 0.0;
        }
        let haystack = text.to_lowercase();
        let best = levenshtein_search(&self.pattern, haystack.as_bytes())
            .min_by_key(|found| (found.k, found.start));

        match best {
            Some(found) => {
                let accuracy = f64::from(found.k) / self.pattern.len() as f64;
                let proximity = found.start as f64 / PROXIMITY_SPAN;
                (accuracy + proximity).min(1.0)
            }
            None => 1.0,
        }
    }

    /// Score `text`, returning `None` when it is above the threshold.
    pub fn matches(&self, text: &str) -> Option<f64> {
        let score = self.score(text);
        (score <= self.threshold).then_some(score)
    }
}

/// Length norm of a field: `1 / sqrt(words)`, so a hit in a short field
/// outweighs the same hit in a long one.
pub fn field_norm(text: &str) -> f64 {
    let words = text.split_whitespace().count().max(1);
    1.0 / (words as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_prefix_scores_zero() {
        let matcher = TermMatcher::new("type");
        assert_eq!(matcher.score("TypeScript"), 0.0);
    }

    #[test]
    fn later_hits_score_worse() {
        let matcher = TermMatcher::new("script");

        let score = matcher.score("TypeScript");

        assert!((score - 0.04).abs() < 1e-9);
        assert!(score > matcher.score("Scripts"));
    }

    #[test]
    fn single_typo_is_tolerated() {
        let matcher = TermMatcher::new("reakt");
        let score = matcher.matches("React").expect("expected a match");
        assert!((score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn unrelated_text_does_not_match() {
        let matcher = TermMatcher::new("docker");
        assert_eq!(matcher.matches("Figma"), None);
    }

    #[test]
    fn score_is_capped_at_one() {
        let matcher = TermMatcher::new("kubernetes");
        assert_eq!(matcher.score(""), 1.0);
    }

    #[test]
    fn field_norm_favours_short_fields() {
        assert_eq!(field_norm("React"), 1.0);
        assert_eq!(field_norm(""), 1.0);
        assert!(field_norm("Awesome React list") < field_norm("React Router"));
    }
}
