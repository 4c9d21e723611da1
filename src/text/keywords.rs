//! Clinical keyword set and highlighter.
//!
//! A session builds one [`KeywordSet`] from the default clinical term list
//! plus user-supplied additions. Highlighting wraps whole-word matches in
//! `<mark>` tags, longest term first, so a multi-word term is never
//! corrupted by a shorter term it contains.

use crate::text::rules::{BoundaryMode, RuleAction, RuleSet};

/// Emphasis markers wrapped around matched terms.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Default clinical terms highlighted in every session.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "fever",
    "cough",
    "cold",
    "headache",
    "pain",
    "vomiting",
    "diarrhea",
    "bp",
    "blood pressure",
    "diabetes",
    "sugar",
    "hypertension",
    "asthma",
    "infection",
    "allergy",
    "gastric",
    "chest pain",
    "dizziness",
    "paracetamol",
    "dolo",
    "tablet",
    "mg",
    "metformin",
    "insulin",
    "ecg",
    "copd",
    "gerd",
    "hba1c",
];

/// A session's keyword set: default clinical terms plus custom additions.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    terms: Vec<String>,
    rules: RuleSet,
}

impl KeywordSet {
    /// The default clinical term list.
    pub fn new() -> Self {
        Self::with_extra_terms(std::iter::empty::<&str>())
    }

    /// Default terms plus extra terms. Duplicates (case-insensitive) are
    /// kept once; blank terms are dropped.
    pub fn with_extra_terms<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut terms: Vec<String> = Vec::new();

        for term in DEFAULT_KEYWORDS
            .iter()
            .map(|t| t.to_string())
            .chain(extra.into_iter().map(|t| t.as_ref().trim().to_string()))
        {
            if term.is_empty() {
                continue;
            }
            if seen.insert(term.to_lowercase()) {
                terms.push(term);
            }
        }

        let rules = RuleSet::new(
            terms.iter().map(|term| {
                (
                    term.as_str(),
                    RuleAction::Wrap {
                        prefix: MARK_OPEN.to_string(),
                        suffix: MARK_CLOSE.to_string(),
                    },
                )
            }),
            BoundaryMode::Word,
        )
        .with_protected_span(MARK_OPEN, MARK_CLOSE);

        Self { terms, rules }
    }

    /// All terms in the set, defaults first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms in the set.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Wrap every whole-word keyword occurrence in emphasis markers.
    ///
    /// Longest terms match first and the original casing of each matched
    /// span is preserved. Existing emphasis spans are copied through
    /// untouched, so re-highlighting already-highlighted text is a no-op.
    pub fn highlight(&self, text: &str) -> String {
        self.rules.apply(text)
    }

    /// Number of distinct keywords that occur at least once, regardless of
    /// how often each occurs.
    pub fn count_found(&self, text: &str) -> usize {
        self.rules.count_matched(text)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_size() {
        let set = KeywordSet::new();
        assert_eq!(set.len(), DEFAULT_KEYWORDS.len());
    }

    #[test]
    fn test_extra_terms_appended() {
        let set = KeywordSet::with_extra_terms(["nephrolithiasis", "thrombocytopenia"]);
        assert_eq!(set.len(), DEFAULT_KEYWORDS.len() + 2);
        assert!(set.terms().iter().any(|t| t == "nephrolithiasis"));
    }

    #[test]
    fn test_duplicate_extra_terms_kept_once() {
        let set = KeywordSet::with_extra_terms(["fever", "FEVER", "sepsis"]);
        assert_eq!(set.len(), DEFAULT_KEYWORDS.len() + 1);
    }

    #[test]
    fn test_blank_extra_terms_dropped() {
        let set = KeywordSet::with_extra_terms(["", "  ", "sepsis"]);
        assert_eq!(set.len(), DEFAULT_KEYWORDS.len() + 1);
    }

    #[test]
    fn test_highlight_wraps_keyword() {
        let set = KeywordSet::new();
        assert_eq!(
            set.highlight("patient has fever"),
            "patient has <mark>fever</mark>"
        );
    }

    #[test]
    fn test_highlight_preserves_casing() {
        let set = KeywordSet::new();
        assert_eq!(
            set.highlight("Fever subsided"),
            "<mark>Fever</mark> subsided"
        );
    }

    #[test]
    fn test_longer_term_precedence() {
        let set = KeywordSet::new();
        let out = set.highlight("Blood Pressure is high");
        assert_eq!(out, "<mark>Blood Pressure</mark> is high");
        assert!(
            !out.contains("<mark>Pressure</mark>"),
            "short term must not break the long match: {out}"
        );
    }

    #[test]
    fn test_highlight_idempotent_on_own_output() {
        let set = KeywordSet::new();
        let once = set.highlight("fever and chest pain with high bp");
        let twice = set.highlight(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_highlight_noop_without_keywords() {
        let set = KeywordSet::new();
        let text = "the weather is pleasant today";
        assert_eq!(set.highlight(text), text);
    }

    #[test]
    fn test_highlight_word_boundary() {
        let set = KeywordSet::new();
        // "cold" inside "coldness" must not be wrapped
        assert_eq!(set.highlight("coldness of hands"), "coldness of hands");
    }

    #[test]
    fn test_count_found_distinct() {
        let set = KeywordSet::new();
        let n = set.count_found("Patient has fever and high bp, takes paracetamol");
        assert_eq!(n, 3);
    }

    #[test]
    fn test_count_found_repeated_keyword_counts_once() {
        let set = KeywordSet::new();
        assert_eq!(set.count_found("fever, more fever, still fever"), 1);
    }

    #[test]
    fn test_count_found_zero_for_plain_text() {
        let set = KeywordSet::new();
        assert_eq!(set.count_found("nothing clinical here"), 0);
    }

    #[test]
    fn test_custom_term_highlighted() {
        let set = KeywordSet::with_extra_terms(["nephrolithiasis"]);
        assert_eq!(
            set.highlight("suspected nephrolithiasis"),
            "suspected <mark>nephrolithiasis</mark>"
        );
    }
}
