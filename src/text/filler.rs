//! Filler-word removal and sentence finishing.

use crate::text::rules::{BoundaryMode, RuleAction, RuleSet};
use crate::text::{collapse_whitespace, ensure_sentence_end};

/// Hesitation sounds and discourse fillers stripped from transcripts.
/// Matched as whole words only; the "um" in "umbrella" survives.
pub const FILLER_WORDS: &[&str] = &["uh", "um", "hmm", "aaa", "ah", "like", "you know"];

/// Removes filler words, canonicalizes whitespace, and finishes the
/// sentence with a period when no terminal punctuation is present.
#[derive(Debug, Clone)]
pub struct TranscriptCleaner {
    rules: RuleSet,
}

impl TranscriptCleaner {
    /// Cleaner with the built-in filler list.
    pub fn new() -> Self {
        Self::with_fillers(FILLER_WORDS.iter().copied())
    }

    /// Cleaner with a caller-supplied filler list.
    pub fn with_fillers<'a, I>(fillers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rules = RuleSet::new(
            fillers
                .into_iter()
                .map(|word| (word, RuleAction::Replace(String::new()))),
            BoundaryMode::Word,
        );
        Self { rules }
    }

    /// Remove every whole-word filler occurrence, collapse whitespace, and
    /// append a period when the non-empty result lacks `.`, `!`, or `?`.
    /// Pure and total: empty input yields empty output.
    pub fn clean(&self, text: &str) -> String {
        ensure_sentence_end(&collapse_whitespace(&self.rules.apply(text)))
    }
}

impl Default for TranscriptCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_standalone_fillers() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(
            cleaner.clean("um the patient uh has fever"),
            "the patient has fever."
        );
    }

    #[test]
    fn test_word_boundary_preserves_embedded_filler() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean("umbrella is wet um"), "umbrella is wet.");
    }

    #[test]
    fn test_multiword_filler_removed() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(
            cleaner.clean("the wound is you know healing"),
            "the wound is healing."
        );
    }

    #[test]
    fn test_case_insensitive_removal() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean("Um Hmm patient stable"), "patient stable.");
    }

    #[test]
    fn test_appends_terminal_period() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean("patient has fever"), "patient has fever.");
    }

    #[test]
    fn test_keeps_existing_terminator() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean("any allergies?"), "any allergies?");
        assert_eq!(cleaner.clean("stable!"), "stable!");
    }

    #[test]
    fn test_whitespace_canonicalized() {
        let cleaner = TranscriptCleaner::new();
        let out = cleaner.clean("  fever   um   and \t chills  ");
        assert_eq!(out, "fever and chills.");
        assert!(!out.contains("  "), "no double spaces: {out:?}");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean(""), "");
    }

    #[test]
    fn test_filler_only_input_becomes_empty() {
        let cleaner = TranscriptCleaner::new();
        assert_eq!(cleaner.clean("um uh hmm"), "");
    }

    #[test]
    fn test_custom_filler_list() {
        let cleaner = TranscriptCleaner::with_fillers(["basically"]);
        assert_eq!(
            cleaner.clean("basically the dose is um unchanged"),
            "the dose is um unchanged."
        );
    }
}
