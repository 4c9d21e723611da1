//! Heuristic substitution translator.
//!
//! Maps transliterated Tamil clinical phrases to English through the
//! shared phrase-rule engine: case-insensitive, whole words, longest
//! phrase first. Words without a lexicon entry pass through unchanged,
//! which keeps mixed-language dictation readable.

use crate::error::Result;
use crate::text::collapse_whitespace;
use crate::text::rules::{BoundaryMode, RuleAction, RuleSet};
use crate::translate::Translator;

/// Built-in transliterated Tamil → English clinical phrase lexicon.
pub const CLINICAL_LEXICON: &[(&str, &str)] = &[
    ("kaichal", "fever"),
    ("irumal", "cough"),
    ("sali", "cold"),
    ("thalai vali", "headache"),
    ("thalaivali", "headache"),
    ("vayiru vali", "stomach pain"),
    ("nenju vali", "chest pain"),
    ("moochu thinaral", "breathlessness"),
    ("sarkarai noi", "diabetes"),
    ("ratha azhuttam", "blood pressure"),
    ("mathirai", "tablet"),
    ("vanthi", "vomiting"),
    ("mayakkam", "dizziness"),
    ("vali", "pain"),
];

/// Phrase-substitution translator over a fixed lexicon.
#[derive(Debug, Clone)]
pub struct LexiconTranslator {
    rules: RuleSet,
}

impl LexiconTranslator {
    /// Translator with the built-in clinical lexicon.
    pub fn new() -> Self {
        Self::with_entries(CLINICAL_LEXICON.iter().copied())
    }

    /// Translator with a caller-supplied lexicon.
    pub fn with_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = RuleSet::new(
            entries
                .into_iter()
                .map(|(source, target)| (source, RuleAction::Replace(target.to_string()))),
            BoundaryMode::Word,
        );
        Self { rules }
    }
}

impl Default for LexiconTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for LexiconTranslator {
    fn translate(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        Ok(collapse_whitespace(&self.rules.apply(text)))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
