//! Medical phrase corrector.
//!
//! Fixes common speech-model misrecognitions of clinical vocabulary
//! ("thar sitamon" → "paracetamol") and normalizes dictated readings
//! ("blood pressure is" → "blood pressure:").

use crate::text::collapse_whitespace;
use crate::text::rules::{BoundaryMode, RuleAction, RuleSet};

/// Misrecognized phrase → canonical phrase.
///
/// Matching is case-insensitive and not word-bounded: dictation output
/// sometimes glues fragments together, so corrections apply to any
/// occurrence. Longer phrases are applied before the shorter phrases they
/// contain, so "thar sitamon" never decays into "thar paracetamol".
pub const MEDICAL_FIXES: &[(&str, &str)] = &[
    ("thar sitamon", "paracetamol"),
    ("sitamon", "paracetamol"),
    ("parasitamol", "paracetamol"),
    ("paracitamol", "paracetamol"),
    ("dolo six fifty", "dolo 650"),
    ("six fifty mg", "650 mg"),
    ("six fifty milligram", "650 mg"),
    ("blood pressure is", "blood pressure:"),
    ("bp is", "bp:"),
    ("sugar is", "sugar:"),
];

/// Applies the medical fix table and canonicalizes whitespace.
#[derive(Debug, Clone)]
pub struct MedicalCorrector {
    rules: RuleSet,
}

impl MedicalCorrector {
    /// Corrector with the built-in fix table.
    pub fn new() -> Self {
        Self::with_fixes(MEDICAL_FIXES.iter().copied())
    }

    /// Corrector with a caller-supplied fix table. Rule order is
    /// normalized to longest-first, so callers may list fixes in any order.
    pub fn with_fixes<'a, I>(fixes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = RuleSet::new(
            fixes
                .into_iter()
                .map(|(wrong, right)| (wrong, RuleAction::Replace(right.to_string()))),
            BoundaryMode::Anywhere,
        );
        Self { rules }
    }

    /// Replace every occurrence of each misrecognized phrase, then collapse
    /// whitespace runs and trim. Empty input passes through unchanged.
    pub fn correct(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        collapse_whitespace(&self.rules.apply(text))
    }
}

impl Default for MedicalCorrector {
    fn default() -> Self {
        Self::new()
    }
}
