//! Ordered case-insensitive phrase rule engine.
//!
//! One audited implementation of boundary-safe phrase matching, shared by
//! the medical corrector, the filler remover, and the keyword highlighter.
//! Rules are applied longest phrase first in a single left-to-right scan,
//! so a longer phrase ("blood pressure") always wins over a shorter phrase
//! it contains ("pressure"), and replaced output is never re-scanned.

/// What happens to a matched span.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    /// Substitute the span with literal text (may be empty to delete it).
    Replace(String),
    /// Keep the span with its original casing and surround it with markup.
    Wrap { prefix: String, suffix: String },
}

/// How match edges are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Match anywhere, including inside words.
    Anywhere,
    /// Match only whole words/phrases: a word character on either edge of
    /// the candidate span blocks the match.
    Word,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    phrase: Vec<char>,
    action: RuleAction,
}

/// A fixed, deterministically ordered set of phrase rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Sorted by descending phrase length, ties broken lexicographically.
    rules: Vec<CompiledRule>,
    boundary: BoundaryMode,
    /// Opaque span markers the scanner never matches inside, e.g. an
    /// emphasis tag pair. Spans are copied through verbatim.
    protected: Option<(Vec<char>, Vec<char>)>,
}

impl RuleSet {
    /// Build a rule set from phrase/action pairs.
    ///
    /// Input order is irrelevant: rules are sorted longest phrase first so
    /// that overlapping rules resolve the same way on every run.
    pub fn new<I, S>(rules: I, boundary: BoundaryMode) -> Self
    where
        I: IntoIterator<Item = (S, RuleAction)>,
        S: AsRef<str>,
    {
        let mut compiled: Vec<CompiledRule> = rules
            .into_iter()
            .filter(|(phrase, _)| !phrase.as_ref().is_empty())
            .map(|(phrase, action)| CompiledRule {
                phrase: phrase.as_ref().chars().collect(),
                action,
            })
            .collect();

        compiled.sort_by(|a, b| {
            b.phrase
                .len()
                .cmp(&a.phrase.len())
                .then_with(|| a.phrase.cmp(&b.phrase))
        });

        Self {
            rules: compiled,
            boundary,
            protected: None,
        }
    }

    /// Treat `open`..`close` spans as opaque: copied through unchanged and
    /// never matched inside. Used by the highlighter so that re-applying it
    /// to its own output cannot double-wrap a span.
    pub fn with_protected_span(mut self, open: &str, close: &str) -> Self {
        self.protected = Some((open.chars().collect(), close.chars().collect()));
        self
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply all rules in a single left-to-right scan.
    ///
    /// Total over all inputs: empty or rule-free text passes through
    /// unchanged.
    pub fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let len = chars.len();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < len {
            if let Some(skip) = self.protected_span_len(&chars, i) {
                out.extend(&chars[i..i + skip]);
                i += skip;
                continue;
            }

            match self.match_at(&chars, i) {
                Some(rule) => {
                    let plen = rule.phrase.len();
                    match &rule.action {
                        RuleAction::Replace(replacement) => out.push_str(replacement),
                        RuleAction::Wrap { prefix, suffix } => {
                            out.push_str(prefix);
                            out.extend(&chars[i..i + plen]);
                            out.push_str(suffix);
                        }
                    }
                    i += plen;
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }

        out
    }

    /// Count how many distinct rules match somewhere in the text.
    ///
    /// Each rule is checked independently, so a phrase contained in a
    /// longer matched phrase still counts ("pressure" inside
    /// "blood pressure").
    pub fn count_matched(&self, text: &str) -> usize {
        let chars: Vec<char> = text.chars().collect();
        self.rules
            .iter()
            .filter(|rule| self.occurs(&chars, &rule.phrase))
            .count()
    }

    /// Whether a single phrase occurs anywhere, honoring boundary mode and
    /// protected spans.
    fn occurs(&self, chars: &[char], phrase: &[char]) -> bool {
        let mut i = 0;
        while i < chars.len() {
            if let Some(skip) = self.protected_span_len(chars, i) {
                i += skip;
                continue;
            }
            if self.phrase_matches_at(chars, i, phrase) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// First rule whose phrase matches at position `i`. Rules are already
    /// length-ordered, so the first hit is the longest.
    fn match_at(&self, chars: &[char], i: usize) -> Option<&CompiledRule> {
        self.rules
            .iter()
            .find(|rule| self.phrase_matches_at(chars, i, &rule.phrase))
    }

    fn phrase_matches_at(&self, chars: &[char], i: usize, phrase: &[char]) -> bool {
        let plen = phrase.len();
        if i + plen > chars.len() {
            return false;
        }

        // Case-insensitive char-by-char comparison, safe for all Unicode
        let chars_match = chars[i..i + plen]
            .iter()
            .zip(phrase.iter())
            .all(|(src, phr)| src.to_lowercase().eq(phr.to_lowercase()));
        if !chars_match {
            return false;
        }

        if self.boundary == BoundaryMode::Word {
            // A word character butting against a word-character phrase edge
            // makes this a partial match ("um" inside "umbrella").
            let first_is_word = phrase.first().is_some_and(|c| is_word_char(*c));
            let last_is_word = phrase.last().is_some_and(|c| is_word_char(*c));

            if first_is_word && i > 0 && is_word_char(chars[i - 1]) {
                return false;
            }
            let after = i + plen;
            if last_is_word && after < chars.len() && is_word_char(chars[after]) {
                return false;
            }
        }

        true
    }

    /// Length of a protected span starting exactly at `i`, or `None`.
    /// An unterminated span extends to the end of the text.
    fn protected_span_len(&self, chars: &[char], i: usize) -> Option<usize> {
        let (open, close) = self.protected.as_ref()?;
        if !starts_with(chars, i, open) {
            return None;
        }
        let mut j = i + open.len();
        while j < chars.len() {
            if starts_with(chars, j, close) {
                return Some(j + close.len() - i);
            }
            j += 1;
        }
        Some(chars.len() - i)
    }
}

fn starts_with(chars: &[char], i: usize, needle: &[char]) -> bool {
    chars.len() >= i + needle.len() && chars[i..i + needle.len()] == *needle
}

/// Word characters for boundary checks: alphanumerics plus underscore.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
