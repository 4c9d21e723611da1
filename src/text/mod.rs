//! Text normalization pipeline.
//!
//! Pure text-to-text transforms applied to raw transcripts: medical phrase
//! correction, filler removal, whitespace canonicalization, and keyword
//! highlighting. All transforms are total over strings: any input,
//! including the empty string, produces a string without erroring.

pub mod corrector;
pub mod filler;
pub mod keywords;
pub mod rules;

pub use corrector::MedicalCorrector;
pub use filler::TranscriptCleaner;
pub use keywords::KeywordSet;

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Append a period when non-empty text does not already end a sentence.
pub fn ensure_sentence_end(text: &str) -> String {
    let mut out = text.to_string();
    if let Some(last) = out.chars().last()
        && !matches!(last, '.' | '!' | '?')
    {
        out.push('.');
    }
    out
}
