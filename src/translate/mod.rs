//! Translation backends for the enhanced output mode.
//!
//! Two implementations: an ordered phrase-substitution lexicon (no model,
//! instant, offline) and a MarianMT encoder-decoder behind the
//! `neural-translation` feature.

pub mod lexicon;
#[cfg(feature = "neural-translation")]
pub mod marian;

pub use lexicon::LexiconTranslator;
#[cfg(feature = "neural-translation")]
pub use marian::MarianTranslator;

use crate::error::Result;

/// Trait for source-to-English text translation.
pub trait Translator: Send + 'static {
    /// Translate text to the target language.
    ///
    /// Empty input passes through unchanged.
    fn translate(&mut self, text: &str) -> Result<String>;

    /// Return the name of this translator for logging.
    fn name(&self) -> &str;
}
