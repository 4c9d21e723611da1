//! medscribe - Clinical voice dictation
//!
//! Offline-first doctor voice-to-text: Whisper transcription, optional
//! translation, medical text cleanup, keyword highlighting, and plain-text
//! export.

// Enforce error handling discipline in library code
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod export;
pub mod history;
pub mod models;
pub mod session;
pub mod stt;
pub mod text;
pub mod translate;

// Core pipeline types
pub use config::{LanguageChoice, ModelSize, OutputMode, SessionOptions, TranslationBackend};
pub use export::PatientDetails;
pub use history::{HistoryRecord, SessionLog};
pub use session::{DictationSession, ProcessedClip};

// Adapter seams (real model vs mock)
pub use stt::{TranscribeOptions, Transcriber, TranscriptionResult, TranscriptionTask};
pub use translate::Translator;

// Text normalization core
pub use text::{KeywordSet, MedicalCorrector, TranscriptCleaner};

// Error handling
pub use error::{MedscribeError, Result};

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"`
/// otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }

    #[test]
    fn version_string_contains_plus_when_git_hash_present() {
        let ver = version_string();
        if option_env!("GIT_HASH").is_some_and(|h| !h.is_empty()) {
            assert!(ver.contains('+'), "expected '+': {}", ver);
        } else {
            assert_eq!(ver, env!("CARGO_PKG_VERSION"));
        }
    }
}
