//! Session configuration.
//!
//! All configuration is in-memory with process-lifetime scope. There is no
//! persisted configuration file: options are constructed per session (from
//! CLI flags or embedding code) with environment overrides on top.

use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whisper model size selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
}

impl ModelSize {
    /// Catalog name for this size.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
        }
    }
}

impl Default for ModelSize {
    fn default() -> Self {
        ModelSize::Small
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tiny" => Ok(ModelSize::Tiny),
            "base" => Ok(ModelSize::Base),
            "small" => Ok(ModelSize::Small),
            other => Err(format!(
                "unknown model size '{other}' (expected tiny, base, or small)"
            )),
        }
    }
}

/// What the pipeline produces from a processed clip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputMode {
    /// Transcribe in the spoken language.
    Transcribe,
    /// Translate to English inside the speech model (translate task).
    TranslateToEnglish,
    /// Transcribe, then translate to English through a dedicated
    /// translation backend.
    TranslateToEnglishEnhanced,
}

impl OutputMode {
    /// Human-readable label used in status tags, history, and exports.
    pub fn label(&self) -> &'static str {
        match self {
            OutputMode::Transcribe => "Transcribe (Same Language)",
            OutputMode::TranslateToEnglish => "Translate to English",
            OutputMode::TranslateToEnglishEnhanced => "Translate to English (Enhanced)",
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Transcribe
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "transcribe" => Ok(OutputMode::Transcribe),
            "translate" => Ok(OutputMode::TranslateToEnglish),
            "translate-enhanced" | "enhanced" => Ok(OutputMode::TranslateToEnglishEnhanced),
            other => Err(format!(
                "unknown output mode '{other}' (expected transcribe, translate, or translate-enhanced)"
            )),
        }
    }
}

/// Input language selection for the transcription model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LanguageChoice {
    /// Let the model detect the spoken language.
    Auto,
    English,
    Tamil,
}

impl LanguageChoice {
    /// ISO 639-1 hint passed to the model, or `None` for auto-detection.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LanguageChoice::Auto => None,
            LanguageChoice::English => Some("en"),
            LanguageChoice::Tamil => Some("ta"),
        }
    }
}

impl Default for LanguageChoice {
    fn default() -> Self {
        LanguageChoice::Auto
    }
}

impl fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LanguageChoice::Auto => "Auto Detect",
            LanguageChoice::English => "English",
            LanguageChoice::Tamil => "Tamil",
        };
        f.write_str(label)
    }
}

impl FromStr for LanguageChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(LanguageChoice::Auto),
            "en" | "english" => Ok(LanguageChoice::English),
            "ta" | "tamil" => Ok(LanguageChoice::Tamil),
            other => Err(format!(
                "unknown language '{other}' (expected auto, en, or ta)"
            )),
        }
    }
}

/// Backend used by the enhanced translation mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TranslationBackend {
    /// Ordered phrase-substitution lexicon. No model download, instant.
    Lexicon,
    /// MarianMT encoder-decoder (requires the `neural-translation` feature).
    Neural,
}

impl Default for TranslationBackend {
    fn default() -> Self {
        TranslationBackend::Lexicon
    }
}

impl FromStr for TranslationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" => Ok(TranslationBackend::Lexicon),
            "neural" => Ok(TranslationBackend::Neural),
            other => Err(format!(
                "unknown translation backend '{other}' (expected lexicon or neural)"
            )),
        }
    }
}

/// Options for one dictation session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SessionOptions {
    pub model: ModelSize,
    pub mode: OutputMode,
    pub language: LanguageChoice,
    pub translation_backend: TranslationBackend,
    /// Apply the medical phrase corrector to transcripts.
    pub autocorrect: bool,
    /// Extra keywords highlighted in addition to the default clinical list.
    pub custom_keywords: Vec<String>,
}

impl SessionOptions {
    /// Options matching the application defaults (small model, transcribe,
    /// auto-detected language, autocorrect on).
    pub fn new() -> Self {
        Self {
            autocorrect: true,
            ..Self::default()
        }
    }

    /// Parse a comma-separated keyword string into custom keywords.
    ///
    /// Blank entries after trimming are dropped, not treated as errors.
    pub fn with_keyword_string(mut self, raw: &str) -> Self {
        self.custom_keywords = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    /// Apply environment variable overrides.
    ///
    /// Supported environment variables:
    /// - MEDSCRIBE_MODEL → model size (tiny/base/small)
    /// - MEDSCRIBE_LANGUAGE → input language (auto/en/ta)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("MEDSCRIBE_MODEL")
            && !model.is_empty()
            && let Ok(size) = model.parse()
        {
            self.model = size;
        }

        if let Ok(language) = std::env::var("MEDSCRIBE_LANGUAGE")
            && !language.is_empty()
            && let Ok(choice) = language.parse()
        {
            self.language = choice;
        }

        self
    }

    /// The model language hint for this session, honoring
    /// [`defaults::AUTO_LANGUAGE`] semantics.
    pub fn language_hint(&self) -> Option<&'static str> {
        self.language.hint()
    }
}
