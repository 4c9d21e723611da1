use crate::error::{MedscribeError, Result};
use std::path::Path;
use std::sync::Arc;

/// Task the speech model performs on a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptionTask {
    /// Emit text in the spoken language.
    #[default]
    Transcribe,
    /// Emit English text regardless of the spoken language.
    TranslateToEnglish,
}

/// Per-call options for the transcription adapter.
#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    /// ISO 639-1 hint, or `None` for auto-detection.
    pub language: Option<String>,
    pub task: TranscriptionTask,
}

impl TranscribeOptions {
    pub fn new(language: Option<&str>, task: TranscriptionTask) -> Self {
        Self {
            language: language.map(str::to_string),
            task,
        }
    }
}

/// Result of one transcription call.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    /// Transcribed (or model-translated) text, trimmed.
    pub text: String,
    /// Best-effort detected source language code, or
    /// [`crate::defaults::UNKNOWN_LANGUAGE`].
    pub language: String,
}

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (real Whisper vs mock).
/// Failures propagate to the caller; they are never downgraded to partial
/// results.
pub trait Transcriber: Send + Sync {
    /// Transcribe the WAV file at `audio` according to `options`.
    fn transcribe_path(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscriptionResult>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Implement Transcriber for Arc<T> to allow sharing across sessions.
impl<T: Transcriber> Transcriber for Arc<T> {
    fn transcribe_path(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscriptionResult> {
        (**self).transcribe_path(audio, options)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock transcriber for testing
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    model_name: String,
    response: String,
    language: String,
    should_fail: bool,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            response: "mock transcription".to_string(),
            language: "en".to_string(),
            should_fail: false,
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Configure the detected language the mock reports
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe_path(
        &self,
        _audio: &Path,
        _options: &TranscribeOptions,
    ) -> Result<TranscriptionResult> {
        if self.should_fail {
            Err(MedscribeError::Transcription {
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(TranscriptionResult {
                text: self.response.clone(),
                language: self.language.clone(),
            })
        }
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
