//! Dictation session context.
//!
//! Owns everything with session lifetime: the options chosen at session
//! start, memoized model handles, the keyword set, and the append-only
//! history log. Each processed clip runs one synchronous
//! transcribe → translate → normalize sequence; the interface accepts the
//! next clip only after the previous one returns.

use crate::audio::SpooledClip;
use crate::config::{ModelSize, OutputMode, SessionOptions, TranslationBackend};
use crate::error::Result;
use crate::export::{self, PatientDetails};
use crate::history::SessionLog;
use crate::models::ModelCache;
use crate::stt::{TranscribeOptions, Transcriber, TranscriptionTask};
use crate::text::{KeywordSet, MedicalCorrector, TranscriptCleaner};
use crate::translate::{LexiconTranslator, Translator};
use std::path::Path;
use std::sync::Arc;

#[cfg(not(feature = "model-download"))]
use std::path::PathBuf;

/// The result of processing one audio clip.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedClip {
    /// Final transcript after translation and normalization.
    pub transcript: String,
    /// Best-effort detected source language code.
    pub detected_language: String,
    /// Distinct keywords found in the transcript.
    pub keywords_found: usize,
    /// Model size identifier used for this clip.
    pub model: String,
    /// Output mode the clip was processed in.
    pub mode: OutputMode,
}

/// One interactive dictation session.
pub struct DictationSession {
    options: SessionOptions,
    keywords: KeywordSet,
    corrector: MedicalCorrector,
    cleaner: TranscriptCleaner,
    cache: ModelCache,
    history: SessionLog,
}

impl DictationSession {
    /// Start a session with the given options. Models load lazily on the
    /// first processed clip.
    pub fn new(options: SessionOptions) -> Self {
        let keywords = KeywordSet::with_extra_terms(options.custom_keywords.iter());
        Self {
            options,
            keywords,
            corrector: MedicalCorrector::new(),
            cleaner: TranscriptCleaner::new(),
            cache: ModelCache::new(),
            history: SessionLog::new(),
        }
    }

    /// Start a session with a pre-loaded transcriber (used by tests and
    /// embedders that manage model loading themselves).
    pub fn with_transcriber(options: SessionOptions, transcriber: Arc<dyn Transcriber>) -> Self {
        let session = Self::new(options);
        // Seed the cache so the default loader never runs
        session
            .cache
            .seed_transcriber(session.options.model.as_str(), transcriber);
        session
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn history(&self) -> &SessionLog {
        &self.history
    }

    /// Process one recorded clip end to end.
    ///
    /// Returns `Ok(None)` when `wav_bytes` is empty (no recording, so the
    /// action is a no-op). On success the outcome is appended to the
    /// session history; on failure nothing is appended and the error
    /// propagates.
    ///
    /// The clip is spooled to a temporary file for the transcription
    /// model and the file is removed before this method returns, whether
    /// transcription succeeds or fails.
    pub fn process_clip(&mut self, wav_bytes: &[u8]) -> Result<Option<ProcessedClip>> {
        if wav_bytes.is_empty() {
            return Ok(None);
        }

        let clip = SpooledClip::spool(wav_bytes)?;
        let pipeline_result = self.run_pipeline(clip.path());
        clip.cleanup();

        let (transcript, detected_language) = pipeline_result?;

        let outcome = ProcessedClip {
            keywords_found: self.keywords.count_found(&transcript),
            model: self.options.model.as_str().to_string(),
            mode: self.options.mode,
            transcript,
            detected_language,
        };

        self.history.append(outcome.mode.label(), &outcome.transcript);
        Ok(Some(outcome))
    }

    /// Wrap keyword occurrences in the final transcript for display.
    pub fn highlight(&self, text: &str) -> String {
        self.keywords.highlight(text)
    }

    /// Render the export document for a processed clip.
    pub fn export_document(&self, patient: &PatientDetails, clip: &ProcessedClip) -> String {
        export::build_export_text(
            patient,
            &clip.transcript,
            &clip.detected_language,
            &clip.model,
            clip.mode.label(),
        )
    }

    /// Transcribe, optionally translate, and normalize one spooled clip.
    fn run_pipeline(&self, audio: &Path) -> Result<(String, String)> {
        let task = match self.options.mode {
            OutputMode::TranslateToEnglish => TranscriptionTask::TranslateToEnglish,
            _ => TranscriptionTask::Transcribe,
        };
        let transcribe_options = TranscribeOptions::new(self.options.language_hint(), task);

        let transcriber = self.transcriber()?;
        let result = transcriber.transcribe_path(audio, &transcribe_options)?;
        let mut text = result.text;

        if self.options.mode == OutputMode::TranslateToEnglishEnhanced {
            let translator = self.translator()?;
            let mut guard = translator
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            text = guard.translate(&text)?;
        }

        if self.options.autocorrect {
            text = self.corrector.correct(&text);
        }
        text = self.cleaner.clean(&text);

        Ok((text, result.language))
    }

    fn transcriber(&self) -> Result<Arc<dyn Transcriber>> {
        let size = self.options.model;
        self.cache
            .transcriber(size.as_str(), || load_default_transcriber(size))
    }

    fn translator(
        &self,
    ) -> Result<Arc<std::sync::Mutex<Box<dyn Translator>>>> {
        let backend = self.options.translation_backend;
        let key = match backend {
            TranslationBackend::Lexicon => "lexicon",
            TranslationBackend::Neural => "neural",
        };
        self.cache.translator(key, || load_translator(backend))
    }
}

impl std::fmt::Debug for DictationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictationSession")
            .field("options", &self.options)
            .field("history_len", &self.history.len())
            .finish()
    }
}

/// Load the Whisper transcriber for a model size.
#[cfg(feature = "model-download")]
fn load_default_transcriber(size: ModelSize) -> Result<Arc<dyn Transcriber>> {
    use crate::stt::{WhisperConfig, WhisperTranscriber};

    let model_path = crate::models::download::ensure_model(size.as_str(), true, true)?;
    let transcriber = WhisperTranscriber::new(WhisperConfig {
        model_path,
        threads: None,
    })?;
    Ok(Arc::new(transcriber))
}

/// Load the Whisper transcriber from the local models directory.
#[cfg(not(feature = "model-download"))]
fn load_default_transcriber(size: ModelSize) -> Result<Arc<dyn Transcriber>> {
    use crate::stt::{WhisperConfig, WhisperTranscriber};

    let model_path = PathBuf::from(format!("models/ggml-{}.bin", size.as_str()));
    let transcriber = WhisperTranscriber::new(WhisperConfig {
        model_path,
        threads: None,
    })?;
    Ok(Arc::new(transcriber))
}

/// Construct the translation backend for the enhanced output mode.
fn load_translator(backend: TranslationBackend) -> Result<Box<dyn Translator>> {
    match backend {
        TranslationBackend::Lexicon => Ok(Box::new(LexiconTranslator::new())),
        TranslationBackend::Neural => load_neural_translator(),
    }
}

#[cfg(feature = "neural-translation")]
fn load_neural_translator() -> Result<Box<dyn Translator>> {
    use crate::models::translation_catalog::default_translation_model;
    use crate::translate::MarianTranslator;

    let translator = MarianTranslator::load(default_translation_model())?;
    Ok(Box::new(translator))
}

#[cfg(not(feature = "neural-translation"))]
fn load_neural_translator() -> Result<Box<dyn Translator>> {
    Err(crate::error::MedscribeError::TranslationModelLoad {
        message: concat!(
            "Neural translation feature not enabled. ",
            "Rebuild with: cargo build --features neural-translation, ",
            "or use the lexicon backend."
        )
        .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stt::MockTranscriber;

    fn session_with_mock(options: SessionOptions, mock: MockTranscriber) -> DictationSession {
        DictationSession::with_transcriber(options, Arc::new(mock))
    }

    #[test]
    fn test_empty_audio_is_noop() {
        let mut session =
            session_with_mock(SessionOptions::new(), MockTranscriber::new("small"));
        let outcome = session.process_clip(&[]).unwrap();
        assert!(outcome.is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_process_clip_normalizes_and_counts() {
        let mock = MockTranscriber::new("small")
            .with_response("um patient has fever and takes sitamon");
        let mut session = session_with_mock(SessionOptions::new(), mock);

        let outcome = session.process_clip(b"fake wav bytes").unwrap().unwrap();
        assert_eq!(
            outcome.transcript,
            "patient has fever and takes paracetamol."
        );
        // fever + paracetamol
        assert_eq!(outcome.keywords_found, 2);
        assert_eq!(outcome.model, "small");
        assert_eq!(outcome.detected_language, "en");
    }

    #[test]
    fn test_success_appends_history() {
        let mock = MockTranscriber::new("small").with_response("patient stable");
        let mut session = session_with_mock(SessionOptions::new(), mock);

        session.process_clip(b"bytes").unwrap();
        assert_eq!(session.history().len(), 1);
        let record = &session.history().records()[0];
        assert_eq!(record.text, "patient stable.");
        assert_eq!(record.mode, "Transcribe (Same Language)");
    }

    #[test]
    fn test_failure_propagates_and_skips_history() {
        let mock = MockTranscriber::new("small").with_failure();
        let mut session = session_with_mock(SessionOptions::new(), mock);

        let result = session.process_clip(b"bytes");
        assert!(result.is_err());
        assert!(
            session.history().is_empty(),
            "failed clips must not reach the session log"
        );
    }

    #[test]
    fn test_autocorrect_can_be_disabled() {
        let mock = MockTranscriber::new("small").with_response("takes sitamon daily");
        let options = SessionOptions {
            autocorrect: false,
            ..SessionOptions::new()
        };
        let mut session = session_with_mock(options, mock);

        let outcome = session.process_clip(b"bytes").unwrap().unwrap();
        assert_eq!(outcome.transcript, "takes sitamon daily.");
    }

    #[test]
    fn test_enhanced_mode_translates_through_lexicon() {
        let mock = MockTranscriber::new("small")
            .with_response("patient has kaichal")
            .with_language("ta");
        let options = SessionOptions {
            mode: OutputMode::TranslateToEnglishEnhanced,
            ..SessionOptions::new()
        };
        let mut session = session_with_mock(options, mock);

        let outcome = session.process_clip(b"bytes").unwrap().unwrap();
        assert_eq!(outcome.transcript, "patient has fever.");
        assert_eq!(outcome.detected_language, "ta");
        assert_eq!(outcome.mode, OutputMode::TranslateToEnglishEnhanced);
    }

    #[test]
    fn test_custom_keywords_flow_into_count() {
        let mock = MockTranscriber::new("small").with_response("suspected nephrolithiasis");
        let options = SessionOptions::new().with_keyword_string("nephrolithiasis");
        let mut session = session_with_mock(options, mock);

        let outcome = session.process_clip(b"bytes").unwrap().unwrap();
        assert_eq!(outcome.keywords_found, 1);
    }

    #[test]
    fn test_highlight_uses_session_keywords() {
        let session = session_with_mock(SessionOptions::new(), MockTranscriber::new("small"));
        assert_eq!(
            session.highlight("patient has fever"),
            "patient has <mark>fever</mark>"
        );
    }

    #[test]
    fn test_export_document_includes_clip_fields() {
        let mock = MockTranscriber::new("small").with_response("patient stable");
        let mut session = session_with_mock(SessionOptions::new(), mock);
        let outcome = session.process_clip(b"bytes").unwrap().unwrap();

        let doc = session.export_document(&PatientDetails::default(), &outcome);
        assert!(doc.contains("patient stable."));
        assert!(doc.contains("Model: small"));
        assert!(doc.contains("Mode: Transcribe (Same Language)"));
        assert!(doc.contains("Name: -"));
    }

    #[test]
    fn test_multiple_clips_accumulate_history() {
        let mock = MockTranscriber::new("small").with_response("note");
        let mut session = session_with_mock(SessionOptions::new(), mock);

        for _ in 0..3 {
            session.process_clip(b"bytes").unwrap();
        }
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_transcriber_loaded_once_across_clips() {
        let mock = MockTranscriber::new("small").with_response("note");
        let mut session = session_with_mock(SessionOptions::new(), mock);

        session.process_clip(b"a").unwrap();
        session.process_clip(b"b").unwrap();
        assert_eq!(session.cache.loaded_transcribers(), 1);
    }
}
