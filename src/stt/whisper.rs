//! Whisper-based speech-to-text transcription.
//!
//! This module provides a Whisper implementation of the Transcriber trait
//! using whisper-rs.
//!
//! # Feature Gate
//!
//! This module requires the `whisper` feature to be enabled and cmake to be
//! installed. To build with Whisper support:
//!
//! ```bash
//! cargo build --features whisper
//! ```

use crate::error::{MedscribeError, Result};
use crate::stt::transcriber::{TranscribeOptions, Transcriber, TranscriptionResult};
use std::path::{Path, PathBuf};

#[cfg(feature = "whisper")]
use crate::audio::wav;
#[cfg(feature = "whisper")]
use crate::defaults;
#[cfg(feature = "whisper")]
use crate::stt::transcriber::TranscriptionTask;
#[cfg(feature = "whisper")]
use std::sync::{Mutex, Once};
#[cfg(feature = "whisper")]
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, install_logging_hooks,
};

#[cfg(feature = "whisper")]
static LOGGING_HOOKS_INSTALLED: Once = Once::new();

/// Configuration for Whisper transcriber.
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// Path to the Whisper model file
    pub model_path: PathBuf,
    /// Number of threads for inference (None = auto-detect)
    pub threads: Option<usize>,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/ggml-small.bin"),
            threads: None,
        }
    }
}

/// Whisper-based transcriber implementation.
///
/// The WhisperContext is wrapped in a Mutex to ensure thread safety when a
/// memoized handle is shared across sessions.
///
/// # Feature Gate
///
/// This type is only available when the `whisper` feature is enabled.
#[cfg(feature = "whisper")]
pub struct WhisperTranscriber {
    context: Mutex<WhisperContext>,
    config: WhisperConfig,
    model_name: String,
}

#[cfg(feature = "whisper")]
impl std::fmt::Debug for WhisperTranscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperTranscriber")
            .field("config", &self.config)
            .field("model_name", &self.model_name)
            .field("context", &"<WhisperContext>")
            .finish()
    }
}

/// Whisper-based transcriber placeholder (without whisper feature).
///
/// This is a stub implementation that returns errors when used.
/// Enable the `whisper` feature to use real transcription.
#[cfg(not(feature = "whisper"))]
#[derive(Debug)]
pub struct WhisperTranscriber {
    config: WhisperConfig,
    model_name: String,
}

fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(feature = "whisper")]
impl WhisperTranscriber {
    /// Create a new Whisper transcriber.
    ///
    /// # Errors
    /// Returns `MedscribeError::TranscriptionModelNotFound` if the model
    /// file doesn't exist, `MedscribeError::TranscriptionInferenceFailed`
    /// if model loading fails.
    pub fn new(config: WhisperConfig) -> Result<Self> {
        // Install logging hooks to suppress whisper.cpp output (only once)
        LOGGING_HOOKS_INSTALLED.call_once(|| {
            install_logging_hooks();
        });

        if !config.model_path.exists() {
            return Err(MedscribeError::TranscriptionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);

        let mut context_params = WhisperContextParameters::default();
        // Fused attention kernels avoid the standalone softmax CUDA kernel,
        // which crashes on Blackwell GPUs (sm_120) with ggml <= 1.7.6
        context_params.flash_attn(true);
        let context = WhisperContext::new_with_params(
            config.model_path.to_str().ok_or_else(|| {
                MedscribeError::TranscriptionInferenceFailed {
                    message: "Invalid UTF-8 in model path".to_string(),
                }
            })?,
            context_params,
        )
        .map_err(|e| MedscribeError::TranscriptionInferenceFailed {
            message: format!("Failed to load Whisper model: {}", e),
        })?;

        Ok(Self {
            context: Mutex::new(context),
            config,
            model_name,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }

    /// Convert i16 audio samples to f32 normalized to [-1.0, 1.0]
    ///
    /// Whisper expects audio in f32 format normalized to the range
    /// [-1.0, 1.0]. Input is 16-bit PCM.
    fn convert_audio(samples: &[i16]) -> Vec<f32> {
        samples
            .iter()
            .map(|&sample| sample as f32 / 32768.0)
            .collect()
    }
}

#[cfg(not(feature = "whisper"))]
impl WhisperTranscriber {
    /// Create a new Whisper transcriber (stub implementation).
    pub fn new(config: WhisperConfig) -> Result<Self> {
        if !config.model_path.exists() {
            return Err(MedscribeError::TranscriptionModelNotFound {
                path: config.model_path.to_string_lossy().to_string(),
            });
        }

        let model_name = model_name_from_path(&config.model_path);

        Ok(Self { config, model_name })
    }

    /// Get the configuration
    pub fn config(&self) -> &WhisperConfig {
        &self.config
    }
}

#[cfg(feature = "whisper")]
impl Transcriber for WhisperTranscriber {
    fn transcribe_path(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscriptionResult> {
        let samples = wav::decode_path(audio)?;
        let audio_f32 = Self::convert_audio(&samples);

        let context =
            self.context
                .lock()
                .map_err(|e| MedscribeError::TranscriptionInferenceFailed {
                    message: format!("Failed to acquire context lock: {}", e),
                })?;

        let mut state =
            context
                .create_state()
                .map_err(|e| MedscribeError::TranscriptionInferenceFailed {
                    message: format!("Failed to create Whisper state: {}", e),
                })?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });

        // Language hint: explicit code or auto-detection
        match options.language.as_deref() {
            Some(code) if code != defaults::AUTO_LANGUAGE => params.set_language(Some(code)),
            _ => params.set_language(None),
        }

        // Task: in-model translation emits English text directly
        params.set_translate(options.task == TranscriptionTask::TranslateToEnglish);

        if let Some(threads) = self.config.threads {
            params.set_n_threads(threads as i32);
        }

        // Disable printing to stdout/stderr
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        state
            .full(params, &audio_f32)
            .map_err(|e| MedscribeError::TranscriptionInferenceFailed {
                message: format!("Whisper inference failed: {}", e),
            })?;

        // Best-effort detected source language
        let lang_id = state.full_lang_id_from_state();
        let language = whisper_rs::get_lang_str(lang_id)
            .unwrap_or(defaults::UNKNOWN_LANGUAGE)
            .to_string();

        let mut transcription = String::new();
        for segment in state.as_iter() {
            transcription.push_str(&segment.to_string());
        }

        Ok(TranscriptionResult {
            text: transcription.trim().to_string(),
            language,
        })
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(not(feature = "whisper"))]
impl Transcriber for WhisperTranscriber {
    fn transcribe_path(
        &self,
        _audio: &Path,
        _options: &TranscribeOptions,
    ) -> Result<TranscriptionResult> {
        Err(MedscribeError::TranscriptionInferenceFailed {
            message: concat!(
                "Whisper feature not enabled. This binary was built without speech recognition.\n",
                "To fix: cargo build --release (whisper is enabled by default)\n",
                "If build fails with cmake errors, install: sudo apt install cmake"
            )
            .to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_whisper_config_default() {
        let config = WhisperConfig::default();
        assert_eq!(config.model_path, PathBuf::from("models/ggml-small.bin"));
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_whisper_config_custom() {
        let config = WhisperConfig {
            model_path: PathBuf::from("/custom/model.bin"),
            threads: Some(4),
        };
        assert_eq!(config.model_path, PathBuf::from("/custom/model.bin"));
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn test_new_fails_for_missing_model() {
        let config = WhisperConfig {
            model_path: PathBuf::from("/nonexistent/ggml-small.bin"),
            threads: None,
        };
        let result = WhisperTranscriber::new(config);
        assert!(matches!(
            result,
            Err(MedscribeError::TranscriptionModelNotFound { .. })
        ));
    }

    #[test]
    fn test_model_name_from_path() {
        assert_eq!(
            model_name_from_path(Path::new("/models/ggml-small.bin")),
            "ggml-small"
        );
        assert_eq!(model_name_from_path(Path::new("")), "unknown");
    }

    #[cfg(not(feature = "whisper"))]
    #[test]
    fn test_stub_reports_not_ready() {
        // An existing (but invalid) file path is enough for the stub
        let file = NamedTempFile::new().unwrap();
        let config = WhisperConfig {
            model_path: file.path().to_path_buf(),
            threads: None,
        };
        let transcriber = WhisperTranscriber::new(config).unwrap();
        assert!(!transcriber.is_ready());
        let result =
            transcriber.transcribe_path(Path::new("clip.wav"), &TranscribeOptions::default());
        assert!(result.is_err());
    }

    #[cfg(feature = "whisper")]
    #[test]
    fn test_new_fails_for_invalid_model_file() {
        // A real file that is not a ggml model must fail to load
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a model").unwrap();
        let config = WhisperConfig {
            model_path: file.path().to_path_buf(),
            threads: None,
        };
        let result = WhisperTranscriber::new(config);
        assert!(matches!(
            result,
            Err(MedscribeError::TranscriptionInferenceFailed { .. })
        ));
    }
}
