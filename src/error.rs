//! Error types for medscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MedscribeError {
    // Audio intake errors
    #[error("Audio decode failed: {message}")]
    AudioDecode { message: String },

    #[error("Audio spool failed: {message}")]
    AudioSpool { message: String },

    // Transcription errors
    #[error("Transcription model not found at {path}")]
    TranscriptionModelNotFound { path: String },

    #[error("Transcription inference failed: {message}")]
    TranscriptionInferenceFailed { message: String },

    #[error("Transcription error: {message}")]
    Transcription { message: String },

    // Translation errors
    #[error("Translation model load failed: {message}")]
    TranslationModelLoad { message: String },

    #[error("Translation inference failed: {message}")]
    TranslationInferenceFailed { message: String },

    // Model management errors
    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Model download failed: {message}")]
    ModelDownload { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, MedscribeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_audio_decode_display() {
        let error = MedscribeError::AudioDecode {
            message: "not a WAV file".to_string(),
        };
        assert_eq!(error.to_string(), "Audio decode failed: not a WAV file");
    }

    #[test]
    fn test_transcription_model_not_found_display() {
        let error = MedscribeError::TranscriptionModelNotFound {
            path: "/models/ggml-small.bin".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription model not found at /models/ggml-small.bin"
        );
    }

    #[test]
    fn test_transcription_inference_failed_display() {
        let error = MedscribeError::TranscriptionInferenceFailed {
            message: "out of memory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription inference failed: out of memory"
        );
    }

    #[test]
    fn test_translation_model_load_display() {
        let error = MedscribeError::TranslationModelLoad {
            message: "missing tokenizer".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Translation model load failed: missing tokenizer"
        );
    }

    #[test]
    fn test_translation_inference_failed_display() {
        let error = MedscribeError::TranslationInferenceFailed {
            message: "decode diverged".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Translation inference failed: decode diverged"
        );
    }

    #[test]
    fn test_unknown_model_display() {
        let error = MedscribeError::UnknownModel {
            name: "huge".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown model: huge");
    }

    #[test]
    fn test_other_display() {
        let error = MedscribeError::Other("unexpected error".to_string());
        assert_eq!(error.to_string(), "unexpected error");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: MedscribeError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: MedscribeError = io_error.into();
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<MedscribeError>();
        assert_sync::<MedscribeError>();
    }

    #[test]
    fn test_error_debug_format() {
        let error = MedscribeError::UnknownModel {
            name: "huge".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownModel"));
        assert!(debug_str.contains("huge"));
    }
}
