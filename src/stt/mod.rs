//! Speech-to-text adapters.

pub mod transcriber;
pub mod whisper;

pub use transcriber::{
    MockTranscriber, TranscribeOptions, Transcriber, TranscriptionResult, TranscriptionTask,
};
pub use whisper::{WhisperConfig, WhisperTranscriber};
