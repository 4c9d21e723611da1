//! Default configuration constants for medscribe.
//!
//! Shared constants used across configuration types and the session
//! pipeline to keep the defaults in one place.

/// Audio sample rate in Hz expected by the transcription model.
///
/// 16kHz mono is what Whisper consumes; WAV input at other rates is
/// downmixed and resampled during intake.
pub const SAMPLE_RATE: u32 = 16000;

/// Default Whisper model size.
///
/// "small" is the best accuracy/latency trade-off for clinical dictation
/// on commodity laptop hardware; "tiny" and "base" are available for
/// slower machines.
pub const DEFAULT_MODEL: &str = "small";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Language code reported when the model could not detect one.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// File name offered for the exported transcript document.
pub const EXPORT_FILE_NAME: &str = "doctor_transcript.txt";

/// Timestamp format for history records and export documents,
/// e.g. "06-08-2026 09:41 AM".
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M %p";

/// Maximum characters of transcript shown per history entry.
pub const HISTORY_PREVIEW_CHARS: usize = 150;
