//! Scoped temporary files for audio handed to the transcription model.
//!
//! The recording widget delivers raw WAV bytes; the transcription adapter
//! consumes a file path. A [`SpooledClip`] bridges the two with a
//! temporary file that lives exactly as long as one processing call:
//! created immediately before transcription, removed before the caller
//! returns, on success and on failure alike.

use crate::error::{MedscribeError, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A WAV clip spooled to a temporary file.
///
/// Dropping the clip removes the file; [`SpooledClip::cleanup`] removes it
/// eagerly and logs when removal fails. Removal failure is non-fatal
/// either way.
#[derive(Debug)]
pub struct SpooledClip {
    file: NamedTempFile,
}

impl SpooledClip {
    /// Write audio bytes to a fresh `.wav` temporary file.
    pub fn spool(bytes: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("medscribe-clip-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| MedscribeError::AudioSpool {
                message: format!("Failed to create temporary audio file: {}", e),
            })?;

        file.write_all(bytes).map_err(|e| MedscribeError::AudioSpool {
            message: format!("Failed to write temporary audio file: {}", e),
        })?;
        file.flush().map_err(|e| MedscribeError::AudioSpool {
            message: format!("Failed to flush temporary audio file: {}", e),
        })?;

        Ok(Self { file })
    }

    /// Path of the spooled file, valid until cleanup/drop.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the temporary file now. Failure is logged and swallowed.
    pub fn cleanup(self) {
        if let Err(e) = self.file.close() {
            log::warn!("failed to remove temporary audio file: {}", e);
        }
    }
}
