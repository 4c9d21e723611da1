//! Model download and installation management.
//!
//! Handles downloading Whisper models from HuggingFace, verifying their
//! integrity, and storing them in the user's cache directory. The whole
//! flow is synchronous: one blocking download per user action.

use crate::error::{MedscribeError, Result};
use crate::models::catalog::{ModelInfo, get_model};
use indicatif::{ProgressBar, ProgressStyle};
use sha1::{Digest, Sha1};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Get the directory where models are stored.
///
/// Uses `~/.cache/medscribe/models/` on Linux/Unix.
pub fn models_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("medscribe")
        .join("models")
}

/// Get the full path for a model file.
///
/// Always returns a path regardless of whether the model is in the
/// catalog. The file may or may not exist on disk.
pub fn model_path(name: &str) -> PathBuf {
    models_dir().join(format!("ggml-{name}.bin"))
}

/// Check if a model is installed.
pub fn is_model_installed(name: &str) -> bool {
    model_path(name).exists()
}

/// Download a model by name, verifying its checksum.
///
/// Returns the installed path. Re-downloading an installed model is a
/// no-op.
pub fn download_model(name: &str, progress: bool) -> Result<PathBuf> {
    let info = get_model(name).ok_or_else(|| MedscribeError::UnknownModel {
        name: name.to_string(),
    })?;

    let output_path = model_path(info.name);
    if output_path.exists() {
        return Ok(output_path);
    }

    download_to_path(info, &output_path, progress)?;
    Ok(output_path)
}

/// Resolve the path for a model, downloading it when missing and allowed.
pub fn ensure_model(name: &str, auto_download: bool, progress: bool) -> Result<PathBuf> {
    let path = model_path(name);
    if path.exists() {
        return Ok(path);
    }
    if !auto_download {
        return Err(MedscribeError::TranscriptionModelNotFound {
            path: path.to_string_lossy().to_string(),
        });
    }
    download_model(name, progress)
}

/// Core download: fetch url, save to path, verify sha1.
fn download_to_path(info: &ModelInfo, output_path: &Path, progress: bool) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| MedscribeError::ModelDownload {
            message: format!("Failed to create models directory: {e}"),
        })?;
    }

    if progress {
        eprintln!("Downloading {} ({} MB)...", info.name, info.size_mb);
    }

    let response = reqwest::blocking::Client::new()
        .get(info.url)
        .send()
        .map_err(|e| MedscribeError::ModelDownload {
            message: format!("Failed to start download: {e}"),
        })?;

    if !response.status().is_success() {
        return Err(MedscribeError::ModelDownload {
            message: format!("Download failed with status: {}", response.status()),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if progress {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            // SAFETY: hardcoded template string — always valid
            #[allow(clippy::expect_used)]
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .expect("hardcoded progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Stream to disk with incremental hash calculation
    let mut hasher = Sha1::new();
    let mut reader = response;
    let mut file = fs::File::create(output_path).map_err(|e| MedscribeError::ModelDownload {
        message: format!("Failed to create output file: {e}"),
    })?;

    let mut buffer = [0u8; 64 * 1024];
    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| MedscribeError::ModelDownload {
                message: format!("Failed to read download chunk: {e}"),
            })?;
        if read == 0 {
            break;
        }
        file.write_all(&buffer[..read])
            .map_err(|e| MedscribeError::ModelDownload {
                message: format!("Failed to write to file: {e}"),
            })?;
        hasher.update(&buffer[..read]);
        if let Some(ref pb) = pb {
            pb.inc(read as u64);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Downloaded");
    }

    // Verify SHA-1 checksum; remove the file if it is corrupted
    if !info.sha1.is_empty() {
        let calculated = format!("{:x}", hasher.finalize());
        if calculated != info.sha1 {
            if let Err(e) = fs::remove_file(output_path) {
                log::warn!("failed to remove corrupted download: {e}");
            }
            return Err(MedscribeError::ModelDownload {
                message: format!(
                    "Checksum mismatch for {}: expected {}, got {}",
                    info.name, info.sha1, calculated
                ),
            });
        }
    }

    Ok(())
}

/// Human-readable one-line description of a model's install state.
pub fn format_model_info(info: &ModelInfo) -> String {
    let installed = if is_model_installed(info.name) {
        "installed"
    } else {
        "not installed"
    };
    format!("{:<8} {:>5} MB  {}", info.name, info.size_mb, installed)
}
