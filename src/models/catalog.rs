//! Whisper model metadata catalog.
//!
//! Multilingual models only: dictation sessions may receive Tamil or
//! English speech, and the translate task needs multilingual weights.

use crate::config::ModelSize;

/// Metadata for a Whisper model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Model identifier (e.g., "tiny", "base", "small")
    pub name: &'static str,
    /// Model size in megabytes
    pub size_mb: u32,
    /// SHA-1 checksum for integrity verification
    pub sha1: &'static str,
    /// Download URL from HuggingFace
    pub url: &'static str,
}

/// Catalog of supported Whisper models, smallest first.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "tiny",
        size_mb: 75,
        sha1: "bd577a113a864445d4c299885e0cb97d4ba92b5f",
        url: "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-tiny.bin",
    },
    ModelInfo {
        name: "base",
        size_mb: 142,
        sha1: "465707469ff3a37a2b9b8d8f89f2f99de7299dac",
        url: "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin",
    },
    ModelInfo {
        name: "small",
        size_mb: 466,
        sha1: "55356645c2b361a969dfd0ef2c5a50d530afd8d5",
        url: "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-small.bin",
    },
];

/// Find a model by name.
pub fn get_model(name: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.name == name)
}

/// Metadata for a size selection.
pub fn model_for_size(size: ModelSize) -> &'static ModelInfo {
    // Every ModelSize variant has a catalog row
    match size {
        ModelSize::Tiny => &MODELS[0],
        ModelSize::Base => &MODELS[1],
        ModelSize::Small => &MODELS[2],
    }
}

/// Get all available models.
pub fn list_models() -> &'static [ModelInfo] {
    MODELS
}
