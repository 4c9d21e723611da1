//! Catalog of MarianMT translation models.

/// Metadata for a Marian encoder-decoder translation model.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationModelInfo {
    /// Short name used in config and CLI (e.g. "opus-mt-ta-en").
    pub name: &'static str,
    /// Human-readable display name.
    pub display_name: &'static str,
    /// Approximate download size in MB.
    pub size_mb: u32,
    /// Source language code.
    pub source_language: &'static str,
    /// Target language code.
    pub target_language: &'static str,
    /// HuggingFace repository containing weights and config.
    pub hf_repo: &'static str,
    /// Safetensors weights filename within the repository.
    pub weights_filename: &'static str,
    /// JSON config filename within the repository.
    pub config_filename: &'static str,
    /// HuggingFace repository containing converted tokenizers.
    pub tokenizer_repo: &'static str,
    /// Source-language tokenizer filename.
    pub source_tokenizer_filename: &'static str,
    /// Target-language tokenizer filename.
    pub target_tokenizer_filename: &'static str,
}

/// Available translation models.
pub const TRANSLATION_MODELS: &[TranslationModelInfo] = &[TranslationModelInfo {
    name: "opus-mt-ta-en",
    display_name: "OPUS-MT Tamil → English (312 MB)",
    size_mb: 312,
    source_language: "ta",
    target_language: "en",
    hf_repo: "Helsinki-NLP/opus-mt-ta-en",
    weights_filename: "model.safetensors",
    config_filename: "config.json",
    tokenizer_repo: "lmz/candle-marian",
    source_tokenizer_filename: "tokenizer-marian-base-ta.json",
    target_tokenizer_filename: "tokenizer-marian-base-en.json",
}];

/// Look up a translation model by name.
pub fn get_translation_model(name: &str) -> Option<&'static TranslationModelInfo> {
    TRANSLATION_MODELS.iter().find(|m| m.name == name)
}

/// List all available translation models.
pub fn list_translation_models() -> &'static [TranslationModelInfo] {
    TRANSLATION_MODELS
}

/// The default translation model for the enhanced output mode.
pub fn default_translation_model() -> &'static TranslationModelInfo {
    &TRANSLATION_MODELS[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_translation_model_ta_en() {
        let model = get_translation_model("opus-mt-ta-en").expect("ta-en should exist");
        assert_eq!(model.source_language, "ta");
        assert_eq!(model.target_language, "en");
        assert_eq!(model.hf_repo, "Helsinki-NLP/opus-mt-ta-en");
    }

    #[test]
    fn test_get_translation_model_unknown() {
        assert!(get_translation_model("opus-mt-de-en").is_none());
    }

    #[test]
    fn test_default_translation_model_is_listed() {
        let default = default_translation_model();
        assert!(
            list_translation_models().iter().any(|m| m == default),
            "default must come from the catalog"
        );
    }

    #[test]
    fn test_all_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for model in TRANSLATION_MODELS {
            assert!(seen.insert(model.name), "Duplicate name: {}", model.name);
        }
    }
}
