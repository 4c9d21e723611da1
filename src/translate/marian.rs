//! MarianMT translator using candle.
//!
//! Downloads model artifacts from HuggingFace on first use, then runs
//! greedy encoder-decoder decoding to translate clinical dictation into
//! English.

use crate::error::{MedscribeError, Result};
use crate::models::translation_catalog::TranslationModelInfo;
use crate::translate::Translator;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::marian::{Config as MarianConfig, MTModel};
use hf_hub::api::sync::Api;
use tokenizers::Tokenizer;

/// Maximum number of tokens to generate during translation.
const MAX_DECODE_TOKENS: usize = 512;

/// Marian encoder-decoder translator running on CPU via candle.
pub struct MarianTranslator {
    model: MTModel,
    source_tokenizer: Tokenizer,
    target_tokenizer: Tokenizer,
    config: MarianConfig,
    device: Device,
    model_name: String,
}

impl MarianTranslator {
    /// Load a Marian model from the HuggingFace cache.
    ///
    /// Downloads weights, config, and both tokenizers on first call.
    pub fn load(info: &TranslationModelInfo) -> Result<Self> {
        let device = Device::Cpu;
        let api = Api::new()
            .map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!("HF Hub API init: {e}"),
            })?;
        let repo = api.model(info.hf_repo.to_string());
        let tokenizer_repo = api.model(info.tokenizer_repo.to_string());

        // Download / resolve paths
        let weights_path = repo
            .get(info.weights_filename)
            .map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!("Download weights {}: {e}", info.weights_filename),
            })?;

        let config_path = repo
            .get(info.config_filename)
            .map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!("Download config {}: {e}", info.config_filename),
            })?;

        let source_tokenizer_path = tokenizer_repo
            .get(info.source_tokenizer_filename)
            .map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!(
                    "Download source tokenizer {}: {e}",
                    info.source_tokenizer_filename
                ),
            })?;

        let target_tokenizer_path = tokenizer_repo
            .get(info.target_tokenizer_filename)
            .map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!(
                    "Download target tokenizer {}: {e}",
                    info.target_tokenizer_filename
                ),
            })?;

        // Load config
        let config_bytes =
            std::fs::read(&config_path).map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!("Read config {}: {e}", config_path.display()),
            })?;
        let config: MarianConfig = serde_json::from_slice(&config_bytes).map_err(|e| {
            MedscribeError::TranslationModelLoad {
                message: format!("Parse Marian config: {e}"),
            }
        })?;

        // Load weights
        let tensors = candle_core::safetensors::load(&weights_path, &device).map_err(|e| {
            MedscribeError::TranslationModelLoad {
                message: format!("Load weights {}: {e}", weights_path.display()),
            }
        })?;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);
        let model =
            MTModel::new(&config, vb).map_err(|e| MedscribeError::TranslationModelLoad {
                message: format!("Init Marian model: {e}"),
            })?;

        // Load tokenizers
        let source_tokenizer = Tokenizer::from_file(&source_tokenizer_path).map_err(|e| {
            MedscribeError::TranslationModelLoad {
                message: format!(
                    "Load source tokenizer {}: {e}",
                    source_tokenizer_path.display()
                ),
            }
        })?;
        let target_tokenizer = Tokenizer::from_file(&target_tokenizer_path).map_err(|e| {
            MedscribeError::TranslationModelLoad {
                message: format!(
                    "Load target tokenizer {}: {e}",
                    target_tokenizer_path.display()
                ),
            }
        })?;

        Ok(Self {
            model,
            source_tokenizer,
            target_tokenizer,
            config,
            device,
            model_name: info.name.to_string(),
        })
    }

    /// Encode the source text and run greedy decoding.
    fn generate(&mut self, text: &str) -> Result<String> {
        let encoding = self
            .source_tokenizer
            .encode(text, true)
            .map_err(|e| MedscribeError::TranslationInferenceFailed {
                message: format!("Tokenize: {e}"),
            })?;

        let mut input_ids: Vec<u32> = encoding.get_ids().to_vec();
        input_ids.push(self.config.eos_token_id as u32);
        let input_tensor = Tensor::new(input_ids.as_slice(), &self.device)
            .map_err(|e| MedscribeError::TranslationInferenceFailed {
                message: format!("Create input tensor: {e}"),
            })?
            .unsqueeze(0)
            .map_err(|e| MedscribeError::TranslationInferenceFailed {
                message: format!("Unsqueeze input: {e}"),
            })?;

        // Encode
        let encoder_output = self.model.encoder().forward(&input_tensor, 0).map_err(|e| {
            MedscribeError::TranslationInferenceFailed {
                message: format!("Encoder forward: {e}"),
            }
        })?;

        // Greedy decode with incremental KV cache.
        // First step: feed the decoder start token. Subsequent steps: feed
        // only the new token; the KV cache accumulates across steps.
        let start_token = self.config.decoder_start_token_id as u32;
        let eos_token = self.config.eos_token_id as u32;
        let mut decoded_ids: Vec<u32> = vec![start_token];

        for step in 0..MAX_DECODE_TOKENS {
            let start_pos = if step == 0 { 0 } else { decoded_ids.len() - 1 };
            let decoder_input = Tensor::new(&decoded_ids[start_pos..], &self.device)
                .map_err(|e| MedscribeError::TranslationInferenceFailed {
                    message: format!("Create decoder input: {e}"),
                })?
                .unsqueeze(0)
                .map_err(|e| MedscribeError::TranslationInferenceFailed {
                    message: format!("Unsqueeze decoder: {e}"),
                })?;

            let logits = self
                .model
                .decode(&decoder_input, &encoder_output, start_pos)
                .map_err(|e| MedscribeError::TranslationInferenceFailed {
                    message: format!("Decoder forward: {e}"),
                })?;

            // Take last token logits (seq dim = last position)
            let seq_len =
                logits
                    .dim(1)
                    .map_err(|e| MedscribeError::TranslationInferenceFailed {
                        message: format!("Get logits dim: {e}"),
                    })?;
            let next_logits = logits.get_on_dim(1, seq_len - 1).map_err(|e| {
                MedscribeError::TranslationInferenceFailed {
                    message: format!("Slice logits: {e}"),
                }
            })?;

            let argmax = next_logits.argmax(candle_core::D::Minus1).map_err(|e| {
                MedscribeError::TranslationInferenceFailed {
                    message: format!("Argmax: {e}"),
                }
            })?;
            let next_token = argmax
                .reshape(())
                .map_err(|e| MedscribeError::TranslationInferenceFailed {
                    message: format!("Reshape argmax: {e}"),
                })?
                .to_scalar::<u32>()
                .map_err(|e| MedscribeError::TranslationInferenceFailed {
                    message: format!("Token scalar: {e}"),
                })?;

            if next_token == eos_token {
                break;
            }

            decoded_ids.push(next_token);
        }

        // Skip the decoder start token for detokenization
        let output = self
            .target_tokenizer
            .decode(&decoded_ids[1..], true)
            .map_err(|e| MedscribeError::TranslationInferenceFailed {
                message: format!("Detokenize: {e}"),
            })?;

        Ok(output.trim().to_string())
    }
}

impl Translator for MarianTranslator {
    fn translate(&mut self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }
        self.model.reset_kv_cache();
        self.generate(text)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

impl std::fmt::Debug for MarianTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarianTranslator")
            .field("model_name", &self.model_name)
            .field("model", &"<MTModel>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    // Loading a Marian model requires network access and several hundred
    // megabytes of weights, so construction is exercised by ignored
    // end-to-end tests only.

    use crate::models::translation_catalog::default_translation_model;

    #[test]
    fn test_default_model_metadata_is_complete() {
        let info = default_translation_model();
        assert!(!info.hf_repo.is_empty());
        assert!(info.weights_filename.ends_with(".safetensors"));
        assert!(info.config_filename.ends_with(".json"));
        assert!(info.source_tokenizer_filename.ends_with(".json"));
        assert!(info.target_tokenizer_filename.ends_with(".json"));
    }

    #[test]
    #[ignore = "downloads ~312 MB of model weights"]
    fn test_load_and_translate_e2e() {
        use super::*;
        let mut translator =
            MarianTranslator::load(default_translation_model()).expect("model should load");
        let out = translator.translate("காய்ச்சல்").expect("translate");
        assert!(!out.is_empty());
    }
}
