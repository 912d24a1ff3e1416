//! Sentence-embedding encoder, the primary index strategy.
//!
//! Loads a local BERT-family sentence embedder (tokenizer.json,
//! config.json, model.safetensors) with candle and turns texts into
//! unit-norm vectors by mean-pooling the last hidden states. Missing or
//! broken model files fail cleanly so the index builder can fall back to
//! the sparse strategy.

use std::fs;
use std::path::Path;

use candle_core::{Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig, DTYPE};
use tokenizers::Tokenizer as HfTokenizer;

use crate::error::{IndexError, Result};

/// Encodes sentences with a local transformer model.
///
/// Constructed once at process start and passed by reference; there is no
/// hidden global model handle.
pub struct SentenceEncoder {
    tokenizer: HfTokenizer,
    model: BertModel,
    device: Device,
}

impl SentenceEncoder {
    /// The designated multilingual sentence-embedding model.
    pub const MODEL_ID: &'static str =
        "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";

    /// Loads the encoder from a directory holding `tokenizer.json`,
    /// `config.json` and `model.safetensors`.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let tokenizer_path = model_dir.join("tokenizer.json");
        if !tokenizer_path.exists() {
            return Err(IndexError::ModelLoad(format!(
                "tokenizer not found at {}",
                tokenizer_path.display()
            )));
        }
        let tokenizer = HfTokenizer::from_file(&tokenizer_path)
            .map_err(|e| IndexError::ModelLoad(e.to_string()))?;

        let config_path = model_dir.join("config.json");
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| IndexError::ModelLoad(format!("failed to read config: {e}")))?;
        let config: BertConfig = serde_json::from_str(&config_str)
            .map_err(|e| IndexError::ModelLoad(format!("failed to parse config: {e}")))?;

        let weights_path = model_dir.join("model.safetensors");
        if !weights_path.exists() {
            return Err(IndexError::ModelLoad(format!(
                "weights not found at {}",
                weights_path.display()
            )));
        }

        let device = Device::Cpu;
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, &device) }
                .map_err(|e| IndexError::Candle(e.to_string()))?;
        let model = BertModel::load(vb, &config).map_err(|e| IndexError::Candle(e.to_string()))?;

        Ok(Self {
            tokenizer,
            model,
            device,
        })
    }

    /// Encodes one text to a unit-norm embedding vector.
    pub fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| IndexError::Encode(e.to_string()))?;
        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Err(IndexError::Encode("tokenizer produced no tokens".into()));
        }

        let input_ids = Tensor::new(ids, &self.device)
            .map_err(|e| IndexError::Candle(e.to_string()))?
            .unsqueeze(0)
            .map_err(|e| IndexError::Candle(e.to_string()))?;
        let token_type_ids = input_ids
            .zeros_like()
            .map_err(|e| IndexError::Candle(e.to_string()))?;

        // [1, seq_len, hidden]
        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, None)
            .map_err(|e| IndexError::Candle(e.to_string()))?;

        let (_, seq_len, _) = hidden
            .dims3()
            .map_err(|e| IndexError::Candle(e.to_string()))?;
        let pooled = (hidden.sum(1).map_err(|e| IndexError::Candle(e.to_string()))?
            / seq_len as f64)
            .map_err(|e| IndexError::Candle(e.to_string()))?;

        let norm = pooled
            .sqr()
            .and_then(|t| t.sum_all())
            .and_then(|t| t.sqrt())
            .map_err(|e| IndexError::Candle(e.to_string()))?;
        let unit = pooled
            .broadcast_div(&norm)
            .map_err(|e| IndexError::Candle(e.to_string()))?;

        unit.squeeze(0)
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| IndexError::Candle(e.to_string()))
    }
}
