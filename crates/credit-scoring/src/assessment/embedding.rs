use sha2::{Digest, Sha256};

use super::domain::TextSignal;
use crate::config::EmbeddingConfig;

/// Text Embedding Service seam: reduces free text to a single squashed scalar.
///
/// Implementations must accept the empty string and return a stable value for it.
pub trait TextEmbedder: Send + Sync {
    fn encode(&self, text: &str) -> Result<TextSignal, EmbeddingError>;
}

/// Failure raised while turning text into a signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("text input of {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },
    #[error("embedding backend unavailable: {0}")]
    Unavailable(String),
}

/// Deterministic, model-free embedder.
///
/// Tokens are lowercase alphanumeric runs, truncated to `max_tokens`. Each token
/// maps to a vector in `[-1, 1]^dimensions` derived from SHA-256 digests of the
/// token; vectors are mean-pooled across tokens, the pooled vector is averaged
/// to a scalar, and the scalar is passed through the logistic function. Text
/// without tokens pools to the zero vector and encodes to exactly `0.5`.
#[derive(Debug, Clone)]
pub struct HashedTokenEmbedder {
    dimensions: usize,
    max_tokens: usize,
    max_input_bytes: usize,
}

impl HashedTokenEmbedder {
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self {
            dimensions: config.dimensions.max(1),
            max_tokens: config.max_tokens,
            max_input_bytes: config.max_input_bytes,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .take(self.max_tokens)
            .map(str::to_lowercase)
            .collect()
    }

    fn token_vector(&self, token: &str) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.dimensions);
        let mut block: u32 = 0;
        while values.len() < self.dimensions {
            let mut hasher = Sha256::new();
            hasher.update(token.as_bytes());
            hasher.update(block.to_le_bytes());
            let digest = hasher.finalize();
            for byte in digest.iter() {
                if values.len() == self.dimensions {
                    break;
                }
                values.push(f64::from(*byte) / 127.5 - 1.0);
            }
            block += 1;
        }
        values
    }

    fn mean_pool(&self, tokens: &[String]) -> Vec<f64> {
        let mut pooled = vec![0.0; self.dimensions];
        if tokens.is_empty() {
            return pooled;
        }
        for token in tokens {
            for (slot, value) in pooled.iter_mut().zip(self.token_vector(token)) {
                *slot += value;
            }
        }
        let count = tokens.len() as f64;
        for slot in pooled.iter_mut() {
            *slot /= count;
        }
        pooled
    }
}

impl Default for HashedTokenEmbedder {
    fn default() -> Self {
        Self::new(&EmbeddingConfig::default())
    }
}

impl TextEmbedder for HashedTokenEmbedder {
    fn encode(&self, text: &str) -> Result<TextSignal, EmbeddingError> {
        if text.len() > self.max_input_bytes {
            return Err(EmbeddingError::InputTooLarge {
                len: text.len(),
                limit: self.max_input_bytes,
            });
        }

        let tokens = self.tokenize(text);
        let pooled = self.mean_pool(&tokens);
        let scalar = pooled.iter().sum::<f64>() / pooled.len() as f64;
        Ok(TextSignal(logistic(scalar)))
    }
}

/// Embedder that ignores its input and always returns the same signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSignalEmbedder(pub f64);

impl TextEmbedder for FixedSignalEmbedder {
    fn encode(&self, _text: &str) -> Result<TextSignal, EmbeddingError> {
        Ok(TextSignal(self.0))
    }
}

pub(crate) fn logistic(value: f64) -> f64 {
    1.0 / (1.0 + (-value).exp())
}
