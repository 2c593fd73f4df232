//! Embedding provider trait, configuration, and the hash embedder.
//!
//! The `Embedder` trait abstracts over embedding generation backends so
//! the ranking logic can be tested with a deterministic vectorizer
//! instead of a real model.
//!
//! # Providers
//!
//! - `HashEmbedder`: deterministic fixed-dimension vectors, no model
//! - `FastEmbedder`: local embedding via fastembed (requires the
//!   `embed-fastembed` feature)

use async_trait::async_trait;
use recordex_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Embedder trait
// ============================================================================

/// Trait for mapping a string to a fixed-length numeric vector.
///
/// Every vector produced by one embedder instance has the same dimension,
/// and documents and queries must share the same embedder so they live in
/// one embedding space. The trait requires `Send + Sync` to allow safe
/// sharing across async tasks.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for a single text.
    ///
    /// Failures here are configuration-level (model unavailable, resource
    /// exhaustion) and are fatal for the run; they are never retried.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// The embedding dimension.
    fn dimension(&self) -> usize;

    /// The provider name for diagnostics.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Embedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Embedder")
            .field("name", &self.name())
            .field("dimension", &self.dimension())
            .finish()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Embedding provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedderConfig {
    /// Provider: "hash" or "fastembed".
    pub provider: String,

    /// Embedding model name (fastembed only, e.g. "bge-small-en-v1.5").
    pub model: String,

    /// Embedding dimension (hash provider only).
    pub dimension: usize,

    /// Cache directory for downloaded model files (fastembed only).
    pub cache_path: Option<String>,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            provider: "hash".to_string(),
            model: "bge-small-en-v1.5".to_string(),
            dimension: 384,
            cache_path: None,
        }
    }
}

/// Create an embedder from configuration.
///
/// Unknown provider names are a configuration error, as is requesting
/// `fastembed` when the `embed-fastembed` feature is disabled.
pub fn create_embedder(config: &EmbedderConfig) -> Result<Arc<dyn Embedder>> {
    match config.provider.as_str() {
        "hash" => Ok(Arc::new(HashEmbedder::new(config.dimension))),
        #[cfg(feature = "embed-fastembed")]
        "fastembed" => Ok(Arc::new(crate::fastembed::FastEmbedder::new(
            &config.model,
            config.cache_path.as_deref(),
        )?)),
        #[cfg(not(feature = "embed-fastembed"))]
        "fastembed" => Err(Error::config(
            "fastembed provider requested but the 'embed-fastembed' feature is disabled",
        )),
        other => Err(Error::config(format!(
            "Unknown embedding provider: '{other}'. Supported: hash, fastembed"
        ))),
    }
}

// ============================================================================
// HashEmbedder
// ============================================================================

/// A deterministic, model-free embedding provider.
///
/// Each component is an FNV-1a hash of the text seeded by the component
/// index, mapped into [-0.5, 0.5] and unit-normalized. Identical texts
/// always produce identical vectors; empty text produces the zero vector,
/// matching the degenerate case of an empty representative string.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create a new hash embedder with the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        if text.is_empty() {
            return vec![0.0; self.dimension];
        }

        let mut vector: Vec<f32> = (0..self.dimension)
            .map(|seed| {
                let h = fnv1a(text.as_bytes(), seed as u64);
                ((h % 10_000) as f32 / 10_000.0) - 0.5
            })
            .collect();

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for component in &mut vector {
                *component /= norm;
            }
        }

        vector
    }
}

/// FNV-1a with an extra seed mixed in up front.
fn fnv1a(bytes: &[u8], seed: u64) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET ^ seed.wrapping_mul(PRIME);
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hash"
    }
}

// ============================================================================
// Tests
// ============================================================================
