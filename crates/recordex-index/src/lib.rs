//! Embedding index and retrieval pipeline for Recordex.
//!
//! This crate provides semantic retrieval over extracted records with a
//! pluggable embedding provider. It includes a fastembed backend
//! (feature-gated) plus a deterministic hash embedder for tests and
//! offline use.
//!
//! # Features
//!
//! - `embed-fastembed`: Enable local embedding generation via fastembed
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     recordex-index                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Embedder trait                                             │
//! │  ├── HashEmbedder (always available, deterministic)         │
//! │  └── FastEmbedder (feature: embed-fastembed)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  EmbeddingIndex (add, cosine-ranked query)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RetrievalPipeline (ingest corpus, answer questions)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use recordex_index::{EmbedderConfig, RetrievalPipeline, create_embedder};
//!
//! let embedder = create_embedder(&EmbedderConfig::default())?;
//! let mut pipeline = RetrievalPipeline::new(embedder);
//! pipeline.ingest(corpus).await?;
//!
//! for record in pipeline.answer("Dell laptop", 3).await? {
//!     println!("{record:?}");
//! }
//! ```

#![doc = include_str!("../README.md")]

pub mod embedder;
pub mod index;
pub mod pipeline;

// Feature-gated backend module
#[cfg(feature = "embed-fastembed")]
pub mod fastembed;

// Re-exports — embedders
pub use embedder::{Embedder, EmbedderConfig, HashEmbedder, create_embedder};

// Re-exports — index and pipeline
pub use index::{EmbeddingIndex, cosine_similarity};
pub use pipeline::{DEFAULT_TOP_K, RetrievalPipeline};

// Feature-gated re-exports
#[cfg(feature = "embed-fastembed")]
pub use fastembed::FastEmbedder;
