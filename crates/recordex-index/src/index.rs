//! In-memory embedding index with cosine-similarity ranking.
//!
//! The index holds one entry per ingested record: the document's
//! positional index, its embedding vector, and the record itself. Entries
//! are created during ingestion, never mutated, and live for the process
//! lifetime of the retrieval session; there is no persistence.
//!
//! # Ranking policy
//!
//! Queries rank all stored entries by descending cosine similarity, with
//! ties broken by ascending document index so output is deterministic
//! regardless of sort internals. A zero-norm vector on either side scores
//! `-1.0` — a deterministic floor that ranks degenerate entries (such as
//! empty records) last instead of propagating a division by zero.

use crate::embedder::Embedder;
use log::debug;
use recordex_core::{Error, Record, Result, representative_text};
use std::sync::Arc;

/// Similarity assigned when either vector has zero norm.
const ZERO_NORM_SIMILARITY: f32 = -1.0;

/// Cosine similarity between two vectors: `dot(a,b) / (norm(a) * norm(b))`.
///
/// Range is approximately [-1, 1]. If either vector has zero norm the
/// result is [`ZERO_NORM_SIMILARITY`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return ZERO_NORM_SIMILARITY;
    }
    dot / (norm_a * norm_b)
}

/// Association of a document index to its embedding vector and record.
struct IndexEntry {
    doc_index: usize,
    vector: Vec<f32>,
    record: Record,
}

/// In-memory semantic index over extracted records.
///
/// Constructed fresh per run and owned by the pipeline instance; there is
/// no process-wide singleton. `add` requires `&mut self` (the underlying
/// storage is not safe for concurrent insertion); `query` takes `&self`
/// and is safe once ingestion has finished.
pub struct EmbeddingIndex {
    embedder: Arc<dyn Embedder>,
    entries: Vec<IndexEntry>,
}

impl EmbeddingIndex {
    /// Create an empty index backed by the given embedder.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            entries: Vec::new(),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a record under its document index.
    ///
    /// The record's representative string (`"key: value"` for non-empty
    /// values, joined by single spaces in record order) is embedded and
    /// stored alongside the record. Embedding failures propagate: they
    /// affect every subsequent record and must not be swallowed.
    pub async fn add(&mut self, doc_index: usize, record: Record) -> Result<()> {
        let text = representative_text(&record);
        debug!(
            "Indexing document {doc_index} ({} keys, {} chars of text)",
            record.len(),
            text.len()
        );

        let vector = self.embedder.embed(&text).await?;
        self.entries.push(IndexEntry {
            doc_index,
            vector,
            record,
        });
        Ok(())
    }

    /// Return the records most similar to the query text.
    ///
    /// Ranks every stored entry by descending cosine similarity to the
    /// embedded query, ties broken by ascending document index, and
    /// returns the top `top_k` records. A `top_k` larger than the store
    /// returns all records in ranked order. `top_k == 0` is rejected as a
    /// malformed query.
    pub async fn query(&self, text: &str, top_k: usize) -> Result<Vec<Record>> {
        if top_k == 0 {
            return Err(Error::invalid_query("top_k must be at least 1"));
        }

        let query_vector = self.embedder.embed(text).await?;

        let mut ranked: Vec<(f32, &IndexEntry)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&query_vector, &entry.vector), entry))
            .collect();

        ranked.sort_by(|(score_a, entry_a), (score_b, entry_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| entry_a.doc_index.cmp(&entry_b.doc_index))
        });

        Ok(ranked
            .into_iter()
            .take(top_k)
            .map(|(_, entry)| entry.record.clone())
            .collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
