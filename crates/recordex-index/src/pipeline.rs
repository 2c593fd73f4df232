//! The retrieval pipeline joining extraction output to query answers.
//!
//! A thin orchestrator: `ingest` feeds each record into the index under
//! its corpus position (the stable join key between extraction output and
//! retrieval results), and `answer` delegates to the index query. No
//! other state.

use crate::embedder::Embedder;
use crate::index::EmbeddingIndex;
use log::info;
use recordex_core::{Corpus, Record, Result};
use std::sync::Arc;

/// Default number of results returned by a query.
pub const DEFAULT_TOP_K: usize = 3;

/// Orchestrates record ingestion and question answering.
pub struct RetrievalPipeline {
    index: EmbeddingIndex,
}

impl RetrievalPipeline {
    /// Create a pipeline with a fresh index backed by the given embedder.
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            index: EmbeddingIndex::new(embedder),
        }
    }

    /// Ingest a corpus, adding each record under its positional index.
    ///
    /// Embedding failures abort ingestion; they indicate a configuration
    /// problem that would affect every remaining record.
    pub async fn ingest(&mut self, corpus: Corpus) -> Result<()> {
        let total = corpus.len();
        for (doc_index, record) in corpus.into_iter().enumerate() {
            self.index.add(doc_index, record).await?;
        }
        info!("Ingested {total} document(s) into the retrieval index");
        Ok(())
    }

    /// Answer a free-text question with the most relevant records.
    pub async fn answer(&self, question: &str, top_k: usize) -> Result<Vec<Record>> {
        self.index.query(question, top_k).await
    }

    /// The underlying index (read access).
    pub fn index(&self) -> &EmbeddingIndex {
        &self.index
    }
}

// ============================================================================
// Tests
// ============================================================================
