//! End-to-end retrieval scenario: simulated document text through
//! extraction, ingestion, and querying, with a stub vectorizer whose
//! geometry is known so the ranking outcome is fully determined.

use async_trait::async_trait;
use recordex_core::{Record, Result};
use recordex_extract::RecordExtractor;
use recordex_index::{Embedder, RetrievalPipeline};
use std::sync::Arc;

/// Keyword-presence vectorizer: axis 0 is "Dell", axis 1 is "HP".
///
/// Any text mentioning a vendor gets weight on that vendor's axis, so
/// vendor-specific queries land nearest the matching document.
struct VendorStubEmbedder;

#[async_trait]
impl Embedder for VendorStubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let dell = if text.contains("Dell") { 1.0 } else { 0.0 };
        let hp = if text.contains("HP") { 1.0 } else { 0.0 };
        Ok(vec![dell, hp, 0.1])
    }

    fn dimension(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "vendor-stub"
    }
}

fn extract_corpus(texts: &[&str]) -> Vec<Record> {
    let extractor = RecordExtractor::new();
    texts.iter().map(|t| extractor.extract(t)).collect()
}

#[tokio::test]
async fn test_dell_query_returns_dell_record() {
    let corpus = extract_corpus(&["Name: Dell\nPrice: 500", "Name: HP\nPrice: 450"]);

    assert_eq!(corpus[0].get("Name").unwrap(), "Dell");
    assert_eq!(corpus[0].get("Price").unwrap(), "500");
    assert_eq!(corpus[1].get("Name").unwrap(), "HP");
    assert_eq!(corpus[1].get("Price").unwrap(), "450");

    let mut pipeline = RetrievalPipeline::new(Arc::new(VendorStubEmbedder));
    pipeline.ingest(corpus.clone()).await.unwrap();

    let results = pipeline.answer("Dell laptop", 1).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0], corpus[0]);
}

#[tokio::test]
async fn test_top_k_beyond_corpus_returns_everything_ranked() {
    let corpus = extract_corpus(&["Name: Dell\nPrice: 500", "Name: HP\nPrice: 450"]);

    let mut pipeline = RetrievalPipeline::new(Arc::new(VendorStubEmbedder));
    pipeline.ingest(corpus.clone()).await.unwrap();

    let results = pipeline.answer("HP laptop", 10).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], corpus[1]);
    assert_eq!(results[1], corpus[0]);
}

#[tokio::test]
async fn test_empty_document_survives_the_whole_pipeline() {
    // A document whose decode failed contributes empty text, which
    // extracts to an empty record and must still be ingestable.
    let corpus = extract_corpus(&["Name: Dell\nPrice: 500", ""]);
    assert!(corpus[1].is_empty());

    let mut pipeline = RetrievalPipeline::new(Arc::new(VendorStubEmbedder));
    pipeline.ingest(corpus.clone()).await.unwrap();

    let results = pipeline.answer("Dell", 2).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], corpus[0]);
    assert!(results[1].is_empty());
}
