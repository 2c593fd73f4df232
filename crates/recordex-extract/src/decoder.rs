//! Format-specific document decoders and the dispatching registry.
//!
//! Each decoder turns one file format into a plain text string. The
//! registry selects a decoder by file extension and absorbs failures:
//! a document that cannot be decoded is logged and treated as empty text,
//! so one corrupt file never aborts a batch.
//!
//! # Decoders
//!
//! - [`PdfDecoder`]: text extraction via `pdf-extract` (blocking work runs
//!   on the tokio blocking pool)
//! - [`HtmlDecoder`]: visible text via `scraper`, skipping script, style,
//!   and head content

use async_trait::async_trait;
use log::{debug, warn};
use recordex_core::{Error, Result};
use scraper::Html;
use std::path::Path;

// ============================================================================
// TextDecoder trait
// ============================================================================

/// Trait for converting a raw document into a plain text string.
///
/// Implementations are format-specific and failure-tolerant at the
/// registry level: a decoder may return an error, but the registry
/// degrades it to empty text rather than propagating.
#[async_trait]
pub trait TextDecoder: Send + Sync {
    /// Whether this decoder handles the given path, by extension.
    fn handles(&self, path: &Path) -> bool;

    /// Decode the file at `path` into plain text.
    async fn decode(&self, path: &Path) -> Result<String>;

    /// The decoder name for diagnostics.
    fn name(&self) -> &str;
}

fn has_extension(path: &Path, candidates: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| candidates.iter().any(|c| ext.eq_ignore_ascii_case(c)))
}

// ============================================================================
// PDF
// ============================================================================

/// Decoder for PDF files.
#[derive(Clone, Debug, Default)]
pub struct PdfDecoder;

impl PdfDecoder {
    /// Create a new PDF decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextDecoder for PdfDecoder {
    fn handles(&self, path: &Path) -> bool {
        has_extension(path, &["pdf"])
    }

    async fn decode(&self, path: &Path) -> Result<String> {
        debug!("Decoding PDF: {}", path.display());
        let bytes = tokio::fs::read(path).await?;

        // pdf-extract is synchronous and CPU-heavy; run it off the async
        // worker threads. A panic inside the library surfaces as a join
        // error and is reported like any other decode failure.
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| Error::decode(e.to_string()))
        })
        .await
        .map_err(|e| Error::decode(format!("PDF decode task failed: {e}")))??;

        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

// ============================================================================
// HTML
// ============================================================================

/// Decoder for HTML files.
///
/// Collects visible text nodes, one line per node, skipping script,
/// style, noscript, iframe, svg, and head subtrees.
#[derive(Clone, Debug, Default)]
pub struct HtmlDecoder;

impl HtmlDecoder {
    /// Create a new HTML decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextDecoder for HtmlDecoder {
    fn handles(&self, path: &Path) -> bool {
        has_extension(path, &["html", "htm"])
    }

    async fn decode(&self, path: &Path) -> Result<String> {
        debug!("Decoding HTML: {}", path.display());
        let html = tokio::fs::read_to_string(path).await?;
        // `Html` is not Send, so parsing stays inside the sync helper.
        Ok(html_to_text(&html))
    }

    fn name(&self) -> &str {
        "html"
    }
}

const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "iframe", "svg", "head"];

/// Extract visible text from an HTML string, one line per text node.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_text(document.root_element(), &mut parts);
    parts.join("\n").trim().to_string()
}

fn collect_text(element: scraper::ElementRef<'_>, parts: &mut Vec<String>) {
    use scraper::node::Node;

    if SKIPPED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = scraper::ElementRef::wrap(child) {
                    collect_text(child_element, parts);
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Extension-dispatching decoder registry.
///
/// Holds the available decoders and resolves each input path to plain
/// text. Unsupported extensions yield an empty string, as do decode
/// failures; neither is fatal.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn TextDecoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Create a registry with the standard PDF and HTML decoders.
    #[must_use]
    pub fn with_default_decoders() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PdfDecoder::new()));
        registry.register(Box::new(HtmlDecoder::new()));
        registry
    }

    /// Register an additional decoder.
    pub fn register(&mut self, decoder: Box<dyn TextDecoder>) {
        self.decoders.push(decoder);
    }

    /// Decode a single document to plain text.
    ///
    /// Returns an empty string for unsupported extensions and for decode
    /// failures (which are logged as warnings). Never errors.
    pub async fn decode(&self, path: &Path) -> String {
        let Some(decoder) = self.decoders.iter().find(|d| d.handles(path)) else {
            debug!("No decoder for {}, treating as empty", path.display());
            return String::new();
        };

        match decoder.decode(path).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "{} decode failed for {}: {e}",
                    decoder.name(),
                    path.display()
                );
                String::new()
            }
        }
    }

    /// Decode a batch of documents, preserving input order.
    ///
    /// The output length always equals the input length; failed documents
    /// contribute empty strings, not omitted entries.
    pub async fn decode_all(&self, paths: &[impl AsRef<Path>]) -> Vec<String> {
        let mut texts = Vec::with_capacity(paths.len());
        for path in paths {
            texts.push(self.decode(path.as_ref()).await);
        }
        texts
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_default_decoders()
    }
}

// ============================================================================
// Tests
// ============================================================================
