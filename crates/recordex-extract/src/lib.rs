//! Document decoding and record extraction for Recordex.
//!
//! This crate covers the front half of the pipeline: turning files into
//! plain text, and turning plain text into key-value records.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    recordex-extract                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TextDecoder trait                                          │
//! │  ├── PdfDecoder (pdf-extract)                               │
//! │  └── HtmlDecoder (scraper)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  DecoderRegistry (extension dispatch, failure-tolerant)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RecordExtractor (two-pass key-value extraction)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decode failures never abort a batch: the registry logs a warning and
//! degrades the document to an empty text string, which extracts to an
//! empty record. Extraction itself is total over any string input.

#![doc = include_str!("../README.md")]

pub mod decoder;
pub mod extractor;

// Re-exports — decoders
pub use decoder::{DecoderRegistry, HtmlDecoder, PdfDecoder, TextDecoder};

// Re-exports — extraction
pub use extractor::RecordExtractor;
