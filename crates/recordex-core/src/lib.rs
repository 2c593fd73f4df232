//! Recordex Core — shared types and errors.
//!
//! This crate provides the foundational types used across all Recordex
//! crates. It has no internal Recordex dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: The `Record` type and representative text composition

#![doc = include_str!("../README.md")]

pub mod error;
pub mod record;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use record::{Corpus, Record, representative_text};
