//! Recordex CLI application.
//!
//! Wires the extraction and retrieval crates into the `recordex` binary:
//! argument parsing, configuration loading, logging init, and the
//! `extract` / `ask` command handlers.

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod output;

pub use app::RecordexApp;
pub use cli::{CliArgs, Command};
pub use config::RecordexConfig;
