//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments for the `recordex` binary.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "RECORDEX_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Recordex commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode documents, extract records, and write the JSON artifact.
    Extract {
        /// Document files to process (PDF, HTML).
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output file for the extracted records.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Answer a free-text question against a set of documents.
    Ask {
        /// The question to answer.
        question: String,

        /// Document files to search (PDF, HTML).
        #[arg(short, long, num_args = 1.., required = true)]
        docs: Vec<PathBuf>,

        /// Number of results to return.
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },

    /// Print version information.
    Version,
}

// ============================================================================
// Tests
// ============================================================================
