//! The Recordex CLI application.
//!
//! Owns the loaded configuration and dispatches commands: `extract` runs
//! decode + extract and writes the JSON artifact; `ask` runs the full
//! decode → extract → ingest → answer pipeline in one process (the index
//! is in-memory only and is not persisted across runs).

use crate::cli::{CliArgs, Command};
use crate::config::RecordexConfig;
use crate::output;
use log::warn;
use recordex_core::{Corpus, Result};
use recordex_extract::{DecoderRegistry, RecordExtractor};
use recordex_index::{RetrievalPipeline, create_embedder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The `recordex` application.
pub struct RecordexApp {
    config: RecordexConfig,
    version: String,
}

impl RecordexApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = RecordexConfig::load(args.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create with an already-loaded configuration.
    pub fn new(config: RecordexConfig) -> Self {
        Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &RecordexConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on
    /// verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Extract { paths, output }) => self.handle_extract(&paths, output).await,
            Some(Command::Ask {
                question,
                docs,
                top_k,
            }) => self.handle_ask(&question, &docs, top_k).await,
            Some(Command::Version) => {
                println!("recordex {}", self.version);
                Ok(())
            }
            None => {
                println!("recordex {} — use --help for usage", self.version);
                Ok(())
            }
        }
    }

    /// Decode and extract the given documents into a corpus.
    ///
    /// The corpus always has one record per input path; documents that
    /// fail to decode contribute empty records and a warning, never an
    /// abort.
    async fn build_corpus(&self, paths: &[PathBuf]) -> Corpus {
        let registry = DecoderRegistry::with_default_decoders();
        let extractor = RecordExtractor::new();

        let texts = registry.decode_all(paths).await;
        texts
            .iter()
            .zip(paths)
            .map(|(text, path)| {
                if text.is_empty() {
                    warn!("No text extracted from {}", path.display());
                }
                extractor.extract(text)
            })
            .collect()
    }

    async fn handle_extract(&self, paths: &[PathBuf], output: Option<PathBuf>) -> Result<()> {
        let corpus = self.build_corpus(paths).await;

        let output = output.unwrap_or_else(|| PathBuf::from(&self.config.output.path));
        output::write_records(&output, &corpus).await?;
        println!(
            "Extracted {} record(s) to {}",
            corpus.len(),
            output.display()
        );
        Ok(())
    }

    async fn handle_ask(
        &self,
        question: &str,
        docs: &[PathBuf],
        top_k: Option<usize>,
    ) -> Result<()> {
        let top_k = top_k.unwrap_or(self.config.query.default_top_k);
        let corpus = self.build_corpus(docs).await;

        let embedder = create_embedder(&self.config.embedding)?;
        let mut pipeline = RetrievalPipeline::new(embedder);
        pipeline.ingest(corpus).await?;

        let answers = pipeline.answer(question, top_k).await?;
        output::print_answers(&answers)
    }
}

// ============================================================================
// Tests
// ============================================================================
