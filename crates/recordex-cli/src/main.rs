//! Entry point for the `recordex` binary.

use clap::Parser;
use recordex_cli::{CliArgs, RecordexApp};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let app = match RecordexApp::from_args(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("recordex: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(args).await {
        eprintln!("recordex: {e}");
        std::process::exit(1);
    }
}
