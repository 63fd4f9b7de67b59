use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cvsh_core::{AppContext, Executor, FileStore, MemoryStore};
use cvsh_ui::UiConfig;
use tracing_subscriber::EnvFilter;

/// cvsh: an interactive terminal portfolio.
#[derive(Parser, Debug)]
#[command(author, version, about = "cvsh terminal portfolio", long_about = None)]
struct Cli {
    /// Command to execute instead of launching the interactive session.
    #[arg()]
    command: Option<String>,

    /// Store directory (defaults to the platform data directory).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep edits in memory only; nothing is persisted.
    #[arg(long)]
    ephemeral: bool,
}

fn main() -> Result<()> {
    // RUST_LOG drives verbosity; default to warnings only so logging
    // never leaks into the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store: Box<dyn cvsh_core::KvStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        let dir = cli.data_dir.unwrap_or_else(FileStore::default_dir);
        Box::new(FileStore::open(dir).context("failed to open the store directory")?)
    };
    let mut ctx = AppContext::load(store);

    if let Some(command) = cli.command {
        // One-shot mode: run a single line and print plain output.
        let output = Executor::new().run(&mut ctx, &command);
        for line in &output.lines {
            println!("{}", line.text);
        }
        return Ok(());
    }

    let config = UiConfig::load().context("failed to load UI configuration")?;
    cvsh_ui::run_interactive(&mut ctx, config)
}
