use anyhow::{Context, Result};
use clap::Parser;
use kwscan::{engine, walk, ExecutionMode, SearchConfig};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Bulk keyword search across a directory tree of text files.
///
/// Prints a JSON document mapping each requested keyword to the files that
/// contain it (case-insensitive substring match), plus the elapsed scan
/// time in seconds.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to search
    #[arg(short = 'd', long = "path")]
    path: PathBuf,

    /// Keywords to search for (case-insensitive)
    #[arg(short, long, num_args = 1.., required = true)]
    keywords: Vec<String>,

    /// Glob pattern selecting the files to scan
    #[arg(short = 'g', long, default_value = walk::DEFAULT_FILE_PATTERN)]
    glob: String,

    /// Number of workers (0 = one per CPU core)
    #[arg(short = 'j', long, default_value_t = 0)]
    workers: usize,

    /// Concurrency model: "isolated" (message passing) or "shared" (lock-guarded)
    #[arg(short, long, default_value_t = ExecutionMode::Isolated)]
    mode: ExecutionMode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = SearchConfig::new(cli.path, cli.keywords)
        .with_file_pattern(cli.glob)
        .with_workers(cli.workers)
        .with_mode(cli.mode);
    debug!(
        "searching {} with {} workers in {} mode",
        config.root_path.display(),
        config.worker_count(),
        config.mode
    );

    let result = engine::search(&config).context("search failed")?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Logs go to stderr so stdout carries nothing but the result document.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
