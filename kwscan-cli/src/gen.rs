use anyhow::Result;
use clap::Parser;
use kwscan::fixture::{self, CorpusSpec};
use std::path::PathBuf;

/// Generate a synthetic corpus of .txt files for search testing.
///
/// Files carry random background vocabulary with the given keywords
/// sprinkled in at varied casing; the same seed always reproduces the same
/// corpus.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "data")]
    out: PathBuf,

    /// Number of files to create
    #[arg(long, default_value_t = 200)]
    files: usize,

    /// Number of shard subdirectories
    #[arg(long, default_value_t = 3)]
    subdirs: usize,

    /// Minimum words per file
    #[arg(long, default_value_t = 80)]
    min_words: usize,

    /// Maximum words per file
    #[arg(long, default_value_t = 300)]
    max_words: usize,

    /// Keywords to sprinkle into the corpus
    #[arg(short, long, num_args = 1.., default_values_t = default_keywords())]
    keywords: Vec<String>,

    /// RNG seed for reproducible corpora
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn default_keywords() -> Vec<String> {
    ["love", "rose", "python", "rust"]
        .map(String::from)
        .to_vec()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let spec = CorpusSpec {
        files: cli.files,
        subdirs: cli.subdirs,
        min_words: cli.min_words,
        max_words: cli.max_words,
        keywords: cli.keywords,
        seed: cli.seed,
    };
    let written = fixture::generate(&cli.out, &spec)?;

    println!(
        "generated {} files under '{}' ({} shards)",
        written.len(),
        cli.out.display(),
        spec.subdirs.max(1)
    );
    Ok(())
}
