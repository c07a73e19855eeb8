//! Synthetic corpus generator for search fixtures.
//!
//! Populates a directory tree (`shard_NN/doc_NNNNN.txt`) with files of
//! randomized background vocabulary and probabilistically injected keyword
//! occurrences in varied casing, so a default `**/*.txt` search has
//! realistic material to chew on. All randomness flows from one seeded
//! [`StdRng`] instance scoped to the call, never from process-wide state,
//! so a given seed always reproduces the same corpus byte for byte.
//!
//! Consumed by the integration tests and benchmarks, and exposed as the
//! `kwscan-gen` binary; the search engine itself never depends on it.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const BASIC_VOCAB: &[&str] = &[
    "code", "data", "system", "thread", "process", "memory", "network", "service", "python",
    "java", "csharp", "golang", "rust", "flower", "love", "rose", "tulip", "lily", "garden",
    "spring", "summer", "autumn", "winter", "happy", "joy", "bright", "light", "river", "stone",
    "water", "cloud", "sun", "wind", "forest", "night", "day", "time", "book", "music", "city",
];

/// Chance that a given file receives keyword injections at all; the rest
/// stay pure background noise so empty result lists occur naturally.
const INJECTION_CHANCE: f64 = 0.75;

/// Parameters for one corpus generation run.
#[derive(Debug, Clone)]
pub struct CorpusSpec {
    /// Number of files to create (at least 1)
    pub files: usize,
    /// Number of shard subdirectories the files are spread across
    pub subdirs: usize,
    /// Minimum words per file
    pub min_words: usize,
    /// Maximum words per file
    pub max_words: usize,
    /// Keywords to sprinkle into the text in varied casing
    pub keywords: Vec<String>,
    /// RNG seed; equal seeds reproduce equal corpora
    pub seed: u64,
}

impl Default for CorpusSpec {
    fn default() -> Self {
        CorpusSpec {
            files: 200,
            subdirs: 3,
            min_words: 80,
            max_words: 300,
            keywords: vec![],
            seed: 42,
        }
    }
}

/// Generates the corpus under `out_dir`, returning the written file paths.
pub fn generate(out_dir: &Path, spec: &CorpusSpec) -> io::Result<Vec<PathBuf>> {
    let mut rng = StdRng::seed_from_u64(spec.seed);

    let shards: Vec<PathBuf> = (0..spec.subdirs.max(1))
        .map(|i| out_dir.join(format!("shard_{i:02}")))
        .collect();
    for shard in &shards {
        fs::create_dir_all(shard)?;
    }

    let min_words = spec.min_words.max(5);
    let max_words = spec.max_words.max(min_words);

    let mut written = Vec::with_capacity(spec.files.max(1));
    for idx in 0..spec.files.max(1) {
        let path = shards[idx % shards.len()].join(format!("doc_{idx:05}.txt"));

        let count = rng.random_range(min_words..=max_words);
        let mut words: Vec<String> = (0..count)
            .map(|_| background_word(&mut rng).to_string())
            .collect();

        if rng.random_bool(INJECTION_CHANCE) {
            let density = rng.random_range(0.01..0.05);
            words = sprinkle_keywords(words, &spec.keywords, density, &mut rng);
        }

        fs::write(&path, words.join(" "))?;
        written.push(path);
    }

    Ok(written)
}

fn background_word(rng: &mut StdRng) -> &'static str {
    BASIC_VOCAB.choose(rng).copied().unwrap_or("word")
}

/// Inserts keywords after random positions; `density` is the per-word
/// injection probability. Occasionally doubles an injection so repeated
/// adjacent hits occur in the corpus too.
fn sprinkle_keywords(
    words: Vec<String>,
    keywords: &[String],
    density: f64,
    rng: &mut StdRng,
) -> Vec<String> {
    if keywords.is_empty() || density <= 0.0 {
        return words;
    }

    let mut out = Vec::with_capacity(words.len() + words.len() / 16);
    for word in words {
        out.push(word);
        if rng.random_bool(density) {
            if let Some(keyword) = keywords.choose(rng) {
                out.push(mutate_case(keyword, rng));
            }
            if rng.random_bool(0.2) {
                if let Some(keyword) = keywords.choose(rng) {
                    out.push(mutate_case(keyword, rng));
                }
            }
        }
    }
    out
}

/// lower ~70%, UPPER ~15%, Title ~15%
fn mutate_case(word: &str, rng: &mut StdRng) -> String {
    let roll: f64 = rng.random();
    if roll < 0.7 {
        word.to_lowercase()
    } else if roll < 0.85 {
        word.to_uppercase()
    } else {
        title_case(word)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
