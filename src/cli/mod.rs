//! Command-line parsing for the BioASQ -> SQuAD converter.
//!
//! Parsing is kept apart from the conversion code; `app` turns `Cli` into a
//! validated `ConvertConfig`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{DEFAULT_CONTEXT_TOKEN_LIMIT, DEFAULT_SEED, DEFAULT_TRAIN_FRACTION};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bioasq2squad",
    version,
    about = "Convert a BioASQ JSON corpus into SQuAD-style train/dev files"
)]
pub struct Cli {
    /// BioASQ JSON file (`{"questions": [...]}`).
    #[arg(value_name = "BIOASQ_JSON")]
    pub source: PathBuf,

    /// Directory for `train.json` and `dev.json` (created if missing).
    #[arg(value_name = "OUT_DIR")]
    pub output_dir: PathBuf,

    /// Random seed for the train/dev split.
    #[arg(long, env = "BIOASQ2SQUAD_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of paragraphs assigned to the training set.
    #[arg(long, env = "BIOASQ2SQUAD_TRAIN_FRACTION", default_value_t = DEFAULT_TRAIN_FRACTION)]
    pub train_fraction: f64,

    /// Maximum context length in tokens; snippets past it are dropped.
    #[arg(long, env = "BIOASQ2SQUAD_CONTEXT_TOKEN_LIMIT", default_value_t = DEFAULT_CONTEXT_TOKEN_LIMIT)]
    pub context_token_limit: usize,
}
