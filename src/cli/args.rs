//! Command line argument parsing for the Sapling CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sapling - classic machine learning and NLP pipelines
#[derive(Parser, Debug, Clone)]
#[command(name = "sapling")]
#[command(about = "Classic machine learning and natural language processing pipelines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SaplingArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SAPLING_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SaplingArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Predict a disease from two symptoms with a decision tree
    Tree(TreeArgs),

    /// Predict a disease from two symptoms with categorical naive Bayes
    Bayes(SymptomArgs),

    /// Extract named entities
    Ner(TextArgs),

    /// Lemmatize a sentence using its part-of-speech tags
    Lemmatize(TextArgs),

    /// Score the sentiment of a sentence with VADER
    Vader(VaderArgs),

    /// Train and evaluate a bag-of-words classifier on a review corpus
    Reviews(ReviewsArgs),

    /// Count word frequencies without stop words and punctuation
    Tokens(TopArgs),

    /// List the most frequent nouns
    Topics(TopArgs),
}

/// Symptoms of one patient. Missing values are read from stdin.
#[derive(Parser, Debug, Clone)]
pub struct SymptomArgs {
    /// First symptom (e.g. Paralysis)
    #[arg(long = "symptom1", value_name = "SYMPTOM")]
    pub symptom1: Option<String>,

    /// Second symptom (e.g. Fever)
    #[arg(long = "symptom2", value_name = "SYMPTOM")]
    pub symptom2: Option<String>,
}

/// Arguments for the decision tree command
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    #[command(flatten)]
    pub symptoms: SymptomArgs,

    /// Print the learned decision rules
    #[arg(long)]
    pub show_tree: bool,
}

/// Arguments for commands that analyze a piece of text
#[derive(Parser, Debug, Clone)]
pub struct TextArgs {
    /// Text to analyze (defaults to the built-in example)
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Arguments for the VADER command
#[derive(Parser, Debug, Clone)]
pub struct VaderArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Also print the raw polarity scores
    #[arg(long)]
    pub scores: bool,
}

/// Arguments for the frequency commands
#[derive(Parser, Debug, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Number of entries to show (overrides the configuration)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Arguments for training on a review corpus
#[derive(Parser, Debug, Clone)]
pub struct ReviewsArgs {
    /// Corpus directory with one subdirectory per category
    #[arg(long, value_name = "DIR")]
    pub corpus: PathBuf,

    /// Number of shuffled documents used for training
    #[arg(long, value_name = "N")]
    pub train_size: Option<usize>,

    /// Shuffle seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of informative features to show
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
