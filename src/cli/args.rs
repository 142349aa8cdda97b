//! Command line argument parsing for the etymon CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// etymon - etymology graph preparation and puzzle tooling
#[derive(Parser, Debug, Clone)]
#[command(name = "etymon")]
#[command(about = "Prepare etymology graphs and validate word-origin puzzles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct EtymonArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl EtymonArgs {
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
    /// Build graph.json and search_index.json from a raw dataset
    Prepare(PrepareArgs),

    /// Check every puzzle definition against a prepared graph
    #[command(name = "validate-puzzles")]
    ValidatePuzzles(PuzzleSourceArgs),

    /// Show one puzzle, or the default puzzle when no id is given
    Puzzle(PuzzleArgs),

    /// List the ids of every servable puzzle
    #[command(name = "list-puzzles")]
    ListPuzzles(PuzzleSourceArgs),

    /// Check whether a guessed word is a valid next step
    Guess(GuessArgs),

    /// Look up words in a prepared search index
    Lookup(LookupArgs),
}

/// Arguments for a preparation run
#[derive(Parser, Debug, Clone)]
pub struct PrepareArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Raw etymology dataset
    #[arg(short, long, value_name = "INPUT_FILE", env = "ETYMON_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for graph.json and search_index.json
    #[arg(short, long, value_name = "OUTPUT_DIR", env = "ETYMON_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Definition used for nodes without one
    #[arg(long)]
    pub fallback_definition: Option<String>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Where to find the graph and the puzzle definitions
#[derive(Parser, Debug, Clone)]
pub struct PuzzleSourceArgs {
    /// Prepared graph file
    #[arg(
        short,
        long,
        value_name = "GRAPH_FILE",
        default_value = "data/out/graph.json"
    )]
    pub graph: PathBuf,

    /// Puzzle definitions (JSON array); defaults to the built-in set
    #[arg(short, long, value_name = "PUZZLES_FILE")]
    pub puzzles: Option<PathBuf>,
}

/// Arguments for showing a puzzle
#[derive(Parser, Debug, Clone)]
pub struct PuzzleArgs {
    #[command(flatten)]
    pub source: PuzzleSourceArgs,

    /// Puzzle id
    #[arg(value_name = "PUZZLE_ID")]
    pub id: Option<String>,
}

/// Arguments for validating a guess
#[derive(Parser, Debug, Clone)]
pub struct GuessArgs {
    #[command(flatten)]
    pub source: PuzzleSourceArgs,

    /// The word the player is currently on
    #[arg(long, value_name = "WORD_ID")]
    pub current: Option<String>,

    /// Puzzle id (falls back to the default puzzle)
    #[arg(long = "puzzle", value_name = "PUZZLE_ID")]
    pub puzzle_id: Option<String>,

    /// The guessed word id
    #[arg(value_name = "GUESS")]
    pub guess: String,
}

/// Arguments for a search index lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Prepared search index file
    #[arg(
        short,
        long,
        value_name = "INDEX_FILE",
        default_value = "data/out/search_index.json"
    )]
    pub index: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
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
