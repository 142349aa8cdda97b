//! # etymon
//!
//! Etymology graph preparation for a word-origin puzzle game.
//!
//! ## Features
//!
//! - Canonical ids for raw etymology tokens, with language-code resolution
//! - Deduplicated, direction-tagged derivation graph with mirrored neighbors
//! - Diacritic- and case-insensitive search index
//! - Puzzle path validation, puzzle lookup and guess checking
//!
//! ## Example
//!
//! ```
//! use etymon::dataset::{Dataset, WordEntry};
//! use etymon::pipeline::build_prepared;
//!
//! let dataset = Dataset::new(vec![
//!     WordEntry::new("mouse (n.)_E").with_link("mouse (n.)_E", "mus_OE"),
//! ]);
//! let prepared = build_prepared(&dataset, "n/a");
//! let mouse = prepared.graph().get_node("mouse (n.)_E").unwrap();
//!
//! assert_eq!(mouse.neighbors[0].id, "mus_OE");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod pipeline;
pub mod puzzle;
pub mod search_index;

pub mod prelude {
    pub use crate::dataset::{ChainLink, Dataset, WordEntry};
    pub use crate::error::{EtymonError, Result};
    pub use crate::graph::{Direction, EtymologyGraph, GraphBuilder, Neighbor, Node};
    pub use crate::puzzle::{Puzzle, PuzzleDefinition, PuzzleService};
    pub use crate::search_index::{SearchIndex, SearchIndexItem};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
