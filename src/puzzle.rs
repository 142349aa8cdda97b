//! Puzzles over the prepared graph.
//!
//! A puzzle is an authored path of node ids. The validator checks paths
//! against a graph, the service assembles servable puzzles from valid
//! definitions, and the guess module answers "is this a legal next step?".

pub mod definition;
pub mod guess;
pub mod service;
pub mod validator;

pub use definition::{PuzzleDefinition, builtin_definitions, load_definitions};
pub use guess::{GuessError, GuessRequest, GuessResponse};
pub use service::{Puzzle, PuzzleService, ScaffoldHint, ScaffoldStep};
pub use validator::{PuzzleReport, ValidationSummary, Violation, validate_puzzle, validate_puzzles};
