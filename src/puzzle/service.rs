//! Puzzle lookup over an injected graph.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use etymon::dataset::WordEntry;
//! use etymon::graph::GraphBuilder;
//! use etymon::puzzle::{PuzzleDefinition, PuzzleService};
//!
//! let mut builder = GraphBuilder::default();
//! builder.add_entry(&WordEntry::new("manitou_E").with_link("manitou_E", "/manet:u/_Unami"));
//! let graph = Arc::new(builder.finish().graph);
//!
//! let service = PuzzleService::new(
//!     graph,
//!     vec![PuzzleDefinition::new("3", "Manitou (Unami) link", ["manitou_E", "manet:u_Unami"])],
//! );
//!
//! let puzzle = service.get_default_puzzle().unwrap();
//! assert_eq!(puzzle.start_node.id, "manitou_E");
//! assert!(puzzle.scaffold.is_empty());
//! ```

use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::graph::{EtymologyGraph, Node};
use crate::puzzle::definition::{PuzzleDefinition, builtin_definitions};
use crate::puzzle::validator::validate_puzzle;

/// What a player is told about an intermediate path position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldHint {
    pub lang: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
}

/// One intermediate position between start and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldStep {
    /// Position on the full path; the start word is 0.
    pub index: usize,
    pub lang: String,
    pub hint: ScaffoldHint,
}

/// A servable puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub puzzle_id: String,
    pub path_ids: Vec<String>,
    pub start_node: Node,
    pub target_node: Node,
    pub scaffold: Vec<ScaffoldStep>,
    pub total_path_length: usize,
}

/// Serves puzzles from one authoritative definition set.
///
/// Definitions that fail validation against the graph are never served.
#[derive(Debug, Clone)]
pub struct PuzzleService {
    graph: Arc<EtymologyGraph>,
    definitions: Vec<PuzzleDefinition>,
}

impl PuzzleService {
    pub fn new(graph: Arc<EtymologyGraph>, definitions: Vec<PuzzleDefinition>) -> Self {
        PuzzleService { graph, definitions }
    }

    /// A service over the built-in definitions.
    pub fn with_builtin(graph: Arc<EtymologyGraph>) -> Self {
        Self::new(graph, builtin_definitions())
    }

    pub fn graph(&self) -> &EtymologyGraph {
        &self.graph
    }

    pub fn definitions(&self) -> &[PuzzleDefinition] {
        &self.definitions
    }

    pub fn definition(&self, puzzle_id: &str) -> Option<&PuzzleDefinition> {
        self.definitions.iter().find(|d| d.id == puzzle_id)
    }

    /// Assemble a puzzle, or `None` if the definition does not validate.
    pub fn build_puzzle(&self, definition: &PuzzleDefinition) -> Option<Puzzle> {
        if !validate_puzzle(&self.graph, definition).is_valid() {
            return None;
        }

        let start_node = self.graph.get_node(definition.start_id()?)?.clone();
        let target_node = self.graph.get_node(definition.target_id()?)?.clone();

        let len = definition.path_ids.len();
        let inner: &[String] = if len > 2 {
            &definition.path_ids[1..len - 1]
        } else {
            &[]
        };
        let scaffold = inner
            .iter()
            .enumerate()
            .filter_map(|(offset, id)| {
                let node = self.graph.get_node(id)?;
                Some(ScaffoldStep {
                    index: offset + 1,
                    lang: node.lang.clone(),
                    hint: ScaffoldHint {
                        lang: node.lang.clone(),
                        definition: node.definition.clone(),
                        pos: node.pos.clone(),
                    },
                })
            })
            .collect();

        Some(Puzzle {
            puzzle_id: definition.id.clone(),
            path_ids: definition.path_ids.clone(),
            start_node,
            target_node,
            scaffold,
            total_path_length: definition.path_ids.len(),
        })
    }

    pub fn get_puzzle_by_id(&self, puzzle_id: &str) -> Option<Puzzle> {
        self.build_puzzle(self.definition(puzzle_id)?)
    }

    /// The first definition, in authoring order, that validates.
    pub fn get_default_puzzle(&self) -> Option<Puzzle> {
        for definition in &self.definitions {
            match self.build_puzzle(definition) {
                Some(puzzle) => return Some(puzzle),
                None => warn!(
                    "Skipping invalid puzzle \"{}\" (ID: {})",
                    definition.name, definition.id
                ),
            }
        }
        None
    }

    /// Ids of every servable puzzle, in authoring order.
    pub fn get_all_puzzle_ids(&self) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|d| validate_puzzle(&self.graph, d).is_valid())
            .map(|d| d.id.clone())
            .collect()
    }
}
