//! Puzzle path validation against a graph.
//!
//! A path is valid when every id names a node and each consecutive pair is
//! adjacent in either neighbor direction. All violations are collected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::EtymologyGraph;
use crate::puzzle::definition::PuzzleDefinition;

/// One problem found in a puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The path has no ids at all.
    EmptyPath,

    /// Ids not present in the graph, in path order.
    MissingNodes { ids: Vec<String> },

    /// Two consecutive ids that are both present but not adjacent.
    BrokenLink { source: String, target: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyPath => write!(f, "Path is empty"),
            Violation::MissingNodes { ids } => write!(f, "Missing Node IDs: {}", ids.join(", ")),
            Violation::BrokenLink { source, target } => write!(
                f,
                "No connection found between \"{source}\" and \"{target}\""
            ),
        }
    }
}

/// Validation outcome for one definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleReport {
    pub puzzle_id: String,
    pub name: String,
    pub violations: Vec<Violation>,
}

impl PuzzleReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn missing_ids(&self) -> Vec<&str> {
        self.violations
            .iter()
            .flat_map(|v| match v {
                Violation::MissingNodes { ids } => ids.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            })
            .collect()
    }

    pub fn broken_links(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::BrokenLink { .. }))
            .count()
    }
}

/// Validation outcome for a whole definition set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub reports: Vec<PuzzleReport>,
}

impl ValidationSummary {
    pub fn is_valid(&self) -> bool {
        self.reports.iter().all(PuzzleReport::is_valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &PuzzleReport> {
        self.reports.iter().filter(|r| !r.is_valid())
    }

    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }
}

/// Check one definition against the graph.
pub fn validate_puzzle(graph: &EtymologyGraph, definition: &PuzzleDefinition) -> PuzzleReport {
    let mut violations = Vec::new();
    let path = &definition.path_ids;

    if path.is_empty() {
        violations.push(Violation::EmptyPath);
    }

    let missing: Vec<String> = path
        .iter()
        .filter(|id| !graph.contains(id))
        .cloned()
        .collect();
    if !missing.is_empty() {
        violations.push(Violation::MissingNodes { ids: missing });
    }

    for pair in path.windows(2) {
        let (source, target) = (&pair[0], &pair[1]);
        // Links touching a missing node are already covered above.
        if !graph.contains(source) || !graph.contains(target) {
            continue;
        }
        if !graph.are_adjacent(source, target) {
            violations.push(Violation::BrokenLink {
                source: source.clone(),
                target: target.clone(),
            });
        }
    }

    PuzzleReport {
        puzzle_id: definition.id.clone(),
        name: definition.name.clone(),
        violations,
    }
}

/// Check every definition, in order.
pub fn validate_puzzles(
    graph: &EtymologyGraph,
    definitions: &[PuzzleDefinition],
) -> ValidationSummary {
    ValidationSummary {
        reports: definitions
            .iter()
            .map(|definition| validate_puzzle(graph, definition))
            .collect(),
    }
}
