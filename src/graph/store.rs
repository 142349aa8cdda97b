//! The prepared, read-only etymology graph.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EtymonError, Result};
use crate::graph::node::{Neighbor, Node};

/// Mapping from canonical id to node, immutable once built.
///
/// Serializes as a JSON object keyed by id. Share between readers with
/// `Arc<EtymologyGraph>`; nothing mutates it after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EtymologyGraph {
    nodes: BTreeMap<String, Node>,
}

impl EtymologyGraph {
    pub fn from_nodes(nodes: BTreeMap<String, Node>) -> Self {
        EtymologyGraph { nodes }
    }

    /// Load a graph file written by the preparation pipeline.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let what = format!("graph data at {}", path.display());
            return Err(EtymonError::not_found(what));
        }

        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// The neighbor entry on `source_id` that points at `target_id`, if any.
    ///
    /// Edges are mirrored onto both endpoints, so this finds a link in either
    /// derivation direction.
    pub fn check_connection(&self, source_id: &str, target_id: &str) -> Option<&Neighbor> {
        self.get_node(source_id)?.neighbor(target_id)
    }

    /// Whether either endpoint lists the other as a neighbor.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.check_connection(a, b).is_some() || self.check_connection(b, a).is_some()
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of neighbor entries across all nodes.
    pub fn neighbor_count(&self) -> usize {
        self.nodes.values().map(|n| n.neighbors.len()).sum()
    }
}
