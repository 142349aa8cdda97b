//! Node and neighbor records of the etymology graph.

use serde::{Deserialize, Serialize};

/// Relation label for every edge produced from an etymology chain.
pub const DERIVED_FROM: &str = "derived_from";

/// Traversal direction of a neighbor relative to the node holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// This node derives from the neighbor.
    Forward,
    /// The neighbor derives from this node.
    Reverse,
}

/// An adjacency record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: String,
    pub relation: String,
    pub direction: Direction,
}

impl Neighbor {
    pub fn forward<S: Into<String>, R: Into<String>>(id: S, relation: R) -> Self {
        Neighbor {
            id: id.into(),
            relation: relation.into(),
            direction: Direction::Forward,
        }
    }

    pub fn reverse<S: Into<String>, R: Into<String>>(id: S, relation: R) -> Self {
        Neighbor {
            id: id.into(),
            relation: relation.into(),
            direction: Direction::Reverse,
        }
    }
}

/// A lexical form in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Canonical id, unique within a graph.
    pub id: String,

    /// Display form.
    pub word: String,

    /// Resolved language name.
    pub lang: String,

    pub definition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,

    #[serde(default)]
    pub neighbors: Vec<Neighbor>,
}

impl Node {
    pub fn new<I, W, L, D>(id: I, word: W, lang: L, definition: D) -> Self
    where
        I: Into<String>,
        W: Into<String>,
        L: Into<String>,
        D: Into<String>,
    {
        Node {
            id: id.into(),
            word: word.into(),
            lang: lang.into(),
            definition: definition.into(),
            pos: None,
            neighbors: Vec::new(),
        }
    }

    pub fn with_pos<S: Into<String>>(mut self, pos: S) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Find the neighbor entry pointing at `id`, in any direction.
    pub fn neighbor(&self, id: &str) -> Option<&Neighbor> {
        self.neighbors.iter().find(|n| n.id == id)
    }

    pub fn is_adjacent_to(&self, id: &str) -> bool {
        self.neighbor(id).is_some()
    }

    pub fn neighbors_in(&self, direction: Direction) -> impl Iterator<Item = &Neighbor> {
        self.neighbors
            .iter()
            .filter(move |n| n.direction == direction)
    }
}
