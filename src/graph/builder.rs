//! Graph construction from dataset entries.
//!
//! # Examples
//!
//! ```
//! use etymon::dataset::WordEntry;
//! use etymon::graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::default();
//! builder.add_entry(&WordEntry::new("mouse (n.)_E").with_link("mouse (n.)_E", "mus_OE"));
//! let output = builder.finish();
//!
//! assert_eq!(output.graph.len(), 2);
//! assert_eq!(output.edges.len(), 1);
//! assert!(output.graph.check_connection("mouse (n.)_E", "mus_OE").is_some());
//! ```

use std::collections::BTreeMap;

use ahash::AHashSet;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dataset::WordEntry;
use crate::graph::neighbor::index_neighbors;
use crate::graph::node::{DERIVED_FROM, Node};
use crate::graph::store::EtymologyGraph;
use crate::lexicon::{canonicalize_id, language_name_for_id, strip_lang_code};

/// Definition text for nodes whose definition the dataset does not supply.
pub const FALLBACK_DEFINITION: &str = "Definition not provided (EtymoLink dataset).";

/// A directed derivation edge: `source` derives from `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub relation: String,
}

/// Counters collected while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub entries: usize,
    pub links: usize,
    pub duplicate_links: usize,
    pub nodes: usize,
    pub edges: usize,
    pub dangling_edges: usize,
}

/// Result of a finished build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub graph: EtymologyGraph,
    pub edges: Vec<Edge>,
    pub stats: BuildStats,
}

/// Accumulates nodes and edges from word entries.
///
/// Each builder starts empty; a preparation run uses exactly one.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    fallback_definition: String,
    nodes: BTreeMap<String, Node>,
    edges: Vec<Edge>,
    edge_keys: AHashSet<(String, String)>,
    stats: BuildStats,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(FALLBACK_DEFINITION)
    }
}

impl GraphBuilder {
    pub fn new<S: Into<String>>(fallback_definition: S) -> Self {
        GraphBuilder {
            fallback_definition: fallback_definition.into(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            edge_keys: AHashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Add one entry: its own node, then every link of its chain.
    pub fn add_entry(&mut self, entry: &WordEntry) {
        self.stats.entries += 1;

        let word_id = canonicalize_id(&entry.word);
        self.ensure_node(&word_id, entry.root_hint());

        for link in &entry.etymology_chain {
            self.stats.links += 1;

            let source_id = canonicalize_id(&link.source);
            let target_id = canonicalize_id(&link.target);

            self.ensure_node(&source_id, None);
            self.ensure_node(&target_id, None);

            if !self.add_edge(&source_id, &target_id, DERIVED_FROM) {
                self.stats.duplicate_links += 1;
            }
        }
    }

    pub fn add_entries<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = &'a WordEntry>,
    {
        for entry in entries {
            self.add_entry(entry);
        }
    }

    /// Create the node for `id` unless it already exists.
    ///
    /// The first call for an id wins; later root hints are ignored.
    pub fn ensure_node(&mut self, id: &str, root_hint: Option<&str>) {
        if self.nodes.contains_key(id) {
            return;
        }

        let word = root_hint
            .filter(|root| !root.is_empty())
            .unwrap_or_else(|| strip_lang_code(id));
        let lang = language_name_for_id(id);
        let node = Node::new(id, word, lang, self.fallback_definition.as_str());
        self.nodes.insert(id.to_string(), node);
    }

    /// Register the edge `source -> target`. Returns `false` if the ordered
    /// pair was already present.
    pub fn add_edge(&mut self, source: &str, target: &str, relation: &str) -> bool {
        let key = (source.to_string(), target.to_string());
        if self.edge_keys.contains(&key) {
            debug!("Dropping duplicate link {source} -> {target}");
            return false;
        }

        self.edges.push(Edge {
            source: key.0.clone(),
            target: key.1.clone(),
            relation: relation.to_string(),
        });
        self.edge_keys.insert(key);
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Index neighbors and freeze the graph.
    pub fn finish(self) -> BuildOutput {
        let GraphBuilder {
            mut nodes,
            edges,
            mut stats,
            ..
        } = self;

        stats.dangling_edges = index_neighbors(&mut nodes, &edges);
        stats.nodes = nodes.len();
        stats.edges = edges.len();

        info!(
            "Built {} nodes and {} edges from {} entries ({} duplicate links dropped)",
            stats.nodes, stats.edges, stats.entries, stats.duplicate_links
        );

        BuildOutput {
            graph: EtymologyGraph::from_nodes(nodes),
            edges,
            stats,
        }
    }
}
