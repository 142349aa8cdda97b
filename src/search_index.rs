//! Flattened search projection of the graph.
//!
//! Every node becomes one [`SearchIndexItem`] whose `searchText` is the
//! normalized `"{word} {lang}"`. [`SearchIndex::lookup`] applies the same
//! normalization to queries, so lookups are diacritic- and case-insensitive.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{SearchNormalizer, standard_normalizer};
use crate::error::{EtymonError, Result};
use crate::graph::{EtymologyGraph, Node};

/// A read-only projection of a node for autocomplete and fuzzy lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexItem {
    pub id: String,
    pub label: String,
    pub lang: String,
    pub definition: String,
    pub search_text: String,
}

impl SearchIndexItem {
    pub fn from_node(node: &Node, normalizer: &SearchNormalizer) -> Self {
        SearchIndexItem {
            id: node.id.clone(),
            label: node.word.clone(),
            lang: node.lang.clone(),
            definition: node.definition.clone(),
            search_text: normalizer.normalize(&format!("{} {}", node.word, node.lang)),
        }
    }
}

/// Build the search projection of every node, in graph order.
pub fn build_search_index(graph: &EtymologyGraph) -> Vec<SearchIndexItem> {
    build_search_index_with(graph, &standard_normalizer())
}

pub fn build_search_index_with(
    graph: &EtymologyGraph,
    normalizer: &SearchNormalizer,
) -> Vec<SearchIndexItem> {
    graph
        .nodes()
        .map(|node| SearchIndexItem::from_node(node, normalizer))
        .collect()
}

/// In-memory search index with substring lookup.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Vec<SearchIndexItem>,
    normalizer: Arc<SearchNormalizer>,
}

impl SearchIndex {
    /// An index queried through the standard normalizer.
    pub fn new(items: Vec<SearchIndexItem>) -> Self {
        Self::with_normalizer(items, standard_normalizer())
    }

    /// An index queried through `normalizer`, which must be the one the
    /// items' search text was built with.
    pub fn with_normalizer(
        items: Vec<SearchIndexItem>,
        normalizer: Arc<SearchNormalizer>,
    ) -> Self {
        SearchIndex { items, normalizer }
    }

    pub fn from_graph(graph: &EtymologyGraph) -> Self {
        Self::new(build_search_index(graph))
    }

    /// Load a search index file written by the preparation pipeline.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let what = format!("search index at {}", path.display());
            return Err(EtymonError::not_found(what));
        }

        let reader = BufReader::new(File::open(path)?);
        let items: Vec<SearchIndexItem> = serde_json::from_reader(reader)?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[SearchIndexItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose search text contains the normalized query.
    ///
    /// Prefix matches come first, then the remaining matches; each group
    /// keeps index order. An empty query matches nothing.
    pub fn lookup(&self, query: &str, limit: usize) -> Vec<&SearchIndexItem> {
        let needle = self.normalizer.normalize(query.trim());
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let (mut prefix, contains): (Vec<_>, Vec<_>) = self
            .items
            .iter()
            .filter(|item| item.search_text.contains(&needle))
            .partition(|item| item.search_text.starts_with(&needle));

        prefix.extend(contains);
        prefix.truncate(limit);
        prefix
    }
}
