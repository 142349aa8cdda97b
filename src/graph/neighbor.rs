//! Adjacency indexing.

use std::collections::BTreeMap;

use log::debug;

use crate::graph::builder::Edge;
use crate::graph::node::{Neighbor, Node};

/// Mirror every edge onto both of its endpoints.
///
/// For `source -> target` the source node gains a forward neighbor and the
/// target node a reverse neighbor, in edge order. Edges with an endpoint
/// missing from `nodes` are skipped; the number skipped is returned.
pub fn index_neighbors(nodes: &mut BTreeMap<String, Node>, edges: &[Edge]) -> usize {
    let mut skipped = 0;

    for edge in edges {
        if !nodes.contains_key(&edge.source) || !nodes.contains_key(&edge.target) {
            debug!("Skipping dangling edge {} -> {}", edge.source, edge.target);
            skipped += 1;
            continue;
        }

        let relation = edge.relation.as_str();
        if let Some(source) = nodes.get_mut(&edge.source) {
            let neighbor = Neighbor::forward(edge.target.as_str(), relation);
            source.neighbors.push(neighbor);
        }
        if let Some(target) = nodes.get_mut(&edge.target) {
            let neighbor = Neighbor::reverse(edge.source.as_str(), relation);
            target.neighbors.push(neighbor);
        }
    }

    skipped
}
