//! Etymology graph construction and read access.
//!
//! [`builder::GraphBuilder`] turns dataset entries into deduplicated nodes and
//! edges, [`neighbor::index_neighbors`] mirrors every edge onto both
//! endpoints, and [`store::EtymologyGraph`] is the immutable result that
//! consumers query.

pub mod builder;
pub mod neighbor;
pub mod node;
pub mod store;

pub use builder::{BuildOutput, BuildStats, Edge, GraphBuilder};
pub use neighbor::index_neighbors;
pub use node::{DERIVED_FROM, Direction, Neighbor, Node};
pub use store::EtymologyGraph;
