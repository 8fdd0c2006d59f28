//! Connectivity decomposition of graphs.
//!
//! Every analysis in this crate is driven by the same depth-first
//! walk ([`dfs::Traversal`]), which records discovery times, low-link
//! values and the finish order of each vertex. On top of it:
//!
//! - [`cut`] finds cut vertices and bridges of undirected graphs,
//! - [`blocks`] partitions undirected graphs into 2-edge-connected
//!   blocks and classical biconnected components,
//! - [`scc`] decomposes directed graphs into strongly connected
//!   components.
//!
//! The walk never recurses: its depth is only bounded by the heap.
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate thiserror;
#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod blocks;
pub mod config;
pub mod cut;
pub mod dfs;
pub mod graph;
pub mod scc;
mod vector2;

#[cfg(test)]
mod tests;

pub use crate::blocks::{
    augmentation_count, biconnected_components, bridge_tree, two_edge_components, EdgePartition,
};
pub use crate::config::{Backing, Config, ConfigError, SccAlgorithm};
pub use crate::cut::{articulation, bridges, cut_vertices, Articulation};
pub use crate::dfs::Traversal;
pub use crate::graph::{
    Adjacent, AnyGraph, EdgeId, Graph, GraphError, ListGraph, MatrixGraph, Orientation, Snapshot,
    VertexId,
};
pub use crate::scc::{
    condensation, kosaraju, strongly_connected_components, tarjan, Partition,
};

// Making hashmaps deterministic (for testing)
#[cfg(feature = "deterministic_hash")]
pub type Hasher = std::hash::BuildHasherDefault<twox_hash::XxHash64>;
#[cfg(not(feature = "deterministic_hash"))]
pub type Hasher = std::collections::hash_map::RandomState;

pub type HashMap<K, V> = std::collections::HashMap<K, V, Hasher>;
pub type HashSet<K> = std::collections::HashSet<K, Hasher>;
