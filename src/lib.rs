//! Single-source shortest paths on weighted directed graphs.
//!
//! This library implements label-setting Dijkstra with a lazy-deletion
//! frontier: every distance improvement pushes a fresh heap entry, and
//! entries made stale by a later improvement are discarded on extraction.
//! Edge weights must be non-negative reals; node identifiers are any
//! hashable type chosen by the caller (strings, integers, interned symbols).
//!
//! The result of a run is a [`ShortestPathTree`]: the final distance map
//! plus the predecessor map rooted at the source, from which the concrete
//! shortest path to any reachable node can be reconstructed in time linear
//! in its length.

pub mod algorithm;
pub mod frontier;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, Path, ShortestPathAlgorithm, ShortestPathTree};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use graph::{Graph, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("source node not found in graph")]
    SourceNotFound,

    #[error("edge from {from} references {to}, which is not a node of the graph")]
    DanglingEdge { from: String, to: String },

    #[error("predecessor map is corrupted at node {0}")]
    CorruptTree(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
