use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait representing a weighted directed graph.
///
/// `N` is the node identifier type, chosen by the caller; `W` is the edge
/// weight type, a non-negative real. Implementations are read-only from the
/// algorithm's point of view and are borrowed immutably for the duration of
/// a computation.
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the node identifiers
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing (neighbor, weight) edges of a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for building a graph
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node to the graph; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge with the given weight, registering both
    /// endpoints as nodes. Returns false (and adds nothing) if the weight
    /// is negative or the edge already exists.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;
}
