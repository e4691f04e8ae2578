use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path computation: the final distances from the
/// source and the shortest-path tree encoded as a predecessor map.
///
/// A node is reachable exactly when it has an entry in `distances`;
/// unreachable nodes are absent from both maps. The source's predecessor
/// entry is `None`, the no-parent sentinel.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Final distance from the source for every settled node
    pub distances: HashMap<N, W>,

    /// Parent on the shortest path for every settled node
    pub predecessors: HashMap<N, Option<N>>,

    /// The source node the computation ran from
    pub source: N,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Final distance from the source to `node`, or `None` if unreachable
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Parent of `node` on its shortest path; `None` for the source and
    /// for unreachable nodes
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(|parent| parent.as_ref())
    }

    /// Returns true if `node` was settled by the computation
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of nodes settled by the computation
    pub fn settled_count(&self) -> usize {
        self.distances.len()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all reachable nodes
    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
