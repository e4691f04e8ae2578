use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists.
///
/// Every node that appears as an edge endpoint is a key of the map, so a
/// graph built through [`MutableGraph`] never holds a dangling edge
/// reference. Isolated nodes are added with [`MutableGraph::add_node`].
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each node: node -> [(neighbor, weight)]
    outgoing: HashMap<N, Vec<(N, W)>>,

    /// Number of edges in the graph
    edge_count: usize,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with capacity for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            outgoing: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.outgoing.keys())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (N, W)> + '_> {
        if let Some(edges) = self.outgoing.get(node) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.outgoing.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.outgoing.get(from) {
            edges.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        match self.outgoing.entry(node) {
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(Vec::new());
                true
            }
            std::collections::hash_map::Entry::Occupied(_) => false,
        }
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight < W::zero() || self.has_edge(&from, &to) {
            return false;
        }

        self.outgoing.entry(to.clone()).or_default();
        self.outgoing
            .entry(from)
            .or_default()
            .push((to, weight));
        self.edge_count += 1;
        true
    }
}
