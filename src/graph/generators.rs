use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a sparse random directed graph with `node_count` nodes and
/// approximately `edge_factor * node_count` edges, weights drawn uniformly
/// from `1.0..100.0`. Node identifiers are `0..node_count`.
pub fn random_digraph(node_count: usize, edge_factor: f64) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(node_count);
    let mut rng = rand::thread_rng();

    for v in 0..node_count {
        graph.add_node(v);
    }

    let num_edges = (edge_factor * node_count as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        // Avoid self-loops; duplicate edges are rejected by the graph
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}
