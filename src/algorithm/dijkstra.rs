use log::debug;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion frontier.
///
/// Nodes are discovered lazily: only the source starts in the frontier, and
/// a node enters it the first time an edge improves its tentative distance.
/// An undiscovered node is equivalent to one at tentative infinity.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: N) -> Result<ShortestPathTree<N, W>> {
        if !graph.contains_node(&source) {
            return Err(Error::SourceNotFound);
        }

        // Tentative distances double as the final distance map: an entry is
        // final once its node has been popped at that key.
        let mut distances: HashMap<N, W> = HashMap::new();
        let mut predecessors: HashMap<N, Option<N>> = HashMap::new();

        distances.insert(source.clone(), W::zero());
        predecessors.insert(source.clone(), None);

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());

        let mut settled = 0usize;

        while let Some((u, dist_u)) = frontier.pop() {
            // Stale entry: a later improvement already beat this key
            if let Some(&best) = distances.get(&u) {
                if best < dist_u {
                    continue;
                }
            }
            settled += 1;

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                if !graph.contains_node(&v) {
                    return Err(Error::DanglingEdge {
                        from: format!("{u:?}"),
                        to: format!("{v:?}"),
                    });
                }

                let candidate = dist_u + weight;

                let improved = match distances.get(&v) {
                    None => true,
                    Some(&best) => candidate < best,
                };

                if improved {
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    frontier.push(v, candidate);
                }
            }
        }

        debug!("settled {} of {} nodes from {:?}", settled, graph.node_count(), source);

        Ok(ShortestPathTree {
            distances,
            predecessors,
            source,
        })
    }
}
