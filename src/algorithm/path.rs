use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::ShortestPathTree;
use crate::{Error, Result};

/// A concrete shortest path: the nodes visited in source-to-target order
/// and the total edge weight along them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, W> {
    /// Nodes on the path, source first, target last
    pub nodes: Vec<N>,

    /// Sum of edge weights along the path
    pub total: W,
}

impl<N, W> ShortestPathTree<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Reconstructs the shortest path from the source to `target` by
    /// walking parent links backward until the no-parent sentinel.
    ///
    /// An unreachable target is an expected outcome, reported as
    /// `Ok(None)`. A predecessor chain that revisits a node or runs past
    /// the settled count cannot have been produced by a correct
    /// computation and fails with [`Error::CorruptTree`].
    pub fn path_to(&self, target: &N) -> Result<Option<Path<N, W>>> {
        let total = match self.distances.get(target) {
            None => return Ok(None),
            Some(&distance) => distance,
        };

        let mut nodes = Vec::new();
        let mut visited = HashSet::new();
        let mut current = target.clone();

        loop {
            if !visited.insert(current.clone()) || nodes.len() >= self.settled_count() {
                return Err(Error::CorruptTree(format!("{current:?}")));
            }
            nodes.push(current.clone());

            match self.predecessors.get(&current) {
                Some(Some(parent)) => current = parent.clone(),
                // Reached the source
                Some(None) => break,
                // Settled node missing from the predecessor map
                None => return Err(Error::CorruptTree(format!("{current:?}"))),
            }
        }

        nodes.reverse();

        Ok(Some(Path { nodes, total }))
    }
}
