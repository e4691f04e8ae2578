use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue of (node, tentative distance) candidates with lazy
/// deletion: improvements push fresh entries rather than rekeying existing
/// ones, and the caller discards stale entries on extraction. This avoids
/// needing a decrease-key operation on the underlying heap.
#[derive(Debug)]
pub struct Frontier<N, P>
where
    N: Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<FrontierEntry<N, P>>,
}

impl<N, P> Frontier<N, P>
where
    N: Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate with the given priority
    pub fn push(&mut self, node: N, priority: P) {
        self.heap.push(FrontierEntry { priority, node });
    }

    /// Removes and returns the candidate with the smallest priority
    pub fn pop(&mut self) -> Option<(N, P)> {
        self.heap.pop().map(|entry| (entry.node, entry.priority))
    }
}

impl<N, P> Default for Frontier<N, P>
where
    N: Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Heap entry ordered by priority alone, inverted so the std max-heap pops
/// the smallest priority first.
#[derive(Debug)]
struct FrontierEntry<N, P> {
    priority: P,
    node: N,
}

impl<N, P: Ord> Ord for FrontierEntry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

impl<N, P: Ord> PartialOrd for FrontierEntry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, P: PartialEq> PartialEq for FrontierEntry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<N, P: PartialEq> Eq for FrontierEntry<N, P> {}
