use std::cmp::{Ord, Ordering, PartialOrd};

/// Priority queue entry with an explicit tie-break.
///
/// Entries are ordered by priority, then node label, then insertion
/// sequence, and reversed so that `BinaryHeap` pops the smallest. The
/// payload never takes part in the comparison.
#[derive(Debug)]
pub(crate) struct Ranked<N, W, T> {
    pub(crate) priority: W,
    pub(crate) node: N,
    sequence: usize,
    pub(crate) item: T,
}

impl<N, W, T> Ranked<N, W, T> {
    pub(crate) fn new(priority: W, node: N, sequence: usize, item: T) -> Self {
        Self {
            priority,
            node,
            sequence,
            item,
        }
    }
}

impl<N, W, T> Ord for Ranked<N, W, T>
where
    N: Ord,
    W: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<N, W, T> PartialOrd for Ranked<N, W, T>
where
    N: Ord,
    W: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W, T> PartialEq for Ranked<N, W, T>
where
    N: Ord,
    W: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W, T> Eq for Ranked<N, W, T>
where
    N: Ord,
    W: Ord,
{
}
