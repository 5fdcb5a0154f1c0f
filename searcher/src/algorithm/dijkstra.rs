//! Cost-ordered searches: uniform-cost search and its naive sibling.

use std::collections::BinaryHeap;
use std::default::Default;

use log::debug;

use super::cache::{DequeueCache, EnqueueCache};
use super::score::Ranked;
use super::{search, Candidate, SearchOptions, SearchQueue};
use crate::errors::Result;
use crate::graph::{Graph, Route};
use crate::traits::{Label, Weight};

/// A priority queue to always search the next cheapest path
/// by accumulated weight.
#[derive(Debug)]
pub(crate) struct CostQueue<N, W> {
    queue: BinaryHeap<Ranked<N, W, Option<N>>>,
    sequence: usize,
}

impl<N, W> Default for CostQueue<N, W>
where
    N: Ord,
    W: Ord,
{
    fn default() -> Self {
        CostQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<N, W> SearchQueue<N, W> for CostQueue<N, W>
where
    N: Ord,
    W: Ord,
{
    const WEIGHTED: bool = true;

    fn pop(&mut self) -> Option<Candidate<N, W>> {
        self.queue.pop().map(|r| Candidate {
            node: r.node,
            parent: r.item,
            cost: r.priority,
        })
    }

    fn push(&mut self, item: Candidate<N, W>) {
        self.sequence += 1;
        self.queue
            .push(Ranked::new(item.cost, item.node, self.sequence, item.parent));
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Uniform-cost search (Dijkstra's algorithm with lazy deletion).
///
/// A node counts as visited when it is popped, so it may be queued several
/// times at different costs; the first pop finalises it at its minimum
/// cost. Ties between equal costs go to the smaller label. Zero-weight
/// roads are fine since costs never decrease along a path.
pub fn ucs<N, W>(
    graph: &Graph<N, W>,
    origin: &N,
    goal: &N,
    options: &SearchOptions,
) -> Result<Option<Route<N, W>>>
where
    N: Label,
    W: Weight,
{
    debug!("ucs from {:?} to {:?}", origin, goal);
    search::<N, W, CostQueue<N, W>, DequeueCache<N>>(graph, origin, goal, options)
}

/// Cost-ordered search which marks nodes visited when they are queued.
///
/// This is a deliberately naive baseline: the first road to discover a
/// node fixes its cost, so a cheaper path found later is ignored and the
/// result need not be optimal. Use [ucs] for minimum-cost routes.
pub fn weighted_bfs<N, W>(
    graph: &Graph<N, W>,
    origin: &N,
    goal: &N,
    options: &SearchOptions,
) -> Result<Option<Route<N, W>>>
where
    N: Label,
    W: Weight,
{
    debug!("weighted bfs from {:?} to {:?}", origin, goal);
    search::<N, W, CostQueue<N, W>, EnqueueCache<N>>(graph, origin, goal, options)
}
