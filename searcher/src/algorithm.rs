//! Provides the building blocks for search algorithms

use std::default::Default;

use itertools::Either;
use log::{debug, trace};

use self::cache::Cache;
use self::minimax::Veto;
use crate::errors::{Result, SearchError};
use crate::graph::{Graph, Route};
use crate::traits::{add, hops, Label, Weight};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;
pub(crate) mod dijkstra;
pub(crate) mod minimax;
pub(crate) mod multigoal;
pub(crate) mod score;

/// Progress is logged every this many expansions.
const PROGRESS_INTERVAL: usize = 10_000;

/// Signature shared by the single-pair graph searches, so that
/// planners can chain any of them.
pub type Pathfinder<N, W> =
    fn(&Graph<N, W>, &N, &N, &SearchOptions) -> Result<Option<Route<N, W>>>;

/// Settings which apply to every search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Fail with [SearchError::StepLimitExhausted] after this many expansions.
    pub step_limit: Option<usize>,

    /// Queue each node's roads in reverse order. On a depth-first stack this
    /// expands neighbors in the order the graph lists them.
    pub reverse_neighbors: bool,

    /// How minimax treats adversary edges.
    pub veto: Veto,
}

impl SearchOptions {
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_reverse_neighbors(mut self, reverse: bool) -> Self {
        self.reverse_neighbors = reverse;
        self
    }

    pub fn with_veto(mut self, veto: Veto) -> Self {
        self.veto = veto;
        self
    }
}

/// An entry waiting in a frontier.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<N, W> {
    pub(crate) node: N,
    pub(crate) parent: Option<N>,
    pub(crate) cost: W,
}

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub(crate) trait SearchQueue<N, W>: Default {
    /// Whether routes found through this queue report accumulated weight
    /// (true) or hop count (false).
    const WEIGHTED: bool;

    fn pop(&mut self) -> Option<Candidate<N, W>>;

    fn push(&mut self, item: Candidate<N, W>);

    fn len(&self) -> usize;
}

#[derive(Debug)]
pub(crate) struct StepLimit {
    current: usize,
    maximum: Option<usize>,
}

impl StepLimit {
    pub(crate) fn new(maximum: Option<usize>) -> Self {
        Self {
            current: 0,
            maximum,
        }
    }

    /// Count one expansion, failing once the limit is passed.
    pub(crate) fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current % PROGRESS_INTERVAL == 0 {
            debug!("{} nodes expanded", self.current);
        }

        match self.maximum {
            Some(maximum) if self.current > maximum => {
                Err(SearchError::StepLimitExhausted(maximum))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn steps(&self) -> usize {
        self.current
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to provide
/// a single foundation for the graph searches. The queue sets the
/// frontier discipline and the cache decides when a node counts as
/// visited.
#[derive(Debug)]
pub(crate) struct SearchAlgorithm<'g, N, W, Q, C>
where
    Q: SearchQueue<N, W>,
    C: Cache<N>,
{
    graph: &'g Graph<N, W>,
    queue: Q,
    cache: C,
    counter: StepLimit,
    explored: Vec<N>,
    reverse: bool,
}

impl<'g, N, W, Q, C> SearchAlgorithm<'g, N, W, Q, C>
where
    N: Label,
    W: Weight,
    Q: SearchQueue<N, W>,
    C: Cache<N>,
{
    pub(crate) fn new(graph: &'g Graph<N, W>, origin: &N, options: &SearchOptions) -> Self {
        let mut sa = SearchAlgorithm {
            graph,
            queue: Q::default(),
            cache: C::default(),
            counter: StepLimit::new(options.step_limit),
            explored: Vec::new(),
            reverse: options.reverse_neighbors,
        };
        sa.cache.seed(origin);
        sa.queue.push(Candidate {
            node: origin.clone(),
            parent: None,
            cost: W::zero(),
        });
        sa
    }

    fn expand(&mut self, candidate: &Candidate<N, W>) -> Result<()> {
        let graph = self.graph;
        let roads = graph.neighbors(&candidate.node);
        let ordered = if self.reverse {
            Either::Left(roads.iter().rev())
        } else {
            Either::Right(roads.iter())
        };

        for (next, weight) in ordered {
            if self.cache.admit(next, &candidate.node) {
                let cost = if Q::WEIGHTED {
                    add(candidate.cost, *weight)?
                } else {
                    candidate.cost
                };
                self.queue.push(Candidate {
                    node: next.clone(),
                    parent: Some(candidate.node.clone()),
                    cost,
                });
            }
        }
        Ok(())
    }

    /// Run the search until `goal` leaves the frontier, or the frontier is exhausted.
    pub(crate) fn run(mut self, goal: &N) -> Result<Option<Route<N, W>>> {
        while let Some(candidate) = self.queue.pop() {
            if !self.cache.settle(&candidate.node, candidate.parent.as_ref()) {
                continue;
            }

            self.counter.increment()?;
            trace!(
                "expand {:?} at {:?} (frontier {})",
                candidate.node,
                candidate.cost,
                self.queue.len()
            );
            self.explored.push(candidate.node.clone());

            if &candidate.node == goal {
                let path = self.cache.path_to(goal);
                let cost = if Q::WEIGHTED {
                    candidate.cost
                } else {
                    hops(path.len() - 1)?
                };
                debug!(
                    "reached {:?} after {} expansions, cost {:?}",
                    goal,
                    self.counter.steps(),
                    cost
                );
                return Ok(Some(Route {
                    path,
                    cost,
                    explored: self.explored,
                }));
            }

            self.expand(&candidate)?;
        }

        debug!(
            "frontier exhausted after {} expansions without reaching {:?}",
            self.counter.steps(),
            goal
        );
        Ok(None)
    }
}

/// Entry point shared by the searches built on [SearchAlgorithm].
pub(crate) fn search<N, W, Q, C>(
    graph: &Graph<N, W>,
    origin: &N,
    goal: &N,
    options: &SearchOptions,
) -> Result<Option<Route<N, W>>>
where
    N: Label,
    W: Weight,
    Q: SearchQueue<N, W>,
    C: Cache<N>,
{
    SearchAlgorithm::<N, W, Q, C>::new(graph, origin, options).run(goal)
}
