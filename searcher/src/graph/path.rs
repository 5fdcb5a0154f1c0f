use std::collections::HashMap;

use super::board::Utility;
use crate::errors::Result;
use crate::traits::{add, Label, Weight};

/// A path found by one of the graph searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<N, W> {
    /// Nodes from the origin to the goal, inclusive.
    pub path: Vec<N>,

    /// Accumulated weight, or the hop count for searches which ignore weights.
    pub cost: W,

    /// Nodes in the order the search expanded them.
    pub explored: Vec<N>,
}

impl<N, W> Route<N, W>
where
    N: Label,
    W: Weight,
{
    /// The zero-length route which starts and ends at `origin`.
    pub(crate) fn stay(origin: N) -> Self {
        Self {
            path: vec![origin],
            cost: W::zero(),
            explored: Vec::new(),
        }
    }

    pub fn destination(&self) -> Option<&N> {
        self.path.last()
    }

    /// Number of roads travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Continue this route along `leg`, which must start where this one ends.
    pub(crate) fn extend(&mut self, leg: Route<N, W>) -> Result<()> {
        self.cost = add(self.cost, leg.cost)?;
        self.path.extend(leg.path.into_iter().skip(1));
        self.explored.extend(leg.explored);
        Ok(())
    }
}

/// Value and principal line of a minimax evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<N> {
    /// Nodes from the evaluated node to the chosen terminal. Empty when no
    /// line was found.
    pub path: Vec<N>,
    pub value: Utility,
}

impl<N> Verdict<N> {
    pub(crate) fn blocked() -> Self {
        Verdict {
            path: Vec::new(),
            value: Utility::NegInfinity,
        }
    }
}

/// Result of dispatching a strategy through [crate::Engine].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<N, W> {
    /// A path search reached its goal(s).
    Route(Route<N, W>),

    /// A minimax evaluation.
    Verdict(Verdict<N>),

    /// The goal is not reachable from the start.
    NotFound,
}

impl<N, W> Outcome<N, W> {
    pub fn is_found(&self) -> bool {
        !matches!(self, Outcome::NotFound)
    }

    pub fn route(&self) -> Option<&Route<N, W>> {
        match self {
            Outcome::Route(route) => Some(route),
            _ => None,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict<N>> {
        match self {
            Outcome::Verdict(verdict) => Some(verdict),
            _ => None,
        }
    }
}

impl<N, W> From<Option<Route<N, W>>> for Outcome<N, W> {
    fn from(route: Option<Route<N, W>>) -> Self {
        route.map(Outcome::Route).unwrap_or(Outcome::NotFound)
    }
}

/// Predecessor map used to rebuild a path once the goal is reached.
///
/// A node only ever points at a node reached before it, so
/// following the map backwards from any node ends at the origin.
#[derive(Debug)]
pub(crate) struct Predecessors<N> {
    came_from: HashMap<N, N>,
}

impl<N> Default for Predecessors<N> {
    fn default() -> Self {
        Predecessors {
            came_from: HashMap::new(),
        }
    }
}

impl<N> Predecessors<N>
where
    N: Label,
{
    pub(crate) fn insert(&mut self, node: N, predecessor: N) {
        self.came_from.insert(node, predecessor);
    }

    /// Walk back from `goal` and return the path in travel order.
    pub(crate) fn path_to(&self, goal: &N) -> Vec<N> {
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(previous) = self.came_from.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        path
    }
}
