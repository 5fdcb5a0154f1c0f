//! Visited-set disciplines shared by the frontier searches.

use std::collections::HashSet;
use std::default::Default;

use crate::graph::Predecessors;
use crate::traits::Label;

/// Defines when a node counts as visited.
///
/// Every implementation also records predecessors, so that the path to
/// a settled goal can be rebuilt without storing paths in the frontier.
pub(crate) trait Cache<N>: Default {
    /// Called once with the origin before the search starts.
    fn seed(&mut self, origin: &N);

    /// Called when `node` is discovered from `parent`. Returning
    /// false keeps it out of the frontier.
    fn admit(&mut self, node: &N, parent: &N) -> bool;

    /// Called when `node` leaves the frontier. Returning false
    /// discards the entry without expanding it.
    fn settle(&mut self, node: &N, parent: Option<&N>) -> bool;

    fn path_to(&self, goal: &N) -> Vec<N>;
}

/// Marks nodes visited as they are pushed.
///
/// Each node enters the frontier at most once, so the first discovery
/// of a node fixes its path.
#[derive(Debug)]
pub(crate) struct EnqueueCache<N> {
    visited: HashSet<N>,
    predecessors: Predecessors<N>,
}

impl<N> Default for EnqueueCache<N> {
    fn default() -> Self {
        EnqueueCache {
            visited: HashSet::new(),
            predecessors: Predecessors::default(),
        }
    }
}

impl<N> Cache<N> for EnqueueCache<N>
where
    N: Label,
{
    fn seed(&mut self, origin: &N) {
        self.visited.insert(origin.clone());
    }

    fn admit(&mut self, node: &N, parent: &N) -> bool {
        if self.visited.insert(node.clone()) {
            self.predecessors.insert(node.clone(), parent.clone());
            true
        } else {
            false
        }
    }

    fn settle(&mut self, _node: &N, _parent: Option<&N>) -> bool {
        true
    }

    fn path_to(&self, goal: &N) -> Vec<N> {
        self.predecessors.path_to(goal)
    }
}

/// Marks nodes visited as they are popped.
///
/// A node may sit in the frontier several times at different costs;
/// only the first entry popped is expanded (lazy deletion).
#[derive(Debug)]
pub(crate) struct DequeueCache<N> {
    visited: HashSet<N>,
    predecessors: Predecessors<N>,
}

impl<N> Default for DequeueCache<N> {
    fn default() -> Self {
        DequeueCache {
            visited: HashSet::new(),
            predecessors: Predecessors::default(),
        }
    }
}

impl<N> Cache<N> for DequeueCache<N>
where
    N: Label,
{
    fn seed(&mut self, _origin: &N) {}

    fn admit(&mut self, node: &N, _parent: &N) -> bool {
        !self.visited.contains(node)
    }

    fn settle(&mut self, node: &N, parent: Option<&N>) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        if let Some(parent) = parent {
            self.predecessors.insert(node.clone(), parent.clone());
        }
        true
    }

    fn path_to(&self, goal: &N) -> Vec<N> {
        self.predecessors.path_to(goal)
    }
}
