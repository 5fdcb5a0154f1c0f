use std::collections::HashMap;

use crate::errors::{describe, Result, SearchError};
use crate::traits::{Label, Weight};

/// Estimated remaining cost from each node to one fixed goal.
///
/// A* stays optimal only while the estimates never overestimate the true
/// remaining cost. That is the caller's responsibility; the table only
/// refuses negative entries.
#[derive(Debug, Clone)]
pub struct Estimates<N, W> {
    table: HashMap<N, W>,
}

impl<N, W> Default for Estimates<N, W> {
    fn default() -> Self {
        Estimates {
            table: HashMap::new(),
        }
    }
}

impl<N, W> Estimates<N, W>
where
    N: Label,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the estimate for `node`, replacing any earlier entry.
    pub fn insert(&mut self, node: N, estimate: W) -> Result<()> {
        if estimate < W::zero() {
            return Err(SearchError::NegativeEstimate(describe(&node)));
        }
        self.table.insert(node, estimate);
        Ok(())
    }

    pub fn get(&self, node: &N) -> Option<W> {
        self.table.get(node).copied()
    }

    /// Estimate for `node`. A missing entry is a configuration error rather
    /// than a zero estimate.
    pub fn estimate(&self, node: &N) -> Result<W> {
        self.get(node)
            .ok_or_else(|| SearchError::MissingHeuristic(describe(node)))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
