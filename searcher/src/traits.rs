use std::fmt::Debug;
use std::hash::Hash;

use num::{CheckedAdd, One, Zero};

use crate::errors::{describe, Result, SearchError};

/// Bound for node labels.
///
/// Identity is by equality. The ordering is only used to break ties
/// between frontier entries of equal cost, so any total order will do.
pub trait Label: Clone + Eq + Hash + Ord + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Bound for road weights and accumulated costs.
///
/// `zero` is the cost of the empty path and `one` is the cost of a single
/// hop when a search counts edges instead of summing weights. Costs are
/// summed with `checked_add`, so a total which does not fit the type is
/// reported instead of wrapping.
pub trait Weight: Copy + Ord + Debug + Zero + One + CheckedAdd {}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + One + CheckedAdd {}

/// `total + step`, or [SearchError::CostOverflow].
pub(crate) fn add<W: Weight>(total: W, step: W) -> Result<W> {
    total
        .checked_add(&step)
        .ok_or_else(|| SearchError::CostOverflow(describe(&total), describe(&step)))
}

/// Count of `hops` edges, expressed in the weight type.
pub(crate) fn hops<W: Weight>(hops: usize) -> Result<W> {
    (0..hops).try_fold(W::zero(), |total, _| add(total, W::one()))
}
