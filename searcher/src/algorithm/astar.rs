use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use super::score::Ranked;
use super::{SearchOptions, StepLimit};
use crate::errors::Result;
use crate::graph::{Estimates, Graph, Predecessors, Route};
use crate::traits::{add, Label, Weight};

/// A* search from `origin` to `goal`, guided by `estimates`.
///
/// The frontier is ordered by `g + h`, where `g` is the best cost known so
/// far and `h` the estimate to the goal. There is no closed set: a node is
/// queued again whenever a strictly cheaper cost to it is found, and stale
/// entries are expanded harmlessly. With admissible estimates the route is
/// optimal; inconsistent ones only cost extra expansions.
///
/// A node reached without an estimate fails the search with
/// [crate::SearchError::MissingHeuristic].
pub fn astar<N, W>(
    graph: &Graph<N, W>,
    estimates: &Estimates<N, W>,
    origin: &N,
    goal: &N,
    options: &SearchOptions,
) -> Result<Option<Route<N, W>>>
where
    N: Label,
    W: Weight,
{
    debug!("a* from {:?} to {:?}", origin, goal);

    let mut counter = StepLimit::new(options.step_limit);
    let mut open = BinaryHeap::new();
    let mut best: HashMap<N, W> = HashMap::new();
    let mut predecessors = Predecessors::default();
    let mut explored = Vec::new();
    let mut sequence = 0;

    best.insert(origin.clone(), W::zero());
    open.push(Ranked::new(estimates.estimate(origin)?, origin.clone(), sequence, ()));

    while let Some(Ranked { node, priority, .. }) = open.pop() {
        counter.increment()?;
        trace!("expand {:?} at f = {:?}", node, priority);
        explored.push(node.clone());

        let here = match best.get(&node) {
            Some(cost) => *cost,
            None => continue,
        };

        if &node == goal {
            debug!(
                "reached {:?} after {} expansions, cost {:?}",
                goal,
                counter.steps(),
                here
            );
            return Ok(Some(Route {
                path: predecessors.path_to(goal),
                cost: here,
                explored,
            }));
        }

        for (next, weight) in graph.neighbors(&node) {
            let tentative = add(here, *weight)?;
            let improves = best.get(next).map_or(true, |known| tentative < *known);
            if improves {
                let f = add(tentative, estimates.estimate(next)?)?;
                best.insert(next.clone(), tentative);
                predecessors.insert(next.clone(), node.clone());
                sequence += 1;
                open.push(Ranked::new(f, next.clone(), sequence, ()));
            }
        }
    }

    debug!(
        "open set exhausted after {} expansions without reaching {:?}",
        counter.steps(),
        goal
    );
    Ok(None)
}
