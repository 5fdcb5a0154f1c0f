//! Planners which chain single-pair searches.

use std::collections::BTreeSet;

use log::{debug, warn};

use super::dijkstra::ucs;
use super::{Pathfinder, SearchOptions};
use crate::errors::{describe, Result, SearchError};
use crate::graph::{Graph, Route};
use crate::traits::{Label, Weight};

/// Visit every goal, always travelling next to the nearest remaining one.
///
/// Each round runs [ucs] from the current position to every remaining goal
/// and commits to the cheapest, ties going to the smaller label. The legs
/// are joined without repeating the junction nodes. This greedy plan is not
/// the cheapest order in general.
///
/// Fails with [SearchError::UnreachableGoal] as soon as any remaining goal
/// cannot be reached, rather than returning a partial itinerary.
pub fn multi_goal_ucs<N, W>(
    graph: &Graph<N, W>,
    origin: &N,
    goals: &[N],
    options: &SearchOptions,
) -> Result<Route<N, W>>
where
    N: Label,
    W: Weight,
{
    let mut remaining: BTreeSet<N> = goals.iter().cloned().collect();
    let mut current = origin.clone();
    let mut total = Route::stay(origin.clone());

    debug!("planning {} goals from {:?}", remaining.len(), origin);

    while !remaining.is_empty() {
        let mut nearest: Option<Route<N, W>> = None;

        for goal in &remaining {
            let leg = ucs(graph, &current, goal, options)?.ok_or_else(|| {
                warn!("no path from {:?} to goal {:?}", current, goal);
                SearchError::UnreachableGoal(describe(goal))
            })?;

            if nearest.as_ref().map_or(true, |best| leg.cost < best.cost) {
                nearest = Some(leg);
            }
        }

        let leg = match nearest {
            Some(leg) => leg,
            None => break,
        };
        if let Some(goal) = leg.destination() {
            debug!("next goal {:?} at {:?}", goal, leg.cost);
            remaining.remove(goal);
            current = goal.clone();
        }
        total.extend(leg)?;
    }

    Ok(total)
}

/// Visit every node of the graph, one reachable node at a time.
///
/// Each round takes the first remaining node, in graph order, which `find`
/// reaches from the current position, follows that path, and crosses off
/// every node passed on the way. Fails with [SearchError::UnreachableGoal]
/// when none of the remaining nodes can be reached.
pub fn tour<N, W>(
    graph: &Graph<N, W>,
    origin: &N,
    find: Pathfinder<N, W>,
    options: &SearchOptions,
) -> Result<Route<N, W>>
where
    N: Label,
    W: Weight,
{
    let mut remaining: Vec<N> = graph.nodes().filter(|n| *n != origin).cloned().collect();
    let mut current = origin.clone();
    let mut total = Route::stay(origin.clone());

    debug!("touring {} nodes from {:?}", remaining.len(), origin);

    while let Some(first) = remaining.first().cloned() {
        let mut next = None;
        for node in &remaining {
            if let Some(leg) = find(graph, &current, node, options)? {
                next = Some(leg);
                break;
            }
        }

        let leg = next.ok_or_else(|| {
            warn!("tour stuck at {:?} with {} nodes left", current, remaining.len());
            SearchError::UnreachableGoal(describe(&first))
        })?;

        remaining.retain(|n| !leg.path.contains(n));
        if let Some(end) = leg.destination() {
            current = end.clone();
        }
        total.extend(leg)?;
    }

    Ok(total)
}
