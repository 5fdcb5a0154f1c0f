//! Route search over weighted city graphs.
//!
//! The crate holds a single graph model ([Graph]) and a family of search
//! strategies which share their bookkeeping (visited sets, predecessor maps,
//! frontier ordering) but differ in frontier discipline:
//!
//! - [bfs] and [dfs] for uninformed search,
//! - [ucs] and [weighted_bfs] ordered by accumulated cost,
//! - [astar] ordered by cost plus an [Estimates] table,
//! - [multi_goal_ucs] and [tour] which chain single-pair searches,
//! - [minimax] over a [Board] with adversary edges.
//!
//! [Engine] dispatches a [Strategy] selector to the right search.

pub mod algorithm;
mod errors;
pub mod graph;
mod strategy;
mod traits;

#[cfg(test)]
pub(crate) mod helpers;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::Label;
pub use traits::Weight;

pub use graph::{Board, Estimates, Graph, Outcome, Passage, Route, Utility, Verdict};

pub use algorithm::astar::astar;
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::dijkstra::ucs;
pub use algorithm::dijkstra::weighted_bfs;
pub use algorithm::minimax::{minimax, Veto};
pub use algorithm::multigoal::{multi_goal_ucs, tour};
pub use algorithm::{Pathfinder, SearchOptions};

pub use strategy::{Engine, Strategy};
