use thiserror::Error;

use crate::strategy::Strategy;

/// Error produced when a search cannot be carried out.
///
/// An unreachable goal in a single-pair search is not an error, see
/// [crate::Outcome::NotFound]. Node labels are rendered with their
/// `Debug` form so that this type stays free of type parameters.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unknown search strategy: {0:?}")]
    InvalidStrategy(String),

    #[error("No path to goal {0}")]
    UnreachableGoal(String),

    #[error("No heuristic estimate for {0}")]
    MissingHeuristic(String),

    #[error("Search requires a {0}")]
    MissingTable(&'static str),

    #[error("{strategy} expects {expected} goal(s), found {found}")]
    GoalCount {
        strategy: Strategy,
        expected: usize,
        found: usize,
    },

    #[error("{strategy} cannot be used to {operation}")]
    Unsupported {
        strategy: Strategy,
        operation: &'static str,
    },

    #[error("Road from {0} to {1} has a negative weight")]
    NegativeWeight(String, String),

    #[error("Estimate for {0} is negative")]
    NegativeEstimate(String),

    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Path cost overflows adding {1} to {0}")]
    CostOverflow(String, String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Render a node label for an error message.
pub(crate) fn describe<N: std::fmt::Debug>(node: &N) -> String {
    format!("{:?}", node)
}
