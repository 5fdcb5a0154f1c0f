//! Strategy selector and the engine which dispatches it.

use std::fmt;
use std::str::FromStr;

use log::info;

use crate::algorithm::{self, Pathfinder, SearchOptions};
use crate::errors::{Result, SearchError};
use crate::graph::{Board, Estimates, Graph, Outcome, Route};
use crate::traits::{Label, Weight};

/// Every search the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    WeightedBfs,
    AStar,
    MultiGoalUcs,
    Minimax,
}

impl Strategy {
    pub fn all() -> &'static [Strategy] {
        &[
            Strategy::Bfs,
            Strategy::Dfs,
            Strategy::Ucs,
            Strategy::WeightedBfs,
            Strategy::AStar,
            Strategy::MultiGoalUcs,
            Strategy::Minimax,
        ]
    }

    /// Canonical selector string.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Ucs => "ucs",
            Strategy::WeightedBfs => "weighted-bfs",
            Strategy::AStar => "a-star",
            Strategy::MultiGoalUcs => "multi-goal-ucs",
            Strategy::Minimax => "minimax",
        }
    }

    /// The single-pair graph search behind this strategy, if it has one
    /// that needs nothing but the graph.
    pub fn pathfinder<N: Label, W: Weight>(self) -> Option<Pathfinder<N, W>> {
        match self {
            Strategy::Bfs => Some(algorithm::basic::bfs),
            Strategy::Dfs => Some(algorithm::basic::dfs),
            Strategy::Ucs => Some(algorithm::dijkstra::ucs),
            Strategy::WeightedBfs => Some(algorithm::dijkstra::weighted_bfs),
            Strategy::AStar | Strategy::MultiGoalUcs | Strategy::Minimax => None,
        }
    }

    /// How many goals the strategy takes, or None for any number.
    pub fn goals(self) -> Option<usize> {
        match self {
            Strategy::MultiGoalUcs => None,
            Strategy::Minimax => Some(0),
            _ => Some(1),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "ucs" => Ok(Strategy::Ucs),
            "weighted-bfs" | "bfs_weighted" => Ok(Strategy::WeightedBfs),
            "a-star" | "astar" => Ok(Strategy::AStar),
            "multi-goal-ucs" => Ok(Strategy::MultiGoalUcs),
            "minimax" => Ok(Strategy::Minimax),
            _ => Err(SearchError::InvalidStrategy(s.to_string())),
        }
    }
}

/// Runs any [Strategy] against the tables it was given.
///
/// The engine only borrows the graph and tables, so one engine (or many)
/// can be pointed at the same data.
#[derive(Debug, Clone)]
pub struct Engine<'a, N, W> {
    graph: Option<&'a Graph<N, W>>,
    estimates: Option<&'a Estimates<N, W>>,
    board: Option<&'a Board<N>>,
    options: SearchOptions,
}

impl<'a, N, W> Default for Engine<'a, N, W> {
    fn default() -> Self {
        Engine {
            graph: None,
            estimates: None,
            board: None,
            options: SearchOptions::default(),
        }
    }
}

impl<'a, N, W> Engine<'a, N, W>
where
    N: Label,
    W: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, graph: &'a Graph<N, W>) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn with_estimates(mut self, estimates: &'a Estimates<N, W>) -> Self {
        self.estimates = Some(estimates);
        self
    }

    pub fn with_board(mut self, board: &'a Board<N>) -> Self {
        self.board = Some(board);
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    fn graph(&self) -> Result<&'a Graph<N, W>> {
        self.graph.ok_or(SearchError::MissingTable("graph"))
    }

    fn check_goals(strategy: Strategy, goals: &[N]) -> Result<()> {
        match strategy.goals() {
            Some(expected) if expected != goals.len() => Err(SearchError::GoalCount {
                strategy,
                expected,
                found: goals.len(),
            }),
            _ => Ok(()),
        }
    }

    fn single_pair(&self, find: Pathfinder<N, W>, start: &N, goal: &N) -> Result<Outcome<N, W>> {
        Ok(find(self.graph()?, start, goal, &self.options)?.into())
    }

    /// Run `strategy` from `start`.
    ///
    /// Single-pair searches take exactly one goal and report an unreachable
    /// goal as [Outcome::NotFound]. The multi-goal planner takes any number
    /// of goals and fails if one of them is unreachable. Minimax takes no
    /// goals and evaluates the board.
    pub fn run(&self, strategy: Strategy, start: &N, goals: &[N]) -> Result<Outcome<N, W>> {
        Self::check_goals(strategy, goals)?;
        info!("running {} from {:?} to {:?}", strategy, start, goals);

        let outcome = match strategy {
            Strategy::Bfs => self.single_pair(algorithm::basic::bfs, start, &goals[0])?,
            Strategy::Dfs => self.single_pair(algorithm::basic::dfs, start, &goals[0])?,
            Strategy::Ucs => self.single_pair(algorithm::dijkstra::ucs, start, &goals[0])?,
            Strategy::WeightedBfs => {
                self.single_pair(algorithm::dijkstra::weighted_bfs, start, &goals[0])?
            }
            Strategy::AStar => {
                let graph = self.graph()?;
                let estimates = self
                    .estimates
                    .ok_or(SearchError::MissingTable("heuristic table"))?;
                algorithm::astar::astar(graph, estimates, start, &goals[0], &self.options)?.into()
            }
            Strategy::MultiGoalUcs => Outcome::Route(algorithm::multigoal::multi_goal_ucs(
                self.graph()?,
                start,
                goals,
                &self.options,
            )?),
            Strategy::Minimax => {
                let board = self.board.ok_or(SearchError::MissingTable("game board"))?;
                Outcome::Verdict(algorithm::minimax::minimax(
                    board,
                    start,
                    self.options.veto,
                ))
            }
        };

        Ok(outcome)
    }

    /// Visit every node of the graph from `start` with one of the
    /// single-pair graph searches.
    pub fn tour(&self, strategy: Strategy, start: &N) -> Result<Route<N, W>> {
        let find = strategy.pathfinder().ok_or(SearchError::Unsupported {
            strategy,
            operation: "tour the graph",
        })?;
        info!("touring with {} from {:?}", strategy, start);
        algorithm::multigoal::tour(self.graph()?, start, find, &self.options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::minimax::Veto;
    use crate::graph::Utility;
    use crate::helpers::*;

    #[test]
    fn parse_selectors() {
        for strategy in Strategy::all() {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), *strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!("bfs_weighted".parse::<Strategy>().unwrap(), Strategy::WeightedBfs);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
    }

    #[test]
    fn invalid_strategy() {
        let err = "xyz".parse::<Strategy>().unwrap_err();
        assert!(matches!(&err, SearchError::InvalidStrategy(s) if s == "xyz"));
        assert_eq!(err.to_string(), "Unknown search strategy: \"xyz\"");
        assert!("BFS".parse::<Strategy>().is_err());
    }

    #[test]
    fn dispatch_graph_searches() {
        let graph = five_cities();
        let engine = Engine::new().with_graph(&graph);

        let expected = [
            (Strategy::Bfs, 3),
            (Strategy::Ucs, 990),
            (Strategy::WeightedBfs, 990),
        ];
        for (strategy, cost) in &expected {
            let outcome = engine.run(*strategy, &"Addis Ababa", &["Mekelle"]).unwrap();
            let route = outcome.route().unwrap();
            assert_eq!(route.cost, *cost);
            assert_eq!(
                route.path,
                vec!["Addis Ababa", "Bahir Dar", "Gondar", "Mekelle"]
            );
        }

        let dfs = engine.run(Strategy::Dfs, &"Addis Ababa", &["Mekelle"]).unwrap();
        assert!(dfs.is_found());
    }

    #[test]
    fn not_found_is_a_value() {
        let mut graph = five_cities();
        graph.insert_node("Jimma");
        let engine = Engine::new().with_graph(&graph);

        let outcome = engine.run(Strategy::Ucs, &"Addis Ababa", &["Jimma"]).unwrap();
        assert_eq!(outcome, Outcome::NotFound);
        assert!(!outcome.is_found());

        let err = engine
            .run(Strategy::MultiGoalUcs, &"Addis Ababa", &["Jimma"])
            .unwrap_err();
        assert!(matches!(err, SearchError::UnreachableGoal(..)));
    }

    #[test]
    fn missing_tables() {
        let graph = five_cities();
        let engine = Engine::new().with_graph(&graph);
        assert!(matches!(
            engine.run(Strategy::AStar, &"Addis Ababa", &["Mekelle"]),
            Err(SearchError::MissingTable("heuristic table"))
        ));
        assert!(matches!(
            engine.run(Strategy::Minimax, &"Addis Ababa", &[]),
            Err(SearchError::MissingTable("game board"))
        ));

        let empty: Engine<&str, u32> = Engine::new();
        assert!(matches!(
            empty.run(Strategy::Bfs, &"Addis Ababa", &["Mekelle"]),
            Err(SearchError::MissingTable("graph"))
        ));
    }

    #[test]
    fn goal_count() {
        let graph = five_cities();
        let engine = Engine::new().with_graph(&graph);

        let err = engine
            .run(Strategy::Bfs, &"Addis Ababa", &["Mekelle", "Gondar"])
            .unwrap_err();
        assert_eq!(err.to_string(), "bfs expects 1 goal(s), found 2");

        assert!(matches!(
            engine.run(Strategy::Ucs, &"Addis Ababa", &[]),
            Err(SearchError::GoalCount { expected: 1, found: 0, .. })
        ));

        let board = highlands();
        let game = Engine::<&str, u32>::new().with_board(&board);
        assert!(matches!(
            game.run(Strategy::Minimax, &"Addis Ababa", &["Tepi"]),
            Err(SearchError::GoalCount { expected: 0, found: 1, .. })
        ));
    }

    #[test]
    fn dispatch_astar_and_multi_goal() {
        let graph = five_cities();
        let mut estimates = Estimates::new();
        for city in graph.nodes() {
            estimates.insert(*city, 0).unwrap();
        }
        let engine = Engine::new().with_graph(&graph).with_estimates(&estimates);

        let outcome = engine
            .run(Strategy::AStar, &"Hawassa", &["Gondar"])
            .unwrap();
        assert_eq!(outcome.route().unwrap().cost, 275 + 510 + 180);

        let outcome = engine
            .run(Strategy::MultiGoalUcs, &"Hawassa", &["Mekelle", "Bahir Dar"])
            .unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.destination(), Some(&"Mekelle"));
        assert_eq!(route.cost, 275 + 510 + 180 + 300);
    }

    #[test]
    fn dispatch_minimax_with_veto() {
        let board = highlands();
        let engine = Engine::<&str, u32>::new().with_board(&board);
        let outcome = engine.run(Strategy::Minimax, &"Addis Ababa", &[]).unwrap();
        assert_eq!(outcome.verdict().unwrap().value, Utility::Finite(6));

        let engine = engine.with_options(SearchOptions::default().with_veto(Veto::EdgeOnly));
        let outcome = engine.run(Strategy::Minimax, &"Addis Ababa", &[]).unwrap();
        assert_eq!(outcome.verdict().unwrap().value, Utility::Finite(9));
        assert!(outcome.route().is_none());
    }

    #[test]
    fn tour_dispatch() {
        let graph = five_cities();
        let engine = Engine::new().with_graph(&graph);
        let route = engine.tour(Strategy::Ucs, &"Mekelle").unwrap();
        for city in graph.nodes() {
            assert!(route.path.contains(city));
        }

        let err = engine.tour(Strategy::Minimax, &"Mekelle").unwrap_err();
        assert_eq!(err.to_string(), "minimax cannot be used to tour the graph");
    }
}
