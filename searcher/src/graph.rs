//! Graph model and the tables searches read from.

use std::collections::HashMap;

use itertools::Itertools;

mod board;
mod estimates;
mod path;

pub use board::{Board, Passage, Utility};
pub use estimates::Estimates;
pub use path::{Outcome, Route, Verdict};
pub(crate) use path::Predecessors;

use crate::errors::{describe, Result, SearchError};
use crate::traits::{Label, Weight};

/// Adjacency mapping from a node to its ordered list of weighted roads.
///
/// Roads are directed in storage. A node which only ever appears as the
/// destination of a road is a dead end: it has no roads of its own, and
/// searches stop there rather than failing.
///
/// The graph is never mutated by a search, so one graph can be shared by
/// any number of searches.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    roads: HashMap<N, Vec<(N, W)>>,
    order: Vec<N>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Graph {
            roads: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Label,
    W: Weight,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with no roads. Returns false if it was already present.
    pub fn insert_node(&mut self, node: N) -> bool {
        if self.roads.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.roads.insert(node, Vec::new());
        true
    }

    /// Append a road from `from` to `to`.
    ///
    /// Parallel roads are kept in the order they were inserted. Only the
    /// source becomes a node of the graph.
    pub fn insert_road(&mut self, from: N, to: N, weight: W) -> Result<()> {
        if weight < W::zero() {
            return Err(SearchError::NegativeWeight(describe(&from), describe(&to)));
        }

        self.insert_node(from.clone());
        if let Some(roads) = self.roads.get_mut(&from) {
            roads.push((to, weight));
        }
        Ok(())
    }

    /// Roads leaving `node`, in insertion order. Unknown nodes have none.
    pub fn neighbors(&self, node: &N) -> &[(N, W)] {
        self.roads.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.roads.contains_key(node)
    }

    /// True for a node of the graph, and for any destination of a road.
    pub fn mentions(&self, node: &N) -> bool {
        self.contains(node) || self.roads.values().flatten().any(|(to, _)| to == node)
    }

    /// Nodes in the order they were first declared
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Every road as `(from, to, weight)`
    pub fn roads(&self) -> impl Iterator<Item = (&N, &N, W)> {
        let roads = &self.roads;
        self.order.iter().flat_map(move |from| {
            roads
                .get(from)
                .into_iter()
                .flatten()
                .map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Weight of the cheapest road from `from` to `to`, if there is one.
    pub fn road_weight(&self, from: &N, to: &N) -> Option<W> {
        self.neighbors(from)
            .iter()
            .filter(|(n, _)| n == to)
            .map(|(_, w)| *w)
            .min()
    }

    /// Total weight along `path`, or None if any hop is not a road or the
    /// total does not fit in `W`.
    pub fn path_cost(&self, path: &[N]) -> Option<W> {
        path.iter()
            .tuple_windows()
            .try_fold(W::zero(), |total, (from, to)| {
                self.road_weight(from, to)
                    .and_then(|w| total.checked_add(&w))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::five_cities;

    #[test]
    fn unknown_nodes_are_dead_ends() {
        let graph = five_cities();
        assert!(graph.neighbors(&"Asmera").is_empty());
        assert!(!graph.contains(&"Asmera"));
    }

    #[test]
    fn insertion_order() {
        let graph = five_cities();
        let nodes: Vec<_> = graph.nodes().cloned().collect();
        assert_eq!(
            nodes,
            vec!["Addis Ababa", "Bahir Dar", "Gondar", "Hawassa", "Mekelle"]
        );
        assert_eq!(
            graph.neighbors(&"Addis Ababa"),
            &[("Bahir Dar", 510), ("Hawassa", 275)]
        );
        assert_eq!(graph.roads().count(), 8);
    }

    #[test]
    fn destinations_are_not_nodes() {
        let mut graph: Graph<&str, u32> = Graph::new();
        graph.insert_road("A", "B", 1).unwrap();
        assert_eq!(graph.len(), 1);
        assert!(!graph.contains(&"B"));
        assert!(graph.mentions(&"B"));
        assert!(!graph.mentions(&"C"));
        assert!(graph.insert_node("B"));
        assert!(!graph.insert_node("B"));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn negative_weight() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let err = graph.insert_road("A", "B", -1).unwrap_err();
        assert!(matches!(err, SearchError::NegativeWeight(..)));
        assert!(graph.is_empty());
    }

    #[test]
    fn parallel_roads() {
        let mut graph: Graph<&str, u32> = Graph::new();
        graph.insert_road("A", "B", 17).unwrap();
        graph.insert_road("A", "B", 3).unwrap();
        assert_eq!(graph.neighbors(&"A").len(), 2);
        assert_eq!(graph.road_weight(&"A", &"B"), Some(3));
        assert_eq!(graph.road_weight(&"B", &"A"), None);
    }

    #[test]
    fn path_cost() {
        let graph = five_cities();
        assert_eq!(
            graph.path_cost(&["Addis Ababa", "Bahir Dar", "Gondar", "Mekelle"]),
            Some(990)
        );
        assert_eq!(graph.path_cost(&["Addis Ababa"]), Some(0));
        assert_eq!(graph.path_cost(&["Addis Ababa", "Gondar"]), None);
    }
}
