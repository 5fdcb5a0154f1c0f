//! Fixtures and reference implementations shared by the tests.

use std::collections::{HashMap, HashSet, VecDeque};

use proptest::prelude::*;

use crate::graph::{Board, Graph};

/// Build a graph from `(from, to, weight)` triples. Every endpoint becomes
/// a node, so destinations are never missing from the graph.
pub(crate) fn roads(triples: &[(&'static str, &'static str, u32)]) -> Graph<&'static str, u32> {
    let mut graph = Graph::new();
    for (from, to, weight) in triples {
        graph.insert_road(*from, *to, *weight).unwrap();
    }
    for (_, to, _) in triples {
        graph.insert_node(*to);
    }
    graph
}

/// A five city corner of Ethiopia. Weights are road distances in km.
pub(crate) fn five_cities() -> Graph<&'static str, u32> {
    roads(&[
        ("Addis Ababa", "Bahir Dar", 510),
        ("Addis Ababa", "Hawassa", 275),
        ("Bahir Dar", "Addis Ababa", 510),
        ("Bahir Dar", "Gondar", 180),
        ("Gondar", "Bahir Dar", 180),
        ("Gondar", "Mekelle", 300),
        ("Hawassa", "Addis Ababa", 275),
        ("Mekelle", "Gondar", 300),
    ])
}

/// The adversarial road game around Addis Ababa.
pub(crate) fn highlands() -> Board<&'static str> {
    let mut board = Board::new();
    let terminals = [
        ("Shambu", 4),
        ("Fincha", 5),
        ("Gimbi", 8),
        ("Hossana", 6),
        ("Durame", 5),
        ("Bench Naji", 5),
        ("Tepi", 6),
        ("Harar", 10),
        ("Chiro", 6),
        ("Dilla", 9),
        ("Kaffa", 7),
        ("Limu", 0),
        ("Ambo", 0),
    ];
    for (city, utility) in &terminals {
        board.insert_terminal(*city, *utility);
    }

    let passages = [
        ("Shambu", "Gedo", false),
        ("Fincha", "Gedo", false),
        ("Gimbi", "Nekemte", false),
        ("Gedo", "Shambu", false),
        ("Gedo", "Fincha", false),
        ("Nekemte", "Gimbi", false),
        ("Nekemte", "Limu", false),
        ("Hossana", "Worabe", false),
        ("Durame", "Worabe", false),
        ("Bench Naji", "Wolkite", false),
        ("Tepi", "Wolkite", false),
        ("Wolkite", "Tepi", false),
        ("Wolkite", "Bench Naji", false),
        ("Buta Jirra", "Addis Ababa", false),
        ("Buta Jirra", "Wolkite", false),
        ("Buta Jirra", "Worabe", false),
        ("Adama", "Addis Ababa", true),
        ("Adama", "Diredawa", false),
        ("Adama", "Mojo", false),
        ("Diredawa", "Chiro", false),
        ("Diredawa", "Harar", false),
        ("Harar", "Diredawa", false),
        ("Chiro", "Diredawa", false),
        ("Dilla", "Mojo", false),
        ("Kaffa", "Mojo", false),
        ("Addis Ababa", "Adama", false),
        ("Addis Ababa", "Ambo", false),
        ("Addis Ababa", "Buta Jirra", false),
        ("Mojo", "Adama", true),
        ("Mojo", "Dilla", false),
        ("Mojo", "Kaffa", false),
        ("Worabe", "Hossana", false),
        ("Worabe", "Durame", false),
        ("Worabe", "Buta Jirra", false),
        ("Limu", "Nekemte", false),
        ("Ambo", "Addis Ababa", false),
        ("Ambo", "Nekemte", false),
        ("Ambo", "Gedo", false),
    ];
    for (from, to, adversary) in &passages {
        board.insert_passage(*from, *to, *adversary);
    }
    board
}

/// Road lists on nodes `0..nodes`, up to `max_roads` long, with weights in `0..10`.
pub(crate) fn arb_roads(
    nodes: u32,
    max_roads: usize,
) -> impl Strategy<Value = Vec<(u32, u32, u32)>> {
    prop::collection::vec((0..nodes, 0..nodes, 0u32..10), 0..max_roads)
}

/// Graph on every node of `0..nodes`, with `roads` in order.
pub(crate) fn numbered(nodes: u32, roads: &[(u32, u32, u32)]) -> Graph<u32, u32> {
    let mut graph = Graph::new();
    for node in 0..nodes {
        graph.insert_node(node);
    }
    for (from, to, weight) in roads {
        graph.insert_road(*from, *to, *weight).unwrap();
    }
    graph
}

/// Copy of a numbered graph with nodes renamed through `labels`.
pub(crate) fn relabel(
    graph: &Graph<u32, u32>,
    labels: &[&'static str],
) -> Graph<&'static str, u32> {
    let mut named = Graph::new();
    for node in graph.nodes() {
        named.insert_node(labels[*node as usize]);
    }
    for (from, to, weight) in graph.roads() {
        named
            .insert_road(labels[*from as usize], labels[*to as usize], weight)
            .unwrap();
    }
    named
}

/// Hop distance from `origin` to every node it reaches, by breadth levels.
pub(crate) fn breadth_levels(graph: &Graph<u32, u32>, origin: u32) -> HashMap<u32, usize> {
    let mut levels = HashMap::new();
    let mut queue = VecDeque::new();
    levels.insert(origin, 0);
    queue.push_back(origin);

    while let Some(node) = queue.pop_front() {
        let level = levels[&node];
        for (next, _) in graph.neighbors(&node) {
            if !levels.contains_key(next) {
                levels.insert(*next, level + 1);
                queue.push_back(*next);
            }
        }
    }
    levels
}

/// Cheapest cost between every pair of nodes in `0..nodes` (Floyd-Warshall).
pub(crate) fn all_pairs(graph: &Graph<u32, u32>, nodes: u32) -> Vec<Vec<Option<u32>>> {
    let n = nodes as usize;
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for (from, to, weight) in graph.roads() {
        let cell = &mut dist[*from as usize][*to as usize];
        *cell = Some(cell.map_or(weight, |w: u32| w.min(weight)));
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |d| a + b < d) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

/// Check that `path` runs from `origin` to `goal` along roads of `graph`
/// without visiting any node twice.
pub(crate) fn assert_valid_route<N>(graph: &Graph<N, u32>, path: &[N], origin: &N, goal: &N)
where
    N: crate::Label,
{
    assert_eq!(path.first(), Some(origin), "path {:?} starts elsewhere", path);
    assert_eq!(path.last(), Some(goal), "path {:?} ends elsewhere", path);
    for pair in path.windows(2) {
        assert!(
            graph.road_weight(&pair[0], &pair[1]).is_some(),
            "no road {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
    let unique: HashSet<&N> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path {:?} repeats a node", path);
}
