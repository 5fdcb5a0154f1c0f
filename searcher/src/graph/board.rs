use std::collections::HashMap;
use std::fmt;

use crate::traits::Label;

/// Value of a position in the adversarial search.
///
/// The variants are declared in ascending order, so the derived ordering
/// puts both infinities outside every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Utility {
    NegInfinity,
    Finite(i64),
    PosInfinity,
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Utility::NegInfinity => write!(f, "-inf"),
            Utility::Finite(value) => write!(f, "{}", value),
            Utility::PosInfinity => write!(f, "+inf"),
        }
    }
}

/// One edge of the game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage<N> {
    pub to: N,

    /// The edge is controlled by the opponent.
    pub adversary: bool,
}

#[derive(Debug, Clone)]
struct Square<N> {
    utility: Option<i64>,
    passages: Vec<Passage<N>>,
}

impl<N> Default for Square<N> {
    fn default() -> Self {
        Square {
            utility: None,
            passages: Vec::new(),
        }
    }
}

/// Role table for the adversarial search: per node, an optional terminal
/// utility and the ordered edges leaving it.
///
/// Nodes missing from the board behave as non-terminal dead ends.
#[derive(Debug, Clone)]
pub struct Board<N> {
    squares: HashMap<N, Square<N>>,
    order: Vec<N>,
}

impl<N> Default for Board<N> {
    fn default() -> Self {
        Board {
            squares: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<N> Board<N>
where
    N: Label,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn square(&mut self, node: N) -> &mut Square<N> {
        if !self.squares.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.squares.entry(node).or_default()
    }

    /// Declare a non-terminal node. Returns false if it was already present.
    pub fn insert_node(&mut self, node: N) -> bool {
        let fresh = !self.squares.contains_key(&node);
        self.square(node);
        fresh
    }

    /// Mark `node` as terminal with a fixed utility.
    pub fn insert_terminal(&mut self, node: N, utility: i64) {
        self.square(node).utility = Some(utility);
    }

    /// Append an edge from `from` to `to`.
    pub fn insert_passage(&mut self, from: N, to: N, adversary: bool) {
        self.square(from).passages.push(Passage { to, adversary });
    }

    /// Utility of `node` if it is terminal.
    pub fn terminal(&self, node: &N) -> Option<i64> {
        self.squares.get(node).and_then(|s| s.utility)
    }

    pub fn passages(&self, node: &N) -> &[Passage<N>] {
        self.squares
            .get(node)
            .map(|s| s.passages.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, node: &N) -> bool {
        self.squares.contains_key(node)
    }

    /// True for a node of the board, and for any destination of a passage.
    pub fn mentions(&self, node: &N) -> bool {
        self.contains(node)
            || self
                .squares
                .values()
                .any(|square| square.passages.iter().any(|p| &p.to == node))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
