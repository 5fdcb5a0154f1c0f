//! Two-player evaluation of a game board.

use log::{debug, trace};

use crate::graph::{Board, Utility, Verdict};
use crate::traits::Label;

/// How adversary edges restrict the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Veto {
    /// A node with any adversary edge leaving it evaluates to negative
    /// infinity, whichever edge would have been taken.
    WholeNode,

    /// Only the adversary edges themselves are skipped.
    EdgeOnly,
}

impl Default for Veto {
    fn default() -> Self {
        Veto::WholeNode
    }
}

/// The nodes on the current line of play, linked back to the root.
#[derive(Debug)]
struct Trail<'t, N> {
    node: &'t N,
    parent: Option<&'t Trail<'t, N>>,
}

impl<'t, N: PartialEq> Trail<'t, N> {
    fn contains(&self, node: &N) -> bool {
        let mut step = Some(self);
        while let Some(trail) = step {
            if trail.node == node {
                return true;
            }
            step = trail.parent;
        }
        false
    }
}

/// Evaluate `board` from `start`, with the maximizing player to move.
///
/// Players alternate at every edge. Terminal nodes score their utility, and
/// a node is never revisited along the line being evaluated, which keeps
/// cycles finite. Among equally good edges the first one listed wins. A
/// player with no edge to take scores the worst value for themselves, with
/// an empty line.
pub fn minimax<N>(board: &Board<N>, start: &N, veto: Veto) -> Verdict<N>
where
    N: Label,
{
    debug!("minimax from {:?} ({:?})", start, veto);
    let verdict = evaluate(board, start, true, None, veto);
    debug!("minimax value {} along {:?}", verdict.value, verdict.path);
    verdict
}

fn evaluate<N>(
    board: &Board<N>,
    node: &N,
    maximizing: bool,
    trail: Option<&Trail<'_, N>>,
    veto: Veto,
) -> Verdict<N>
where
    N: Label,
{
    let passages = board.passages(node);

    if veto == Veto::WholeNode && passages.iter().any(|p| p.adversary) {
        trace!("{:?} is vetoed", node);
        return Verdict::blocked();
    }

    if let Some(utility) = board.terminal(node) {
        return Verdict {
            path: vec![node.clone()],
            value: Utility::Finite(utility),
        };
    }

    let here = Trail {
        node,
        parent: trail,
    };

    let mut best = Verdict {
        path: Vec::new(),
        value: if maximizing {
            Utility::NegInfinity
        } else {
            Utility::PosInfinity
        },
    };

    for passage in passages {
        if passage.adversary || here.contains(&passage.to) {
            continue;
        }

        let reply = evaluate(board, &passage.to, !maximizing, Some(&here), veto);
        let better = if maximizing {
            reply.value > best.value
        } else {
            reply.value < best.value
        };

        if better {
            let mut path = Vec::with_capacity(reply.path.len() + 1);
            path.push(node.clone());
            path.extend(reply.path);
            best = Verdict {
                path,
                value: reply.value,
            };
        }
    }

    trace!("{:?} scores {}", node, best.value);
    best
}
