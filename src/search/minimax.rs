//! Exhaustive minimax over the remaining game tree
//!
//! X is the maximizing side and O the minimizing side, matching
//! [`score`](crate::tictactoe::score). Every branch is explored on its own
//! copy of the board, so a search never changes the board it was given.

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Symbol, is_terminal, score};

/// Best score reachable from a board and the move that reaches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value in {-1, 0, 1}
    pub score: i32,
    /// First move achieving `score`; `None` when the board is terminal
    pub best_move: Option<usize>,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root
    pub nodes: u64,
    /// Terminal boards reached
    pub leaves: u64,
}

/// The side that moves when `maximizing` is set
pub fn side_to_move(maximizing: bool) -> Symbol {
    if maximizing { Symbol::X } else { Symbol::O }
}

/// Evaluate `board` with the side to move given by `maximizing`.
pub fn minimax(board: &Board, maximizing: bool) -> SearchResult {
    minimax_with_stats(board, maximizing).0
}

/// Same as [`minimax`] but also reports how much of the tree was visited
pub fn minimax_with_stats(board: &Board, maximizing: bool) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = search(board, maximizing, &mut stats);
    (result, stats)
}

fn search(board: &Board, maximizing: bool, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;

    if is_terminal(board) {
        stats.leaves += 1;
        return SearchResult {
            score: score(board),
            best_move: None,
        };
    }

    let symbol = side_to_move(maximizing);
    // Sentinels sit outside [-1, 1] so the first child always replaces them.
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
    };

    for position in board.available_moves() {
        let child = board
            .with_move(position, symbol)
            .expect("available move should be placeable");
        let value = search(&child, !maximizing, stats).score;

        // Strict comparisons: the first move reaching the best value wins ties.
        if (maximizing && value > best.score) || (!maximizing && value < best.score) {
            best = SearchResult {
                score: value,
                best_move: Some(position),
            };
        }
    }

    best
}
