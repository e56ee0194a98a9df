//! Common test utilities for the noughts test suite.
//!
//! Game-tree walks shared by several integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::{
    Board, Outcome, Symbol, minimax,
    search::{maximizing_for, side_to_move},
};

/// Every board reachable from the empty board by alternating legal moves,
/// with either side opening. Play stops at terminal boards.
pub fn reachable_boards() -> HashSet<Board> {
    let mut visited = HashSet::new();
    let mut stack = vec![(Board::new(), Symbol::X), (Board::new(), Symbol::O)];

    while let Some((board, to_move)) = stack.pop() {
        if !visited.insert((board, to_move)) || board.is_terminal() {
            continue;
        }
        for position in board.available_moves() {
            let next = board
                .with_move(position, to_move)
                .expect("available move should be placeable");
            stack.push((next, to_move.opponent()));
        }
    }

    visited.into_iter().map(|(board, _)| board).collect()
}

pub fn count(board: &Board, symbol: Symbol) -> usize {
    board
        .cells()
        .iter()
        .filter(|&&c| c == symbol.to_cell())
        .count()
}

/// Finish the game with both sides choosing moves via minimax
pub fn play_out_optimally(mut board: Board, mut to_move: Symbol) -> Outcome {
    while !board.is_terminal() {
        let result = minimax(&board, maximizing_for(to_move));
        let position = result
            .best_move
            .expect("non-terminal board should yield a move");
        board
            .place(position, side_to_move(maximizing_for(to_move)))
            .expect("search move should be legal");
        to_move = to_move.opponent();
    }
    board.outcome()
}
