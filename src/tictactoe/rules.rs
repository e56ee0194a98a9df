//! Win, terminal and scoring rules
//!
//! Scoring follows a fixed convention: X is the maximizing side, so a board
//! won by X scores `+1` and a board won by O scores `-1`.

use serde::{Deserialize, Serialize};

use super::{Board, Symbol, lines::LineAnalyzer};

/// Score of a board won by X
pub const X_WIN_SCORE: i32 = 1;
/// Score of a board won by O
pub const O_WIN_SCORE: i32 = -1;
/// Score of a drawn (or undecided) board
pub const DRAW_SCORE: i32 = 0;

/// Result of a board, derived on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Win(Symbol),
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }

    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(symbol),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

/// Check if `symbol` holds any complete row, column or diagonal
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    LineAnalyzer::has_won(board.cells(), symbol)
}

/// The line that won the game for `symbol`, as 1-based positions
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<[usize; 3]> {
    LineAnalyzer::completed_line(board.cells(), symbol)
}

/// Check if the game is over (win or draw)
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Symbol::X) || has_won(board, Symbol::O) || board.available_moves().is_empty()
}

/// Static evaluation: `+1` X won, `-1` O won, `0` otherwise
pub fn score(board: &Board) -> i32 {
    if has_won(board, Symbol::X) {
        X_WIN_SCORE
    } else if has_won(board, Symbol::O) {
        O_WIN_SCORE
    } else {
        DRAW_SCORE
    }
}

/// Derive the outcome of a board
pub fn outcome(board: &Board) -> Outcome {
    if has_won(board, Symbol::X) {
        Outcome::Win(Symbol::X)
    } else if has_won(board, Symbol::O) {
        Outcome::Win(Symbol::O)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

impl Board {
    /// Shorthand for [`outcome`]
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }

    /// Shorthand for [`is_terminal`]
    pub fn is_terminal(&self) -> bool {
        is_terminal(self)
    }
}
