//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;

pub use board::{Board, BoardView, CELL_COUNT, Cell, Symbol};
pub use game::{GameRecord, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{Outcome, has_won, is_terminal, outcome, score, winning_line};
