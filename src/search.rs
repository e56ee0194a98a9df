//! Adversarial search and computer move selection

pub mod minimax;
pub mod selector;

pub use minimax::{SearchResult, SearchStats, minimax, minimax_with_stats, side_to_move};
pub use selector::{MoveSelector, choose_computer_move, maximizing_for};
