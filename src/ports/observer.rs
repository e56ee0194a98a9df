//! Observer port - notified as a session progresses
//!
//! Rendering the board after every mutation is the observer's job, which
//! keeps the session loop free of any output format.
//!
//! # Event Sequence
//!
//! 1. `on_game_start(board, first)` - once, with the empty board
//! 2. `on_move(board, mv)` - after each move has been placed
//! 3. `on_game_end(board, outcome)` - once the board is terminal

use crate::{
    Result,
    tictactoe::{Board, Move, Outcome, Symbol},
};

/// Observer trait for monitoring a session
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::SessionObserver,
///     tictactoe::{Board, Outcome},
/// };
///
/// #[derive(Default)]
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl SessionObserver for DrawCounter {
///     fn on_game_end(&mut self, _board: &Board, outcome: Outcome) -> noughts::Result<()> {
///         if outcome == Outcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait SessionObserver: Send {
    /// Called before the first move.
    fn on_game_start(&mut self, _board: &Board, _first: Symbol) -> Result<()> {
        Ok(())
    }

    /// Called after `mv` has been applied to `board`.
    fn on_move(&mut self, _board: &Board, _mv: Move) -> Result<()> {
        Ok(())
    }

    /// Called when the board reaches a terminal outcome.
    fn on_game_end(&mut self, _board: &Board, _outcome: Outcome) -> Result<()> {
        Ok(())
    }
}
