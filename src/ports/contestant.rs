//! Contestant port - anything that can pick a move for one side
//!
//! The session loop talks to both sides through this trait:
//! - the computer (minimax move selector)
//! - a human at the console
//! - scripted move lists in tests

use crate::{
    Error, Result,
    tictactoe::{Board, Symbol},
};

/// Source of moves for one side of a game
///
/// # Examples
///
/// ```
/// use noughts::{
///     ports::Contestant,
///     tictactoe::{Board, Symbol},
/// };
///
/// struct FirstFree;
///
/// impl Contestant for FirstFree {
///     fn select_move(&mut self, board: &Board, _symbol: Symbol) -> noughts::Result<usize> {
///         board
///             .available_moves()
///             .first()
///             .copied()
///             .ok_or(noughts::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-free"
///     }
/// }
/// ```
pub trait Contestant: Send {
    /// Pick a position (1-9) for `symbol` on `board`.
    ///
    /// The session validates the position; an illegal choice is reported
    /// through [`Contestant::reject_move`] and this method is called again.
    ///
    /// # Errors
    ///
    /// Returns an error when no move can be produced, e.g. the input
    /// stream closed.
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<usize>;

    /// Name used in logs and announcements.
    fn name(&self) -> &str;

    /// Called when the last selected position was refused by the board.
    ///
    /// # Default Implementation
    ///
    /// Does nothing; the session simply asks again.
    fn reject_move(&mut self, _position: usize, _reason: &Error) -> Result<()> {
        Ok(())
    }
}
