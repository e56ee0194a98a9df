//! Record of a finished or in-progress game

use serde::{Deserialize, Serialize};

use super::{Board, Outcome, Symbol};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub symbol: Symbol,
}

/// Move history of one game, starting from an empty board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Symbol,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn new(first: Symbol) -> Self {
        GameRecord {
            first,
            moves: Vec::new(),
        }
    }

    /// Symbol whose turn it is after the recorded moves
    pub fn to_move(&self) -> Symbol {
        if self.moves.len().is_multiple_of(2) {
            self.first
        } else {
            self.first.opponent()
        }
    }

    /// Append a move. The caller has already applied it to its board.
    pub fn push(&mut self, position: usize, symbol: Symbol) {
        self.moves.push(Move { position, symbol });
    }

    /// Rebuild the board by replaying every recorded move.
    ///
    /// # Errors
    ///
    /// Returns an error if the history contains an illegal move, which
    /// indicates corrupted game data.
    pub fn replay(&self) -> Result<Board, crate::Error> {
        self.moves.iter().try_fold(Board::new(), |board, m| {
            board.with_move(m.position, m.symbol)
        })
    }

    /// Outcome of the replayed board
    pub fn outcome(&self) -> Result<Outcome, crate::Error> {
        Ok(self.replay()?.outcome())
    }
}
