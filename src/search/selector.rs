//! Computer move selection
//!
//! On an empty board the computer picks a random opening; from any opening
//! the 3x3 game is still a draw under best play, and skipping the root
//! search avoids walking the full 9-ply tree. Every later move comes from
//! [`minimax`](super::minimax::minimax).

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::debug;

use super::minimax::minimax_with_stats;
use crate::{
    Error, Result,
    tictactoe::{Board, CELL_COUNT, Symbol},
};

/// Whether `symbol` is the maximizing side under the scoring convention
pub fn maximizing_for(symbol: Symbol) -> bool {
    symbol == Symbol::X
}

/// Choose the computer's next position without touching `board`.
///
/// # Errors
///
/// Returns [`Error::GameOver`] if the board is already terminal.
///
/// # Panics
///
/// Panics if the search finds no move on a non-terminal board, which can
/// only happen if the rules engine is broken.
pub fn choose_computer_move<R: Rng>(
    board: &Board,
    computer_symbol: Symbol,
    maximizing_for_computer: bool,
    rng: &mut R,
) -> Result<usize> {
    debug_assert_eq!(
        maximizing_for(computer_symbol),
        maximizing_for_computer,
        "maximizing flag must match the computer's symbol"
    );

    if board.is_terminal() {
        return Err(Error::GameOver);
    }

    if board.available_moves().len() == CELL_COUNT {
        let position = rng.random_range(1..=CELL_COUNT);
        debug!(%computer_symbol, position, "random opening move");
        return Ok(position);
    }

    let (result, stats) = minimax_with_stats(board, maximizing_for_computer);
    let Some(position) = result.best_move else {
        panic!("minimax returned no move for non-terminal board:\n{board}");
    };

    debug!(
        %computer_symbol,
        position,
        score = result.score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        "minimax move"
    );
    Ok(position)
}

/// Move selector bound to one side for the whole session
#[derive(Debug, Clone)]
pub struct MoveSelector {
    symbol: Symbol,
    maximizing: bool,
    rng: StdRng,
}

impl MoveSelector {
    /// Create a selector for `symbol` with a random seed
    pub fn new(symbol: Symbol) -> Self {
        Self::with_seed(symbol, random())
    }

    /// Create a selector with a deterministic seed
    pub fn with_seed(symbol: Symbol, seed: u64) -> Self {
        Self {
            symbol,
            maximizing: maximizing_for(symbol),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }

    /// Compute the next computer move for `board`
    pub fn choose(&mut self, board: &Board) -> Result<usize> {
        choose_computer_move(board, self.symbol, self.maximizing, &mut self.rng)
    }
}
