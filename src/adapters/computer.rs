//! Computer contestant backed by the minimax move selector.

use crate::{
    Result,
    ports::Contestant,
    search::MoveSelector,
    tictactoe::{Board, Symbol},
};

/// Optimal player for one fixed symbol
///
/// # Examples
///
/// ```
/// use noughts::adapters::ComputerContestant;
/// use noughts::ports::Contestant;
/// use noughts::tictactoe::{Board, Symbol};
///
/// let board: Board = "XX./.O./...".parse()?;
/// let mut computer = ComputerContestant::with_seed(Symbol::O, 1);
/// assert_eq!(computer.select_move(&board, Symbol::O)?, 3);
/// # Ok::<(), noughts::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ComputerContestant {
    name: String,
    selector: MoveSelector,
}

impl ComputerContestant {
    /// Create a computer player with a random seed
    pub fn new(symbol: Symbol) -> Self {
        Self::from_selector(MoveSelector::new(symbol))
    }

    /// Create a computer player with a deterministic seed
    pub fn with_seed(symbol: Symbol, seed: u64) -> Self {
        Self::from_selector(MoveSelector::with_seed(symbol, seed))
    }

    fn from_selector(selector: MoveSelector) -> Self {
        Self {
            name: "AI".to_string(),
            selector,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.selector.symbol()
    }
}

impl Contestant for ComputerContestant {
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<usize> {
        debug_assert_eq!(symbol, self.selector.symbol(), "computer asked to play the wrong side");
        self.selector.choose(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
