//! Scripted contestant playing a fixed list of positions.

use std::collections::VecDeque;

use crate::{
    Error, Result,
    ports::Contestant,
    tictactoe::{Board, Symbol},
};

/// Plays positions in order; fails with [`Error::InputClosed`] once the
/// script runs out. Positions refused by the board are recorded.
#[derive(Debug, Clone)]
pub struct ScriptedContestant {
    name: String,
    script: VecDeque<usize>,
    rejected: Vec<usize>,
}

impl ScriptedContestant {
    pub fn new(name: impl Into<String>, script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            name: name.into(),
            script: script.into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    /// Positions the session refused, in order
    pub fn rejected(&self) -> &[usize] {
        &self.rejected
    }
}

impl Contestant for ScriptedContestant {
    fn select_move(&mut self, _board: &Board, _symbol: Symbol) -> Result<usize> {
        self.script.pop_front().ok_or(Error::InputClosed)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn reject_move(&mut self, position: usize, _reason: &Error) -> Result<()> {
        self.rejected.push(position);
        Ok(())
    }
}
