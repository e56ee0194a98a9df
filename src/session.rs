//! One game between a human contestant and the computer
//!
//! A [`Session`] owns its board exclusively. It alternates the two sides
//! until the board is terminal, placing every move itself so a contestant
//! can never mutate the board directly.

use tracing::{debug, info};

use crate::{
    Error, Result,
    adapters::ComputerContestant,
    app::SessionConfig,
    ports::{Contestant, SessionObserver},
    tictactoe::{Board, GameRecord, Move, Outcome, Symbol},
};

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub board: Board,
    pub record: GameRecord,
    pub human_symbol: Symbol,
}

impl GameSummary {
    pub fn human_won(&self) -> bool {
        self.outcome == Outcome::Win(self.human_symbol)
    }

    pub fn computer_won(&self) -> bool {
        self.outcome == Outcome::Win(self.human_symbol.opponent())
    }
}

/// A single game on a fresh board
pub struct Session {
    config: SessionConfig,
    board: Board,
    record: GameRecord,
    computer: ComputerContestant,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    /// Create a session; the computer plays the symbol the human did not pick
    pub fn new(config: SessionConfig) -> Self {
        let computer = match config.seed {
            Some(seed) => ComputerContestant::with_seed(config.computer_symbol(), seed),
            None => ComputerContestant::new(config.computer_symbol()),
        };

        Self {
            config,
            board: Board::new(),
            record: GameRecord::new(config.first_symbol()),
            computer,
            observers: Vec::new(),
        }
    }

    /// Add an observer (builder style)
    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.add_observer(Box::new(observer));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the board is terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] if the session already finished, and
    /// propagates errors from the human contestant (e.g.
    /// [`Error::InputClosed`]) or from an observer.
    pub fn play(&mut self, human: &mut dyn Contestant) -> Result<GameSummary> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }

        let human_symbol = self.config.human_symbol;
        if self.record.moves.is_empty() {
            info!(
                human = %human_symbol,
                computer = %self.config.computer_symbol(),
                first = %self.record.first,
                "session started"
            );
            for observer in &mut self.observers {
                observer.on_game_start(&self.board, self.record.first)?;
            }
        } else {
            debug!(moves = self.record.moves.len(), "session resumed");
        }

        while !self.board.is_terminal() {
            let symbol = self.record.to_move();
            let position = if symbol == human_symbol {
                self.human_turn(human, symbol)?
            } else {
                self.computer_turn(symbol)?
            };

            self.record.push(position, symbol);
            let mv = Move { position, symbol };
            for observer in &mut self.observers {
                observer.on_move(&self.board, mv)?;
            }
        }

        let outcome = self.board.outcome();
        for observer in &mut self.observers {
            observer.on_game_end(&self.board, outcome)?;
        }
        info!(?outcome, moves = self.record.moves.len(), "session finished");

        Ok(GameSummary {
            outcome,
            board: self.board,
            record: self.record.clone(),
            human_symbol,
        })
    }

    /// Ask the human until the board accepts the position
    fn human_turn(&mut self, human: &mut dyn Contestant, symbol: Symbol) -> Result<usize> {
        loop {
            let position = human.select_move(&self.board, symbol)?;
            match self.board.place(position, symbol) {
                Ok(()) => return Ok(position),
                Err(err) => {
                    debug!(position, %err, contestant = human.name(), "move rejected");
                    human.reject_move(position, &err)?;
                }
            }
        }
    }

    fn computer_turn(&mut self, symbol: Symbol) -> Result<usize> {
        let position = self.computer.select_move(&self.board, symbol)?;
        self.board.place(position, symbol)?;
        Ok(position)
    }
}
