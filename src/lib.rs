//! Noughts and crosses against an optimal computer opponent
//!
//! This crate provides:
//! - The 3x3 board, its rules and outcome detection
//! - Exhaustive minimax search that never loses
//! - A move selector with a random opening shortcut
//! - A session loop and console front-end built on top of the core

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod session;
pub mod tictactoe;

pub use app::{SessionConfig, TurnOrder};
pub use error::{Error, Result};
pub use search::{MoveSelector, SearchResult, choose_computer_move, minimax};
pub use session::{GameSummary, Session};
pub use tictactoe::{Board, Cell, Outcome, Symbol};
