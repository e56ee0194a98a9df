//! Application layer: session setup decided once before play starts.
//!
//! # Usage
//!
//! ```
//! use noughts::app::{SessionConfig, TurnOrder};
//! use noughts::tictactoe::Symbol;
//!
//! let config = SessionConfig::new(Symbol::X).with_first_turn(TurnOrder::Computer);
//! assert_eq!(config.first_symbol(), Symbol::O);
//! ```

pub mod config;

pub use config::{SessionConfig, SessionFile, TurnOrder};
