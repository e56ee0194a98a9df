//! Session configuration.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::maximizing_for,
    tictactoe::Symbol,
};

/// Who makes the first move of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOrder {
    #[default]
    Human,
    Computer,
}

impl TurnOrder {
    /// The order used for a rematch
    pub fn swapped(self) -> Self {
        match self {
            TurnOrder::Human => TurnOrder::Computer,
            TurnOrder::Computer => TurnOrder::Human,
        }
    }
}

impl fmt::Display for TurnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOrder::Human => write!(f, "Me"),
            TurnOrder::Computer => write!(f, "AI"),
        }
    }
}

/// Accepts the console answers `Me`/`AI` as well as `human`/`computer`.
impl FromStr for TurnOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "me" | "human" => Ok(TurnOrder::Human),
            "ai" | "computer" => Ok(TurnOrder::Computer),
            _ => Err(Error::InvalidTurnOrder {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// Configuration for one game session.
///
/// The symbol binding is fixed when the session starts and is never
/// reassigned mid-game.
///
/// # Examples
///
/// ```
/// use noughts::app::{SessionConfig, TurnOrder};
/// use noughts::tictactoe::Symbol;
///
/// let config = SessionConfig::new(Symbol::O)
///     .with_first_turn(TurnOrder::Computer)
///     .with_seed(42);
/// assert_eq!(config.computer_symbol(), Symbol::X);
/// assert!(config.computer_maximizes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Symbol played by the human
    pub human_symbol: Symbol,
    /// Side that opens the game
    pub first_turn: TurnOrder,
    /// Random seed for the computer's opening move
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for a human playing `human_symbol`.
    ///
    /// The human moves first and no seed is set.
    pub fn new(human_symbol: Symbol) -> Self {
        Self {
            human_symbol,
            first_turn: TurnOrder::default(),
            seed: None,
        }
    }

    /// Set who opens the game.
    pub fn with_first_turn(mut self, first_turn: TurnOrder) -> Self {
        self.first_turn = first_turn;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn computer_symbol(&self) -> Symbol {
        self.human_symbol.opponent()
    }

    /// Whether the computer is the maximizing side for the whole session
    pub fn computer_maximizes(&self) -> bool {
        maximizing_for(self.computer_symbol())
    }

    /// Symbol that opens the game
    pub fn first_symbol(&self) -> Symbol {
        match self.first_turn {
            TurnOrder::Human => self.human_symbol,
            TurnOrder::Computer => self.computer_symbol(),
        }
    }

    /// Configuration for the next game: same symbols, starting side swapped,
    /// and a derived seed so the rematch does not repeat the opening.
    pub fn rematch(&self) -> Self {
        Self {
            human_symbol: self.human_symbol,
            first_turn: self.first_turn.swapped(),
            seed: self.seed.map(|s| s.wrapping_add(1)),
        }
    }
}

/// Session settings as written in a JSON config file.
///
/// Every field is optional; a field the file leaves out stays `None` so
/// the player can still be asked for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub human_symbol: Option<Symbol>,
    pub first_turn: Option<TurnOrder>,
    pub seed: Option<u64>,
}

impl SessionFile {
    /// Load settings from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Symbol::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.human_symbol, Symbol::X);
        assert_eq!(config.computer_symbol(), Symbol::O);
        assert!(!config.computer_maximizes());
        assert_eq!(config.first_symbol(), Symbol::X);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_computer_first() {
        let config = SessionConfig::new(Symbol::X).with_first_turn(TurnOrder::Computer);
        assert_eq!(config.first_symbol(), Symbol::O);
    }

    #[test]
    fn test_rematch_swaps_starter() {
        let config = SessionConfig::new(Symbol::O).with_seed(10);
        let next = config.rematch();
        assert_eq!(next.human_symbol, Symbol::O);
        assert_eq!(next.first_turn, TurnOrder::Computer);
        assert_eq!(next.seed, Some(11));
        assert_eq!(next.rematch().first_turn, TurnOrder::Human);
    }

    #[test]
    fn test_turn_order_from_str() {
        assert_eq!("Me".parse::<TurnOrder>().unwrap(), TurnOrder::Human);
        assert_eq!(" ai ".parse::<TurnOrder>().unwrap(), TurnOrder::Computer);
        assert_eq!("computer".parse::<TurnOrder>().unwrap(), TurnOrder::Computer);
        assert!(matches!(
            "you".parse::<TurnOrder>(),
            Err(Error::InvalidTurnOrder { .. })
        ));
    }

    #[test]
    fn test_session_file_leaves_missing_fields_unset() {
        let file: SessionFile = serde_json::from_str(r#"{ "first_turn": "computer" }"#).unwrap();
        assert_eq!(file, SessionFile {
            human_symbol: None,
            first_turn: Some(TurnOrder::Computer),
            seed: None,
        });
    }
}
