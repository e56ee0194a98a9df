//! Session setup gathered from flags, an optional JSON file, and prompts

use std::{
    io::{BufRead, Write},
    path::Path,
};

use super::{console::Console, output};
use crate::{
    Result,
    app::{SessionConfig, SessionFile, TurnOrder},
    tictactoe::Symbol,
};

/// Setup values known before any prompting; `None` means "ask"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupChoices {
    pub symbol: Option<Symbol>,
    pub first: Option<TurnOrder>,
    pub seed: Option<u64>,
}

impl SetupChoices {
    /// Combine command-line flags with an optional config file.
    ///
    /// Flags win over the file; a field set by neither stays `None` and is
    /// asked for by [`SetupChoices::complete`].
    pub fn resolve(
        symbol: Option<Symbol>,
        first: Option<TurnOrder>,
        seed: Option<u64>,
        config_path: Option<&Path>,
    ) -> Result<Self> {
        let file = config_path
            .map(SessionFile::from_json_file)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            symbol: symbol.or(file.human_symbol),
            first: first.or(file.first_turn),
            seed: seed.or(file.seed),
        })
    }

    /// Ask for whatever is still missing and build the session config
    pub fn complete<R: BufRead, W: Write>(
        self,
        console: &mut Console<R, W>,
    ) -> Result<SessionConfig> {
        let human_symbol = match self.symbol {
            Some(symbol) => symbol,
            None => {
                console.say("First things first. Please select the symbol you would like to use.")?;
                console.ask(output::symbol_prompt(), |answer| answer.parse().ok())?
            }
        };
        console.say("")?;
        console.say(&output::symbols_chosen(human_symbol, human_symbol.opponent()))?;

        let first_turn = match self.first {
            Some(first) => first,
            None => {
                console.say("Next, decide who goes first.")?;
                console.ask(output::turn_order_prompt(), |answer| answer.parse().ok())?
            }
        };

        let mut config = SessionConfig::new(human_symbol).with_first_turn(first_turn);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}
