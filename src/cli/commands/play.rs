//! Play command - interactive games against the computer

use std::{
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    Error,
    app::{SessionConfig, TurnOrder},
    cli::{
        config::SetupChoices,
        console::{Console, ConsoleObserver},
        output,
    },
    session::{GameSummary, Session},
    tictactoe::Symbol,
};

#[derive(Parser, Debug, Clone, Default)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Symbol you play with (X or O); asked interactively when omitted
    #[arg(long, short = 's')]
    pub symbol: Option<Symbol>,

    /// Who moves first (Me or AI); asked interactively when omitted
    #[arg(long, short = 'f')]
    pub first: Option<TurnOrder>,

    /// Random seed for the computer's opening move
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON session config; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Exit after one game instead of offering a rematch
    #[arg(long)]
    pub no_replay: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout());
    match run(&args, &mut console, io::stdout) {
        Ok(summaries) => {
            info!(games = summaries.len(), "play finished");
            Ok(())
        }
        // End of input is the player walking away, not a failure.
        Err(Error::InputClosed) => {
            writeln!(console.output())?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Run the full interactive flow: setup, games, rematches.
///
/// `observer_output` supplies the stream each game's board printer
/// writes to.
pub fn run<R, W, O>(
    args: &PlayArgs,
    console: &mut Console<R, W>,
    mut observer_output: impl FnMut() -> O,
) -> crate::Result<Vec<GameSummary>>
where
    R: BufRead + Send,
    W: Write + Send,
    O: Write + Send + 'static,
{
    output::print_welcome(console.output())?;

    let choices = SetupChoices::resolve(
        args.symbol,
        args.first,
        args.seed,
        args.config.as_deref(),
    )?;
    let mut config: SessionConfig = choices.complete(console)?;

    let mut summaries = Vec::new();
    loop {
        let mut session = Session::new(config)
            .with_observer(ConsoleObserver::new(observer_output(), config.human_symbol));
        summaries.push(session.play(console)?);

        if args.no_replay || !console.confirm(output::replay_prompt())? {
            console.say("")?;
            console.say("Ok then, see you next time.")?;
            return Ok(summaries);
        }
        config = config.rematch();
    }
}
