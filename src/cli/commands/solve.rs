//! Solve command - evaluate a position with the full minimax search

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    search::{SearchResult, SearchStats, maximizing_for, minimax_with_stats},
    tictactoe::{Board, Cell, Outcome, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a board position")]
pub struct SolveArgs {
    /// Board as nine cells, e.g. "O23/4X6/789" or "O.. .X. ..."
    pub board: String,

    /// Side to move; inferred from the piece counts when omitted (X moves on equal counts)
    #[arg(long)]
    pub to_move: Option<Symbol>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// Analysis of one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub board: String,
    pub to_move: Symbol,
    pub outcome: Outcome,
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Symbol to move given how many of each piece are on the board
pub fn infer_to_move(board: &Board) -> Symbol {
    let count = |cell| board.cells().iter().filter(|&&c| c == cell).count();
    if count(Cell::X) > count(Cell::O) {
        Symbol::O
    } else {
        Symbol::X
    }
}

pub fn analyze(board: &Board, to_move: Symbol) -> Analysis {
    let (result, stats) = minimax_with_stats(board, maximizing_for(to_move));
    Analysis {
        board: board.to_string().replace('\n', "/"),
        to_move,
        outcome: board.outcome(),
        result,
        stats,
    }
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("could not parse board '{}'", args.board))?;
    let to_move = args.to_move.unwrap_or_else(|| infer_to_move(&board));
    let analysis = analyze(&board, to_move);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    print_section("Position");
    print_board(&mut stdout, &board)?;
    print_kv("To move", &to_move.to_string());
    print_kv("Outcome", &format!("{:?}", analysis.outcome));

    print_section("Minimax");
    let value = match analysis.result.score {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    };
    print_kv("Value", &format!("{} ({value})", analysis.result.score));
    match analysis.result.best_move {
        Some(position) => print_kv("Best move", &position.to_string()),
        None => print_kv("Best move", "none (game over)"),
    }
    print_kv("Nodes", &analysis.stats.nodes.to_string());
    print_kv("Leaves", &analysis.stats.leaves.to_string());

    Ok(())
}
