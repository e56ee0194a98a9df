//! Console text for the interactive game

use std::io::Write;

use crate::{
    Result,
    tictactoe::{Board, Outcome, Symbol},
};

pub const INVALID_CHOICE: &str = "Sorry, that choice was invalid. Please try again.";

/// Print the welcome text followed by the numbered empty board
pub fn print_welcome(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Welcome to a round of Tic Tac Toe against the AI.")?;
    writeln!(out, "Below you see what the game board looks like.")?;
    writeln!(
        out,
        "The numbers represent the spots where a symbol can be placed."
    )?;
    writeln!(
        out,
        "To place your symbol in a spot, enter the number shown in that spot."
    )?;
    writeln!(out)?;
    print_board(out, &Board::new())
}

/// Print the framed board followed by a blank line
pub fn print_board(out: &mut impl Write, board: &Board) -> Result<()> {
    writeln!(out, "{}", board.render())?;
    writeln!(out)?;
    Ok(())
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("{}", kv_line(key, value));
}

fn kv_line(key: &str, value: &str) -> String {
    format!("  {:20} {}", format!("{}:", key), value)
}

pub fn symbol_prompt() -> &'static str {
    "Enter either 'X' or 'O' (capital o, not zero) and hit ENTER: "
}

pub fn turn_order_prompt() -> &'static str {
    "Enter 'Me' to go first or 'AI' to let the AI go first, then hit ENTER: "
}

pub fn replay_prompt() -> &'static str {
    "Would you like to play again? Enter 'Yes' or 'No': "
}

/// Prompt for the human's move; `first` on their opening move
pub fn move_prompt(symbol: Symbol, first: bool) -> String {
    let which = if first { "first" } else { "next" };
    format!("Where would you like to place your {which} '{symbol}'?: ")
}

pub fn symbols_chosen(human: Symbol, computer: Symbol) -> String {
    format!("Awesome! Your symbol is '{human}' and the AI's symbol is '{computer}'.")
}

pub fn computer_moved(symbol: Symbol, position: usize) -> String {
    format!("The AI placed its '{symbol}' at position {position}.")
}

pub fn human_moved(symbol: Symbol, position: usize) -> String {
    format!("Your '{symbol}' has been placed at position {position}.")
}

pub fn winning_line_message(symbol: Symbol, line: [usize; 3]) -> String {
    let [a, b, c] = line;
    format!("Three '{symbol}' in a row at positions {a}, {b} and {c}.")
}

/// Closing line for a finished game, from the human's point of view
pub fn outcome_message(outcome: Outcome, human: Symbol) -> &'static str {
    match outcome {
        Outcome::Win(symbol) if symbol == human => "You won! The AI did not see that coming.",
        Outcome::Win(_) => "The AI has beaten you. The game is over.",
        Outcome::Draw => "There are no more moves left. The game ends in a tie.",
        Outcome::Ongoing => "The game is still going.",
    }
}
