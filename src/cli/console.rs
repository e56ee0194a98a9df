//! Terminal adapters: line-based prompting, the human contestant and the
//! board-printing observer.
//!
//! Both adapters are generic over their streams so the whole interactive
//! flow can be driven from in-memory buffers.

use std::io::{BufRead, Write};

use super::output;
use crate::{
    Error, Result,
    ports::{Contestant, SessionObserver},
    tictactoe::{Board, Move, Outcome, Symbol, winning_line},
};

/// Line-oriented prompt/answer console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Read one line; [`Error::InputClosed`] at end of input
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read from console".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }

    /// Keep asking `prompt` until `parse` accepts the trimmed answer.
    pub fn ask<T>(&mut self, prompt: &str, mut parse: impl FnMut(&str) -> Option<T>) -> Result<T> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            if let Some(value) = parse(line.trim()) {
                return Ok(value);
            }
            writeln!(self.output, "{}", output::INVALID_CHOICE)?;
        }
    }

    /// Ask a Yes/No question
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.ask(prompt, |answer| match answer.to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(true),
            "no" | "n" => Some(false),
            _ => None,
        })
    }
}

/// The human at the keyboard. Only positions that are on the board and
/// still free are accepted; anything else is asked again.
impl<R, W> Contestant for Console<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn select_move(&mut self, board: &Board, symbol: Symbol) -> Result<usize> {
        let first = !board.cells().contains(&symbol.to_cell());
        let available = board.available_moves();
        self.ask(&output::move_prompt(symbol, first), |answer| {
            answer
                .parse::<usize>()
                .ok()
                .filter(|position| available.contains(position))
        })
    }

    fn name(&self) -> &str {
        "You"
    }

    fn reject_move(&mut self, _position: usize, _reason: &Error) -> Result<()> {
        self.say(output::INVALID_CHOICE)
    }
}

/// Prints the board after every move and announces the result
pub struct ConsoleObserver<W> {
    output: W,
    human: Symbol,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(output: W, human: Symbol) -> Self {
        Self { output, human }
    }
}

impl<W: Write + Send> SessionObserver for ConsoleObserver<W> {
    fn on_game_start(&mut self, _board: &Board, first: Symbol) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Cool. Let's start the game.")?;
        if first != self.human {
            writeln!(self.output, "The AI opens.")?;
        }
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> Result<()> {
        writeln!(self.output)?;
        let line = if mv.symbol == self.human {
            output::human_moved(mv.symbol, mv.position)
        } else {
            output::computer_moved(mv.symbol, mv.position)
        };
        writeln!(self.output, "{line}")?;
        output::print_board(&mut self.output, board)
    }

    fn on_game_end(&mut self, board: &Board, outcome: Outcome) -> Result<()> {
        if let Outcome::Win(winner) = outcome
            && let Some(line) = winning_line(board, winner)
        {
            writeln!(self.output, "{}", output::winning_line_message(winner, line))?;
        }
        writeln!(self.output, "{}", output::outcome_message(outcome, self.human))?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let mut console = console("Z\n0\nx\n");
        let symbol = console
            .ask(output::symbol_prompt(), |answer| answer.parse::<Symbol>().ok())
            .unwrap();
        assert_eq!(symbol, Symbol::X);
        let text = transcript(console);
        assert_eq!(text.matches(output::INVALID_CHOICE).count(), 2);
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut console = console("maybe\n");
        assert!(matches!(
            console.confirm(output::replay_prompt()),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn test_confirm() {
        let mut yes = console("Yes\n");
        assert!(yes.confirm(output::replay_prompt()).unwrap());
        let mut no = console("no\n");
        assert!(!no.confirm(output::replay_prompt()).unwrap());
    }

    #[test]
    fn test_select_move_skips_occupied_and_garbage() {
        let board: Board = "X23/4O6/789".parse().unwrap();
        let mut console = console("five\n1\n5\n10\n9\n");
        let position = console.select_move(&board, Symbol::X).unwrap();
        assert_eq!(position, 9);

        let text = transcript(console);
        assert!(text.starts_with("Where would you like to place your next 'X'?: "));
        assert_eq!(text.matches(output::INVALID_CHOICE).count(), 4);
    }

    #[test]
    fn test_select_move_first_prompt() {
        let board: Board = "X23/456/789".parse().unwrap();
        let mut console = console("5\n");
        assert_eq!(console.select_move(&board, Symbol::O).unwrap(), 5);
        assert!(transcript(console).contains("your first 'O'"));
    }

    #[test]
    fn test_observer_announces_moves() {
        let mut observer = ConsoleObserver::new(Vec::new(), Symbol::X);
        let board: Board = "X23/4O6/789".parse().unwrap();
        observer
            .on_move(&board, Move {
                position: 5,
                symbol: Symbol::O,
            })
            .unwrap();
        observer.on_game_end(&board, Outcome::Draw).unwrap();

        let text = String::from_utf8(observer.output).unwrap();
        assert!(text.contains("The AI placed its 'O' at position 5."));
        assert!(text.contains("|    4 O 6    |"));
        assert!(text.contains("tie"));
        assert!(!text.contains("in a row"));
    }

    #[test]
    fn test_observer_announces_winning_line() {
        let mut observer = ConsoleObserver::new(Vec::new(), Symbol::X);
        // O O O
        // X X .
        // X . .
        let board: Board = "OOO/XX./X..".parse().unwrap();
        observer
            .on_game_end(&board, Outcome::Win(Symbol::O))
            .unwrap();

        let text = String::from_utf8(observer.output).unwrap();
        assert!(text.contains("Three 'O' in a row at positions 1, 2 and 3."));
        assert!(text.contains("The AI has beaten you."));
    }
}
