//! Board representation and basic operations
//!
//! Positions are numbered 1-9 in row-major order, matching the numbers a
//! player sees on an empty board:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A side in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the opposing symbol
    pub fn opponent(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Convert symbol to the cell it occupies
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(Error::InvalidSymbol {
                input: other.to_string(),
            }),
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
            Cell::Empty => None,
        }
    }

    /// Glyph shown for this cell when it sits at `position`.
    ///
    /// Empty cells show their own position number.
    pub fn glyph(self, position: usize) -> char {
        match self.symbol() {
            Some(symbol) => symbol.to_char(),
            None => char::from_digit(position as u32, 10).unwrap_or('?'),
        }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '1'..='9' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// The 3x3 grid
///
/// `Board` is `Copy` (9 bytes), so exploring a hypothetical move never
/// touches the caller's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Raw cells, index 0 is position 1
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    fn index(position: usize) -> Option<usize> {
        (1..=CELL_COUNT)
            .contains(&position)
            .then(|| position - 1)
    }

    /// Get the cell at a position (1-9)
    pub fn get(&self, position: usize) -> Result<Cell> {
        Self::index(position)
            .map(|idx| self.cells[idx])
            .ok_or(Error::InvalidPosition { position })
    }

    /// Check whether a position (1-9) holds a symbol
    pub fn is_occupied(&self, position: usize) -> Result<bool> {
        Ok(self.get(position)? != Cell::Empty)
    }

    /// Mark `position` with `symbol`.
    ///
    /// Fails with [`Error::InvalidMove`] when the position is out of range or
    /// already taken; the board is left untouched in that case.
    pub fn place(&mut self, position: usize, symbol: Symbol) -> Result<()> {
        match Self::index(position) {
            Some(idx) if self.cells[idx] == Cell::Empty => {
                self.cells[idx] = symbol.to_cell();
                Ok(())
            }
            _ => Err(Error::InvalidMove { position }),
        }
    }

    /// Return a copy of this board with `position` marked by `symbol`
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, position: usize, symbol: Symbol) -> Result<Board> {
        let mut next = *self;
        next.place(position, symbol)?;
        Ok(next)
    }

    /// Unoccupied positions in ascending order
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// True when no cell has been played yet
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// True when every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Produce the framed grid shown to a player
    pub fn render(&self) -> BoardView {
        BoardView { board: *self }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact three-line form, empty cells shown by position number
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.glyph(i + 1))?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parse a board from nine cell characters.
///
/// `X`/`O` mark occupied cells, `.` or a digit marks an empty one. Whitespace,
/// `/` and `|` are ignored, so `"O23/4X6/789"` and `"O.. .X. ..."` both work.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i + 1,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }
}

/// Displayable framed grid produced by [`Board::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    board: Board,
}

impl BoardView {
    /// Rows of glyphs, top to bottom
    pub fn rows(&self) -> [[char; 3]; 3] {
        let mut rows = [[' '; 3]; 3];
        for (idx, &cell) in self.board.cells.iter().enumerate() {
            rows[idx / 3][idx % 3] = cell.glyph(idx + 1);
        }
        rows
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|-------------|")?;
        writeln!(f, "| Tic Tac Toe |")?;
        writeln!(f, "|-------------|")?;
        writeln!(f, "|             |")?;
        for [a, b, c] in self.rows() {
            writeln!(f, "|    {a} {b} {c}    |")?;
        }
        writeln!(f, "|             |")?;
        write!(f, "|-------------|")
    }
}
