//! Winning line analysis

use super::{Cell, Symbol};

/// Winning lines as 0-based cell indices
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a symbol has three in a row
    pub fn has_won(cells: &[Cell; 9], symbol: Symbol) -> bool {
        Self::completed_line(cells, symbol).is_some()
    }

    /// First line fully held by `symbol`, as 1-based positions
    pub fn completed_line(cells: &[Cell; 9], symbol: Symbol) -> Option<[usize; 3]> {
        let target = symbol.to_cell();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&idx| cells[idx] == target))
            .map(|line| line.map(|idx| idx + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Symbol::X));
        assert!(!LineAnalyzer::has_won(&cells, Symbol::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Symbol::O));
        assert!(!LineAnalyzer::has_won(&cells, Symbol::X));
    }

    #[test]
    fn test_has_won_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(
            LineAnalyzer::completed_line(&cells, Symbol::X),
            Some([3, 5, 7])
        );
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(!LineAnalyzer::has_won(&cells, Symbol::X));
        assert_eq!(LineAnalyzer::completed_line(&cells, Symbol::O), None);
    }
}
