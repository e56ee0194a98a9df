//! Rules engine properties checked over every reachable board.

mod common;

use noughts::{
    Board, Error, Outcome, Symbol,
    tictactoe::{has_won, is_terminal, score},
};

#[test]
fn at_most_one_side_has_a_line() {
    let boards = common::reachable_boards();
    assert!(boards.len() > 5_000, "walk found only {} boards", boards.len());

    for board in &boards {
        assert!(
            !(has_won(board, Symbol::X) && has_won(board, Symbol::O)),
            "both sides won on\n{board}"
        );
    }
}

#[test]
fn available_and_occupied_partition_the_board() {
    for board in common::reachable_boards() {
        let available = board.available_moves();
        assert_eq!(available.len() + board.occupied_count(), 9);
        assert!(available.windows(2).all(|w| w[0] < w[1]));
        for position in available {
            assert!(!board.is_occupied(position).unwrap());
        }
    }
}

#[test]
fn score_matches_outcome() {
    for board in common::reachable_boards() {
        let expected = match board.outcome() {
            Outcome::Win(Symbol::X) => 1,
            Outcome::Win(Symbol::O) => -1,
            Outcome::Draw | Outcome::Ongoing => 0,
        };
        assert_eq!(score(&board), expected, "score mismatch on\n{board}");
        assert_eq!(is_terminal(&board), board.outcome().is_over());
    }
}

#[test]
fn rejected_placement_leaves_board_untouched() {
    let mut board: Board = "X.O/.../...".parse().unwrap();
    let before = board;

    for position in [0, 1, 3, 10] {
        let err = board.place(position, Symbol::O).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { position: p } if p == position));
        assert_eq!(board, before);
    }

    assert!(matches!(board.get(0), Err(Error::InvalidPosition { .. })));
    assert!(matches!(board.get(10), Err(Error::InvalidPosition { .. })));
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert!(board.available_moves().is_empty());
    assert_eq!(board.outcome(), Outcome::Draw);
    assert_eq!(score(&board), 0);
}

#[test]
fn completed_row_wins_before_board_is_full() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(board.outcome(), Outcome::Win(Symbol::X));
    assert!(board.is_terminal());
    assert_eq!(score(&board), 1);
}

#[test]
fn win_on_last_cell_beats_draw() {
    // X O X
    // O X O
    // O X X  <- last X completes the diagonal on a full board
    let board: Board = "XOX/OXO/OXX".parse().unwrap();
    assert!(board.is_full());
    assert_eq!(board.outcome(), Outcome::Win(Symbol::X));
}
