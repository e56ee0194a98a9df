//! Sessions driven by scripted contestants, watched through observers.

use std::sync::{Arc, Mutex};

use noughts::{
    Board, Outcome, Session, SessionConfig, Symbol, TurnOrder,
    adapters::ScriptedContestant,
    ports::SessionObserver,
    tictactoe::Move,
};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

#[derive(Debug, Default)]
struct Events {
    starts: usize,
    moves: Vec<Move>,
    boards: Vec<Board>,
    outcome: Option<Outcome>,
}

#[derive(Clone, Default)]
struct RecordingObserver(Arc<Mutex<Events>>);

impl SessionObserver for RecordingObserver {
    fn on_game_start(&mut self, board: &Board, _first: Symbol) -> noughts::Result<()> {
        let mut events = self.0.lock().unwrap();
        events.starts += 1;
        events.boards.push(*board);
        Ok(())
    }

    fn on_move(&mut self, board: &Board, mv: Move) -> noughts::Result<()> {
        let mut events = self.0.lock().unwrap();
        events.moves.push(mv);
        events.boards.push(*board);
        Ok(())
    }

    fn on_game_end(&mut self, _board: &Board, outcome: Outcome) -> noughts::Result<()> {
        self.0.lock().unwrap().outcome = Some(outcome);
        Ok(())
    }
}

#[test]
fn observer_sees_every_move_in_order() {
    let recorder = RecordingObserver::default();
    let config = SessionConfig::new(Symbol::O)
        .with_first_turn(TurnOrder::Computer)
        .with_seed(5);
    let mut session = Session::new(config).with_observer(recorder.clone());
    let mut human = ScriptedContestant::new("script", 1..=9);

    let summary = session.play(&mut human).unwrap();
    let events = recorder.0.lock().unwrap();

    assert_eq!(events.starts, 1);
    assert!(events.boards[0].is_empty());
    assert_eq!(events.moves, summary.record.moves);
    assert_eq!(events.moves[0].symbol, Symbol::X);
    assert_eq!(events.outcome, Some(summary.outcome));

    // Each reported board holds exactly the moves made so far.
    for (made, board) in events.boards.iter().enumerate() {
        assert_eq!(board.occupied_count(), made);
    }
    assert_eq!(events.boards.last(), Some(&summary.board));
}

#[test]
fn random_humans_never_beat_the_computer() {
    let mut rng = StdRng::seed_from_u64(17);

    for game in 0..60u64 {
        let human_symbol = if game % 2 == 0 { Symbol::X } else { Symbol::O };
        let first = if game % 3 == 0 {
            TurnOrder::Computer
        } else {
            TurnOrder::Human
        };
        let config = SessionConfig::new(human_symbol)
            .with_first_turn(first)
            .with_seed(game);

        // A shuffled permutation repeated: occupied picks are rejected and
        // the next entry is tried.
        let mut order: Vec<usize> = (1..=9).collect();
        order.shuffle(&mut rng);
        let script: Vec<usize> = order.iter().copied().cycle().take(45).collect();
        let mut human = ScriptedContestant::new("random", script);

        let summary = Session::new(config).play(&mut human).unwrap();
        assert!(
            !summary.human_won(),
            "game {game}: human won with {:?}",
            summary.record.moves
        );
        assert!(summary.outcome.is_over());
    }
}
