//! End-to-end checks of log-derived game state and the computer policy.

use noughts_core::{
    Board, Cell, Difficulty, GameStatus, PlayerRegistry, Position, Symbol, Turn, TurnLog,
    active_player, choose_move, derive_board, derive_status, find_best_move, is_draw, winner_name,
    winning_symbol,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).expect("on the board")
}

/// Builds a log the way the session does: the mover is always derived.
fn play(cells: &[(usize, usize)]) -> TurnLog {
    let mut log = TurnLog::new();
    for &(row, col) in cells {
        let player = active_player(&log);
        log.record(Turn::new(pos(row, col), player));
    }
    log
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let log = play(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]);
    let players: Vec<Symbol> = log.chronological().map(|t| t.player()).collect();
    assert_eq!(
        players,
        [Symbol::X, Symbol::O, Symbol::X, Symbol::O, Symbol::X]
    );
    assert_eq!(active_player(&log), Symbol::O);
}

#[test]
fn test_top_row_winner_name() {
    let x = Cell::Occupied(Symbol::X);
    let e = Cell::Empty;
    let board = Board::from_rows([[x, x, x], [e, e, e], [e, e, e]]);
    let mut players = PlayerRegistry::default();

    assert_eq!(winner_name(&board, &players), Some("Player 1"));

    players.rename(Symbol::X, "Grace");
    assert_eq!(winner_name(&board, &players), Some("Grace"));
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let log = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    let board = derive_board(&log);

    assert!(board.is_full());
    assert_eq!(winning_symbol(&board), None);
    assert!(is_draw(&log, None));
    assert_eq!(derive_status(&log), GameStatus::Draw);
}

#[test]
fn test_board_is_pure_function_of_log() {
    let log = play(&[(1, 1), (0, 0), (2, 1)]);
    let first = derive_board(&log);
    for _ in 0..5 {
        assert_eq!(derive_board(&log), first);
    }
    assert_eq!(first.get(pos(2, 1)), Cell::Occupied(Symbol::X));
}

#[test]
fn test_computer_game_never_reuses_a_cell() {
    // Two Easy computers fill the board; every turn must land on an empty cell.
    let mut rng = StdRng::seed_from_u64(42);
    let mut log = TurnLog::new();
    while derive_status(&log) == GameStatus::InProgress {
        let board = derive_board(&log);
        let mover = active_player(&log);
        let turn = choose_move(&board, Difficulty::Easy, mover, mover.opponent(), &mut rng)
            .expect("game in progress has empty cells");
        assert!(board.is_empty(turn.position()));
        log.record(turn);
    }
    assert!(log.len() <= 9);
}

#[test]
fn test_hard_computer_takes_the_win() {
    // X: (0,0) (0,1) (2,0)   O: (1,0) (1,1)   -> O can win at (1,2), X threatens (0,2).
    let log = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0)]);
    let board = derive_board(&log);
    assert_eq!(active_player(&log), Symbol::O);
    assert_eq!(find_best_move(&board, Symbol::X), Some(pos(0, 2)));

    let mut rng = StdRng::seed_from_u64(9);
    let hard = choose_move(&board, Difficulty::Hard, Symbol::O, Symbol::X, &mut rng);
    let medium = choose_move(&board, Difficulty::Medium, Symbol::O, Symbol::X, &mut rng);

    assert_eq!(hard.map(|t| t.position()), Some(pos(1, 2)));
    assert_eq!(medium.map(|t| t.position()), Some(pos(0, 2)));
}

#[test]
fn test_log_serializes_newest_first() {
    let log = play(&[(0, 0), (1, 1)]);
    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json["turns"][0]["player"], "O");
    assert_eq!(json["turns"][1]["player"], "X");
}
