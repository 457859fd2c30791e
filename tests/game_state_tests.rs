//! Integration tests for the game state machine

use blockfall::core::{Board, GameState};
use blockfall::types::{GameAction, Phase, PieceKind, BOARD_WIDTH};

/// First seed whose opening piece is `kind`.
fn seed_opening_with(kind: PieceKind) -> u32 {
    (1..10_000)
        .find(|&seed| {
            let mut state = GameState::new(seed);
            state.start();
            state.active().map(|p| p.kind) == Some(kind)
        })
        .expect("some seed opens with every kind")
}

fn full_row_board(rows: &[i8], hole: i8) -> Board {
    let mut board = Board::new();
    for &y in rows {
        for x in 0..BOARD_WIDTH as i8 {
            if x != hole {
                board.set(x, y, Some(PieceKind::L));
            }
        }
    }
    board
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert!(!state.started());
    assert_eq!(state.phase(), Phase::Spawning);
    assert!(state.active().is_none());

    state.start();
    assert!(state.started());
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.piece_id(), 1);

    let piece = state.active().copied().unwrap();
    assert_eq!(piece.y, 0);
    assert_eq!(
        piece.x,
        (BOARD_WIDTH / 2) as i8 - (piece.shape.width() / 2) as i8
    );
}

#[test]
fn test_commands_before_start_are_noops() {
    let mut state = GameState::new(7);
    assert!(!state.tick());
    assert!(!state.move_left());
    assert!(!state.rotate());
    assert!(state.active().is_none());
}

#[test]
fn test_move_left_stops_at_wall() {
    let mut state = GameState::new(12345);
    state.start();

    let mut steps = 0;
    while state.move_left() {
        steps += 1;
        assert!(steps <= BOARD_WIDTH as usize);
    }
    let piece = state.active().copied().unwrap();
    assert_eq!(piece.x, 0);

    // Further presses change nothing.
    assert!(!state.move_left());
    assert_eq!(state.active().copied().unwrap(), piece);
}

#[test]
fn test_gravity_eventually_locks_and_respawns() {
    let mut state = GameState::new(99);
    state.start();

    for _ in 0..BOARD_WIDTH as usize * 3 {
        state.tick();
        if state.piece_id() == 2 {
            break;
        }
    }
    assert_eq!(state.piece_id(), 2);
    assert!(state.board().cells().iter().any(|c| c.is_some()));
    let event = state.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 0);
    assert!(state.take_last_event().is_none());
}

#[test]
fn test_blocked_spawn_ends_game() {
    // Rows 0 and 1 filled in every column that any spawned piece could use.
    let board = full_row_board(&[0, 1], 0);
    let mut state = GameState::with_board(3, board.clone());
    state.start();

    assert!(state.is_game_over());
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.active().is_none());
    assert!(state.active_piece().is_none());
    assert_eq!(state.piece_id(), 0);

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ] {
        assert!(!state.apply_action(action));
    }
    assert!(!state.tick());
    assert_eq!(state.board(), &board);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_vertical_i_clears_four_rows() {
    let seed = seed_opening_with(PieceKind::I);
    let mut state = GameState::with_board(seed, full_row_board(&[16, 17, 18, 19], 9));
    state.start();

    assert!(state.rotate());
    while state.move_right() {}
    assert_eq!(state.active().unwrap().x, 9);

    for _ in 0..16 {
        assert!(state.soft_drop());
    }
    assert_eq!(state.active().unwrap().y, 16);
    state.soft_drop();

    assert_eq!(state.score(), 40);
    assert_eq!(state.lines(), 4);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
    let event = state.take_last_event().unwrap();
    assert_eq!(event.kind, PieceKind::I);
    assert_eq!(event.lines_cleared, 4);
    assert_eq!(event.score_gained, 40);
}

#[test]
fn test_score_is_ten_per_cleared_row() {
    let actions = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::SoftDrop,
        GameAction::SoftDrop,
    ];
    for seed in [1, 42, 777, 2024] {
        let mut state = GameState::new(seed);
        state.start();
        let mut i = 0usize;
        while !state.is_game_over() && i < 5000 {
            state.apply_action(actions[(i * 7 + seed as usize) % actions.len()]);
            if let Some(event) = state.take_last_event() {
                assert_eq!(event.score_gained, 10 * event.lines_cleared);
            }
            assert_eq!(state.score(), 10 * state.lines());
            i += 1;
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::Rotate,
        GameAction::MoveLeft,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
    ];
    let mut a = GameState::new(4242);
    let mut b = GameState::new(4242);
    a.start();
    b.start();

    for step in 0..400 {
        let action = script[step % script.len()];
        a.apply_action(action);
        b.apply_action(action);
        if step % 3 == 0 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_reset_after_game_over() {
    let mut state = GameState::with_board(5, full_row_board(&[0, 1], 0));
    state.start();
    assert!(state.is_game_over());

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.is_game_over());
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.score(), 0);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.piece_id(), 1);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
    assert!(state.active().is_some());
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut state = GameState::new(12345);
    state.start();
    state.tick();

    let snap = state.snapshot();
    let active = state.active_piece().unwrap();
    assert_eq!(snap.active, Some(active));
    assert_eq!(active.y, 1);
    assert_eq!(active.color_id, active.kind.color_id());
    assert_eq!(snap.board, state.board_snapshot());
    assert_eq!(snap.phase, Phase::Falling);
    assert!(!snap.game_over);
    assert!(snap.playable());
}
