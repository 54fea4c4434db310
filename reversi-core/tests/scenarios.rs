//! Scenario tests for the board engine
//!
//! Whole-game and hand-built positions exercised through the public API.

use reversi_core::{
    Board, BoardConfig, Cell, EngineError, GameState, Player, Pos, RejectReason, Status, Winner,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn pos(x: u8, y: u8) -> Pos {
    Pos::new(x, y)
}

/// Black has no legal move here; White can play (2,0)
fn black_stuck_position() -> GameState {
    let board = Board::from_rows(&[
        "O X . .",
        ". . . .",
        ". . . .",
        ". . . .",
    ])
    .unwrap();
    GameState::from_position(board, Player::Black)
}

/// Nine-move game from the opening that wipes out White
const WIPEOUT: [(u8, u8); 9] = [
    (2, 3),
    (2, 2),
    (4, 5),
    (3, 5),
    (2, 5),
    (5, 3),
    (6, 3),
    (2, 4),
    (2, 1),
];

// ============================================================================
// OPENING
// ============================================================================

#[test]
fn test_initialize_state() {
    let game = GameState::new();
    let score = game.score();
    assert_eq!(score.black, 2);
    assert_eq!(score.white, 2);
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.status(), Status::InProgress);

    assert_eq!(game.cell(pos(3, 4)).unwrap(), Cell::Black);
    assert_eq!(game.cell(pos(4, 3)).unwrap(), Cell::Black);
    assert_eq!(game.cell(pos(3, 3)).unwrap(), Cell::White);
    assert_eq!(game.cell(pos(4, 4)).unwrap(), Cell::White);
}

#[test]
fn test_black_opening_moves_each_flip_one() {
    let opening = GameState::new();
    let moves = opening.legal_moves(Player::Black);
    assert_eq!(moves.len(), 4);

    for mv in moves {
        let mut game = opening.clone();
        let record = game.attempt_move(mv).unwrap();
        assert_eq!(record.player, Player::Black);
        assert_eq!(record.flipped.len(), 1, "opening move {}", mv);
        assert_eq!(game.cell(mv).unwrap(), Cell::Black);
    }
}

#[test]
fn test_diagonal_touch_without_bracket_rejected() {
    let mut game = GameState::new();
    let before = game.snapshot();

    let err = game.attempt_move(pos(2, 4)).unwrap_err();
    assert!(err.is_invalid_move());
    assert_eq!(err.to_string(), "invalid move at (2, 4): no discs would be captured");
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_white_opening_replies() {
    let mut game = GameState::new();
    game.attempt_move(pos(2, 3)).unwrap();
    assert_eq!(
        game.legal_moves(Player::White),
        vec![pos(2, 2), pos(4, 2), pos(2, 4)]
    );
}

// ============================================================================
// PASSES AND TERMINATION
// ============================================================================

#[test]
fn test_player_without_moves() {
    let mut game = black_stuck_position();
    assert!(!game.has_any_legal_move(Player::Black));
    assert!(game.has_any_legal_move(Player::White));

    let before = game.clone();
    for p in before.board().positions() {
        let err = game.attempt_move(p).unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidMove { .. }),
            "unexpected error at {}: {}",
            p,
            err
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_wipeout_game() {
    let mut game = GameState::new();
    let mut records = Vec::new();
    for &(x, y) in &WIPEOUT {
        records.push(game.attempt_move(pos(x, y)).unwrap());
    }

    // Colors strictly alternate until the last move
    for (i, record) in records.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::Black } else { Player::White };
        assert_eq!(record.player, expected);
    }
    assert!(records[..8].iter().all(|r| r.result.is_none()));

    let result = records[8].result.expect("last move ends the game");
    assert_eq!(result.winner, Winner::Black);
    assert_eq!((result.black_count, result.white_count), (13, 0));
    assert_eq!(result.to_string(), "Black 13 : White 0 - Black wins");

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, Status::Terminal);
    assert_eq!(snapshot.result, Some(result));

    assert_eq!(
        game.attempt_move(pos(0, 0)).unwrap_err(),
        EngineError::GameAlreadyOver
    );
    assert_eq!(
        game.attempt_move(pos(9, 9)).unwrap_err(),
        EngineError::GameAlreadyOver
    );
}

#[test]
fn test_initialize_after_game_over() {
    let mut game = GameState::new();
    for &(x, y) in &WIPEOUT {
        game.attempt_move(pos(x, y)).unwrap();
    }
    assert!(game.is_over());

    game.initialize();
    assert_eq!(game, GameState::new());
    assert!(game.attempt_move(pos(2, 3)).is_ok());
}

#[test]
fn test_independent_games() {
    let mut first = GameState::new();
    let second = GameState::new();
    first.attempt_move(pos(2, 3)).unwrap();

    assert_eq!(first.current_player(), Player::White);
    assert_eq!(second.current_player(), Player::Black);
    assert_eq!(second.score().black, 2);
}

// ============================================================================
// ERRORS AND BOARD SIZES
// ============================================================================

#[test]
fn test_occupied_rejection_reason() {
    let mut game = GameState::new();
    assert_eq!(
        game.attempt_move(pos(4, 4)).unwrap_err(),
        EngineError::InvalidMove {
            pos: pos(4, 4),
            reason: RejectReason::Occupied
        }
    );
}

#[test]
fn test_out_of_bounds_on_small_board() {
    let mut game = GameState::with_size(4, 4).unwrap();
    let err = game.attempt_move(pos(4, 1)).unwrap_err();
    assert!(matches!(err, EngineError::OutOfBounds { width: 4, height: 4, .. }));
}

#[test]
fn test_invalid_board_sizes() {
    assert_eq!(
        GameState::with_size(5, 8).unwrap_err(),
        EngineError::InvalidDimensions { width: 5, height: 8 }
    );
    assert!(BoardConfig::new(8, 30).new_game().is_err());
}

#[test]
fn test_rectangular_board_plays_to_end() {
    let mut game = BoardConfig::new(6, 4).new_game().unwrap();
    let mut placements = 0;
    while !game.is_over() {
        let moves = game.legal_moves(game.current_player());
        game.attempt_move(moves[0]).unwrap();
        placements += 1;
        assert!(placements <= 20);
    }

    let result = game.result().unwrap();
    let score = game.score();
    assert_eq!(score.total(), 24);
    assert_eq!(result.winner, score.winner());
}

#[test]
fn test_snapshot_serializes() {
    let mut game = GameState::new();
    game.attempt_move(pos(2, 3)).unwrap();

    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["current_player"], "White");
    assert_eq!(value["status"], "InProgress");
    assert_eq!(value["grid"][2][3], "Black");
    assert!(value["result"].is_null());
}
