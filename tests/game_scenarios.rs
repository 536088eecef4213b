use std::sync::{Arc, Mutex};

use chessboard_core::board::{BoardBuilder, Color, PieceKind, TurnState, STARTING_PLACEMENT};
use chessboard_core::game::{Game, GameEvent, MoveResult};

fn idx(row: usize, column: usize) -> usize {
    row * 8 + column
}

fn kind_at(game: &Game, index: usize) -> Option<(Color, PieceKind)> {
    game.piece_at_index(index)
        .unwrap()
        .map(|p| (p.color(), p.kind()))
}

#[test]
fn new_game_is_idempotent() {
    let mut game = Game::new();
    game.attempt_move(idx(6, 4), idx(4, 4)).unwrap();
    game.new_game();
    let once = (game.board().to_fen(), game.turn(), game.captured_white().len());
    game.new_game();
    let twice = (game.board().to_fen(), game.turn(), game.captured_white().len());

    assert_eq!(once, twice);
    assert_eq!(once.0, STARTING_PLACEMENT);
    assert_eq!(once.1, TurnState::WhiteToMove);
    assert!(game.captured_black().is_empty());
}

#[test]
fn starting_arrangement_is_standard() {
    let game = Game::new();
    let back = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for column in 0..8 {
        assert_eq!(kind_at(&game, idx(0, column)), Some((Color::Black, back[column])));
        assert_eq!(kind_at(&game, idx(1, column)), Some((Color::Black, PieceKind::Pawn)));
        assert_eq!(kind_at(&game, idx(6, column)), Some((Color::White, PieceKind::Pawn)));
        assert_eq!(kind_at(&game, idx(7, column)), Some((Color::White, back[column])));
        for row in 2..6 {
            assert_eq!(kind_at(&game, idx(row, column)), None);
        }
    }
}

#[test]
fn opening_moves_and_bishop_diagonal() {
    let mut game = Game::new();
    let bishop = *game.piece_at_index(idx(7, 5)).unwrap().unwrap();

    // Blocked by the pawn on (6, 4)
    assert!(!game.is_legal_move(&bishop, idx(7, 5), idx(5, 3)));

    let result = game.attempt_move(idx(6, 4), idx(4, 4)).unwrap();
    assert!(result.is_applied());
    assert_eq!(game.turn(), TurnState::BlackToMove);

    let result = game.attempt_move(idx(1, 3), idx(3, 3)).unwrap();
    assert!(result.is_applied());
    assert_eq!(game.turn(), TurnState::WhiteToMove);

    assert!(game.is_legal_move(&bishop, idx(7, 5), idx(5, 3)));
    assert!(game.attempt_move(idx(7, 5), idx(5, 3)).unwrap().is_applied());
    assert_eq!(kind_at(&game, idx(5, 3)), Some((Color::White, PieceKind::Bishop)));
}

#[test]
fn capture_is_recorded_before_moving() {
    let mut game = Game::new();
    game.attempt_move(idx(6, 4), idx(4, 4)).unwrap();
    game.attempt_move(idx(1, 3), idx(3, 3)).unwrap();

    let victim = *game.piece_at_index(idx(3, 3)).unwrap().unwrap();
    let result = game.attempt_move(idx(4, 4), idx(3, 3)).unwrap();
    let applied = result.applied().expect("capture should be legal");

    assert_eq!(applied.captured, Some(victim));
    assert_eq!(game.captured_black(), &[victim]);
    assert!(game.captured_white().is_empty());
    assert_eq!(kind_at(&game, idx(3, 3)), Some((Color::White, PieceKind::Pawn)));
    assert_eq!(game.board().count(Color::White), 16);
    assert_eq!(game.board().count(Color::Black), 15);
}

#[test]
fn illegal_and_invalid_requests_leave_state_untouched() {
    let mut game = Game::new();
    let before = game.board().to_fen();

    assert_eq!(game.attempt_move(idx(7, 3), idx(3, 3)).unwrap(), MoveResult::Illegal);
    assert!(game.attempt_move(idx(4, 4), idx(3, 4)).is_err());
    assert!(game.attempt_move(200, 0).is_err());
    assert!(game.attempt_move(idx(6, 0), 64).is_err());

    assert_eq!(game.board().to_fen(), before);
    assert_eq!(game.turn(), TurnState::WhiteToMove);
    assert!(game.captured_white().is_empty() && game.captured_black().is_empty());
}

#[test]
fn kingside_castle_moves_the_rook() {
    let board = BoardBuilder::new()
        .piece((7, 4), Color::White, PieceKind::King)
        .piece((7, 7), Color::White, PieceKind::Rook)
        .piece((0, 4), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::WhiteToMove);

    let castles = Arc::new(Mutex::new(0));
    let seen = Arc::clone(&castles);
    game.subscribe(move |event| {
        if let GameEvent::MoveApplied(mv) = event {
            if mv.is_castle() {
                *seen.lock().unwrap() += 1;
            }
        }
    });

    let applied = game
        .attempt_move(idx(7, 4), idx(7, 6))
        .unwrap()
        .applied()
        .unwrap();
    assert!(applied.is_castle());
    assert_eq!(kind_at(&game, idx(7, 6)), Some((Color::White, PieceKind::King)));
    assert_eq!(kind_at(&game, idx(7, 5)), Some((Color::White, PieceKind::Rook)));
    assert_eq!(kind_at(&game, idx(7, 7)), None);
    assert_eq!(*castles.lock().unwrap(), 1);
    assert_eq!(game.turn(), TurnState::BlackToMove);
}

#[test]
fn queenside_castle_to_column_one() {
    let board = BoardBuilder::new()
        .piece((0, 4), Color::Black, PieceKind::King)
        .piece((0, 0), Color::Black, PieceKind::Rook)
        .piece((7, 4), Color::White, PieceKind::King)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::BlackToMove);

    let applied = game.attempt_move(idx(0, 4), idx(0, 1)).unwrap().applied().unwrap();
    let rook_move = applied.rook_move.unwrap();
    assert_eq!((rook_move.from.index(), rook_move.to.index()), (idx(0, 0), idx(0, 2)));
    assert_eq!(kind_at(&game, idx(0, 1)), Some((Color::Black, PieceKind::King)));
    assert_eq!(kind_at(&game, idx(0, 2)), Some((Color::Black, PieceKind::Rook)));
    assert_eq!(kind_at(&game, idx(0, 0)), None);
}

#[test]
fn castle_through_own_bishop_displaces_it() {
    let board = BoardBuilder::new()
        .piece((7, 4), Color::White, PieceKind::King)
        .piece((7, 5), Color::White, PieceKind::Bishop)
        .piece((7, 7), Color::White, PieceKind::Rook)
        .piece((0, 4), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::WhiteToMove);
    let bishop = *game.piece_at_index(idx(7, 5)).unwrap().unwrap();

    let applied = game.attempt_move(idx(7, 4), idx(7, 6)).unwrap().applied().unwrap();
    assert!(applied.is_castle());
    assert_eq!(applied.captured, None);
    let rook_move = applied.rook_move.unwrap();
    assert_eq!((rook_move.from.index(), rook_move.to.index()), (idx(7, 7), idx(7, 5)));
    assert_eq!(rook_move.displaced, Some(bishop));

    assert_eq!(kind_at(&game, idx(7, 6)), Some((Color::White, PieceKind::King)));
    assert_eq!(kind_at(&game, idx(7, 5)), Some((Color::White, PieceKind::Rook)));
    assert_eq!(kind_at(&game, idx(7, 7)), None);
    assert_eq!(game.captured_white(), &[bishop]);
    assert_eq!(game.board().count(Color::White), 2);
}

#[test]
fn long_castle_to_column_two_uses_kingside_rook() {
    let board = BoardBuilder::new()
        .piece((7, 4), Color::White, PieceKind::King)
        .piece((7, 0), Color::White, PieceKind::Rook)
        .piece((7, 7), Color::White, PieceKind::Rook)
        .piece((0, 4), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::WhiteToMove);

    let applied = game.attempt_move(idx(7, 4), idx(7, 2)).unwrap().applied().unwrap();
    let rook_move = applied.rook_move.unwrap();
    assert_eq!((rook_move.from.index(), rook_move.to.index()), (idx(7, 7), idx(7, 5)));
    assert_eq!(kind_at(&game, idx(7, 0)), Some((Color::White, PieceKind::Rook)));
    assert_eq!(kind_at(&game, idx(7, 2)), Some((Color::White, PieceKind::King)));
}

#[test]
fn castle_without_rook_still_counts_as_castle() {
    let board = BoardBuilder::new()
        .piece((7, 4), Color::White, PieceKind::King)
        .piece((7, 5), Color::White, PieceKind::Knight)
        .piece((0, 4), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::WhiteToMove);

    let applied = game.attempt_move(idx(7, 4), idx(7, 6)).unwrap().applied().unwrap();
    assert!(applied.is_castle());
    assert_eq!(applied.rook_move, None);
    // Empty corner: nothing is moved onto the knight
    assert_eq!(kind_at(&game, idx(7, 5)), Some((Color::White, PieceKind::Knight)));
    assert!(game.captured_white().is_empty());
}

#[test]
fn two_step_protocol_matches_attempt_move() {
    // The presentation layer checks, records the capture, then moves
    let mut game = Game::new();
    game.attempt_move(idx(6, 4), idx(4, 4)).unwrap();
    game.attempt_move(idx(1, 3), idx(3, 3)).unwrap();

    let pawn = *game.piece_at_index(idx(4, 4)).unwrap().unwrap();
    assert!(game.is_legal_move(&pawn, idx(4, 4), idx(3, 3)));
    let victim = *game.piece_at_index(idx(3, 3)).unwrap().unwrap();
    game.record_capture(victim);
    let applied = game.move_piece(idx(4, 4), idx(3, 3)).unwrap();

    assert_eq!(applied.captured, Some(victim));
    assert_eq!(game.captured_black(), &[victim]);
    assert_eq!(game.turn(), TurnState::BlackToMove);
}

#[test]
fn two_step_castle_relocates_rook() {
    let mut game = Game::new();
    // Clear the white kingside by hand
    game.move_piece(idx(7, 5), idx(4, 0)).unwrap();
    game.move_piece(idx(0, 1), idx(2, 0)).unwrap();
    game.move_piece(idx(7, 6), idx(5, 7)).unwrap();
    game.move_piece(idx(0, 6), idx(2, 7)).unwrap();
    assert_eq!(game.turn(), TurnState::WhiteToMove);

    let king = *game.piece_at_index(idx(7, 4)).unwrap().unwrap();
    assert!(game.is_legal_move(&king, idx(7, 4), idx(7, 6)));
    let applied = game.move_piece(idx(7, 4), idx(7, 6)).unwrap();
    assert!(applied.is_castle());
    assert_eq!(kind_at(&game, idx(7, 5)), Some((Color::White, PieceKind::Rook)));
}

#[test]
fn check_is_reported_but_not_enforced() {
    let board = BoardBuilder::new()
        .piece((7, 4), Color::White, PieceKind::King)
        .piece((0, 4), Color::Black, PieceKind::Rook)
        .piece((0, 0), Color::Black, PieceKind::King)
        .piece((6, 0), Color::White, PieceKind::Pawn)
        .build()
        .unwrap();
    let mut game = Game::from_board(board, TurnState::WhiteToMove);
    assert_eq!(game.is_king_in_check(Color::White), Ok(true));

    // Ignoring the check is still allowed
    assert!(game.attempt_move(idx(6, 0), idx(5, 0)).unwrap().is_applied());
    assert_eq!(game.is_king_in_check(Color::White), Ok(true));
}

#[test]
fn events_arrive_in_order() {
    let mut game = Game::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    game.subscribe(move |event| sink.lock().unwrap().push(*event));

    game.attempt_move(idx(6, 4), idx(4, 4)).unwrap();
    game.attempt_move(idx(1, 3), idx(3, 3)).unwrap();
    game.attempt_move(idx(4, 4), idx(3, 3)).unwrap();
    game.new_game();

    let events = log.lock().unwrap();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], GameEvent::MoveApplied(_)));
    assert!(matches!(events[2], GameEvent::PieceCaptured(p) if p.kind() == PieceKind::Pawn));
    assert!(matches!(events[3], GameEvent::MoveApplied(mv) if mv.captured.is_some()));
    assert_eq!(events[4], GameEvent::NewGame);
}
