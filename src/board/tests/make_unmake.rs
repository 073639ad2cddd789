//! Make/unmake move tests.

use crate::board::{Move, Piece, PieceType, Position, Side, Square, Wing};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find_move(board: &Position, from: &str, to: &str, promotion: Option<PieceType>) -> Move {
    for m in board.legal_moves().iter() {
        if m.from() == sq(from) && m.to() == sq(to) && m.promotion_piece() == promotion {
            return *m;
        }
    }
    panic!("Expected move {from}{to} not found");
}

fn assert_round_trip(fen: &str, from: &str, to: &str, promotion: Option<PieceType>) {
    let mut board = Position::from_fen(fen).unwrap();
    let original = board.clone();
    let mv = find_move(&board, from, to, promotion);
    let info = board.make_move(mv);
    assert_ne!(board, original);
    board.unmake_move(mv, info);
    assert_eq!(board, original, "{from}{to} did not restore {fen}");
}

#[test]
fn test_en_passant_make_unmake() {
    let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
    let mut board = Position::from_fen(fen).unwrap();
    let mv = find_move(&board, "e5", "f6", None);
    assert!(mv.is_en_passant());
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(info.captured(), Some(Piece::new(PieceType::Pawn, Side::Black)));
    assert_eq!(board.material_balance(), 100);
    board.unmake_move(mv, info);
    assert_eq!(board, Position::from_fen(fen).unwrap());
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = find_move(&board, "a7", "a8", Some(PieceType::Queen));
    let info = board.make_move(mv);
    assert_eq!(
        board.piece_at(sq("a8")),
        Some(Piece::new(PieceType::Queen, Side::White))
    );
    assert_eq!(board.material_balance(), 900);
    board.unmake_move(mv, info);
    assert_eq!(
        board.piece_at(sq("a7")),
        Some(Piece::new(PieceType::Pawn, Side::White))
    );
    assert_eq!(board.piece_at(sq("a8")), None);
    assert_eq!(board.material_balance(), 100);
}

#[test]
fn test_capturing_underpromotion_round_trip() {
    assert_round_trip("1r5k/P7/8/8/8/8/8/K7 w - - 0 1", "a7", "b8", Some(PieceType::Knight));
}

#[test]
fn test_castling_make_unmake() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
    let mut board = Position::from_fen(fen).unwrap();
    let mv = find_move(&board, "e1", "c1", None);
    assert!(mv.is_queen_side_castle());
    let info = board.make_move(mv);
    assert_eq!(board.piece_at(sq("d1")), Some(Piece::new(PieceType::Rook, Side::White)));
    assert_eq!(board.piece_at(sq("a1")), None);
    assert_eq!(board.king_square(Side::White), sq("c1"));
    assert!(!board.castling_rights().has(Side::White, Wing::KingSide));
    assert!(!board.castling_rights().has(Side::White, Wing::QueenSide));
    assert!(board.castling_rights().has(Side::Black, Wing::KingSide));
    board.unmake_move(mv, info);
    assert_eq!(board, Position::from_fen(fen).unwrap());

    assert_round_trip(fen, "e1", "g1", None);
}

#[test]
fn test_rook_capture_revokes_victims_right() {
    let mut board = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = find_move(&board, "a1", "a8", None);
    board.make_move(mv);
    let rights = board.castling_rights();
    assert!(!rights.has(Side::White, Wing::QueenSide));
    assert!(!rights.has(Side::Black, Wing::QueenSide));
    assert!(rights.has(Side::White, Wing::KingSide));
    assert!(rights.has(Side::Black, Wing::KingSide));
}

#[test]
fn test_check_flags_follow_the_move() {
    let mut board = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let mv = find_move(&board, "a1", "a8", None);
    let info = board.make_move(mv);
    assert!(board.in_check(Side::Black));
    assert!(!board.in_check(Side::White));
    assert_eq!(board.side_to_move(), Side::Black);
    board.unmake_move(mv, info);
    assert!(!board.in_check(Side::Black));
    assert_eq!(board.side_to_move(), Side::White);
}

#[test]
fn test_double_push_sets_and_next_move_clears_en_passant() {
    let mut board = Position::new();
    let push = find_move(&board, "e2", "e4", None);
    board.make_move(push);
    assert_eq!(board.last_double_push(), Some(sq("e4")));
    let reply = find_move(&board, "g8", "f6", None);
    board.make_move(reply);
    assert!(!board.en_passant_possible());
    assert_eq!(board.last_double_push(), None);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let initial: Vec<Move> = board.legal_moves().iter().copied().collect();
    for &mv in &initial {
        let info = board.make_move(mv);
        board.unmake_move(mv, info);
    }
    let after: Vec<Move> = board.legal_moves().iter().copied().collect();
    assert_eq!(initial, after);
}
