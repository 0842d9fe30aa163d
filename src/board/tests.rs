use super::*;

/// Every column's pieces form a contiguous block at the bottom
fn assert_no_floating(board: &GravityBoard) {
    for col in 0..board.cols() {
        let mut seen_piece = false;
        for row in 0..board.rows() {
            let mark = board.get(row, col).unwrap();
            if seen_piece {
                assert!(!mark.is_empty(), "hole at ({row}, {col}) under a piece");
            }
            seen_piece |= !mark.is_empty();
        }
    }
}

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::PlayerA.opponent(), Mark::PlayerB);
    assert_eq!(Mark::PlayerB.opponent(), Mark::PlayerA);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_symbols() {
    for mark in [Mark::Empty, Mark::PlayerA, Mark::PlayerB] {
        assert_eq!(Mark::from_symbol(mark.symbol()), Some(mark));
    }
    assert_eq!(Mark::from_symbol('R'), Some(Mark::PlayerA));
    assert_eq!(Mark::from_symbol('Y'), Some(Mark::PlayerB));
    assert_eq!(Mark::from_symbol('?'), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_gravity_piece_falls_to_bottom() {
    let mut board = GravityBoard::connect_four();
    board.place(3, Mark::PlayerA).unwrap();
    board.place(3, Mark::PlayerB).unwrap();

    assert_eq!(board.get(5, 3), Ok(Mark::PlayerA));
    assert_eq!(board.get(4, 3), Ok(Mark::PlayerB));
    assert_eq!(board.get(3, 3), Ok(Mark::Empty));
    assert_eq!(board.landing_row(3), Some(3));
}

#[test]
fn test_gravity_place_rejects_illegal_moves() {
    let mut board = GravityBoard::new(2, 3, 2).unwrap();
    board.place(0, Mark::PlayerA).unwrap();
    board.place(0, Mark::PlayerB).unwrap();
    let before = board.clone();

    assert_eq!(board.place(0, Mark::PlayerA), Err(MoveError::ColumnFull(0)));
    assert_eq!(
        board.place(3, Mark::PlayerA),
        Err(MoveError::ColumnOutOfRange { col: 3, cols: 3 })
    );
    assert_eq!(board.place(1, Mark::Empty), Err(MoveError::EmptyMark));
    assert_eq!(board, before);

    assert!(!board.is_legal(0));
    assert!(board.is_legal(1));
    assert!(!board.is_legal(3));
}

#[test]
fn test_gravity_undo_removes_top_piece() {
    let mut board = GravityBoard::connect_four();
    board.place(2, Mark::PlayerA).unwrap();
    board.place(2, Mark::PlayerB).unwrap();

    board.undo(2);
    assert_eq!(board.get(4, 2), Ok(Mark::Empty));
    assert_eq!(board.get(5, 2), Ok(Mark::PlayerA));
}

#[test]
fn test_place_undo_round_trip() {
    let mut gravity = GravityBoard::from_rows(
        &[
            "-------", //
            "-------",
            "-------",
            "---O---",
            "--XX---",
            "-OXOX--",
        ],
        4,
    )
    .unwrap();
    for col in gravity.legal_moves() {
        let before = gravity.clone();
        gravity.place(col, Mark::PlayerA).unwrap();
        assert_ne!(gravity, before);
        gravity.undo(col);
        assert_eq!(gravity, before);
    }

    let mut placement = PlacementBoard::from_rows(&["X-O", "---", "-X-"], 3).unwrap();
    for pos in placement.legal_moves() {
        let before = placement.clone();
        placement.place(pos, Mark::PlayerB).unwrap();
        placement.undo(pos);
        assert_eq!(placement, before);
    }
}

#[test]
fn test_gravity_never_floats() {
    let mut board = GravityBoard::connect_four();
    let mut mark = Mark::PlayerA;
    // Deterministic scattered sequence, skipping full columns
    for step in 0..60usize {
        let col = (step * 5 + step / 3) % board.cols();
        if board.place(col, mark).is_ok() {
            mark = mark.opponent();
        }
        assert_no_floating(&board);
    }
}

#[test]
fn test_from_rows_rejects_floating_piece() {
    let err = GravityBoard::from_rows(&["X--", "---", "O--"], 3).unwrap_err();
    assert_eq!(err, BoardError::FloatingPiece { row: 0, col: 0 });
}

#[test]
fn test_invalid_win_length() {
    assert!(matches!(
        GravityBoard::new(3, 3, 4),
        Err(BoardError::InvalidWinLength { .. })
    ));
    assert!(matches!(
        PlacementBoard::new(3, 3, 1),
        Err(BoardError::InvalidWinLength { .. })
    ));
    // Fits one axis only
    assert!(GravityBoard::new(2, 5, 4).is_ok());
}

#[test]
fn test_has_legal_move_on_full_boards() {
    let gravity = GravityBoard::from_rows(&["XOX", "OXO"], 3).unwrap();
    assert!(!gravity.has_legal_move());
    assert!(gravity.legal_moves().is_empty());

    let placement = PlacementBoard::from_rows(&["XOX", "XOO", "OXX"], 3).unwrap();
    assert!(!placement.has_legal_move());
    assert!(placement.legal_moves().is_empty());

    let open = PlacementBoard::from_rows(&["XOX", "XOO", "OX-"], 3).unwrap();
    assert!(open.has_legal_move());
    assert_eq!(open.legal_moves(), vec![Pos::new(2, 2)]);
}

#[test]
fn test_placement_rejects_illegal_moves() {
    let mut board = PlacementBoard::tic_tac_toe();
    board.place(Pos::new(1, 1), Mark::PlayerA).unwrap();

    assert_eq!(
        board.place(Pos::new(1, 1), Mark::PlayerB),
        Err(MoveError::Occupied { row: 1, col: 1 })
    );
    assert!(matches!(
        board.place(Pos::new(3, 0), Mark::PlayerB),
        Err(MoveError::CellOutOfRange { .. })
    ));
    assert_eq!(board.grid().count(Mark::PlayerB), 0);
}

#[test]
fn test_placement_legal_moves_order() {
    let board = PlacementBoard::from_rows(&["X--", "-O-", "---"], 3).unwrap();
    let moves = board.legal_moves();
    let mut sorted = moves.clone();
    sorted.sort();
    assert_eq!(moves, sorted);
    assert_eq!(moves.first(), Some(&Pos::new(0, 1)));
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_get_out_of_range_fails_loudly() {
    let board = GravityBoard::connect_four();
    assert!(matches!(
        board.get(6, 0),
        Err(BoardError::OutOfRange { row: 6, col: 0, .. })
    ));
    assert!(board.get(0, 7).is_err());
}

#[test]
fn test_clear_resets_board() {
    let mut board = GravityBoard::connect_four();
    board.place(0, Mark::PlayerA).unwrap();
    board.clear();
    assert_eq!(board, GravityBoard::connect_four());
}
