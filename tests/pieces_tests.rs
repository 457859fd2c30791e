//! Catalog, rotation and placement tests

use blockfall::core::{can_place, get_shape, pick_random, ActivePiece, Board, Shape, SimpleRng};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn mask(shape: &Shape) -> Vec<Vec<u8>> {
    shape
        .rows()
        .map(|row| row.iter().map(|c| c.is_some() as u8).collect())
        .collect()
}

// ============== Catalog ==============

#[test]
fn test_catalog_shapes() {
    assert_eq!(mask(&get_shape(PieceKind::I)), vec![vec![1, 1, 1, 1]]);
    assert_eq!(mask(&get_shape(PieceKind::J)), vec![vec![1, 0, 0], vec![1, 1, 1]]);
    assert_eq!(mask(&get_shape(PieceKind::L)), vec![vec![0, 0, 1], vec![1, 1, 1]]);
    assert_eq!(mask(&get_shape(PieceKind::O)), vec![vec![1, 1], vec![1, 1]]);
    assert_eq!(mask(&get_shape(PieceKind::S)), vec![vec![0, 1, 1], vec![1, 1, 0]]);
    assert_eq!(mask(&get_shape(PieceKind::T)), vec![vec![0, 1, 0], vec![1, 1, 1]]);
    assert_eq!(mask(&get_shape(PieceKind::Z)), vec![vec![1, 1, 0], vec![0, 1, 1]]);
}

#[test]
fn test_catalog_cells_carry_color_id() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        for row in shape.rows() {
            for cell in row.iter().flatten() {
                assert_eq!(cell.color_id(), kind.color_id());
            }
        }
    }
}

#[test]
fn test_pick_random_returns_template_copy() {
    let mut rng = SimpleRng::new(11);
    for _ in 0..50 {
        let (shape, kind) = pick_random(&mut rng);
        assert_eq!(shape, get_shape(kind));
    }
}

// ============== Rotation ==============

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        let rotated = shape.rotate_clockwise();
        assert_eq!(rotated.width(), shape.height());
        assert_eq!(rotated.height(), shape.width());
    }
}

#[test]
fn test_rotation_of_i_and_l() {
    let i = get_shape(PieceKind::I).rotate_clockwise();
    assert_eq!(mask(&i), vec![vec![1], vec![1], vec![1], vec![1]]);

    // L: ..#      ##
    //    ###  ->  .#
    //             .#  (after transpose + row reversal)
    let l = get_shape(PieceKind::L).rotate_clockwise();
    assert_eq!(mask(&l), vec![vec![1, 1], vec![0, 1], vec![0, 1]]);
}

#[test]
fn test_four_rotations_return_original() {
    for kind in PieceKind::ALL {
        let original = get_shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotate_clockwise();
        }
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = get_shape(PieceKind::O);
    assert_eq!(o.rotate_clockwise(), o);
}

// ============== Placement ==============

#[test]
fn test_can_place_false_whenever_a_cell_leaves_the_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut shape = get_shape(kind);
        for _ in 0..4 {
            for x in -5..(BOARD_WIDTH as i8 + 5) {
                for y in -5..(BOARD_HEIGHT as i8 + 5) {
                    let outside = shape.filled().any(|(dx, dy, _)| {
                        let (cx, cy) = (x + dx, y + dy);
                        cx < 0 || cx >= BOARD_WIDTH as i8 || cy >= BOARD_HEIGHT as i8
                    });
                    assert_eq!(
                        can_place(&board, &shape, x, y),
                        !outside,
                        "{:?} at ({}, {})",
                        kind,
                        x,
                        y
                    );
                }
            }
            shape = shape.rotate_clockwise();
        }
    }
}

#[test]
fn test_can_place_detects_overlap() {
    let mut board = Board::new();
    board.set(5, 5, Some(PieceKind::T));
    let o = get_shape(PieceKind::O);
    assert!(!can_place(&board, &o, 4, 4));
    assert!(!can_place(&board, &o, 5, 5));
    assert!(can_place(&board, &o, 6, 5));
    assert!(can_place(&board, &o, 3, 5));
}

#[test]
fn test_spawn_positions() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        let expected = (BOARD_WIDTH / 2) as i8 - (piece.shape.width() / 2) as i8;
        assert_eq!(piece.x, expected, "{:?}", kind);
        assert_eq!(piece.y, 0);
        assert!(piece.fits(&Board::new()));
    }
}

#[test]
fn test_rotate_then_reject_restores_original_matrix() {
    // Every non-square piece, rotated once, then pushed against the right wall
    // and rotated again into a wider shape that cannot fit.
    let board = Board::new();
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        let mut piece = ActivePiece::spawn(kind);
        assert!(piece.try_rotate(&board));
        while piece.try_shift(&board, 1, 0) {}
        let saved = piece.shape;
        let position = (piece.x, piece.y);

        assert!(!piece.try_rotate(&board), "{:?}", kind);
        assert_eq!(piece.shape, saved, "{:?}", kind);
        assert_eq!((piece.x, piece.y), position);
    }
}
