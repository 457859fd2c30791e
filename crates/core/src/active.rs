//! Active piece state and placement validation.

use crate::board::Board;
use crate::pieces::{get_shape, Shape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `shape` anchored at (x, y) fits on `board`.
///
/// A filled cell is rejected when its column leaves `[0, BOARD_WIDTH)`, when
/// its row reaches the floor, or when it lands on an occupied board cell.
/// Cells above the board (row < 0) are always placeable.
pub fn can_place(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    shape.filled().all(|(dx, dy, _)| {
        let col = x as i16 + dx as i16;
        let row = y as i16 + dy as i16;
        if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
            return false;
        }
        row < 0 || !board.is_occupied(col as i8, row as i8)
    })
}

/// The falling piece: current orientation plus top-left offset on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` horizontally centered on the top row
    pub fn spawn(kind: PieceKind) -> Self {
        Self::spawn_shape(kind, get_shape(kind))
    }

    /// Place an already-drawn shape at the spawn position
    pub fn spawn_shape(kind: PieceKind, shape: Shape) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self { kind, shape, x, y: 0 }
    }

    pub fn fits(&self, board: &Board) -> bool {
        can_place(board, &self.shape, self.x, self.y)
    }

    /// Shift by (dx, dy) if the new position fits. Returns whether it moved.
    pub fn try_shift(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        if !can_place(board, &self.shape, x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Rotate in place if the rotated shape fits at the current position.
    ///
    /// On rejection the saved pre-rotation shape is restored verbatim; the
    /// position never changes.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let previous = self.shape;
        self.shape = previous.rotate_clockwise();
        if self.fits(board) {
            return true;
        }
        self.shape = previous;
        false
    }
}
