//! Pieces module - the piece catalog and matrix rotation
//!
//! Each catalog entry is a small matrix of cells (at most 4x4) whose filled
//! cells carry the piece kind. Rotation is a plain matrix transform around the
//! matrix's top-left corner; there is no kick table and no pivot correction.

use crate::rng::SimpleRng;
use crate::types::{Cell, PieceKind, PIECE_COUNT};

/// Maximum matrix side length of any shape
pub const MAX_SHAPE_SIDE: usize = 4;

/// A piece matrix in one orientation.
///
/// Stored inline (no heap) so shapes are `Copy` and rotation never allocates.
/// Only the top-left `height x width` region is meaningful; everything outside
/// it is kept empty so derived equality compares shapes exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[Cell; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from a 0/1 mask, painting filled cells with `kind`.
    ///
    /// Rows or columns beyond [`MAX_SHAPE_SIDE`] are ignored.
    pub fn from_mask<R: AsRef<[u8]>>(kind: PieceKind, mask: &[R]) -> Self {
        let height = mask.len().min(MAX_SHAPE_SIDE);
        let width = mask
            .iter()
            .take(height)
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_SIDE);

        let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in mask.iter().take(height).enumerate() {
            for (c, &v) in row.as_ref().iter().take(width).enumerate() {
                if v != 0 {
                    cells[r][c] = Some(kind);
                }
            }
        }

        Self {
            cells,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at matrix row `r`, column `c` (empty outside the matrix)
    pub fn get(&self, r: usize, c: usize) -> Cell {
        if r < self.height as usize && c < self.width as usize {
            self.cells[r][c]
        } else {
            None
        }
    }

    /// Iterate filled cells as `(dx, dy, kind)` offsets from the top-left corner.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        let (w, h) = (self.width as usize, self.height as usize);
        self.cells[..h].iter().enumerate().flat_map(move |(r, row)| {
            row[..w]
                .iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|kind| (c as i8, r as i8, kind)))
        })
    }

    /// Rows of the meaningful region, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let w = self.width as usize;
        self.cells[..self.height as usize].iter().map(move |row| &row[..w])
    }

    /// Quarter-turn the matrix: transpose, then reverse the row order.
    ///
    /// A `h x w` shape becomes `w x h`. Four applications return the original
    /// shape exactly.
    pub fn rotate_clockwise(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in cells.iter_mut().take(w).enumerate() {
            for (c, cell) in row.iter_mut().take(h).enumerate() {
                *cell = self.cells[c][w - 1 - r];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// Spawn-orientation masks in catalog order (I, J, L, O, S, T, Z).
const TEMPLATES: [&[&[u8]]; PIECE_COUNT] = [
    &[&[1, 1, 1, 1]],
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 1], &[1, 1]],
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 1, 0], &[0, 1, 1]],
];

/// Get the spawn-orientation shape template for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    Shape::from_mask(kind, TEMPLATES[kind.index()])
}

/// Pick a catalog entry uniformly at random.
///
/// Draws are independent: repeats are allowed and there is no bag.
pub fn pick_random(rng: &mut SimpleRng) -> (Shape, PieceKind) {
    let kind = PieceKind::ALL[rng.next_range(PIECE_COUNT as u32) as usize];
    (get_shape(kind), kind)
}
