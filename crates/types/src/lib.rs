//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Cell Values
//!
//! A board cell is either empty or painted by one of the seven pieces. The
//! integer form used by the render contract is `0` for empty and the piece's
//! color id (`1..=7`) otherwise.
//!
//! | Piece | Color id |
//! |-------|----------|
//! | I | 1 |
//! | J | 2 |
//! | L | 3 |
//! | O | 4 |
//! | S | 5 |
//! | T | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{cell_value, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::O.color_id(), 4);
//! assert_eq!(cell_value(Some(PieceKind::O)), 4);
//! assert_eq!(cell_value(None), 0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Points awarded per cleared row (flat, no level multiplier)
pub const LINE_CLEAR_BONUS: u32 = 10;

/// Default gravity period in milliseconds (one row per second)
pub const DEFAULT_GRAVITY_MS: u32 = 1000;

/// Number of entries in the piece catalog
pub const PIECE_COUNT: usize = 7;

/// The seven piece kinds, in catalog order
///
/// The declaration order is significant: it defines the catalog index and
/// therefore the color id (`index + 1`) painted into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All piece kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Zero-based catalog index
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Color id painted into the board (`1..=7`)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_id(), 1);
    /// assert_eq!(PieceKind::Z.color_id(), 7);
    /// ```
    pub fn color_id(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Lowercase name, used as a log field
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell painted by the specified piece kind
pub type Cell = Option<PieceKind>;

/// Integer form of a cell for the render contract (0 = empty, 1..=7 = color id)
pub fn cell_value(cell: Cell) -> u8 {
    cell.map_or(0, |kind| kind.color_id())
}

/// Player commands accepted by the engine
///
/// Gravity is not an action: the external scheduler drives it through
/// `GameState::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece a quarter turn in place (no wall kicks)
    Rotate,
    /// Start over with an empty board and zero score
    Restart,
}

/// Engine state machine phase
///
/// `Spawning` and `Locking` are transient inside a single engine call; between
/// calls an observer sees `Falling` or `GameOver` (or `Spawning` before the
/// first piece has been drawn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    GameOver,
}
