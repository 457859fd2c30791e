//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on rendering, input devices, or timers:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Gravity is a plain [`GameState::tick`] call, so tests drive it synchronously
//! - **Self-contained**: Each [`GameState`] owns its board, piece and score; many can coexist
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with occupancy checks, lock-in and row clearing
//! - [`pieces`]: The seven-piece catalog and matrix rotation
//! - [`active`]: The falling piece and placement validation
//! - [`rng`]: Seeded uniform piece selection
//! - [`game_state`]: The spawn/fall/lock/clear state machine and player commands
//! - [`snapshot`]: Read-only views for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on the top row; a blocked spawn ends the game
//! - Gravity and soft drop move the piece down one row, locking it when it cannot move
//! - Rotation is a quarter turn of the piece matrix in place; a blocked rotation is undone
//! - Every completed row is removed and scores a flat 10 points
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.score(), 0);
//! ```

pub mod active;
pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{can_place, ActivePiece};
pub use board::Board;
pub use game_state::{GameState, LockEvent};
pub use pieces::{get_shape, pick_random, Shape};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
