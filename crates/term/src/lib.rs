//! Terminal presentation layer.
//!
//! Renders engine snapshots into a simple framebuffer (no widget toolkit)
//! and flushes that framebuffer to the terminal. Reads game state only; it
//! never mutates the engine.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_for, AnchorY, GameView, Viewport, PALETTE_HEX};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
