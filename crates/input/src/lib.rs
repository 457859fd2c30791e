//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Holds no
//! state: every key press becomes at most one engine command.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
