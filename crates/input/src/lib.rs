//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] peg selections
//! and game controls.

pub mod map;

pub use tui_hanoi_types as types;

pub use map::{handle_key_event, should_quit};
