//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout frameworks and instead renders into
//! a simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Let the scene (pegs, disks, status panel) be unit-tested without a tty
//! - Keep terminal escape handling in one place

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_hanoi_core as core;
pub use tui_hanoi_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
