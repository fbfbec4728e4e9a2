//! TUI Tower of Hanoi (workspace facade crate).
//!
//! This package keeps the public `tui_hanoi::{core,input,term,types}` API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_hanoi_core as core;
pub use tui_hanoi_input as input;
pub use tui_hanoi_term as term;
pub use tui_hanoi_types as types;
