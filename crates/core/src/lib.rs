//! Core puzzle logic module - pure, deterministic, and testable.
//!
//! This module contains all the puzzle rules, state management, and the
//! auto-solver. It has **zero dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: the same action sequence always produces the same state
//! - **Testable**: comprehensive unit tests for all puzzle rules
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//! - **Fast**: fixed-capacity peg stacks, no allocation after creation
//!
//! # Module Structure
//!
//! - [`puzzle`]: peg stacks, move legality, win detection, optimal move count
//! - [`solver`]: lazy generator for the optimal solution sequence
//! - [`game`]: interactive selection handling, solver pacing, and lifecycle
//!
//! # Puzzle Rules
//!
//! Classic 3-peg Tower of Hanoi: one disk moves at a time, always the top of
//! its peg, and never onto a smaller disk. The puzzle is solved when all
//! disks reach the right peg, which takes at least `2^n - 1` moves.
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::Game;
//! use tui_hanoi_types::{GameAction, PegId, SOLVE_STEP_MS};
//!
//! // Move the smallest disk by selecting two pegs.
//! let mut game = Game::new(3);
//! game.apply_action(GameAction::SelectPeg(PegId::Left));
//! game.apply_action(GameAction::SelectPeg(PegId::Right));
//! assert_eq!(game.move_count(), 1);
//!
//! // Or let the solver do it, one move per solve interval.
//! game.apply_action(GameAction::Solve);
//! while game.is_solving() {
//!     game.tick(SOLVE_STEP_MS);
//! }
//! assert!(game.is_solved());
//! ```

pub mod game;
pub mod puzzle;
pub mod solver;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use game::{Game, Selection};
pub use puzzle::{minimum_moves, IllegalMove, PuzzleState};
pub use solver::{solve_sequence, start_solve, SolverHandle};
