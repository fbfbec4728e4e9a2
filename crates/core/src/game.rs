//! Game module - ties the puzzle state, interactive selection, and solver
//! together behind `apply_action` / `tick`.
//!
//! Exactly one writer touches the puzzle at a time: either the interactive
//! handler (peg selections) or the auto-solver, never both. While a solve is
//! running, selection requests are ignored; any restart, disk-count change,
//! or new solve request cancels the active solve immediately.

use crate::puzzle::{minimum_moves, PuzzleState};
use crate::solver::{start_solve, SolverHandle};
use crate::types::{GameAction, PegId, Rank, MAX_DISKS, MIN_DISKS, SOLVE_STEP_MS};

/// A pending interactive selection: the peg that was clicked and the disk
/// that was on top of it at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub peg: PegId,
    pub disk: Rank,
}

/// Complete game state: puzzle plus interactive and solver bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: PuzzleState,
    selected: Option<Selection>,
    solver: Option<SolverHandle>,
    solve_timer_ms: u32,
}

impl Game {
    /// Create a new game with a fresh puzzle of the given disk count.
    pub fn new(disk_count: u8) -> Self {
        Self {
            puzzle: PuzzleState::new(disk_count),
            selected: None,
            solver: None,
            solve_timer_ms: 0,
        }
    }

    pub fn puzzle(&self) -> &PuzzleState {
        &self.puzzle
    }

    pub fn disk_count(&self) -> u8 {
        self.puzzle.disk_count()
    }

    pub fn move_count(&self) -> u32 {
        self.puzzle.move_count()
    }

    /// Optimal move count for the current disk count.
    pub fn min_moves(&self) -> u32 {
        minimum_moves(self.puzzle.disk_count())
    }

    pub fn selected(&self) -> Option<Selection> {
        self.selected
    }

    /// True while the auto-solver is driving the puzzle.
    pub fn is_solving(&self) -> bool {
        self.solver.is_some()
    }

    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }

    /// Apply a game action. Returns true if anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SelectPeg(peg) => self.select_peg(peg),
            GameAction::IncreaseDisks => self.set_disk_count(self.disk_count() + 1),
            GameAction::DecreaseDisks => {
                // Guard the subtraction; MIN_DISKS is 1.
                self.set_disk_count(self.disk_count().saturating_sub(1))
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Solve => {
                self.solve();
                true
            }
        }
    }

    /// Advance time. Applies at most one solver move per solve interval.
    /// Returns true if the puzzle changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(solver) = self.solver.as_mut() else {
            return false;
        };

        self.solve_timer_ms += elapsed_ms;
        if self.solve_timer_ms < SOLVE_STEP_MS {
            return false;
        }
        self.solve_timer_ms = 0;

        match solver.next() {
            Some((from, to)) => {
                // The solver emits only legal moves for a state it has kept
                // in lockstep with ours since the solve reset.
                let moved = self.puzzle.apply_move(from, to).is_ok();
                if solver.is_done() {
                    self.solver = None;
                }
                moved
            }
            None => {
                self.solver = None;
                false
            }
        }
    }

    /// Handle a peg selection.
    ///
    /// First selection picks up the top disk of a non-empty peg. A second
    /// selection of the same peg deselects without touching the move count;
    /// any other peg attempts the move, and an illegal move just clears the
    /// selection (silent rejection).
    fn select_peg(&mut self, peg: PegId) -> bool {
        if self.solver.is_some() {
            return false;
        }

        match self.selected {
            Some(selection) => {
                self.selected = None;
                if selection.peg == peg {
                    // Deselect only; never a zero-effect move.
                    return true;
                }
                self.puzzle.apply_move(selection.peg, peg).is_ok()
            }
            None => match self.puzzle.top_disk(peg) {
                Some(disk) => {
                    self.selected = Some(Selection { peg, disk });
                    true
                }
                None => false,
            },
        }
    }

    /// Change the disk count, resetting the puzzle. Out-of-range requests
    /// are rejected without side effects.
    fn set_disk_count(&mut self, disk_count: u8) -> bool {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disk_count) {
            return false;
        }
        self.reset_to(disk_count);
        true
    }

    /// Restart with the current disk count.
    pub fn restart(&mut self) {
        self.reset_to(self.puzzle.disk_count());
    }

    /// Reset the board and start the auto-solver.
    pub fn solve(&mut self) {
        let disk_count = self.puzzle.disk_count();
        self.reset_to(disk_count);
        self.solver = Some(start_solve(disk_count));
    }

    /// Replace the puzzle wholesale, cancelling any active solve.
    fn reset_to(&mut self, disk_count: u8) {
        if let Some(solver) = self.solver.as_mut() {
            solver.cancel();
        }
        self.solver = None;
        self.solve_timer_ms = 0;
        self.selected = None;
        self.puzzle = PuzzleState::new(disk_count);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(crate::types::INITIAL_DISKS)
    }
}
