//! Optimal solver - emits the canonical move sequence one step at a time.
//!
//! For exactly three pegs the classic recursive solution collapses into a
//! fixed 3-step cycle of peg pairs, chosen by disk-count parity. At each step
//! the nominal pair only names the two pegs involved; the actual direction is
//! resolved by comparing their top disks (the smaller, or only present, top
//! moves onto the other peg). Run to completion this emits exactly
//! `minimum_moves(n)` legal moves and ends in the solved state.
//!
//! The handle owns a private [`PuzzleState`] so the caller can pace emission
//! however it likes (the terminal UI pulls one move per solve interval) and
//! can cancel between any two steps with no hidden state left behind.

use crate::puzzle::PuzzleState;
use crate::types::PegId;

/// Peg-pair cycle for an even number of disks.
const EVEN_CYCLE: [(PegId, PegId); 3] = [
    (PegId::Left, PegId::Middle),
    (PegId::Left, PegId::Right),
    (PegId::Middle, PegId::Right),
];

/// Peg-pair cycle for an odd number of disks.
const ODD_CYCLE: [(PegId, PegId); 3] = [
    (PegId::Left, PegId::Right),
    (PegId::Left, PegId::Middle),
    (PegId::Middle, PegId::Right),
];

/// Start solving a fresh puzzle with the given disk count.
pub fn start_solve(disk_count: u8) -> SolverHandle {
    SolverHandle::new(disk_count)
}

/// A lazy, cancellable producer of the optimal move sequence.
///
/// Implements [`Iterator`]; each pull yields the next `(from, to)` move.
/// The sequence is finite and terminates the moment the internal state is
/// solved, even mid-cycle.
#[derive(Debug, Clone)]
pub struct SolverHandle {
    state: PuzzleState,
    cycle: [(PegId, PegId); 3],
    step: usize,
    done: bool,
}

impl SolverHandle {
    fn new(disk_count: u8) -> Self {
        let state = PuzzleState::new(disk_count);
        let cycle = if state.disk_count() % 2 == 0 {
            EVEN_CYCLE
        } else {
            ODD_CYCLE
        };

        Self {
            state,
            cycle,
            step: 0,
            done: false,
        }
    }

    /// Discard all remaining planned moves.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    /// True once the sequence has finished or been cancelled.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Resolve the nominal pair into an actual move direction.
    fn resolve(&self, p: PegId, q: PegId) -> Option<(PegId, PegId)> {
        match (self.state.top_disk(p), self.state.top_disk(q)) {
            (Some(a), Some(c)) => Some(if a < c { (p, q) } else { (q, p) }),
            (Some(_), None) => Some((p, q)),
            (None, Some(_)) => Some((q, p)),
            (None, None) => None,
        }
    }
}

impl Iterator for SolverHandle {
    type Item = (PegId, PegId);

    fn next(&mut self) -> Option<(PegId, PegId)> {
        if self.done || self.state.is_solved() {
            self.done = true;
            return None;
        }

        let (p, q) = self.cycle[self.step];
        self.step = (self.step + 1) % self.cycle.len();

        let (from, to) = self.resolve(p, q)?;

        // The cycle only ever names legal moves on a non-solved state.
        self.state
            .apply_move(from, to)
            .expect("solver cycle produced an illegal move");

        if self.state.is_solved() {
            self.done = true;
        }

        Some((from, to))
    }
}

/// Convenience wrapper: run a solve to completion and collect the moves.
pub fn solve_sequence(disk_count: u8) -> Vec<(PegId, PegId)> {
    start_solve(disk_count).collect()
}

/// Replay a move sequence onto a state, asserting legality throughout.
#[cfg(test)]
fn replay(state: &mut PuzzleState, moves: &[(PegId, PegId)]) {
    for &(from, to) in moves {
        assert!(state.is_legal_move(from, to));
        state.apply_move(from, to).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::minimum_moves;
    use crate::types::{MAX_DISKS, MIN_DISKS};

    #[test]
    fn test_solver_emits_exact_minimum_for_all_sizes() {
        for n in MIN_DISKS..=MAX_DISKS {
            let moves = solve_sequence(n);
            assert_eq!(
                moves.len() as u32,
                minimum_moves(n),
                "wrong sequence length for {n} disks"
            );
        }
    }

    #[test]
    fn test_solver_sequence_is_legal_and_solves() {
        for n in MIN_DISKS..=MAX_DISKS {
            let moves = solve_sequence(n);
            let mut state = PuzzleState::new(n);
            replay(&mut state, &moves);
            assert!(state.is_solved(), "{n} disks not solved after replay");
            assert_eq!(state.move_count(), minimum_moves(n));
        }
    }

    #[test]
    fn test_three_disk_sequence() {
        // Odd count starts on the (left, right) pair.
        let moves = solve_sequence(3);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], (PegId::Left, PegId::Right));

        let mut state = PuzzleState::new(3);
        replay(&mut state, &moves);
        assert_eq!(state.peg(PegId::Right), &[2, 1, 0]);
        assert!(state.peg(PegId::Left).is_empty());
        assert!(state.peg(PegId::Middle).is_empty());
    }

    #[test]
    fn test_even_count_first_move_goes_to_middle() {
        let mut handle = start_solve(4);
        assert_eq!(handle.next(), Some((PegId::Left, PegId::Middle)));
    }

    #[test]
    fn test_single_disk_terminates_mid_cycle() {
        let mut handle = start_solve(1);
        assert_eq!(handle.next(), Some((PegId::Left, PegId::Right)));
        assert!(handle.is_done());
        assert_eq!(handle.next(), None);
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_cancel_discards_remaining_moves() {
        let mut handle = start_solve(5);
        assert!(handle.next().is_some());
        assert!(handle.next().is_some());

        handle.cancel();
        assert!(handle.is_done());
        assert_eq!(handle.next(), None);
    }

    #[test]
    fn test_direction_resolution_moves_smaller_top() {
        // Second move of an even solve names (left, right); both pegs are
        // non-empty by then and the smaller exposed top must travel.
        let mut handle = start_solve(2);
        assert_eq!(handle.next(), Some((PegId::Left, PegId::Middle)));
        assert_eq!(handle.next(), Some((PegId::Left, PegId::Right)));
        assert_eq!(handle.next(), Some((PegId::Middle, PegId::Right)));
        assert_eq!(handle.next(), None);
    }
}
