//! Solver sequence properties across all supported puzzle sizes.

use tui_hanoi::core::{minimum_moves, start_solve, PuzzleState};
use tui_hanoi::types::{PegId, MAX_DISKS, MIN_DISKS};

#[test]
fn test_solver_is_optimal_and_legal_for_all_sizes() {
    for n in MIN_DISKS..=MAX_DISKS {
        let mut state = PuzzleState::new(n);
        let mut emitted = 0u32;

        for (from, to) in start_solve(n) {
            assert!(
                state.is_legal_move(from, to),
                "illegal emitted move {from:?} -> {to:?} for {n} disks"
            );
            state.apply_move(from, to).unwrap();
            emitted += 1;
        }

        assert_eq!(emitted, minimum_moves(n));
        assert!(state.is_solved());
    }
}

#[test]
fn test_three_disk_end_to_end() {
    let mut state = PuzzleState::new(3);
    for (from, to) in start_solve(3) {
        state.apply_move(from, to).unwrap();
    }

    assert_eq!(state.move_count(), 7);
    assert_eq!(state.peg(PegId::Right), &[2, 1, 0]);
    assert!(state.peg(PegId::Left).is_empty());
    assert!(state.peg(PegId::Middle).is_empty());
}

#[test]
fn test_handle_is_restartable_and_cancellable() {
    let mut first = start_solve(5);
    let mut prefix = Vec::new();
    for _ in 0..2 {
        prefix.push(first.next().unwrap());
    }
    first.cancel();
    assert_eq!(first.next(), None);

    // A new handle starts from the beginning with the same prefix.
    let restarted: Vec<_> = start_solve(5).take(2).collect();
    assert_eq!(prefix, restarted);
}

#[test]
fn test_parity_selects_opening_move() {
    // Odd counts open toward the target peg, even counts toward the middle.
    for n in MIN_DISKS..=MAX_DISKS {
        let first = start_solve(n).next().unwrap();
        if n % 2 == 0 {
            assert_eq!(first, (PegId::Left, PegId::Middle));
        } else {
            assert_eq!(first, (PegId::Left, PegId::Right));
        }
    }
}

#[test]
fn test_exhausted_handle_stays_done() {
    let mut handle = start_solve(2);
    assert_eq!(handle.by_ref().count(), 3);
    assert!(handle.is_done());
    assert_eq!(handle.next(), None);
}
