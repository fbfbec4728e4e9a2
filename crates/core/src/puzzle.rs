//! Puzzle state module - manages the three peg stacks.
//!
//! Each peg is a fixed-capacity stack of disk ranks stored bottom-to-top
//! (top = last element). Rank 0 is the smallest disk. The stacking invariant
//! is that ranks strictly decrease from bottom to top on every peg.
//! Uses `ArrayVec` so a puzzle never allocates.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{PegId, Rank, MAX_DISKS, MIN_DISKS};

/// A single peg stack, bottom-to-top.
pub type PegStack = ArrayVec<Rank, { MAX_DISKS as usize }>;

/// The engine's only error: a move that violates the stacking rule
/// or draws from an empty peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The source peg has no disk to move.
    EmptySource { from: PegId },
    /// The source top is larger than the destination top.
    LargerOntoSmaller { from: PegId, to: PegId },
    /// Source and destination are the same peg.
    SamePeg { peg: PegId },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::EmptySource { from } => {
                write!(f, "cannot move from empty {} peg", from.as_str())
            }
            IllegalMove::LargerOntoSmaller { from, to } => {
                write!(
                    f,
                    "cannot place the {} top onto the smaller {} top",
                    from.as_str(),
                    to.as_str()
                )
            }
            IllegalMove::SamePeg { peg } => {
                write!(f, "source and destination are both the {} peg", peg.as_str())
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Closed-form optimal move count for the classic 3-peg puzzle.
pub fn minimum_moves(disk_count: u8) -> u32 {
    (1u32 << disk_count) - 1
}

/// Complete puzzle state: three peg stacks plus the move counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    disk_count: u8,
    pegs: [PegStack; 3],
    move_count: u32,
}

impl PuzzleState {
    /// Create a fresh puzzle with all disks stacked on the left peg,
    /// largest at the bottom, rank 0 on top.
    ///
    /// The disk count is clamped to `MIN_DISKS..=MAX_DISKS`.
    pub fn new(disk_count: u8) -> Self {
        let disk_count = disk_count.clamp(MIN_DISKS, MAX_DISKS);
        let mut left = PegStack::new();
        for rank in (0..disk_count).rev() {
            left.push(rank);
        }

        Self {
            disk_count,
            pegs: [left, PegStack::new(), PegStack::new()],
            move_count: 0,
        }
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Disks on the given peg, bottom-to-top.
    pub fn peg(&self, peg: PegId) -> &[Rank] {
        &self.pegs[peg.index()]
    }

    /// The rank at the top of the given peg, or `None` when empty.
    pub fn top_disk(&self, peg: PegId) -> Option<Rank> {
        self.pegs[peg.index()].last().copied()
    }

    /// Check whether moving the top disk of `from` onto `to` is legal.
    ///
    /// Legal iff `from` is non-empty and `to` is either empty or topped by a
    /// larger disk. A same-peg move is never legal; the interactive layer
    /// treats a same-peg reselection as a deselect before asking the engine.
    pub fn is_legal_move(&self, from: PegId, to: PegId) -> bool {
        if from == to {
            return false;
        }
        match (self.top_disk(from), self.top_disk(to)) {
            (Some(moving), Some(target)) => moving < target,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Move the top disk of `from` onto `to` and increment the move counter.
    ///
    /// On an illegal move the state is left untouched.
    pub fn apply_move(&mut self, from: PegId, to: PegId) -> Result<(), IllegalMove> {
        if from == to {
            return Err(IllegalMove::SamePeg { peg: from });
        }

        let moving = self
            .top_disk(from)
            .ok_or(IllegalMove::EmptySource { from })?;

        if let Some(target) = self.top_disk(to) {
            if moving > target {
                return Err(IllegalMove::LargerOntoSmaller { from, to });
            }
        }

        self.pegs[from.index()].pop();
        self.pegs[to.index()].push(moving);
        self.move_count += 1;
        Ok(())
    }

    /// True once the right peg holds every disk.
    ///
    /// The stacking invariant makes the ordering automatic, so a full right
    /// peg is equivalent to the other two pegs being empty.
    pub fn is_solved(&self) -> bool {
        self.pegs[PegId::Right.index()].len() == self.disk_count as usize
    }
}
