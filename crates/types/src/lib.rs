//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Disk count bounds (a UI sanity limit, not an algorithmic constraint).
pub const MIN_DISKS: u8 = 1;
pub const MAX_DISKS: u8 = 10;

/// Disk count for a freshly started game.
pub const INITIAL_DISKS: u8 = 4;

/// Game timing constants (in milliseconds).
pub const TICK_MS: u32 = 16;

/// Pacing of auto-solver moves (one move per interval).
pub const SOLVE_STEP_MS: u32 = 200;

/// A disk is identified by its size rank; 0 is the smallest.
pub type Rank = u8;

/// One of the three peg positions, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegId {
    Left,
    Middle,
    Right,
}

impl PegId {
    /// All pegs in left-to-right order.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Zero-based position, left to right.
    pub fn index(self) -> usize {
        match self {
            PegId::Left => 0,
            PegId::Middle => 1,
            PegId::Right => 2,
        }
    }

    /// Peg at the given zero-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Left),
            1 => Some(PegId::Middle),
            2 => Some(PegId::Right),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PegId::Left => "left",
            PegId::Middle => "middle",
            PegId::Right => "right",
        }
    }
}

/// Game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SelectPeg(PegId),
    IncreaseDisks,
    DecreaseDisks,
    Restart,
    Solve,
}
