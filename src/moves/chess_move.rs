//! Single-ply move value.
//!
//! A `Move` snapshots the pieces on its origin and destination squares at
//! construction time, which is all `undo_move` needs to reverse it exactly.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Board, Piece, Square};

/// Immutable description of one ply.
///
/// Identity is the `(origin, destination)` pair only: a move built from raw
/// user input compares equal to the generated move with the same squares.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
    pub piece_moved: Option<Piece>,
    pub piece_captured: Option<Piece>,
}

impl Move {
    /// Build a move by reading `origin` and `destination` off `board`.
    #[inline]
    pub fn new(origin: Square, destination: Square, board: &Board) -> Self {
        Self {
            origin,
            destination,
            piece_moved: board.get(origin),
            piece_captured: board.get(destination),
        }
    }

    /// `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    pub fn id(&self) -> u16 {
        self.origin.row as u16 * 1000
            + self.origin.col as u16 * 100
            + self.destination.row as u16 * 10
            + self.destination.col as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Origin then destination in algebraic coordinates, e.g. `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.origin, self.destination)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}
