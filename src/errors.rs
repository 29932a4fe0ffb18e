//! Error types for text input and board injection.
//!
//! The rules core (generation, make/undo) works on preconditions and never
//! fails; only parsing and position setup report errors.

use crate::game_state::chess_types::{Color, Square};

/// Errors raised while turning external input into engine values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Square text outside `a1`..`h8`.
    #[error("invalid algebraic square: {0}")]
    InvalidSquare(String),

    /// Malformed FEN placement or side-to-move field.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Injected board without exactly one king of a color.
    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },

    /// Move text not of the form `e2e4`.
    #[error("invalid long algebraic move: {0}")]
    InvalidMoveNotation(String),

    /// Move text naming an empty origin square.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),
}

/// Result type alias for parsing and setup operations.
pub type ChessResult<T> = Result<T, ChessError>;
