//! Make/undo on the mutable game state.
//!
//! `make_move` performs no legality check; callers pass moves taken from
//! `get_valid_moves`. `undo_move` is its exact inverse.

use tracing::{debug, warn};

use crate::game_state::{chess_types::*, game_state::GameState};

impl GameState {
    /// Apply `mv` unconditionally and hand the turn to the other side.
    pub fn make_move(&mut self, mv: Move) {
        self.board.set(mv.origin, None);
        self.board.set(mv.destination, mv.piece_moved);
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.opposite();
        self.relocate_king(mv.piece_moved, mv.destination);
    }

    /// Take back the most recent move.
    ///
    /// Returns the undone move, or `None` (logged, otherwise harmless) when
    /// there is no history.
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(mv) = self.move_log.pop() else {
            warn!("undo requested with an empty move history; nothing to undo");
            return None;
        };

        self.board.set(mv.origin, mv.piece_moved);
        self.board.set(mv.destination, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();
        self.relocate_king(mv.piece_moved, mv.origin);
        Some(mv)
    }

    /// Apply a move chosen by a player, with a debug trace.
    pub fn play_move(&mut self, mv: Move) {
        debug!(notation = %mv, side = ?self.side_to_move, "applying move");
        self.make_move(mv);
    }

    fn relocate_king(&mut self, piece: Option<Piece>, square: Square) {
        match piece {
            Some(Piece {
                color: Color::White,
                kind: PieceKind::King,
            }) => self.white_king_location = square,
            Some(Piece {
                color: Color::Black,
                kind: PieceKind::King,
            }) => self.black_king_location = square,
            _ => {}
        }
    }
}
