//! Pseudo-legal move generation.
//!
//! Scans the board in row-major order and dispatches each piece of the
//! requested color to its per-kind generator. Moves that leave the mover's
//! king attacked are still included; see `legal_move_generator` for the
//! filter.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Append the pseudo-legal moves of the piece on `from`.
#[inline]
pub fn generate_piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let generate = match piece.kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    };
    generate(board, from, piece.color, out);
}

/// Every pseudo-legal move for `color`, in board-scan then generator order.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces() {
        if piece.color == color {
            generate_piece_moves(board, from, piece, &mut moves);
        }
    }
    moves
}

impl GameState {
    /// Pseudo-legal moves for the side to move.
    #[inline]
    pub fn get_all_possible_moves(&self) -> Vec<Move> {
        pseudo_legal_moves(&self.board, self.side_to_move)
    }
}
