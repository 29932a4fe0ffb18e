//! Pawn move generation: pushes and diagonal captures.
//!
//! No promotion and no en passant. A pawn standing on its last rank has no
//! moves.

use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let forward = color.pawn_direction();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.get(one_step).is_none() {
            out.push(Move::new(from, one_step, board));

            if from.row == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.get(two_step).is_none() {
                        out.push(Move::new(from, two_step, board));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if matches!(board.get(to), Some(piece) if piece.color != color) {
            out.push(Move::new(from, to, board));
        }
    }
}
