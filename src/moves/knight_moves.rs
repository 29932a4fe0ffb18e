//! Knight move generation.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;

pub fn generate_knight_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(board, from, color, &KNIGHT_OFFSETS, out);
}
