//! Bishop move generation: diagonal slides.

use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, out);
}
