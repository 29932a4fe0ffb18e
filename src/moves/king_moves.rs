//! King move generation. Castling is not supported.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;

pub fn generate_king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(board, from, color, &KING_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn king_in_centre_has_eight_targets() {
        let board = Board::empty();
        let mut moves = Vec::new();
        generate_king_moves(&board, sq(4, 4), Color::Black, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn king_on_edge_stays_on_board() {
        let board = Board::empty();
        let mut moves = Vec::new();
        generate_king_moves(&board, sq(0, 7), Color::Black, &mut moves);
        let targets: Vec<String> = moves.iter().map(|m| m.destination.to_string()).collect();
        assert_eq!(targets, vec!["g8", "g7", "h7"]);
    }
}
