//! Attack and check detection.
//!
//! A square is attacked when it is the destination of some pseudo-legal move
//! of the attacking color. This reuses the move generators directly instead
//! of precomputed attack maps.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::pseudo_legal_moves;

/// True if any pseudo-legal move of `attacker` ends on `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    pseudo_legal_moves(board, attacker)
        .iter()
        .any(|mv| mv.destination == square)
}

impl GameState {
    /// True if the opponent of the side to move attacks `square`.
    #[inline]
    pub fn is_under_attack(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.side_to_move.opposite())
    }

    /// True if the side to move's king is attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// True if `color`'s king is attacked by the other color, whoever is to move.
    #[inline]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        is_square_attacked(&self.board, self.king_location(color), color.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn square(text: &str) -> Square {
        crate::utils::algebraic::algebraic_to_square(text).expect("square should parse")
    }

    #[test]
    fn start_position_is_not_check() {
        let game = GameState::new();
        assert!(!game.in_check());
        assert!(game.is_under_attack(square("e6")));
        assert!(!game.is_under_attack(square("e4")));
    }

    #[test]
    fn pawn_attacks_are_its_generated_destinations() {
        let game = GameState::from_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // Pushes count; diagonals only count when an enemy piece stands there.
        assert!(game.is_under_attack(square("d4")));
        assert!(!game.is_under_attack(square("c4")));

        let mut board = game.board;
        board.set(square("c4"), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert!(is_square_attacked(&board, square("c4"), Color::Black));
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert!(!game.is_king_attacked(Color::Black));

        let blocked = GameState::from_fen("4k3/8/8/8/8/8/8/4KB1r w - - 0 1").expect("FEN should parse");
        assert!(!blocked.in_check());
    }
}
