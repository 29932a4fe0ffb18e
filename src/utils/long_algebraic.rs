//! Long algebraic move input such as `e2e4`.
//!
//! The parsed move is built from the current board so it can be matched by
//! equality against the legal move list.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_long_algebraic(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidMoveNotation(long_algebraic.to_owned()));
    }

    let invalid = |_| ChessError::InvalidMoveNotation(long_algebraic.to_owned());
    let origin = algebraic_to_square(&text[0..2]).map_err(invalid)?;
    let destination = algebraic_to_square(&text[2..4]).map_err(invalid)?;

    if game_state.board.get(origin).is_none() {
        return Err(ChessError::EmptyOrigin(origin));
    }

    Ok(Move::new(origin, destination, &game_state.board))
}

#[cfg(test)]
mod tests {
    use super::parse_long_algebraic;
    use crate::errors::ChessError;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn parses_and_matches_generated_move() {
        let mut game = GameState::new();
        let typed = parse_long_algebraic("g1f3", &game).expect("move should parse");

        assert_eq!(typed.chess_notation(), "g1f3");
        assert_eq!(
            typed.piece_moved,
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert!(game.get_valid_moves().contains(&typed));
    }

    #[test]
    fn rejects_malformed_text() {
        let game = GameState::new();
        for bad in ["", "e2", "e2e", "e2e4q", "e2x4", "z2e4", "é2e4"] {
            assert_eq!(
                parse_long_algebraic(bad, &game),
                Err(ChessError::InvalidMoveNotation(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_origin() {
        let game = GameState::new();
        let e4 = Square::new(4, 4).expect("e4 should be on the board");
        assert_eq!(
            parse_long_algebraic("e4e5", &game),
            Err(ChessError::EmptyOrigin(e4))
        );
    }
}
