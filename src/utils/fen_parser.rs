//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en passant
//! and clock fields are accepted and ignored since those rules are not
//! modelled.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_to_move = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    if parts.count() > 4 {
        return Err(ChessError::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    let board = parse_board(board_part)?;
    GameState::from_board(board, side_to_move)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessError::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;

            if col >= BOARD_SIZE {
                return Err(ChessError::InvalidFen(format!("rank {} has too many files", 8 - row)));
            }

            board.cells[row][col] = Some(piece);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.board.pieces().count(), 32);
        assert_eq!(
            game_state.board.cells[0][3],
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            game_state.board.cells[7][4],
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }

    #[test]
    fn placement_only_fen_defaults_to_white() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3").expect("placement-only FEN should parse");
        assert!(game_state.white_to_move());

        let black = parse_fen("4k3/8/8/8/8/8/8/4K3 b KQkq e3 0 1").expect("full FEN should parse");
        assert!(!black.white_to_move());
    }

    #[test]
    fn malformed_fens_are_rejected() {
        for bad in [
            "",
            "4k3/8/8/8/8/8/4K3 w",
            "4k3/8/8/8/8/8/8/4K4 w",
            "4k3/8/8/8/8/8/8/4KX2 w",
            "4k3/8/8/8/8/8/8/4K3 x",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn fen_without_kings_is_rejected() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
    }
}
