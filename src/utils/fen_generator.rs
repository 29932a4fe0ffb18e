//! GameState-to-FEN writer.
//!
//! Castling and en passant fields are always `-` and the halfmove clock is
//! always 0; the fullmove number is derived from the move history.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let fullmove_number = 1 + game_state.move_log.len() / 2;

    format!(
        "{} {} - - 0 {}",
        generate_board_field(&game_state.board),
        side_to_move,
        fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.cells.iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::parse_long_algebraic;

    #[test]
    fn starting_position_fen_is_reproduced() {
        assert_eq!(generate_fen(&GameState::new()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_tracks_moves_and_fullmove_number() {
        let mut game = GameState::new();
        for notation in ["e2e4", "c7c5"] {
            let mv = parse_long_algebraic(notation, &game).expect("move should parse");
            game.make_move(mv);
        }
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 2"
        );
    }

    #[test]
    fn injected_position_round_trips() {
        let fen = "7k/6Q1/8/8/8/8/8/K5R1 b - - 0 1";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(game.get_fen(), fen);
    }
}
