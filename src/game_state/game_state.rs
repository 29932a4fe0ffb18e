//! Mutable game aggregate.
//!
//! `GameState` owns the board, the side to move, the move log used by undo,
//! cached king squares and the terminal-status flags. Move generation,
//! make/undo and check detection are implemented on it in
//! `crate::move_generation`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Board position plus the history needed to take moves back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    /// Applied moves, most recent last.
    pub move_log: Vec<Move>,

    pub white_king_location: Square,
    pub black_king_location: Square,

    // Only refreshed by `get_valid_moves`.
    pub check_mate: bool,
    pub stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move, empty history.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Color::Black, *kind));
            board.cells[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.cells[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.cells[7][col] = Some(Piece::new(Color::White, *kind));
        }

        Self {
            board,
            side_to_move: Color::White,
            move_log: Vec::new(),
            white_king_location: Square { row: 7, col: 4 },
            black_king_location: Square { row: 0, col: 4 },
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Inject an arbitrary position with an empty history.
    ///
    /// The board must hold exactly one king of each color.
    pub fn from_board(board: Board, side_to_move: Color) -> ChessResult<Self> {
        let white_king_location = single_king(&board, Color::White)?;
        let black_king_location = single_king(&board, Color::Black)?;

        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            white_king_location,
            black_king_location,
            check_mate: false,
            stale_mate: false,
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.move_log.is_empty()
    }

    /// True once `get_valid_moves` has found checkmate or stalemate.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.check_mate || self.stale_mate
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<Square> {
    let kings = board.find(Piece::new(color, PieceKind::King));
    match kings.as_slice() {
        [square] => Ok(*square),
        _ => Err(ChessError::KingCount {
            color,
            count: kings.len(),
        }),
    }
}
