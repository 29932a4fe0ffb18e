//! Crate root module declarations for the mailbox chess rules engine.
//!
//! Exposes the game state model, per-piece move generators, the legality
//! filter with check/checkmate/stalemate detection, and text utilities (FEN,
//! algebraic notation, board rendering) used by tests and the console driver.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use moves::chess_move::Move;
