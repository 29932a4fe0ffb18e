//! Occupancy helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;

/// Push `from -> to` unless `to` holds a piece of `color`.
#[inline]
pub fn push_unless_allied(board: &Board, from: Square, to: Square, color: Color, out: &mut Vec<Move>) {
    match board.get(to) {
        Some(piece) if piece.color == color => {}
        _ => out.push(Move::new(from, to, board)),
    }
}

/// Slide from `from` along each direction until the edge or a blocker.
///
/// Empty squares extend the ray; an enemy piece is a destination and ends it;
/// an allied piece ends it without being a destination.
pub fn push_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.get(to) {
                None => out.push(Move::new(from, to, board)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::new(from, to, board));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Push a single-step move for each offset that lands on the board and not on
/// an allied piece.
pub fn push_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            push_unless_allied(board, from, to, color, out);
        }
    }
}
