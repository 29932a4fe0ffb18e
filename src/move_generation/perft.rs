//! Perft node counting for validating the move generator.
//!
//! Counts leaf positions reached by legal moves at a fixed depth, with a
//! breakdown of captures, checks, checkmates and stalemates among the leaves.

use std::thread;

use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
    pub checkmates: u64,
    pub stalemates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

/// Leaf node count only. Cheaper than [`perft`] because leaves are not
/// classified.
pub fn perft_nodes(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.get_valid_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        game_state.make_move(mv);
        nodes += perft_nodes(game_state, depth - 1);
        game_state.undo_move();
    }
    nodes
}

/// Full perft with leaf classification.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_valid_moves() {
        perft_recurse(game_state, mv, depth - 1, &mut total);
    }
    total
}

/// Leaf counts per root move, in generation order.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = game_state.get_valid_moves();
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        game_state.make_move(mv);
        out.push((mv, perft_nodes(game_state, depth - 1)));
        game_state.undo_move();
    }
    out
}

/// [`perft`] with one worker thread per root move, each on its own clone.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut root = game_state.clone();
    let root_moves = root.get_valid_moves();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut local_state = root.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(&mut local_state, mv, depth - 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        total
    })
}

fn perft_recurse(game_state: &mut GameState, mv: Move, remaining: u8, counts: &mut PerftCounts) {
    game_state.make_move(mv);

    if remaining == 0 {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if game_state.in_check() {
            counts.checks += 1;
        }
        if game_state.get_valid_moves().is_empty() {
            if game_state.check_mate {
                counts.checkmates += 1;
            } else {
                counts.stalemates += 1;
            }
        }
    } else {
        for child in game_state.get_valid_moves() {
            perft_recurse(game_state, child, remaining - 1, counts);
        }
    }

    game_state.undo_move();
}
