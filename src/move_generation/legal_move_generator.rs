//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves for the side to move, tries each one on the
//! board, drops those that leave the mover's own king attacked, and refreshes
//! the checkmate/stalemate flags from the result.

use tracing::info;

use crate::game_state::{chess_types::*, game_state::GameState};

impl GameState {
    /// Legal moves for the side to move, in generation order.
    ///
    /// Also recomputes `check_mate` and `stale_mate`. The board is mutated
    /// while candidates are tried and is restored before returning.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let mut moves = self.get_all_possible_moves();

        moves.retain(|&mv| {
            self.make_move(mv);
            let leaves_king_attacked = self.is_king_attacked(mover);
            self.undo_move();
            !leaves_king_attacked
        });

        if moves.is_empty() {
            if self.in_check() {
                info!(winner = ?mover.opposite(), "checkmate");
                self.check_mate = true;
                self.stale_mate = false;
            } else {
                info!(side = ?mover, "stalemate");
                self.check_mate = false;
                self.stale_mate = true;
            }
        } else {
            self.check_mate = false;
            self.stale_mate = false;
        }

        moves
    }

    /// Resolve a player's `origin -> destination` pick against the legal list.
    pub fn find_valid_move(&mut self, origin: Square, destination: Square) -> Option<Move> {
        let candidate = Move::new(origin, destination, &self.board);
        self.get_valid_moves()
            .into_iter()
            .find(|mv| *mv == candidate)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::long_algebraic::parse_long_algebraic;

    fn square(text: &str) -> Square {
        algebraic_to_square(text).expect("square should parse")
    }

    fn play(game: &mut GameState, notations: &[&str]) {
        for notation in notations {
            let mv = parse_long_algebraic(notation, game).expect("move should parse");
            let legal = game
                .find_valid_move(mv.origin, mv.destination)
                .unwrap_or_else(|| panic!("{notation} should be legal"));
            game.make_move(legal);
        }
    }

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut game = GameState::new();
        let moves = game.get_valid_moves();
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|m| matches!(m.piece_moved, Some(p) if p.kind == PieceKind::Pawn))
            .count();
        assert_eq!(pawn_moves, 16);
        assert!(!game.check_mate);
        assert!(!game.stale_mate);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn back_rank_mate_on_h8_is_detected() {
        let mut game = GameState::from_fen("7k/6Q1/8/8/8/8/8/K5R1 b - - 0 1").expect("FEN should parse");
        assert!(game.in_check());
        assert!(game.get_valid_moves().is_empty());
        assert!(game.check_mate);
        assert!(!game.stale_mate);
        assert!(game.is_game_over());
    }

    #[test]
    fn cornered_king_without_check_is_stalemate() {
        let mut game = GameState::from_fen("7k/5Q2/8/8/8/8/8/K7 b - - 0 1").expect("FEN should parse");
        assert!(!game.in_check());
        assert!(game.get_valid_moves().is_empty());
        assert!(game.stale_mate);
        assert!(!game.check_mate);
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let mut game = GameState::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let moves = game.get_valid_moves();

        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.origin == square("e1")));
    }

    #[test]
    fn king_may_not_step_onto_a_pawn_capture_square() {
        let mut game = GameState::from_fen("4k3/8/8/3p4/8/2K5/8/8 w - - 0 1").expect("FEN should parse");
        let moves = game.get_valid_moves();
        let targets: Vec<String> = moves.iter().map(|m| m.destination.to_string()).collect();

        assert!(!targets.contains(&"c4".to_owned()));
        assert!(!targets.contains(&"e4".to_owned()));
        assert!(targets.contains(&"d4".to_owned()));
    }

    #[test]
    fn fools_mate_sets_flag_and_undo_clears_it() {
        let mut game = GameState::new();
        play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

        assert!(game.get_valid_moves().is_empty());
        assert!(game.check_mate);

        game.undo_move();
        assert!(!game.get_valid_moves().is_empty());
        assert!(!game.check_mate);
        assert!(!game.stale_mate);
    }

    #[test]
    fn find_valid_move_rejects_illegal_pick() {
        let mut game = GameState::new();
        assert!(game.find_valid_move(square("e2"), square("e5")).is_none());
        assert!(game.find_valid_move(square("e7"), square("e5")).is_none());

        let found = game
            .find_valid_move(square("e2"), square("e4"))
            .expect("e2e4 should be legal");
        assert_eq!(found.chess_notation(), "e2e4");
    }

    fn snapshot(game: &GameState) -> (Board, Color, Square, Square) {
        (
            game.board,
            game.side_to_move,
            game.white_king_location,
            game.black_king_location,
        )
    }

    #[test]
    fn random_playouts_keep_make_undo_exact_and_never_self_check() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..8 {
            let mut game = GameState::new();
            let start = snapshot(&game);

            for _ in 0..60 {
                let moves = game.get_valid_moves();
                if moves.is_empty() {
                    break;
                }

                let mover = game.side_to_move;
                for &mv in &moves {
                    let before = snapshot(&game);
                    game.make_move(mv);
                    assert!(!game.is_king_attacked(mover), "{mv} leaves own king attacked");
                    game.undo_move();
                    assert_eq!(snapshot(&game), before, "undo of {mv} was not exact");
                }

                let pick = moves[rng.random_range(0..moves.len())];
                game.make_move(pick);
            }

            while game.undo_move().is_some() {}
            assert_eq!(snapshot(&game), start);
        }
    }
}
