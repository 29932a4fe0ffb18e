//! Plain-text console front-end and command loop.
//!
//! Reads one command per line, resolves typed moves against the legal move
//! list, and prints the board plus end-of-game status. This is the thin
//! presentation layer around `GameState`; it holds no rules logic.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::utils::long_algebraic::parse_long_algebraic;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop(game_state: GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(game_state);

    console.print_position(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game_state: GameState,
}

impl ConsoleState {
    pub fn new(game_state: GameState) -> Self {
        Self { game_state }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one input line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };
        debug!(command = cmd, "console command");

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => {
                writeln!(out, "commands: <move e.g. e2e4>, undo, moves, board, fen, new, position <fen>, quit")?;
            }
            "board" => self.print_position(out)?,
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "moves" => {
                let moves = self.game_state.get_valid_moves();
                let listed: Vec<String> = moves.iter().map(|m| m.chess_notation()).collect();
                writeln!(out, "{} legal: {}", listed.len(), listed.join(" "))?;
            }
            "undo" if !self.game_state.can_undo() => writeln!(out, "nothing to undo")?,
            "undo" => {
                if let Some(mv) = self.game_state.undo_move() {
                    writeln!(out, "took back {mv}")?;
                }
                self.print_position(out)?;
            }
            "new" => {
                self.game_state = GameState::new();
                self.print_position(out)?;
            }
            "position" => match GameState::from_fen(rest) {
                Ok(game_state) => {
                    self.game_state = game_state;
                    self.print_position(out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.game_state.is_game_over() {
            writeln!(out, "game is over; use undo, new or position")?;
            return Ok(());
        }

        let typed = match parse_long_algebraic(text, &self.game_state) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                return Ok(());
            }
        };

        match self.game_state.find_valid_move(typed.origin, typed.destination) {
            Some(mv) => {
                self.game_state.play_move(mv);
                self.print_position(out)?;
            }
            None => writeln!(out, "illegal move: {typed}")?,
        }

        Ok(())
    }

    /// Board, side to move and terminal status. Refreshes the status flags.
    pub fn print_position(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.game_state.get_valid_moves();

        writeln!(out, "{}", render_game_state(&self.game_state))?;
        if self.game_state.check_mate {
            let winner = if self.game_state.white_to_move() { "black" } else { "white" };
            writeln!(out, "checkmate, {winner} wins")?;
        } else if self.game_state.stale_mate {
            writeln!(out, "stalemate, draw")?;
        } else {
            let side = if self.game_state.white_to_move() { "white" } else { "black" };
            let check = if self.game_state.in_check() { " (in check)" } else { "" };
            writeln!(out, "{side} to move{check}")?;
        }
        Ok(())
    }
}
