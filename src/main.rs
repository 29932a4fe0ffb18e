use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use mailbox_chess::console::console_top::run_stdio_loop;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::{perft, perft_divide};

/// Console chess board with legal move checking.
#[derive(Debug, Parser)]
#[command(name = "mailbox_chess", version)]
struct Args {
    /// Start from this FEN instead of the standard position.
    #[arg(long)]
    fen: Option<String>,

    /// Print perft counts to this depth and exit.
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u8>,

    /// With --perft, also print node counts per root move.
    #[arg(long, requires = "perft")]
    divide: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut game_state = match args.fen.as_deref() {
        Some(fen) => match GameState::from_fen(fen) {
            Ok(game_state) => game_state,
            Err(err) => {
                error!(%err, "could not load starting position");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new(),
    };

    if let Some(depth) = args.perft {
        if args.divide {
            for (mv, nodes) in perft_divide(&mut game_state, depth) {
                println!("{mv}: {nodes}");
            }
        }
        let counts = perft(&mut game_state, depth);
        println!(
            "depth {depth}: nodes {} captures {} checks {} checkmates {} stalemates {}",
            counts.nodes, counts.captures, counts.checks, counts.checkmates, counts.stalemates
        );
        return ExitCode::SUCCESS;
    }

    match run_stdio_loop(game_state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "console loop failed");
            ExitCode::FAILURE
        }
    }
}
