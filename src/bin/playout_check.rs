//! Plays seeded random games and checks apply/undo and king-safety invariants
//! at every ply.
//!
//! Usage:
//! `cargo run --release --bin playout_check -- --games 200 --seed 1`

use clap::Parser;
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::game_status::GameStatus;
use chess_rules::utils::logging::init_logging;
use chess_rules::utils::random_playout::play_random_game;

#[derive(Parser, Debug)]
#[command(author, version, about = "Random-playout invariant checker", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Start every game from this FEN
    #[arg(long)]
    fen: Option<String>,

    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let start = match args.fen.as_deref().map(GameState::from_fen) {
        Some(Ok(game_state)) => game_state,
        Some(Err(e)) => {
            error!("{e}");
            std::process::exit(1);
        }
        None => GameState::new_game(),
    };

    let (mut checkmates, mut stalemates, mut unfinished) = (0u64, 0u64, 0u64);

    for game in 0..args.games {
        let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(game));
        match play_random_game(&start, &mut rng, args.max_plies) {
            Ok(report) => match report.final_status {
                GameStatus::Checkmate => checkmates += 1,
                GameStatus::Stalemate => stalemates += 1,
                GameStatus::Ongoing => unfinished += 1,
            },
            Err(violation) => {
                error!("game {game} (seed {}): {violation}", args.seed.wrapping_add(game));
                std::process::exit(1);
            }
        }
    }

    info!(
        "{} games clean: {checkmates} checkmates, {stalemates} stalemates, {unfinished} cut at {} plies",
        args.games, args.max_plies
    );
}
