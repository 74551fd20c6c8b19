//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 3 --threads`

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use chess_rules::move_generation::perft::{perft_detailed, perft_multi_threaded, PerftCounts};
use chess_rules::utils::logging::init_logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "Count legal move tree leaves", long_about = None)]
struct Args {
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Split root moves across threads
    #[arg(long)]
    threads: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let mut game_state = match GameState::from_fen(&args.fen) {
        Ok(game_state) => game_state,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!("perft depth {} on {}", args.depth, args.fen);
    let started = Instant::now();

    let counts: PerftCounts = if args.threads {
        match perft_multi_threaded(Arc::new(LegalMoveGenerator), &game_state, args.depth) {
            Ok(counts) => counts,
            Err(_) => {
                error!("a perft worker thread panicked");
                std::process::exit(1);
            }
        }
    } else {
        perft_detailed(&LegalMoveGenerator, &mut game_state, args.depth)
    };

    let elapsed = started.elapsed();
    let nps = counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9);
    println!(
        "depth={} nodes={} captures={} ep={} castles={} promotions={} checks={} checkmates={} elapsed_ms={} nps={:.0}",
        args.depth,
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_millis(),
        nps
    );
}
