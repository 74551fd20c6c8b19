//! Terminal driver: enter moves as square pairs (`e2e4`), `undo` to take one
//! back, `moves` to list the legal moves, `fen` to print the position.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};

use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::game_status::GameStatus;
use chess_rules::utils::logging::init_logging;
use chess_rules::utils::long_algebraic::move_to_long_algebraic;
use chess_rules::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start from this FEN instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    let start = match args.fen.as_deref().map(GameState::from_fen) {
        Some(Ok(game_state)) => game_state,
        Some(Err(e)) => {
            error!("cannot start from the given FEN: {e}");
            std::process::exit(1);
        }
        None => GameState::new_game(),
    };

    if let Err(e) = run(start) {
        error!("I/O error: {e}");
        std::process::exit(1);
    }
}

fn run(start: GameState) -> io::Result<()> {
    let mut game_state = start.clone();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    show(&mut game_state, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => writeln!(stdout, "commands: <from><to> (e.g. e2e4), undo, moves, fen, new, quit")?,
            "undo" | "z" => {
                game_state.undo_move();
                show(&mut game_state, &mut stdout)?;
            }
            "new" => {
                game_state = start.clone();
                show(&mut game_state, &mut stdout)?;
            }
            "fen" => writeln!(stdout, "{}", game_state.get_fen())?,
            "moves" => {
                let moves: Vec<String> = game_state
                    .legal_moves()
                    .iter()
                    .map(move_to_long_algebraic)
                    .collect();
                writeln!(stdout, "{}", moves.join(" "))?;
            }
            text => match game_state.play_move(text) {
                Ok(mv) => {
                    info!("played {}", move_to_long_algebraic(&mv));
                    show(&mut game_state, &mut stdout)?;
                }
                Err(e) => writeln!(stdout, "{e}")?,
            },
        }
    }

    Ok(())
}

fn show(game_state: &mut GameState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", render_game_state(game_state))?;

    let to_move = format!("{:?}", game_state.side_to_move);
    match game_state.status() {
        GameStatus::Checkmate => writeln!(out, "checkmate, {to_move} loses")?,
        GameStatus::Stalemate => writeln!(out, "stalemate")?,
        GameStatus::Ongoing if game_state.is_in_check() => writeln!(out, "{to_move} to move, in check")?,
        GameStatus::Ongoing => writeln!(out, "{to_move} to move")?,
    }
    out.flush()
}
