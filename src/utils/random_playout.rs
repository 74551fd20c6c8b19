//! Random legal playouts that check the engine's invariants at every ply.
//!
//! At each step the position must survive an apply/undo round trip of every
//! legal move unchanged, no legal move may leave the mover in check, and the
//! move log and both history logs must stay in lockstep.

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::GameStatus;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutReport {
    pub plies: usize,
    pub final_status: GameStatus,
    pub final_fen: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayoutViolation {
    #[error("apply/undo of {mv} changed the position {fen}")]
    RoundTrip { fen: String, mv: String },

    #[error("legal move {mv} leaves the mover in check in {fen}")]
    SelfCheck { fen: String, mv: String },

    #[error("history logs out of step after {plies} plies")]
    LogMismatch { plies: usize },
}

/// Plays up to `max_plies` random legal moves from `start`.
pub fn play_random_game<R: Rng + ?Sized>(
    start: &GameState,
    rng: &mut R,
    max_plies: usize,
) -> Result<PlayoutReport, PlayoutViolation> {
    let mut game_state = start.clone();
    let base_len = game_state.move_log.len();

    for ply in 0..max_plies {
        let moves = game_state.legal_moves();
        check_moves(&mut game_state, &moves)?;
        check_logs(&game_state, base_len, ply)?;

        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        debug!("ply {ply}: {}", move_to_long_algebraic(&mv));
        game_state.apply_move(mv);
    }

    let report = PlayoutReport {
        plies: game_state.move_log.len() - base_len,
        final_status: game_state.status(),
        final_fen: game_state.get_fen(),
    };
    info!(
        "playout finished after {} plies: {:?} ({})",
        report.plies, report.final_status, report.final_fen
    );
    Ok(report)
}

fn check_moves(game_state: &mut GameState, moves: &[Move]) -> Result<(), PlayoutViolation> {
    let mover = game_state.side_to_move;
    let before = game_state.clone();

    for &mv in moves {
        game_state.apply_move(mv);
        let self_check = is_in_check(game_state, mover);
        game_state.undo_move();

        if self_check {
            return Err(PlayoutViolation::SelfCheck {
                fen: before.get_fen(),
                mv: move_to_long_algebraic(&mv),
            });
        }
        if *game_state != before {
            return Err(PlayoutViolation::RoundTrip {
                fen: before.get_fen(),
                mv: move_to_long_algebraic(&mv),
            });
        }
    }
    Ok(())
}

fn check_logs(game_state: &GameState, base_len: usize, plies: usize) -> Result<(), PlayoutViolation> {
    let applied = game_state.move_log.len() - base_len;
    let in_step = applied == plies
        && game_state.castling_rights_log.len() == game_state.move_log.len() + 1
        && game_state.en_passant_log.len() == game_state.move_log.len()
        && game_state.castling_rights_log.last() == Some(&game_state.castling_rights);

    if in_step {
        Ok(())
    } else {
        Err(PlayoutViolation::LogMismatch { plies })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seeded_playouts_hold_invariants() {
        let start = GameState::new_game();
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = play_random_game(&start, &mut rng, 60).expect("invariants should hold");
            assert!(report.plies <= 60);
            if report.plies < 60 {
                assert_ne!(report.final_status, GameStatus::Ongoing);
            }
        }
    }

    #[test]
    fn same_seed_same_game() {
        let start = GameState::new_game();
        let first = play_random_game(&start, &mut StdRng::seed_from_u64(7), 30)
            .expect("invariants should hold");
        let second = play_random_game(&start, &mut StdRng::seed_from_u64(7), 30)
            .expect("invariants should hold");
        assert_eq!(first, second);
    }

    #[test]
    fn playout_from_castling_position() {
        let start =
            GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
                .expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(11);
        play_random_game(&start, &mut rng, 40).expect("invariants should hold");
    }
}
