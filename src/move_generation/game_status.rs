//! Terminal detection.
//!
//! Status is never stored; it is recomputed from the legal move list and the
//! current check state every time it is asked for.

use log::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub fn game_status(game_state: &mut GameState) -> GameStatus {
    let has_moves = !LegalMoveGenerator.generate_legal_moves(game_state).is_empty();
    if has_moves {
        return GameStatus::Ongoing;
    }

    let status = if is_in_check(game_state, game_state.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    };
    debug!("{:?} to move has no legal moves: {:?}", game_state.side_to_move, status);
    status
}
