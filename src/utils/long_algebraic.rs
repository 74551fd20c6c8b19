//! Square-pair move notation (`e2e4`).
//!
//! Input text is turned into a move by matching its origin and destination
//! against the legal move list, so the returned move always carries the
//! generator's flags (castle, en passant, promotion).

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Origin and destination coordinates, e.g. `e7e8` (promotion is always to a queen).
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    out
}

/// Finds the legal move named by `text`.
///
/// A trailing `q` promotion suffix is accepted and ignored.
pub fn long_algebraic_to_move(text: &str, game_state: &mut GameState) -> ChessResult<Move> {
    let trimmed = text.trim();
    let coords = match trimmed.len() {
        4 => Some(trimmed),
        5 if trimmed.ends_with(['q', 'Q']) => trimmed.get(..4),
        _ => None,
    }
    .ok_or_else(|| ChessError::IllegalMove(trimmed.to_owned()))?;

    let from = algebraic_to_square(coords.get(0..2).unwrap_or_default())?;
    let to = algebraic_to_square(coords.get(2..4).unwrap_or_default())?;

    let found = game_state
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to);

    match found {
        Some(mv) => {
            debug!("matched {trimmed} to legal move {}", mv.move_id());
            Ok(mv)
        }
        None => Err(ChessError::IllegalMove(trimmed.to_owned())),
    }
}
