use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::move_generation::legal_move_shared::GenerationMode;

/// True if any piece of `attacker_color` could move onto `square`.
///
/// Runs one full generation pass for the attacker, so it works for any side
/// regardless of who is to move.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let mut attacks = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, attacker_color, GenerationMode::Attacks, &mut attacks);
    attacks.iter().any(|mv| mv.to == square)
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}
