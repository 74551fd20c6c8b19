use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

/// Produces the legal moves of the side to move.
///
/// Implementations may mutate `game_state` while working but must hand it
/// back exactly as they received it.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move>;
}
