use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(game_state: &GameState, side: Color, from: Square, out: &mut Vec<Move>) {
    let rook = Piece::new(side, PieceKind::Rook);
    push_slider_moves(game_state, rook, from, &ROOK_DIRECTIONS, out);
}
