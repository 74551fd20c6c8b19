use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(game_state: &GameState, side: Color, from: Square, out: &mut Vec<Move>) {
    let bishop = Piece::new(side, PieceKind::Bishop);
    push_slider_moves(game_state, bishop, from, &BISHOP_DIRECTIONS, out);
}
