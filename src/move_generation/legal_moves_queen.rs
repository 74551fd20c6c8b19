use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(game_state: &GameState, side: Color, from: Square, out: &mut Vec<Move>) {
    let queen = Piece::new(side, PieceKind::Queen);
    push_slider_moves(game_state, queen, from, &QUEEN_DIRECTIONS, out);
}
