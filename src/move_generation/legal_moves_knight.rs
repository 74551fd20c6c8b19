use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(game_state: &GameState, side: Color, from: Square, out: &mut Vec<Move>) {
    let knight = Piece::new(side, PieceKind::Knight);
    push_step_moves(game_state, knight, from, knight_targets(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_skips_allied_squares_and_captures_enemies() {
        let game = GameState::from_fen("4k3/8/8/8/2p5/8/3P4/1N2K3 w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, Color::Light, Square::at(7, 1), &mut out);

        // b1: a3, c3 and d2 (own pawn) -> a3, c3 only.
        let targets: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::at(5, 0)));
        assert!(targets.contains(&Square::at(5, 2)));
        assert!(out.iter().all(|mv| mv.captured_piece.is_none()));
    }
}
