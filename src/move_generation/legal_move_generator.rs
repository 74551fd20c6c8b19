//! Full legal move generation pipeline.
//!
//! Scans the board row by row, dispatches each piece of the requested color to
//! its generator, appends castling candidates, then drops every candidate that
//! would leave the mover's own king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_shared::GenerationMode;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castling_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

/// Make, test, unmake on the caller's state.
pub struct LegalMoveGenerator;

/// Tests each candidate on a throwaway clone; the caller's state is never touched.
pub struct CloneLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        let mover = game_state.side_to_move;
        let mut moves = candidate_moves(game_state);

        moves.retain(|&mv| {
            apply_move(game_state, mv);
            let safe = !is_in_check(game_state, mover);
            undo_move(game_state);
            safe
        });

        moves
    }
}

impl MoveGenerator for CloneLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &mut GameState) -> Vec<Move> {
        let mover = game_state.side_to_move;
        let mut moves = candidate_moves(game_state);

        moves.retain(|&mv| {
            let mut next = game_state.clone();
            apply_move(&mut next, mv);
            !is_in_check(&next, mover)
        });

        moves
    }
}

/// Pseudo-legal moves plus castling for the side to move.
fn candidate_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, game_state.side_to_move, GenerationMode::Moves, &mut moves);
    generate_castling_moves(game_state, &mut moves);
    moves
}

/// Every pseudo-legal move (or attack, per `mode`) of `side`, in row-major order.
pub fn generate_pseudo_legal_moves(
    game_state: &GameState,
    side: Color,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    for (from, kind) in game_state.board.squares_of(side) {
        match kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, side, from, mode, out),
            PieceKind::Knight => generate_knight_moves(game_state, side, from, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, side, from, out),
            PieceKind::Rook => generate_rook_moves(game_state, side, from, out),
            PieceKind::Queen => generate_queen_moves(game_state, side, from, out),
            PieceKind::King => generate_king_moves(game_state, side, from, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CloneLegalMoveGenerator, LegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::move_generation::move_generator::MoveGenerator;

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let moves = LegalMoveGenerator.generate_legal_moves(&mut game);

        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|mv| mv.moved_piece.kind == PieceKind::Pawn).count(), 16);
        assert_eq!(moves.iter().filter(|mv| mv.moved_piece.kind == PieceKind::Knight).count(), 4);
        assert_eq!(game, before);
    }

    #[test]
    fn clone_generator_matches_make_unmake() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let reference = LegalMoveGenerator.generate_legal_moves(&mut game);
            let cloned = CloneLegalMoveGenerator.generate_legal_moves(&mut game);
            assert_eq!(reference, cloned, "mismatch for {fen}");
        }
    }

    #[test]
    fn every_reply_to_check_resolves_it() {
        // Dark queen on e4 checks the Light king on e1 down the open file.
        let mut game = GameState::from_fen("4k3/8/8/8/4q3/8/3P1P2/3QKB2 w - - 0 1")
            .expect("FEN should parse");
        assert!(game.is_in_check());

        let moves = game.legal_moves();
        // Qe2 and Be2 block; nothing else helps.
        assert_eq!(moves.len(), 2);
        for mv in moves {
            game.apply_move(mv);
            assert!(!is_in_check(&game, Color::Light), "move {} leaves king in check", mv.move_id());
            game.undo_move();
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // Light knight on e2 pinned by the rook on e8.
        let mut game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1")
            .expect("FEN should parse");
        let moves = game.legal_moves();
        assert!(moves.iter().all(|mv| mv.moved_piece.kind == PieceKind::King));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let mut game = GameState::from_fen("3rk3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let targets: Vec<Square> = game.legal_moves().iter().map(|mv| mv.to).collect();
        assert!(!targets.contains(&Square::at(7, 3)));
        assert!(!targets.contains(&Square::at(6, 3)));
        assert!(targets.contains(&Square::at(7, 5)));
    }
}
