//! Pawn pushes, double steps, captures and en passant.
//!
//! Promotion is not decided here: any pawn move landing on the far row is
//! flagged by the `Move` constructor and always promotes to a queen.

use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{push_move, GenerationMode};
use crate::moves::move_descriptions::{Move, SpecialMoveFlags};
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_push_target};

pub fn generate_pawn_moves(
    game_state: &GameState,
    side: Color,
    from: Square,
    mode: GenerationMode,
    out: &mut Vec<Move>,
) {
    let pawn = Piece::new(side, PieceKind::Pawn);
    let board = &game_state.board;

    if mode == GenerationMode::Attacks {
        for to in pawn_capture_targets(side, from) {
            push_move(game_state, pawn, from, to, SpecialMoveFlags::default(), out);
        }
        return;
    }

    if let Some(one_step) = pawn_push_target(side, from).filter(|&sq| board.is_empty(sq)) {
        push_move(game_state, pawn, from, one_step, SpecialMoveFlags::default(), out);

        if from.row() == pawn_start_row(side) {
            if let Some(two_step) = pawn_push_target(side, one_step).filter(|&sq| board.is_empty(sq)) {
                push_move(game_state, pawn, from, two_step, SpecialMoveFlags::default(), out);
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if board.enemy_of(side, to).is_some() {
            push_move(game_state, pawn, from, to, SpecialMoveFlags::default(), out);
        } else if side == game_state.side_to_move && game_state.en_passant_square == Some(to) {
            out.push(Move::from_snapshot(
                pawn,
                Some(Piece::new(side.opposite(), PieceKind::Pawn)),
                from,
                to,
                SpecialMoveFlags::EN_PASSANT,
            ));
        }
    }
}
