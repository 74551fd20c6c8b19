//! King steps and castling candidates.
//!
//! Plain king steps are not screened for attacked destinations here; the
//! legality filter handles that for every piece alike. Castling is different:
//! its own preconditions (right held, path empty, king never crossing an
//! attacked square) are checked before the candidate is emitted.

use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, SpecialMoveFlags};

pub fn generate_king_moves(game_state: &GameState, side: Color, from: Square, out: &mut Vec<Move>) {
    let king = Piece::new(side, PieceKind::King);
    push_step_moves(game_state, king, from, king_targets(from), out);
}

/// Appends the castling moves available to the side to move.
pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let king = Piece::new(side, PieceKind::King);
    let from = king_home(side);

    if game_state.board.get(from) != Some(king) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(game_state, from, enemy) {
        return;
    }

    for castle_side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !game_state.castling_rights.has(side, castle_side) {
            continue;
        }
        if game_state.board.get(rook_home(side, castle_side)) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }

        let row = from.row();
        let (empty_cols, transit_cols, to_col): (&[u8], &[u8], u8) = match castle_side {
            CastleSide::Kingside => (&[5, 6], &[5, 6], 6),
            CastleSide::Queenside => (&[1, 2, 3], &[3, 2], 2),
        };

        let path_clear = empty_cols
            .iter()
            .all(|&col| game_state.board.is_empty(Square::at(row, col)));
        if !path_clear {
            continue;
        }

        let path_safe = transit_cols
            .iter()
            .all(|&col| !is_square_attacked(game_state, Square::at(row, col), enemy));
        if !path_safe {
            continue;
        }

        out.push(Move::from_snapshot(
            king,
            None,
            from,
            Square::at(row, to_col),
            SpecialMoveFlags::CASTLE,
        ));
    }
}
