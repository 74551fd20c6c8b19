//! In-place move application and reversal.
//!
//! `apply_move` performs no legality check; it is used both for moves taken
//! from the legal list and for speculative application inside the legality
//! filter. Every call pushes exactly one entry onto the move log, the
//! castling-rights log and the en-passant log, so `undo_move` can restore the
//! previous state exactly.

use log::{debug, trace};

use crate::game_state::chess_rules::castling_right_for_rook_home;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::Move;

pub fn apply_move(game_state: &mut GameState, mv: Move) {
    let mover = mv.moved_piece.color;

    game_state.en_passant_log.push(game_state.en_passant_square);

    game_state.board.set(mv.from, None);
    game_state.board.set(mv.to, Some(mv.placed_piece()));

    if mv.is_en_passant {
        game_state.board.set(en_passant_victim_square(&mv), None);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.board.get(rook_from);
        game_state.board.set(rook_from, None);
        game_state.board.set(rook_to, rook);
    }

    if mv.moved_piece.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.to;
    }

    game_state.en_passant_square = mv.double_step_target();

    let rights = updated_castling_rights(game_state.castling_rights, &mv);
    game_state.castling_rights = rights;
    game_state.castling_rights_log.push(rights);

    game_state.move_log.push(mv);
    game_state.side_to_move = game_state.side_to_move.opposite();

    trace!(
        "applied move {} ({:?} {:?}), log length {}",
        mv.move_id(),
        mover,
        mv.moved_piece.kind,
        game_state.move_log.len()
    );
}

/// Reverts the last applied move. Does nothing when the log is empty.
pub fn undo_move(game_state: &mut GameState) {
    let Some(mv) = game_state.move_log.pop() else {
        debug!("undo requested with an empty move log");
        return;
    };
    let mover = mv.moved_piece.color;

    game_state.board.set(mv.from, Some(mv.moved_piece));
    if mv.is_en_passant {
        game_state.board.set(mv.to, None);
        game_state.board.set(en_passant_victim_square(&mv), mv.captured_piece);
    } else {
        game_state.board.set(mv.to, mv.captured_piece);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.board.get(rook_to);
        game_state.board.set(rook_to, None);
        game_state.board.set(rook_from, rook);
    }

    if mv.moved_piece.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.from;
    }

    game_state.side_to_move = game_state.side_to_move.opposite();

    game_state.castling_rights_log.pop();
    if let Some(&rights) = game_state.castling_rights_log.last() {
        game_state.castling_rights = rights;
    }

    game_state.en_passant_square = game_state.en_passant_log.pop().flatten();

    trace!(
        "undid move {}, log length {}",
        mv.move_id(),
        game_state.move_log.len()
    );
}

/// Square of the pawn taken en passant: destination column, origin row.
#[inline]
fn en_passant_victim_square(mv: &Move) -> Square {
    Square::at(mv.from.row(), mv.to.col())
}

/// Rook origin and destination for a castle, derived from the king's move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from.row();
    if mv.to.col() > mv.from.col() {
        (Square::at(row, 7), Square::at(row, mv.to.col() - 1))
    } else {
        (Square::at(row, 0), Square::at(row, mv.to.col() + 1))
    }
}

fn updated_castling_rights(mut rights: CastlingRights, mv: &Move) -> CastlingRights {
    let mover = mv.moved_piece.color;

    if mv.moved_piece.kind == PieceKind::King {
        rights.revoke_both(mover);
    }

    if mv.moved_piece.kind == PieceKind::Rook {
        if let Some((color, side)) = castling_right_for_rook_home(mv.from) {
            if color == mover {
                rights.revoke(color, side);
            }
        }
    }

    // Capturing a rook on its original square.
    if mv.is_capture() {
        if let Some((color, side)) = castling_right_for_rook_home(mv.to) {
            rights.revoke(color, side);
        }
    }

    rights
}
