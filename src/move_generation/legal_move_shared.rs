//! Helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{Move, SpecialMoveFlags};

/// What a generation pass is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Pseudo-legal moves for the side to move.
    Moves,
    /// Squares a side covers: pawns contribute both diagonals whatever stands
    /// there and never their pushes.
    Attacks,
}

#[inline]
pub fn push_move(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
    flags: SpecialMoveFlags,
    out: &mut Vec<Move>,
) {
    out.push(Move::from_snapshot(
        piece,
        game_state.board.get(to),
        from,
        to,
        flags,
    ));
}

/// Single-step pieces: every target not held by an ally.
pub fn push_step_moves(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    for to in targets {
        if !game_state.board.is_allied(piece.color, to) {
            push_move(game_state, piece, from, to, SpecialMoveFlags::default(), out);
        }
    }
}

/// Sliding pieces: walk each ray until the first occupied square, keeping it
/// only when it holds an enemy.
pub fn push_slider_moves(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.board.get(to) {
                None => push_move(game_state, piece, from, to, SpecialMoveFlags::default(), out),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        push_move(game_state, piece, from, to, SpecialMoveFlags::default(), out);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
