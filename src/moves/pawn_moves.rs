use crate::game_state::chess_types::{Color, Square};

/// Square one step forward for `color`, if on the board.
#[inline]
pub fn pawn_push_target(color: Color, square: Square) -> Option<Square> {
    square.offset(color.forward(), 0)
}

/// Diagonal-forward squares (left file first), ignoring occupancy.
#[inline]
pub fn pawn_capture_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(color.forward(), d_col))
}
