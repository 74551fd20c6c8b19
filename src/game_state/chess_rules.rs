//! Canonical chess-rule constants.
//!
//! Starting position, home rows and the corner squares that castling rights
//! are tied to, all expressed in `(row, col)` board coordinates.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// Row holding a color's king and rooks at the start.
#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Row a color's pawns start on (and double-step from).
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// Farthest row for a color's pawns; reaching it promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(back_row(color), KING_HOME_COL)
}

/// Home corner of the rook whose move or capture revokes the given right.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => Square::at(back_row(color), KINGSIDE_ROOK_COL),
        CastleSide::Queenside => Square::at(back_row(color), QUEENSIDE_ROOK_COL),
    }
}

/// Castling right, if any, tied to a rook standing on `square`.
pub fn castling_right_for_rook_home(square: Square) -> Option<(Color, CastleSide)> {
    [Color::Light, Color::Dark]
        .into_iter()
        .flat_map(|color| {
            [CastleSide::Kingside, CastleSide::Queenside]
                .into_iter()
                .map(move |side| (color, side))
        })
        .find(|&(color, side)| rook_home(color, side) == square)
}
