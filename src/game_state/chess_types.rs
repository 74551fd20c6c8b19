//! Value types shared by the board, move generation and notation layers.
//!
//! Squares are addressed as `(row, col)` with row 0 being rank 8 and row 7
//! being rank 1, so the board reads top-to-bottom from Dark's back rank.

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// White.
    Light,
    /// Black.
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate, always inside the 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor for coordinates coming from outside the engine.
    pub fn new(row: i8, col: i8) -> ChessResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::SquareOutOfBounds { row, col })
        }
    }

    /// Constant constructor. Out-of-range coordinates are a contract violation.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in 0..8");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row as i8 + d_row, self.col as i8 + d_col).ok()
    }

    /// All 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Four independent castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    pub const ALL: CastlingRights = CastlingRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => self.light_kingside,
            (Color::Light, CastleSide::Queenside) => self.light_queenside,
            (Color::Dark, CastleSide::Kingside) => self.dark_kingside,
            (Color::Dark, CastleSide::Queenside) => self.dark_queenside,
        }
    }

    /// Clears one permission. Clearing an already-cleared right is a no-op.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => self.light_kingside = false,
            (Color::Light, CastleSide::Queenside) => self.light_queenside = false,
            (Color::Dark, CastleSide::Kingside) => self.dark_kingside = false,
            (Color::Dark, CastleSide::Queenside) => self.dark_queenside = false,
        }
    }

    #[inline]
    pub fn revoke_both(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_constructor_rejects_out_of_range() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessError::SquareOutOfBounds { row: 8, col: 0 })
        );
        assert!(Square::new(3, -1).is_err());
    }

    #[test]
    fn offset_stops_at_board_edge() {
        let corner = Square::at(0, 7);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(1, -1), Some(Square::at(1, 6)));
    }

    #[test]
    #[should_panic]
    fn constant_constructor_asserts_bounds() {
        let _ = Square::at(8, 1);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[9], Square::at(1, 1));
        assert_eq!(squares[63], Square::at(7, 7));
    }

    #[test]
    fn revoking_castling_rights_is_idempotent() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(Color::Dark, CastleSide::Queenside);
        rights.revoke(Color::Dark, CastleSide::Queenside);
        assert!(!rights.has(Color::Dark, CastleSide::Queenside));
        assert!(rights.has(Color::Dark, CastleSide::Kingside));

        rights.revoke_both(Color::Light);
        assert!(!rights.light_kingside && !rights.light_queenside);
        assert!(rights.dark_kingside);
    }
}
