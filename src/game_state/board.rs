//! 8x8 mailbox board.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Grid of pieces indexed by `(row, col)`; `None` is an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Piece on `square` if it belongs to `color`'s opponent.
    #[inline]
    pub fn enemy_of(&self, color: Color, square: Square) -> Option<Piece> {
        self.get(square).filter(|piece| piece.color != color)
    }

    #[inline]
    pub fn is_allied(&self, color: Color, square: Square) -> bool {
        matches!(self.get(square), Some(piece) if piece.color == color)
    }

    /// Writes a cell. Only the apply/undo path and position setup call this.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares of one color in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        Square::all().filter_map(move |square| match self.get(square) {
            Some(piece) if piece.color == color => Some((square, piece.kind)),
            _ => None,
        })
    }

    /// Locations of every piece matching `piece`.
    pub fn find(&self, piece: Piece) -> Vec<Square> {
        Square::all()
            .filter(|&square| self.get(square) == Some(piece))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_query_cells() {
        let mut board = Board::empty();
        let e4 = Square::at(4, 4);
        board.set(e4, Some(Piece::new(Color::Dark, PieceKind::Knight)));

        assert_eq!(board.get(e4), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        assert!(board.is_allied(Color::Dark, e4));
        assert!(board.enemy_of(Color::Light, e4).is_some());
        assert!(board.enemy_of(Color::Dark, e4).is_none());
        assert!(board.is_empty(Square::at(4, 5)));
        assert_eq!(
            board.squares_of(Color::Dark).collect::<Vec<_>>(),
            vec![(e4, PieceKind::Knight)]
        );
    }
}
