//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. Rank 8 is row 0 and rank 1 is row 7.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Square::new(row, col)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_center_conversions() {
        assert_eq!(algebraic_to_square("a8").expect("a8 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::at(7, 7));
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), Square::at(4, 4));
        assert_eq!(square_to_algebraic(Square::at(7, 0)), "a1");
        assert_eq!(square_to_algebraic(Square::at(2, 3)), "d6");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for text in ["", "e", "e9", "i4", "e44"] {
            assert_eq!(
                algebraic_to_square(text),
                Err(ChessError::InvalidAlgebraicString(text.to_owned()))
            );
        }
    }
}
