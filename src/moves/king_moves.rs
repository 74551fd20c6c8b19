use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

/// On-board adjacent squares, ignoring occupancy.
#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_targets_in_corner_and_center() {
        assert_eq!(king_targets(Square::at(7, 7)).count(), 3);
        assert_eq!(king_targets(Square::at(3, 3)).count(), 8);
        assert_eq!(king_targets(Square::at(0, 4)).count(), 5);
    }
}
