use crate::game_state::chess_types::Square;

/// `(d_row, d_col)` leaps, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// On-board knight destinations from `square`, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_are_clipped_at_edges() {
        assert_eq!(knight_targets(Square::at(0, 0)).count(), 2);
        assert_eq!(knight_targets(Square::at(4, 4)).count(), 8);
        assert_eq!(knight_targets(Square::at(7, 6)).count(), 3);
    }
}
