pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];
