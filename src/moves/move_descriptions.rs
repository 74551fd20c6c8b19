//! The `Move` record.
//!
//! A move snapshots the two board cells it touches at construction time and
//! never refers back to live board memory. Identity is the square pair only,
//! so a user-entered origin/destination can be matched against the legal list
//! to recover the canonical move with its flags.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};

/// Flags the generator supplies that cannot be read off the two cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecialMoveFlags {
    pub en_passant: bool,
    pub castle: bool,
}

impl SpecialMoveFlags {
    pub const EN_PASSANT: SpecialMoveFlags = SpecialMoveFlags {
        en_passant: true,
        castle: false,
    };

    pub const CASTLE: SpecialMoveFlags = SpecialMoveFlags {
        en_passant: false,
        castle: true,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// For en passant this is the skipped pawn, which is not on `to`.
    pub captured_piece: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Plain move built from the board as it stands.
    ///
    /// Returns `None` when `from` is empty.
    pub fn from_board(from: Square, to: Square, board: &Board) -> Option<Self> {
        Self::with_flags(from, to, board, SpecialMoveFlags::default())
    }

    pub fn with_flags(
        from: Square,
        to: Square,
        board: &Board,
        flags: SpecialMoveFlags,
    ) -> Option<Self> {
        let moved_piece = board.get(from)?;
        let captured_piece = if flags.en_passant {
            Some(Piece::new(moved_piece.color.opposite(), PieceKind::Pawn))
        } else {
            board.get(to)
        };
        Some(Self::from_snapshot(moved_piece, captured_piece, from, to, flags))
    }

    /// Builds a move from already-copied cell contents.
    pub fn from_snapshot(
        moved_piece: Piece,
        captured_piece: Option<Piece>,
        from: Square,
        to: Square,
        flags: SpecialMoveFlags,
    ) -> Self {
        let is_promotion =
            moved_piece.kind == PieceKind::Pawn && to.row() == promotion_row(moved_piece.color);
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            is_promotion,
            is_en_passant: flags.en_passant,
            is_castle: flags.castle,
        }
    }

    /// Integer key over the four coordinates: `from.row*1000 + from.col*100 + to.row*10 + to.col`.
    #[inline]
    pub fn move_id(&self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Piece standing on `to` once the move is applied.
    #[inline]
    pub fn placed_piece(&self) -> Piece {
        if self.is_promotion {
            Piece::new(self.moved_piece.color, PieceKind::Queen)
        } else {
            self.moved_piece
        }
    }

    /// Midpoint square of a pawn double step, if this is one.
    pub fn double_step_target(&self) -> Option<Square> {
        if self.moved_piece.kind != PieceKind::Pawn || self.from.col() != self.to.col() {
            return None;
        }
        let (low, high) = (self.from.row().min(self.to.row()), self.from.row().max(self.to.row()));
        if high - low == 2 {
            Some(Square::at(low + 1, self.from.col()))
        } else {
            None
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, GameState};

    #[test]
    fn snapshot_reads_moved_and_captured_cells() {
        let game = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let mv = Move::from_board(Square::at(4, 4), Square::at(3, 3), &game.board)
            .expect("origin is occupied");

        assert_eq!(mv.moved_piece, Piece::new(Color::Light, PieceKind::Pawn));
        assert_eq!(mv.captured_piece, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        assert!(!mv.is_promotion && !mv.is_en_passant && !mv.is_castle);
        assert_eq!(mv.move_id(), 4433);
    }

    #[test]
    fn equality_ignores_flags_and_captures() {
        let board = GameState::new_game().board;
        let plain = Move::from_board(Square::at(6, 4), Square::at(4, 4), &board)
            .expect("origin is occupied");
        let flagged =
            Move::with_flags(Square::at(6, 4), Square::at(4, 4), &board, SpecialMoveFlags::CASTLE)
                .expect("origin is occupied");
        assert_eq!(plain, flagged);

        let other = Move::from_board(Square::at(6, 4), Square::at(5, 4), &board)
            .expect("origin is occupied");
        assert_ne!(plain, other);
    }

    #[test]
    fn promotion_inferred_from_destination_row() {
        let game =
            GameState::from_fen("4k3/P7/8/8/8/8/7p/4K3 w - - 0 1").expect("FEN should parse");
        let light = Move::from_board(Square::at(1, 0), Square::at(0, 0), &game.board)
            .expect("origin is occupied");
        let dark = Move::from_board(Square::at(6, 7), Square::at(7, 7), &game.board)
            .expect("origin is occupied");
        assert!(light.is_promotion);
        assert!(dark.is_promotion);
        assert_eq!(light.placed_piece(), Piece::new(Color::Light, PieceKind::Queen));
    }

    #[test]
    fn double_step_reports_midpoint() {
        let board = GameState::new_game().board;
        let double = Move::from_board(Square::at(1, 3), Square::at(3, 3), &board)
            .expect("origin is occupied");
        let single = Move::from_board(Square::at(1, 3), Square::at(2, 3), &board)
            .expect("origin is occupied");
        assert_eq!(double.double_step_target(), Some(Square::at(2, 3)));
        assert_eq!(single.double_step_target(), None);
    }

    #[test]
    fn empty_origin_builds_nothing() {
        let board = GameState::new_game().board;
        assert!(Move::from_board(Square::at(4, 4), Square::at(3, 4), &board).is_none());
    }
}
