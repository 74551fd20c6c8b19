//! Position container.
//!
//! `GameState` owns the board, side to move, king locations, castling rights
//! with their per-move history, the en-passant target with its history, and
//! the ordered move log. All mutation goes through
//! [`apply_move`](crate::move_generation::legal_move_apply::apply_move) and
//! [`undo_move`](crate::move_generation::legal_move_apply::undo_move).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // [color]
    pub king_squares: [Square; 2],

    /// Current rights; always equal to the top of `castling_rights_log`.
    pub castling_rights: CastlingRights,
    /// One entry per applied move plus the initial rights at the bottom.
    pub castling_rights_log: Vec<CastlingRights>,

    pub en_passant_square: Option<Square>,
    /// Target as it stood before each applied move, parallel to `move_log`.
    pub en_passant_log: Vec<Option<Square>>,

    pub move_log: Vec<Move>,
}

impl GameState {
    /// Standard starting position, Light to move, full castling rights.
    pub fn new_game() -> Self {
        use PieceKind::*;
        const BACK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for (col, kind) in BACK.into_iter().enumerate() {
            let col = col as u8;
            board.set(Square::at(0, col), Some(Piece::new(Color::Dark, kind)));
            board.set(Square::at(1, col), Some(Piece::new(Color::Dark, Pawn)));
            board.set(Square::at(6, col), Some(Piece::new(Color::Light, Pawn)));
            board.set(Square::at(7, col), Some(Piece::new(Color::Light, kind)));
        }

        Self {
            board,
            side_to_move: Color::Light,
            king_squares: [Square::at(7, 4), Square::at(0, 4)],
            castling_rights: CastlingRights::ALL,
            castling_rights_log: vec![CastlingRights::ALL],
            en_passant_square: None,
            en_passant_log: Vec::new(),
            move_log: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Builds a state with empty logs, locating both kings on the board.
    pub fn from_setup(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<Square>,
    ) -> ChessResult<Self> {
        let mut king_squares = [Square::at(0, 0); 2];
        for color in [Color::Light, Color::Dark] {
            let kings = board.find(Piece::new(color, PieceKind::King));
            match kings.as_slice() {
                [square] => king_squares[color.index()] = *square,
                _ => return Err(ChessError::KingCount(color, kings.len())),
            }
        }

        Ok(Self {
            board,
            side_to_move,
            king_squares,
            castling_rights,
            castling_rights_log: vec![castling_rights],
            en_passant_square,
            en_passant_log: Vec::new(),
            move_log: Vec::new(),
        })
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        LegalMoveGenerator.generate_legal_moves(self)
    }

    pub fn apply_move(&mut self, mv: Move) {
        legal_move_apply::apply_move(self, mv);
    }

    pub fn undo_move(&mut self) {
        legal_move_apply::undo_move(self);
    }

    /// Matches square-pair text such as `e2e4` against the legal list and applies it.
    pub fn play_move(&mut self, text: &str) -> ChessResult<Move> {
        let mv = long_algebraic_to_move(text, self)?;
        self.apply_move(mv);
        Ok(mv)
    }

    pub fn is_in_check(&self) -> bool {
        is_in_check(self, self.side_to_move)
    }

    pub fn status(&mut self) -> GameStatus {
        game_status(self)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    pub fn is_stalemate(&mut self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_matches_standard_setup() {
        let game = GameState::new_game();
        assert_eq!(
            game,
            GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse")
        );
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.king_square(Color::Light), Square::at(7, 4));
        assert_eq!(game.king_square(Color::Dark), Square::at(0, 4));
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.castling_rights_log, vec![CastlingRights::ALL]);
        assert!(game.move_log.is_empty());
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn setup_requires_one_king_per_color() {
        let mut board = Board::empty();
        board.set(Square::at(7, 4), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(
            GameState::from_setup(board, Color::Light, CastlingRights::NONE, None),
            Err(ChessError::KingCount(Color::Dark, 0))
        );
    }

    #[test]
    fn play_move_rejects_text_not_in_legal_list() {
        let mut game = GameState::new_game();
        assert!(matches!(game.play_move("e2e5"), Err(ChessError::IllegalMove(_))));
        assert!(game.move_log.is_empty());

        let mv = game.play_move("e2e4").expect("e2e4 is legal");
        assert_eq!(mv.to, Square::at(4, 4));
        assert_eq!(game.side_to_move, Color::Dark);
        assert_eq!(game.last_move(), Some(&mv));
    }
}
