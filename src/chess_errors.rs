//! Errors used throughout the rules engine.
//!
//! Illegal moves are normally handled by absence: a square pair that is not in
//! the legal move list is never applied. `ChessError` covers the places where
//! text crosses into the engine (FEN, coordinates, user move entry) and the
//! checked constructor for board squares.

use crate::game_state::chess_types::Color;

/// Unified error type for the rules engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Row or column outside `0..=7`.
    #[error("square out of bounds: row {row}, col {col}")]
    SquareOutOfBounds { row: i8, col: i8 },

    /// A coordinate such as `e4` could not be read.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// FEN text was malformed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A position must hold exactly one king per color.
    #[error("expected exactly one {0:?} king, found {1}")]
    KingCount(Color, usize),

    /// The requested square pair is not a legal move in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

/// Result alias for fallible engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
