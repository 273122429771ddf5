//! Errors used throughout the engine.
//!
//! This module defines the canonical error type returned by game logic,
//! board-text parsing, and the service entry points. The enum `EngineError`
//! is used as the single error type across the crate to simplify propagation
//! and matching. Each variant carries contextual information where
//! appropriate to aid diagnostics and user-facing error messages.
//!
//! All variants describe rejected input and are recoverable: the caller can
//! resubmit a corrected board, action, or configuration. Contract violations
//! (reading the winner of a running game, evaluating a finished one,
//! stepping a ray cursor off the board) are caller logic defects, not bad
//! data, and panic instead of returning a variant here.

use thiserror::Error;

use crate::board_location::BoardLocation;

/// Unified error type for the engine.
///
/// Each variant corresponds to a specific, identifiable failure mode that
/// can occur while placing pieces, applying actions, parsing board text, or
/// configuring a search. Variants include contextual payloads where useful
/// (for example the offending `BoardLocation` or glyph) so that callers can
/// log or display precise diagnostics.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// Attempted to offset a board location past the edge of the board.
    ///
    /// Payload: origin location plus the file and rank deltas.
    #[error("cannot offset {origin:?} by ({d_file}, {d_rank}): destination is off the board")]
    OutOfBounds {
        origin: BoardLocation,
        d_file: i8,
        d_rank: i8,
    },

    /// Attempted to place a piece on a square the same side already holds.
    #[error("the square at {0:?} is already occupied")]
    SquareOccupied(BoardLocation),

    /// A character does not name any (side, piece-kind) combination.
    ///
    /// Raised for unknown promotion markers and unrecognized placement
    /// glyphs.
    #[error("the glyph '{0}' does not name a piece")]
    UnknownGlyph(char),

    /// An action referenced a square that holds no piece of the acting side.
    #[error("no piece found at {0:?}")]
    PieceNotFound(BoardLocation),

    /// Board text did not have the expected 8-lines-of-8-glyphs shape.
    ///
    /// Payload: a human-readable description of the structural defect.
    #[error("malformed board text: {0}")]
    MalformedBoardText(String),

    /// A search configuration value was outside its accepted range.
    #[error("invalid search configuration: {0}")]
    InvalidSearchConfig(String),

    /// The side to move has no legal action, so no decision can be made.
    #[error("the side to move has no available action")]
    NoAvailableActions,

    /// No depth level of a timed decision finished within the time limit.
    #[error("no depth level finished within the time limit")]
    NoDecisionWithinTimeLimit,
}
