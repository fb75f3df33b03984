//! Errors used throughout the board model.
//!
//! This module defines the canonical error type returned by piece decoding,
//! board construction and FEN parsing. The enum `BoardError` is the single
//! error type across the crate so callers can propagate with `?` and match on
//! the failure they care about. Variants carry the offending input where it
//! helps diagnostics.
//!
//! Every variant is fatal to the single call that produced it. Nothing in the
//! crate recovers from, corrects, or defaults around a bad input.

use thiserror::Error;

/// Why an integer could not be decoded into a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceCodeFault {
    /// The code was below zero.
    #[error("value must be non-negative")]
    Negative,
    /// The code was above the largest accepted value (16).
    #[error("value exceeds maximum")]
    ExceedsMaximum,
    /// `code % 8` is not one of the six kind indices.
    #[error("unknown piece kind")]
    UnknownKind,
}

/// Unified error type for the board model.
///
/// When matching on `BoardError`:
/// - `InvalidPieceSymbol` and `InvalidPieceCode` come from decoding a single
///   piece, either on its own or while a board is being built.
/// - `RankLengthMismatch` and `EmptyRank` are structural FEN problems.
/// - `InvalidDimensions` and `SquareCountMismatch` reject grids that cannot
///   satisfy `squares.len() == nr_of_files * nr_of_ranks` with both
///   dimensions at least one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A character is not one of `pnbrqkPNBRQK`.
    ///
    /// Payload: the offending character.
    #[error("invalid piece symbol '{0}'")]
    InvalidPieceSymbol(char),

    /// An integer code does not encode a piece.
    ///
    /// Payload: the code and the rule it broke.
    #[error("invalid piece code {code}: {reason}")]
    InvalidPieceCode { code: i32, reason: PieceCodeFault },

    /// A FEN rank decodes to a different number of squares than the first
    /// rank did.
    ///
    /// Payload: zero-based rank index (top rank is 0), the file count fixed by
    /// the first rank, and the count found in this rank.
    #[error("rank length mismatch in rank {rank}: expected {expected} squares, found {found}")]
    RankLengthMismatch {
        rank: usize,
        expected: usize,
        found: usize,
    },

    /// The first FEN rank decodes to zero squares, so no file count can be
    /// fixed.
    #[error("first rank of the board FEN contains no squares")]
    EmptyRank,

    /// A grid was requested with a zero dimension, or with dimensions whose
    /// square count does not fit in `usize`.
    #[error("board dimensions must be positive with a representable square count, got {files} files x {ranks} ranks")]
    InvalidDimensions { files: usize, ranks: usize },

    /// A flat square list does not match the requested dimensions.
    #[error("expected {expected} squares, found {found}")]
    SquareCountMismatch { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, PieceCodeFault};

    #[test]
    fn piece_code_messages_name_the_broken_rule() {
        let negative = BoardError::InvalidPieceCode {
            code: -1,
            reason: PieceCodeFault::Negative,
        };
        let too_large = BoardError::InvalidPieceCode {
            code: 17,
            reason: PieceCodeFault::ExceedsMaximum,
        };
        let unknown = BoardError::InvalidPieceCode {
            code: 7,
            reason: PieceCodeFault::UnknownKind,
        };

        assert!(negative.to_string().ends_with("value must be non-negative"));
        assert!(too_large.to_string().ends_with("value exceeds maximum"));
        assert!(unknown.to_string().ends_with("unknown piece kind"));
    }

    #[test]
    fn piece_code_fault_displays_its_rule_alone() {
        assert_eq!(PieceCodeFault::Negative.to_string(), "value must be non-negative");
        assert_eq!(PieceCodeFault::ExceedsMaximum.to_string(), "value exceeds maximum");
        assert_eq!(PieceCodeFault::UnknownKind.to_string(), "unknown piece kind");
    }

    #[test]
    fn rank_mismatch_message_reports_counts() {
        let err = BoardError::RankLengthMismatch {
            rank: 1,
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "rank length mismatch in rank 1: expected 2 squares, found 1"
        );
    }
}
