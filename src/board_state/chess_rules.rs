//! Board-notation constants.
//!
//! Static literals shared by the parser, generator and renderer, plus the
//! bounds of the integer piece encoding.

/// Separates ranks in a board FEN string.
pub const FEN_RANK_END: char = '/';

/// Glyph rendered for an empty square.
pub const EMPTY_SQUARE_GLYPH: char = '.';

pub const DEFAULT_NR_OF_FILES: usize = 8;
pub const DEFAULT_NR_OF_RANKS: usize = 8;

/// Added to a kind index to encode a black piece.
pub const BLACK_CODE_OFFSET: u8 = 8;

/// Largest integer accepted by `Piece::from_int` before kind validation.
pub const MAX_PIECE_CODE: i32 = 16;

/// Standard chess starting layout, board field only.
pub const STANDARD_BOARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
