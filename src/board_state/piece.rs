//! A single piece: kind plus color.
//!
//! Pieces convert to and from three external forms: the one-letter FEN
//! symbol (uppercase for White), a compact integer code
//! (`kind_index + 8` for Black), and a Unicode display glyph.

use std::fmt;

use crate::board_state::chess_rules::{BLACK_CODE_OFFSET, MAX_PIECE_CODE};
use crate::board_state::chess_types::{Color, PieceKind};
use crate::chess_errors::{BoardError, PieceCodeFault};

/// Immutable piece value stored in board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// `P N B R Q K` for White, `p n b r q k` for Black.
    #[inline]
    pub const fn symbol(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    /// Unicode glyph for terminal display.
    ///
    /// The glyph table is deliberately swapped relative to the usual
    /// convention: lowercase (Black) symbols map to the outlined glyphs and
    /// uppercase (White) symbols to the filled ones, so pieces read correctly
    /// on a dark terminal. `invert_color` swaps the symbol's case before the
    /// lookup, i.e. shows the glyph of the opposite color.
    pub const fn unicode_symbol(self, invert_color: bool) -> char {
        let color = if invert_color {
            self.color.opposite()
        } else {
            self.color
        };

        match (color, self.kind) {
            (Color::Black, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::Knight) => '♘',
            (Color::Black, PieceKind::Bishop) => '♗',
            (Color::Black, PieceKind::Rook) => '♖',
            (Color::Black, PieceKind::Queen) => '♕',
            (Color::Black, PieceKind::King) => '♔',
            (Color::White, PieceKind::Pawn) => '♟',
            (Color::White, PieceKind::Knight) => '♞',
            (Color::White, PieceKind::Bishop) => '♝',
            (Color::White, PieceKind::Rook) => '♜',
            (Color::White, PieceKind::Queen) => '♛',
            (Color::White, PieceKind::King) => '♚',
        }
    }

    /// Parse a FEN piece letter. The letter's case decides the color.
    pub fn from_symbol(symbol: char) -> Result<Self, BoardError> {
        let kind = PieceKind::from_symbol(symbol).ok_or(BoardError::InvalidPieceSymbol(symbol))?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self { kind, color })
    }

    /// Compact code: `1..=6` for White, `9..=14` for Black.
    #[inline]
    pub const fn to_int(self) -> u8 {
        let offset = match self.color {
            Color::White => 0,
            Color::Black => BLACK_CODE_OFFSET,
        };
        self.kind.index() + offset
    }

    /// Decode a compact code produced by [`Piece::to_int`].
    ///
    /// Rejects negatives, values above 16, and values whose `code % 8` is not
    /// a kind index. Codes of 8 and above are Black.
    pub fn from_int(code: i32) -> Result<Self, BoardError> {
        let fault = |reason| BoardError::InvalidPieceCode { code, reason };

        if code < 0 {
            return Err(fault(PieceCodeFault::Negative));
        }
        if code > MAX_PIECE_CODE {
            return Err(fault(PieceCodeFault::ExceedsMaximum));
        }

        let offset = i32::from(BLACK_CODE_OFFSET);
        let kind_index = u8::try_from(code % offset).map_err(|_| fault(PieceCodeFault::UnknownKind))?;
        let kind = PieceKind::from_index(kind_index).ok_or(fault(PieceCodeFault::UnknownKind))?;
        let color = if code < offset {
            Color::White
        } else {
            Color::Black
        };

        Ok(Self { kind, color })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Piece {
    type Error = BoardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl TryFrom<i32> for Piece {
    type Error = BoardError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_int(code)
    }
}
