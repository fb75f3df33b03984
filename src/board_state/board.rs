//! Rectangular board of optional pieces.
//!
//! `Board` owns a flat, row-major square list that starts at the top rank on
//! the left, as in FEN. It is built once, either empty from dimensions or
//! populated from a board FEN, and carries the side to move alongside.

use std::fmt;
use std::str::FromStr;

use crate::board_state::chess_rules::{DEFAULT_NR_OF_FILES, DEFAULT_NR_OF_RANKS};
use crate::board_state::chess_types::Color;
use crate::board_state::piece::Piece;
use crate::chess_errors::BoardError;
use crate::utils::fen_generator::generate_board_fen;
use crate::utils::fen_parser::parse_board_fen;
use crate::utils::render_board::render_board;

/// Construction parameters for [`Board::new`].
///
/// A non-empty `board_fen` takes precedence over the dimensions. `turn` is
/// never read from the FEN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    pub board_fen: Option<String>,
    pub nr_of_files: usize,
    pub nr_of_ranks: usize,
    pub turn: Color,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            board_fen: None,
            nr_of_files: DEFAULT_NR_OF_FILES,
            nr_of_ranks: DEFAULT_NR_OF_RANKS,
            turn: Color::White,
        }
    }
}

impl BoardOptions {
    pub fn with_fen(mut self, board_fen: impl Into<String>) -> Self {
        self.board_fen = Some(board_fen.into());
        self
    }

    pub fn with_dimensions(mut self, nr_of_files: usize, nr_of_ranks: usize) -> Self {
        self.nr_of_files = nr_of_files;
        self.nr_of_ranks = nr_of_ranks;
        self
    }

    pub fn with_turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Option<Piece>>,
    nr_of_files: usize,
    nr_of_ranks: usize,
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: vec![None; DEFAULT_NR_OF_FILES * DEFAULT_NR_OF_RANKS],
            nr_of_files: DEFAULT_NR_OF_FILES,
            nr_of_ranks: DEFAULT_NR_OF_RANKS,
            turn: Color::White,
        }
    }
}

impl Board {
    /// Build a board from options, picking the FEN path when a non-empty
    /// board FEN is supplied and the dimension path otherwise.
    pub fn new(options: BoardOptions) -> Result<Self, BoardError> {
        match options.board_fen.as_deref() {
            Some(board_fen) if !board_fen.is_empty() => Self::from_fen(board_fen, options.turn),
            _ => {
                let mut board = Self::with_dimensions(options.nr_of_files, options.nr_of_ranks)?;
                board.turn = options.turn;
                Ok(board)
            }
        }
    }

    /// Empty board with White to move. Both dimensions must be positive and
    /// their product must fit in `usize`.
    pub fn with_dimensions(nr_of_files: usize, nr_of_ranks: usize) -> Result<Self, BoardError> {
        let nr_of_squares = nr_of_files
            .checked_mul(nr_of_ranks)
            .filter(|&count| count > 0)
            .ok_or(BoardError::InvalidDimensions {
                files: nr_of_files,
                ranks: nr_of_ranks,
            })?;

        Ok(Self {
            squares: vec![None; nr_of_squares],
            nr_of_files,
            nr_of_ranks,
            turn: Color::White,
        })
    }

    /// Populate a board from the board field of a FEN string.
    pub fn from_fen(board_fen: &str, turn: Color) -> Result<Self, BoardError> {
        let parsed = parse_board_fen(board_fen)?;

        Ok(Self {
            squares: parsed.squares,
            nr_of_files: parsed.nr_of_files,
            nr_of_ranks: parsed.nr_of_ranks,
            turn,
        })
    }

    /// Decode a board from integer square codes (0 for empty, otherwise a
    /// [`Piece::to_int`] value) in row-major order.
    pub fn from_square_codes(
        nr_of_files: usize,
        nr_of_ranks: usize,
        codes: &[i32],
        turn: Color,
    ) -> Result<Self, BoardError> {
        let mut board = Self::with_dimensions(nr_of_files, nr_of_ranks)?;

        if codes.len() != board.squares.len() {
            return Err(BoardError::SquareCountMismatch {
                expected: board.squares.len(),
                found: codes.len(),
            });
        }

        for (square, &code) in board.squares.iter_mut().zip(codes) {
            if code != 0 {
                *square = Some(Piece::from_int(code)?);
            }
        }

        board.turn = turn;
        Ok(board)
    }

    #[inline]
    pub fn nr_of_files(&self) -> usize {
        self.nr_of_files
    }

    #[inline]
    pub fn nr_of_ranks(&self) -> usize {
        self.nr_of_ranks
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    #[inline]
    pub fn squares(&self) -> &[Option<Piece>] {
        &self.squares
    }

    /// Piece on the square `file` columns from the left and `rank` rows from
    /// the top. `None` for empty squares and coordinates off the board.
    pub fn piece_at(&self, file: usize, rank: usize) -> Option<Piece> {
        if file >= self.nr_of_files || rank >= self.nr_of_ranks {
            return None;
        }
        self.squares[rank * self.nr_of_files + file]
    }

    /// Integer encoding of every square, 0 meaning empty.
    pub fn square_codes(&self) -> Vec<u8> {
        self.squares
            .iter()
            .map(|square| square.map_or(0, Piece::to_int))
            .collect()
    }

    #[inline]
    pub fn board_fen(&self) -> String {
        generate_board_fen(self)
    }

    #[inline]
    pub fn to_display_string(&self) -> String {
        render_board(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(board_fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(board_fen, Color::White)
    }
}
