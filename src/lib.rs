//! Crate root module declarations for the flexboard chess board model.
//!
//! This file exposes the board state types (colors, piece kinds, pieces and
//! rectangular boards), the crate-wide error type, and the notation helpers
//! (board-FEN parsing and generation, Unicode rendering) under stable module
//! paths.

pub mod chess_errors;

pub mod board_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use board_state::board::{Board, BoardOptions};
pub use board_state::chess_types::{Color, PieceKind};
pub use board_state::piece::Piece;
pub use chess_errors::{BoardError, PieceCodeFault};
