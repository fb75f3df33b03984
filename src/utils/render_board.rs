//! Plain-text board view with one line per rank.
//!
//! Ranks are written top first. Each square becomes `.` when empty or the
//! piece's un-inverted glyph, always followed by one space (the last file of
//! a rank too), and every rank ends in a newline. Squares are addressed as
//! `rank * nr_of_files + file`, so non-square boards lay out correctly.

use crate::board_state::board::Board;
use crate::board_state::chess_rules::EMPTY_SQUARE_GLYPH;

/// Lay out every rank of `board` as `". . ♜ \n"`-style lines.
pub fn render_board(board: &Board) -> String {
    let nr_of_files = board.nr_of_files();
    // Glyphs are up to three bytes in UTF-8, plus the trailing space.
    let mut out = String::with_capacity(board.squares().len() * 4 + board.nr_of_ranks());

    for rank in 0..board.nr_of_ranks() {
        for file in 0..nr_of_files {
            let sq = rank * nr_of_files + file;
            match board.squares()[sq] {
                Some(piece) => out.push(piece.unicode_symbol(false)),
                None => out.push(EMPTY_SQUARE_GLYPH),
            }
            out.push(' ');
        }
        out.push('\n');
    }

    out
}
