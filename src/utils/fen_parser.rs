//! Board-FEN-to-grid parser.
//!
//! Scans a rank string such as `rnbqk/ppppp/5/PPPPP/RNBQK` into a flat,
//! row-major square list starting at the top-left square. The first rank
//! fixes the file count; every later rank must match it.

use crate::board_state::chess_rules::FEN_RANK_END;
use crate::board_state::piece::Piece;
use crate::chess_errors::BoardError;

/// Squares and dimensions decoded from a board FEN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoard {
    pub nr_of_files: usize,
    pub nr_of_ranks: usize,
    pub squares: Vec<Option<Piece>>,
}

pub fn parse_board_fen(board_fen: &str) -> Result<ParsedBoard, BoardError> {
    let mut squares = Vec::new();
    let mut nr_of_files: Option<usize> = None;
    let mut nr_of_ranks = 0usize;

    for (rank_idx, rank_str) in board_fen.split(FEN_RANK_END).enumerate() {
        let found = parse_rank(rank_str, &mut squares)?;

        match nr_of_files {
            None if found == 0 => return Err(BoardError::EmptyRank),
            None => nr_of_files = Some(found),
            Some(expected) if expected != found => {
                return Err(BoardError::RankLengthMismatch {
                    rank: rank_idx,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        nr_of_ranks += 1;
    }

    Ok(ParsedBoard {
        nr_of_files: nr_of_files.unwrap_or_default(),
        nr_of_ranks,
        squares,
    })
}

/// Append one rank's squares and return how many were added.
fn parse_rank(rank_str: &str, squares: &mut Vec<Option<Piece>>) -> Result<usize, BoardError> {
    let start = squares.len();

    for ch in rank_str.chars() {
        if let Some(empty_count) = ch.to_digit(10) {
            // `0` is accepted and contributes nothing.
            let step = empty_count as usize;
            squares.resize(squares.len() + step, None);
            continue;
        }

        squares.push(Some(Piece::from_symbol(ch)?));
    }

    Ok(squares.len() - start)
}

#[cfg(test)]
mod tests {
    use super::parse_board_fen;
    use crate::board_state::chess_rules::STANDARD_BOARD_FEN;
    use crate::board_state::chess_types::{Color, PieceKind};
    use crate::board_state::piece::Piece;
    use crate::chess_errors::BoardError;

    #[test]
    fn parse_five_by_five_board() {
        let parsed = parse_board_fen("rnbqk/ppppp/5/PPPPP/RNBQK").expect("board FEN should parse");

        assert_eq!(parsed.nr_of_files, 5);
        assert_eq!(parsed.nr_of_ranks, 5);
        assert_eq!(parsed.squares.len(), 25);
        assert_eq!(
            parsed.squares[0],
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(parsed.squares[10..15].iter().all(Option::is_none));
        assert_eq!(
            parsed.squares[24],
            Some(Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn parse_standard_board() {
        let parsed = parse_board_fen(STANDARD_BOARD_FEN).expect("standard FEN should parse");
        assert_eq!(parsed.nr_of_files, 8);
        assert_eq!(parsed.nr_of_ranks, 8);
        assert_eq!(parsed.squares.iter().filter(|sq| sq.is_some()).count(), 32);
    }

    #[test]
    fn digits_and_pieces_mix_within_a_rank() {
        let parsed = parse_board_fen("2k1/p3").expect("board FEN should parse");
        assert_eq!(parsed.nr_of_files, 4);
        assert_eq!(parsed.squares[2], Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(parsed.squares[4], Some(Piece::new(PieceKind::Pawn, Color::Black)));
    }

    #[test]
    fn zero_digit_adds_no_squares() {
        let parsed = parse_board_fen("p0p/2").expect("board FEN should parse");
        assert_eq!(parsed.nr_of_files, 2);
        assert_eq!(parsed.squares.len(), 4);
    }

    #[test]
    fn single_rank_board() {
        let parsed = parse_board_fen("K3").expect("board FEN should parse");
        assert_eq!(parsed.nr_of_ranks, 1);
        assert_eq!(parsed.nr_of_files, 4);
    }

    #[test]
    fn inconsistent_ranks_are_rejected() {
        assert_eq!(
            parse_board_fen("pp/p"),
            Err(BoardError::RankLengthMismatch {
                rank: 1,
                expected: 2,
                found: 1,
            })
        );
        assert!(matches!(
            parse_board_fen("3/3/4"),
            Err(BoardError::RankLengthMismatch { rank: 2, .. })
        ));
    }

    #[test]
    fn trailing_separator_is_an_empty_mismatched_rank() {
        assert_eq!(
            parse_board_fen("3/"),
            Err(BoardError::RankLengthMismatch {
                rank: 1,
                expected: 3,
                found: 0,
            })
        );
    }

    #[test]
    fn empty_first_rank_is_rejected() {
        assert_eq!(parse_board_fen(""), Err(BoardError::EmptyRank));
        assert_eq!(parse_board_fen("0/0"), Err(BoardError::EmptyRank));
    }

    #[test]
    fn invalid_piece_letter_is_rejected() {
        assert_eq!(
            parse_board_fen("rnx/3"),
            Err(BoardError::InvalidPieceSymbol('x'))
        );
    }
}
