use crate::board_state::board::Board;
use crate::board_state::chess_rules::FEN_RANK_END;

/// Largest empty-square run a single FEN digit can express.
const MAX_DIGIT_RUN: usize = 9;

/// Write the board field of a FEN string: ranks top to bottom, separated by
/// `/`, with runs of empty squares collapsed into digits.
pub fn generate_board_fen(board: &Board) -> String {
    let nr_of_files = board.nr_of_files();
    let mut out = String::new();

    for (rank_idx, rank) in board.squares().chunks(nr_of_files).enumerate() {
        if rank_idx > 0 {
            out.push(FEN_RANK_END);
        }

        let mut empty_count = 0usize;

        for square in rank {
            match square {
                Some(piece) => {
                    push_empty_run(&mut out, empty_count);
                    empty_count = 0;
                    out.push(piece.symbol());
                }
                None => empty_count += 1,
            }
        }

        push_empty_run(&mut out, empty_count);
    }

    out
}

/// Runs wider than nine squares are split into several digits, since the
/// parser reads one digit per character.
fn push_empty_run(out: &mut String, mut empty_count: usize) {
    while empty_count > 0 {
        let step = empty_count.min(MAX_DIGIT_RUN);
        out.push(char::from(b'0' + step as u8));
        empty_count -= step;
    }
}
