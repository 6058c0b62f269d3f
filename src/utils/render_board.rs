//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view for debugging, tests, and text
//! environments; graphical display is an external collaborator's job.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::utils::coords::rank_char;

/// Render the board to a Unicode string, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(rank_char(row));
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece.unicode_symbol()),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char(row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
