//! Legal-move node counting for validating the generator.
//!
//! With castling, en passant, and promotion out of the rule set, shallow
//! totals from the opening position still coincide with standard chess,
//! since none of those rules can trigger within the first few plies.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::move_generation::legal_moves::side_moves_in_place;

/// Count leaf nodes of the legal game tree to `depth` plies, alternating
/// sides starting with `side`.
pub fn perft_legal(board: &mut Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in side_moves_in_place(board, side) {
        let Some(undo) = board.apply_relocation(mv) else {
            continue;
        };
        nodes += perft_legal(board, side.opposite(), depth - 1);
        board.undo_relocation(undo);
    }
    nodes
}
