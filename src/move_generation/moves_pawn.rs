//! Pawn pushes and diagonal captures. No en passant, no promotion: a pawn
//! reaching the far rank simply remains a pawn.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};

pub fn pawn_destinations(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    let advance = side.pawn_advance();

    if let Some(forward) = from.offset(advance, 0) {
        if board.piece_at(forward).is_none() {
            out.push(forward);

            // The double step needs both intervening and destination
            // squares empty, and only exists from the starting rank.
            if from.row == side.pawn_start_row() {
                if let Some(double) = from.offset(advance * 2, 0) {
                    if board.piece_at(double).is_none() {
                        out.push(double);
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1] {
        if let Some(capture) = from.offset(advance, col_delta) {
            if let Some(occupant) = board.piece_at(capture) {
                if occupant.side != side {
                    out.push(capture);
                }
            }
        }
    }
}
