//! King single-step adjacencies. No castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::moves_shared::push_offset_destinations;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_destinations(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    push_offset_destinations(board, from, side, &KING_OFFSETS, out);
}
