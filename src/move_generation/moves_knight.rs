//! Knight L-shaped jumps.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::moves_shared::push_offset_destinations;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn knight_destinations(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    push_offset_destinations(board, from, side, &KNIGHT_OFFSETS, out);
}
