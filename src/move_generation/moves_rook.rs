//! Rook orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::moves_shared::push_ray_destinations;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn rook_destinations(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    push_ray_destinations(board, from, side, &ROOK_DIRECTIONS, out);
}
