//! Queen rays: the union of bishop and rook directions.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::moves_bishop::bishop_destinations;
use crate::move_generation::moves_rook::rook_destinations;

pub fn queen_destinations(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    bishop_destinations(board, from, side, out);
    rook_destinations(board, from, side, out);
}
