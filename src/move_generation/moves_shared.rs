//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};

/// Walk sliding rays from `from`, accumulating empty squares. A ray stops
/// at the first occupied square and includes it iff it holds an enemy
/// piece; it never continues past an occupied square.
pub fn push_ray_destinations(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(row_delta, col_delta) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(row_delta, col_delta) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(occupant) => {
                    if occupant.side != side {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Fixed-offset destinations (knight, king): on-board and not occupied by
/// a same-side piece.
pub fn push_offset_destinations(
    board: &Board,
    from: Square,
    side: Side,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(row_delta, col_delta) in offsets {
        if let Some(dest) = from.offset(row_delta, col_delta) {
            match board.piece_at(dest) {
                None => out.push(dest),
                Some(occupant) if occupant.side != side => out.push(dest),
                Some(_) => {}
            }
        }
    }
}
