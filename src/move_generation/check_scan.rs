//! Check simulation: would a candidate relocation leave the mover's king
//! capturable on the immediately following ply?
//!
//! Attacker reach is the raw pseudo-legal move set, not legality-filtered:
//! filtering it for the attacker's own king safety would recurse mutually
//! with legality filtering, so the asymmetry is deliberate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side, Square};
use crate::move_generation::pseudo_moves::pseudo_destinations;

/// True when any of `attacker`'s pieces pseudo-legally reaches `target`.
pub fn square_attacked_by(board: &Board, attacker: Side, target: Square) -> bool {
    board
        .occupied()
        .filter(|(_, piece)| piece.side == attacker)
        .any(|(from, _)| pseudo_destinations(board, from).contains(&target))
}

/// True when `side`'s king currently stands on a square the opponent
/// pseudo-legally reaches. A board without that king is treated as not in
/// check.
pub fn is_side_in_check(board: &Board, side: Side) -> bool {
    match board.find_king(side) {
        Some(king_square) => square_attacked_by(board, side.opposite(), king_square),
        None => false,
    }
}

/// Simulate `mv` for `side`, test the king's safety, and restore the board
/// exactly. Returns true when the move would expose the king.
pub fn move_exposes_king(board: &mut Board, side: Side, mv: Move) -> bool {
    let Some(undo) = board.apply_relocation(mv) else {
        return false;
    };
    let exposed = is_side_in_check(board, side);
    board.undo_relocation(undo);
    exposed
}
