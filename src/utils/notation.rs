//! Short move notation strings for history display.
//!
//! Non-pawns lead with their uppercase initial, captures take an `x` infix,
//! and pawn captures are prefixed with the origin file letter.

use crate::game_state::chess_types::{Move, Piece, PieceKind};
use crate::utils::coords::{file_char, square_name};

/// Notation for a move given the moved piece and what it displaced.
pub fn move_notation(moved: Piece, captured: Option<Piece>, mv: Move) -> String {
    let mut notation = String::new();

    if let Some(initial) = moved.kind.notation_initial() {
        notation.push(initial);
    }
    if captured.is_some() {
        if moved.kind == PieceKind::Pawn {
            notation.push(file_char(mv.from.col));
        }
        notation.push('x');
    }
    notation.push_str(&square_name(mv.to));

    notation
}
