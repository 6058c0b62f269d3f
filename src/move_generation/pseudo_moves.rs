//! Pseudo-legal destination dispatch by piece kind.
//!
//! Destinations here are valid with respect to geometry and occupancy only;
//! king safety is the check scan's concern. An empty square yields an empty
//! set, and no error cases exist.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::moves_bishop::bishop_destinations;
use crate::move_generation::moves_king::king_destinations;
use crate::move_generation::moves_knight::knight_destinations;
use crate::move_generation::moves_pawn::pawn_destinations;
use crate::move_generation::moves_queen::queen_destinations;
use crate::move_generation::moves_rook::rook_destinations;

pub fn pseudo_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.side, &mut out),
        PieceKind::Knight => knight_destinations(board, from, piece.side, &mut out),
        PieceKind::Bishop => bishop_destinations(board, from, piece.side, &mut out),
        PieceKind::Rook => rook_destinations(board, from, piece.side, &mut out),
        PieceKind::Queen => queen_destinations(board, from, piece.side, &mut out),
        PieceKind::King => king_destinations(board, from, piece.side, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::pseudo_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

    #[test]
    fn empty_square_yields_an_empty_set() {
        let board = Board::new_game();
        assert!(pseudo_destinations(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn every_destination_is_on_board_and_never_on_a_same_side_piece() {
        let board = Board::new_game();
        for (from, piece) in board.occupied() {
            for to in pseudo_destinations(&board, from) {
                assert!(to.row < 8 && to.col < 8);
                let occupant = board.piece_at(to);
                assert!(
                    occupant.map_or(true, |other| other.side != piece.side),
                    "{piece:?} at {from:?} may not land on its own piece at {to:?}"
                );
            }
        }
    }

    #[test]
    fn dispatch_reaches_each_piece_kind() {
        let mut board = Board::empty();
        for (row, kind, expected) in [
            (0u8, PieceKind::Rook, 14usize),
            (1, PieceKind::Knight, 6),
            (2, PieceKind::Bishop, 11),
            (3, PieceKind::Queen, 27),
            (4, PieceKind::King, 8),
        ] {
            let from = Square::new(row, 4);
            board.set_piece(from, Some(Piece::new(kind, Side::White)));
            let count = pseudo_destinations(&board, from).len();
            board.set_piece(from, None);
            assert_eq!(count, expected, "{kind:?} from {from:?}");
        }
    }
}
