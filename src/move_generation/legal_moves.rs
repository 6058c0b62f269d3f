//! Legality filtering over pseudo-legal destinations.
//!
//! The `_in_place` functions transiently mutate the shared board while
//! simulating candidate moves and restore it before returning, matching the
//! engine's exclusive-access discipline. They are not re-entrant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side, Square};
use crate::move_generation::check_scan::move_exposes_king;
use crate::move_generation::pseudo_moves::pseudo_destinations;

/// Legal destinations for the piece on `from`: pseudo-legal destinations
/// whose simulation does not leave the mover's own king capturable. An
/// empty square yields an empty set.
pub fn legal_destinations_in_place(board: &mut Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_destinations(board, from)
        .into_iter()
        .filter(|&to| !move_exposes_king(board, piece.side, Move::new(from, to)))
        .collect()
}

/// Every legal move available to `side`, in board scan order.
pub fn side_moves_in_place(board: &mut Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.origins_of(side) {
        for to in legal_destinations_in_place(board, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Whether `side` has at least one legal move. Outcome interpretation
/// (mate, stalemate) is the caller's concern.
pub fn has_any_legal_move_in_place(board: &mut Board, side: Side) -> bool {
    board
        .origins_of(side)
        .into_iter()
        .any(|from| !legal_destinations_in_place(board, from).is_empty())
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move_in_place, legal_destinations_in_place, side_moves_in_place};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Move, Piece, PieceKind, Side, Square};
    use crate::move_generation::check_scan::is_side_in_check;

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort_by_key(|sq| (sq.row, sq.col));
        squares
    }

    #[test]
    fn opening_e_pawn_has_single_and_double_push() {
        let mut board = Board::new_game();
        assert_eq!(
            sorted(legal_destinations_in_place(&mut board, Square::new(6, 4))),
            vec![Square::new(4, 4), Square::new(5, 4)]
        );
    }

    #[test]
    fn advanced_pawn_loses_the_double_push() {
        let mut board = Board::new_game();
        let undo = board
            .apply_relocation(Move::new(Square::new(6, 4), Square::new(4, 4)))
            .expect("pawn should relocate");
        assert_eq!(
            legal_destinations_in_place(&mut board, Square::new(4, 4)),
            vec![Square::new(3, 4)]
        );
        board.undo_relocation(undo);
    }

    #[test]
    fn king_may_not_sidestep_along_an_attacked_rank() {
        let mut board = Board::empty();
        board.set_piece(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::King, Side::White)),
        );
        board.set_piece(
            Square::new(4, 0),
            Some(Piece::new(PieceKind::Rook, Side::Black)),
        );

        assert_eq!(
            sorted(legal_destinations_in_place(&mut board, Square::new(4, 4))),
            vec![
                Square::new(3, 3),
                Square::new(3, 4),
                Square::new(3, 5),
                Square::new(5, 3),
                Square::new(5, 4),
                Square::new(5, 5),
            ]
        );
    }

    #[test]
    fn empty_square_yields_no_legal_moves() {
        let mut board = Board::new_game();
        assert!(legal_destinations_in_place(&mut board, Square::new(3, 3)).is_empty());
    }

    #[test]
    fn opening_position_has_twenty_moves_per_side() {
        let mut board = Board::new_game();
        assert_eq!(side_moves_in_place(&mut board, Side::White).len(), 20);
        assert_eq!(side_moves_in_place(&mut board, Side::Black).len(), 20);
    }

    #[test]
    fn no_legal_move_survives_its_own_simulation_in_check() {
        let mut board = Board::new_game();
        for mv in side_moves_in_place(&mut board, Side::White) {
            let undo = board
                .apply_relocation(mv)
                .expect("legal move should relocate");
            assert!(
                !is_side_in_check(&board, Side::White),
                "{mv:?} left its own king attackable"
            );
            board.undo_relocation(undo);
        }
    }

    #[test]
    fn filtering_leaves_the_board_unchanged() {
        let mut board = Board::new_game();
        let before = board.clone();
        let _ = side_moves_in_place(&mut board, Side::White);
        let _ = has_any_legal_move_in_place(&mut board, Side::Black);
        assert_eq!(board, before);
    }

    #[test]
    fn cornered_king_under_full_cover_has_no_moves() {
        // Black king a8; a white queen on b6 covers every flight square
        // while a distant king keeps the position plausible.
        let mut board = Board::empty();
        board.set_piece(
            Square::new(0, 0),
            Some(Piece::new(PieceKind::King, Side::Black)),
        );
        board.set_piece(
            Square::new(2, 1),
            Some(Piece::new(PieceKind::Queen, Side::White)),
        );
        board.set_piece(
            Square::new(7, 7),
            Some(Piece::new(PieceKind::King, Side::White)),
        );

        assert!(!has_any_legal_move_in_place(&mut board, Side::Black));
        assert!(has_any_legal_move_in_place(&mut board, Side::White));
    }
}
