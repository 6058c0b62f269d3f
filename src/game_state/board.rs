//! The 8×8 mailbox board: the single mutable substrate every component
//! shares.
//!
//! Check scanning and search both mutate the board in place and restore it
//! through explicit `RelocationUndo` records, so nested simulate/restore
//! stays correct under recursion.

use crate::game_state::chess_types::{Move, Piece, PieceKind, Side, Square};

/// Back-rank piece order for both sides at the opening position.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Undo record for one raw relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationUndo {
    pub mv: Move,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

/// 8×8 grid of optional pieces plus the side whose turn it is.
///
/// The grid exclusively owns its cells; at most one piece stands on a
/// square. Exactly one king per side is assumed, not enforced — callers
/// must not construct boards violating that, or king lookup degenerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    pub side_to_move: Side,
}

impl Board {
    /// A board with no pieces, white to move. Used by tests and curated
    /// positions.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Side::White,
        }
    }

    /// The opening position, white to move.
    pub fn new_game() -> Self {
        let mut board = Self::empty();

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.set_piece(Square::new(0, col), Some(Piece::new(kind, Side::Black)));
            board.set_piece(Square::new(7, col), Some(Piece::new(kind, Side::White)));
        }
        for col in 0..8 {
            board.set_piece(
                Square::new(1, col),
                Some(Piece::new(PieceKind::Pawn, Side::Black)),
            );
            board.set_piece(
                Square::new(6, col),
                Some(Piece::new(PieceKind::Pawn, Side::White)),
            );
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Relocate whatever stands on `mv.from` onto `mv.to`, returning the
    /// undo record. `None` when the origin square is empty (nothing
    /// happens).
    #[inline]
    pub fn apply_relocation(&mut self, mv: Move) -> Option<RelocationUndo> {
        let moved = self.piece_at(mv.from)?;
        let captured = self.piece_at(mv.to);
        self.set_piece(mv.to, Some(moved));
        self.set_piece(mv.from, None);
        Some(RelocationUndo {
            mv,
            moved,
            captured,
        })
    }

    /// Restore the board to its exact pre-relocation configuration,
    /// including any displaced piece.
    #[inline]
    pub fn undo_relocation(&mut self, undo: RelocationUndo) {
        self.set_piece(undo.mv.from, Some(undo.moved));
        self.set_piece(undo.mv.to, undo.captured);
    }

    /// Locate a side's king by full-board scan.
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.occupied()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.side == side)
            .map(|(square, _)| square)
    }

    /// Iterate every occupied square with its piece, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| {
                let square = Square::new(row, col);
                self.piece_at(square).map(|piece| (square, piece))
            })
        })
    }

    /// Origin squares of one side's pieces, collected so callers can keep
    /// mutating the board while walking them.
    pub fn origins_of(&self, side: Side) -> Vec<Square> {
        self.occupied()
            .filter(|(_, piece)| piece.side == side)
            .map(|(square, _)| square)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}
