//! Game session facade: validated moves, history, captures, undo, reset.
//!
//! This is the surface a display collaborator drives. Turn ownership is
//! deliberately not checked here — whose click or schedule a move came from
//! is the collaborator's concern; the engine only enforces legality.

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Piece, Side, Square};
use crate::game_state::move_record::{CapturedPieces, MoveRecord};
use crate::move_generation::legal_moves::{
    has_any_legal_move_in_place, legal_destinations_in_place,
};
use crate::utils::notation::move_notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    captured: CapturedPieces,
}

impl Game {
    /// A fresh game at the opening position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::new_game(),
            history: Vec::new(),
            captured: CapturedPieces::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for selectors and simulation helpers, which
    /// rely on exclusive simulate-and-restore use.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move
    }

    /// Legal destinations for the piece on `from`; empty for an empty
    /// square.
    pub fn legal_moves(&mut self, from: Square) -> Vec<Square> {
        legal_destinations_in_place(&mut self.board, from)
    }

    /// Whether `side` could move at all. The caller decides what a `false`
    /// means for the game's outcome.
    pub fn has_any_legal_move(&mut self, side: Side) -> bool {
        has_any_legal_move_in_place(&mut self.board, side)
    }

    /// Apply `from -> to` if it is legal for the piece standing on `from`.
    ///
    /// All-or-nothing: on failure the board, history, captured sequences,
    /// and active side are left untouched and `false` is returned.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> bool {
        if self.board.piece_at(from).is_none() {
            return false;
        }
        if !legal_destinations_in_place(&mut self.board, from).contains(&to) {
            return false;
        }

        let mv = Move::new(from, to);
        let Some(undo) = self.board.apply_relocation(mv) else {
            return false;
        };

        if let Some(captured) = undo.captured {
            self.captured.record(captured);
        }
        let notation = move_notation(undo.moved, undo.captured, mv);
        self.history.push(MoveRecord {
            mv,
            moved: undo.moved,
            captured: undo.captured,
            notation,
        });
        self.board.side_to_move = self.board.side_to_move.opposite();
        true
    }

    /// Read-only history view for move-list displays.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces `side` has lost, in capture order.
    pub fn captured(&self, side: Side) -> &[Piece] {
        self.captured.lost_by(side)
    }

    /// Ask a selector for a move in the current position without applying
    /// it. The collaborator decides when, or whether, to play the result —
    /// the engine performs no scheduling or delay.
    pub fn bot_select_move(&mut self, selector: &mut dyn MoveSelector) -> Option<Move> {
        selector.select_move(&mut self.board)
    }

    /// Take back the last exchange (one move per side) by truncating the
    /// history and replaying the remainder from the opening position.
    /// Returns `false` when fewer than two moves have been played.
    pub fn undo_last_exchange(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.truncate(self.history.len() - 2);
        self.replay_history();
        true
    }

    /// Reinitialize everything to the opening position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rebuild board, captures, and active side from the history alone.
    ///
    /// Replays raw relocations without re-validating legality; history
    /// entries are a strictly legal, gap-free sequence from the opening
    /// position by construction.
    fn replay_history(&mut self) {
        self.board = Board::new_game();
        self.captured.clear();

        for record in &self.history {
            self.board.set_piece(record.mv.to, Some(record.moved));
            self.board.set_piece(record.mv.from, None);
            if let Some(captured) = record.captured {
                self.captured.record(captured);
            }
            self.board.side_to_move = self.board.side_to_move.opposite();
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn successful_move_relocates_records_and_flips_the_turn() {
        let mut game = Game::new();
        assert_eq!(game.side_to_move(), Side::White);

        assert!(game.attempt_move(sq(6, 4), sq(4, 4)));

        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.board().piece_at(sq(6, 4)), None);
        assert_eq!(
            game.board().piece_at(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Side::White))
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].notation, "e4");
        assert_eq!(game.history()[0].captured, None);
    }

    #[test]
    fn failed_moves_change_nothing_at_all() {
        let mut game = Game::new();
        let before = game.clone();

        // Empty origin square.
        assert!(!game.attempt_move(sq(4, 4), sq(3, 4)));
        // Occupied origin, illegal destination.
        assert!(!game.attempt_move(sq(6, 4), sq(3, 4)));
        // Own piece on the destination.
        assert!(!game.attempt_move(sq(7, 0), sq(6, 0)));

        assert_eq!(game, before);
    }

    #[test]
    fn captures_are_recorded_with_pawn_capture_notation() {
        let mut game = Game::new();
        assert!(game.attempt_move(sq(6, 4), sq(4, 4))); // e4
        assert!(game.attempt_move(sq(1, 3), sq(3, 3))); // d5
        assert!(game.attempt_move(sq(4, 4), sq(3, 3))); // exd5

        let record = game.history().last().expect("three moves were played");
        assert_eq!(record.notation, "exd5");
        assert_eq!(
            record.captured,
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
        assert_eq!(
            game.captured(Side::Black),
            &[Piece::new(PieceKind::Pawn, Side::Black)]
        );
        assert!(game.captured(Side::White).is_empty());
    }

    #[test]
    fn turn_alternates_exactly_once_per_accepted_move() {
        let mut game = Game::new();
        let mut expected = Side::White;
        for (from, to) in [
            ((6, 4), (4, 4)),
            ((1, 4), (3, 4)),
            ((7, 6), (5, 5)),
            ((0, 1), (2, 2)),
        ] {
            assert_eq!(game.side_to_move(), expected);
            assert!(game.attempt_move(sq(from.0, from.1), sq(to.0, to.1)));
            expected = expected.opposite();
        }
        assert_eq!(game.side_to_move(), expected);
    }

    #[test]
    fn undo_last_exchange_replays_to_the_earlier_position() {
        let mut game = Game::new();
        assert!(game.attempt_move(sq(6, 4), sq(4, 4)));
        assert!(game.attempt_move(sq(1, 4), sq(3, 4)));
        let checkpoint = game.clone();

        assert!(game.attempt_move(sq(7, 6), sq(5, 5)));
        assert!(game.attempt_move(sq(0, 6), sq(2, 5)));

        assert!(game.undo_last_exchange());
        assert_eq!(game, checkpoint);
    }

    #[test]
    fn undo_rebuilds_captured_sequences_from_history() {
        let mut game = Game::new();
        assert!(game.attempt_move(sq(6, 4), sq(4, 4))); // e4
        assert!(game.attempt_move(sq(1, 3), sq(3, 3))); // d5
        assert!(game.attempt_move(sq(4, 4), sq(3, 3))); // exd5
        assert!(game.attempt_move(sq(0, 3), sq(3, 3))); // Qxd5

        assert_eq!(game.captured(Side::Black).len(), 1);
        assert_eq!(game.captured(Side::White).len(), 1);

        assert!(game.undo_last_exchange());
        assert!(game.captured(Side::Black).is_empty());
        assert!(game.captured(Side::White).is_empty());
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.side_to_move(), Side::White);
    }

    #[test]
    fn undo_needs_at_least_one_full_exchange() {
        let mut game = Game::new();
        assert!(!game.undo_last_exchange());
        assert!(game.attempt_move(sq(6, 4), sq(4, 4)));
        assert!(!game.undo_last_exchange());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn reset_returns_to_a_fresh_game() {
        let mut game = Game::new();
        assert!(game.attempt_move(sq(6, 4), sq(4, 4)));
        assert!(game.attempt_move(sq(1, 4), sq(3, 4)));
        game.reset();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn move_legality_ignores_whose_turn_it_is() {
        // Authorization is the collaborator's job: black can be driven
        // even while the active side is white.
        let mut game = Game::new();
        assert!(game.attempt_move(sq(1, 4), sq(3, 4)));
        assert_eq!(game.side_to_move(), Side::Black);
    }

    #[test]
    fn both_sides_can_move_at_the_opening() {
        let mut game = Game::new();
        assert!(game.has_any_legal_move(Side::White));
        assert!(game.has_any_legal_move(Side::Black));
    }

    #[test]
    fn bot_selection_yields_an_applicable_move() {
        use crate::engines::engine_random::RandomEngine;

        let mut game = Game::new();
        let mut bot = RandomEngine::seeded(Side::White, 21);
        let mv = game
            .bot_select_move(&mut bot)
            .expect("white has legal moves");
        assert!(game.attempt_move(mv.from, mv.to));
        assert_eq!(game.side_to_move(), Side::Black);
    }
}
