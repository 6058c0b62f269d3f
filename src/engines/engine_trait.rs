//! Selector abstraction so display collaborators can swap opponent
//! strategies behind a single interface.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

pub trait MoveSelector: Send {
    fn name(&self) -> &str;

    /// Reset any internal selector state for a fresh game.
    fn new_game(&mut self) {}

    /// Pick a move for the selector's configured side, or `None` when that
    /// side has no legal move. The board is borrowed mutably for
    /// simulate-and-restore and is returned unchanged; the caller applies
    /// the chosen move itself and owns any scheduling or display delay.
    fn select_move(&mut self, board: &mut Board) -> Option<Move>;
}
