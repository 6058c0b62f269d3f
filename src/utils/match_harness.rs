//! Selector-vs-selector match harness for local diagnostics.
//!
//! Runs two `MoveSelector` implementations against each other without any
//! display surface. The harness reports which side ran out of legal moves
//! and leaves mate-versus-stalemate interpretation to the caller.

use std::time::{Duration, Instant};

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::chess_types::Side;
use crate::game_state::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The named side had no legal move when its turn came.
    Stuck(Side),
    /// A selector produced a move the game rejected.
    IllegalSelection(Side),
    MaxPliesReached,
}

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchStats {
    pub outcome: MatchOutcome,
    pub plies_played: u16,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_think_time: Duration,
    pub black_think_time: Duration,
}

impl MatchStats {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_moves={} black_moves={} white_ms={} black_ms={}",
            self.outcome,
            self.plies_played,
            self.white_move_count,
            self.black_move_count,
            self.white_think_time.as_millis(),
            self.black_think_time.as_millis()
        )
    }
}

/// Play one game between `white` and `black` (each configured for its own
/// side) from the opening position.
pub fn play_match(
    white: &mut dyn MoveSelector,
    black: &mut dyn MoveSelector,
    config: &MatchConfig,
) -> MatchStats {
    let mut game = Game::new();
    white.new_game();
    black.new_game();

    let mut stats = MatchStats {
        outcome: MatchOutcome::MaxPliesReached,
        plies_played: 0,
        white_move_count: 0,
        black_move_count: 0,
        white_think_time: Duration::ZERO,
        black_think_time: Duration::ZERO,
    };

    while stats.plies_played < config.max_plies {
        let side = game.side_to_move();
        let selector: &mut dyn MoveSelector = match side {
            Side::White => &mut *white,
            Side::Black => &mut *black,
        };

        let started_at = Instant::now();
        let selected = selector.select_move(game.board_mut());
        let think = started_at.elapsed();
        match side {
            Side::White => stats.white_think_time += think,
            Side::Black => stats.black_think_time += think,
        }

        let Some(mv) = selected else {
            stats.outcome = MatchOutcome::Stuck(side);
            return stats;
        };
        if !game.attempt_move(mv.from, mv.to) {
            stats.outcome = MatchOutcome::IllegalSelection(side);
            return stats;
        }

        match side {
            Side::White => stats.white_move_count += 1,
            Side::Black => stats.black_move_count += 1,
        }
        stats.plies_played += 1;
    }

    stats
}
