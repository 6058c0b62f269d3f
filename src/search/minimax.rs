//! Depth-limited minimax with alpha-beta pruning and a soft wall-clock
//! budget.
//!
//! The searcher owns no state: it mutates the caller's board in place and
//! restores it move by move. The deadline is polled cooperatively at node
//! entry and before each top-level candidate, so an in-flight branch may
//! finish its current iteration after the budget expires.

use std::time::{Duration, Instant};

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_moves::side_moves_in_place;
use crate::search::board_scoring::{BoardScorer, SCORE_INFINITY};

/// Search knobs, lifted out of embedded constants into explicit
/// constructor input.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget: Duration,
    /// Probability of bypassing search for a uniformly random legal move —
    /// a strength-limiting knob, not a fallback.
    pub random_move_probability: f64,
    /// The side this searcher plays.
    pub side: Side,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_budget: Duration::from_millis(2_000),
            random_move_probability: 0.3,
            side: Side::Black,
        }
    }
}

/// What the searcher decided and what it cost.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// `None` only when the searched side has no legal move at all.
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Whether the move came from the random knob or the timeout fallback
    /// rather than a completed candidate evaluation.
    pub picked_random: bool,
}

/// Pick a move for `config.side`. Never returns `None` while that side has
/// at least one legal move: an exhausted budget degrades to the best move
/// found so far, or failing that a uniformly random legal move.
pub fn search_best_move<S: BoardScorer, R: Rng>(
    board: &mut Board,
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchOutcome {
    let started_at = Instant::now();
    let mut outcome = SearchOutcome {
        best_move: None,
        best_score: -SCORE_INFINITY,
        nodes: 0,
        elapsed: Duration::ZERO,
        picked_random: false,
    };

    let candidates = side_moves_in_place(board, config.side);
    if candidates.is_empty() {
        outcome.elapsed = started_at.elapsed();
        return outcome;
    }

    let random_probability = config.random_move_probability.clamp(0.0, 1.0);
    if rng.random_bool(random_probability) {
        outcome.best_move = candidates.as_slice().choose(rng).copied();
        outcome.picked_random = true;
        outcome.elapsed = started_at.elapsed();
        return outcome;
    }

    for &mv in &candidates {
        if started_at.elapsed() > config.time_budget {
            break;
        }
        let Some(undo) = board.apply_relocation(mv) else {
            continue;
        };
        let score = alpha_beta(
            board,
            scorer,
            config,
            config.max_depth.saturating_sub(1),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            false,
            started_at,
            &mut outcome.nodes,
        );
        board.undo_relocation(undo);

        // Strictly better only: ties keep the first candidate found.
        if score > outcome.best_score {
            outcome.best_score = score;
            outcome.best_move = Some(mv);
        }
    }

    if outcome.best_move.is_none() {
        outcome.best_move = candidates.as_slice().choose(rng).copied();
        outcome.picked_random = true;
    }
    outcome.elapsed = started_at.elapsed();
    outcome
}

fn alpha_beta<S: BoardScorer>(
    board: &mut Board,
    scorer: &S,
    config: &SearchConfig,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    started_at: Instant,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    // Soft cutoff: an expired budget degrades to a static evaluation, as
    // does reaching the depth horizon.
    if started_at.elapsed() > config.time_budget || depth == 0 {
        return scorer.score(board, config.side);
    }

    let mover = if maximizing {
        config.side
    } else {
        config.side.opposite()
    };
    let moves = side_moves_in_place(board, mover);
    if moves.is_empty() {
        // No legal move is maximally bad for whoever is stuck; checkmate
        // and stalemate are deliberately not distinguished.
        return if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
    }

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let Some(undo) = board.apply_relocation(mv) else {
                continue;
            };
            let score = alpha_beta(
                board,
                scorer,
                config,
                depth - 1,
                alpha,
                beta,
                false,
                started_at,
                nodes,
            );
            board.undo_relocation(undo);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            let Some(undo) = board.apply_relocation(mv) else {
                continue;
            };
            let score = alpha_beta(
                board,
                scorer,
                config,
                depth - 1,
                alpha,
                beta,
                true,
                started_at,
                nodes,
            );
            board.undo_relocation(undo);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
