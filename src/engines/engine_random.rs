//! Uniform-random selector.
//!
//! Doubles as the hint provider for display surfaces and as a baseline
//! opponent for diagnostics and harness play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_moves::side_moves_in_place;

pub struct RandomEngine {
    side: Side,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible diagnostics.
    pub fn seeded(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl MoveSelector for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &mut Board) -> Option<Move> {
        let moves = side_moves_in_place(board, self.side);
        moves.as_slice().choose(&mut self.rng).copied()
    }
}
