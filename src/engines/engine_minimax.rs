//! The adversarial opponent: alpha-beta search behind the selector trait.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::MoveSelector;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::search::board_scoring::{BoardScorer, MaterialPositionalScorer};
use crate::search::minimax::{search_best_move, SearchConfig, SearchOutcome};

pub struct MinimaxEngine<S: BoardScorer = MaterialPositionalScorer> {
    config: SearchConfig,
    scorer: S,
    rng: StdRng,
    last_outcome: Option<SearchOutcome>,
}

impl MinimaxEngine<MaterialPositionalScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialPositionalScorer)
    }

    /// Deterministic variant for tests and reproducible diagnostics.
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            scorer: MaterialPositionalScorer,
            rng: StdRng::seed_from_u64(seed),
            last_outcome: None,
        }
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            scorer,
            rng: StdRng::from_os_rng(),
            last_outcome: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Decision and cost data from the most recent selection, for
    /// diagnostics and display surfaces.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }
}

impl<S: BoardScorer> MoveSelector for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "minimax"
    }

    fn new_game(&mut self) {
        self.last_outcome = None;
    }

    fn select_move(&mut self, board: &mut Board) -> Option<Move> {
        let outcome = search_best_move(board, &self.scorer, &self.config, &mut self.rng);
        let best_move = outcome.best_move;
        self.last_outcome = Some(outcome);
        best_move
    }
}
