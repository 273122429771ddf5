//! Depth-bounded alpha-beta minimax with a per-decision transposition
//! table.
//!
//! The bot is the maximizer and the human the minimizer. Pruning is
//! fail-hard: a branch cut off early returns its running best without
//! widening the window, and pruned values are never memoized. The depth
//! cutoff (the "intelligence level") is the maximum ply searched before
//! falling back to the heuristic evaluation; level 0 evaluates the root's
//! immediate children heuristically.

use std::time::Instant;

use crate::errors::EngineError;
use crate::game_state::chess_rules::Game;
use crate::game_state::chess_types::PieceClass;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::scoring::Score;
use crate::search::decision::DecisionRecord;
use crate::search::transposition_table::{StateKey, TranspositionTable};

pub struct Bot {
    game: Game,
    intelligence_level: u8,
    transposition_table: TranspositionTable,
    num_nodes_expanded: u64,
}

impl Bot {
    pub fn new(intelligence_level: u8) -> Self {
        Bot {
            game: Game::new(),
            intelligence_level,
            transposition_table: TranspositionTable::new(),
            num_nodes_expanded: 0,
        }
    }

    #[inline]
    pub fn intelligence_level(&self) -> u8 {
        self.intelligence_level
    }

    /// Check if the given depth exceeds the configured cutoff.
    #[inline]
    fn should_cut_off(&self, depth: u8) -> bool {
        depth > self.intelligence_level
    }

    /// Decide the next action from the given state.
    ///
    /// Each call starts from a fresh transposition table and node counter.
    /// Root children are produced with Queen as the promotion default (at
    /// this ply only) and scored through the minimizing half of the search
    /// at depth 1. The action with the strictly greatest value wins;
    /// first seen wins ties, which is deterministic because action
    /// enumeration order is. Returns `None` when the side to move has no
    /// action.
    pub fn decide(
        &mut self,
        state: &GameState,
    ) -> Result<Option<DecisionRecord>, EngineError> {
        let start_time = Instant::now();

        self.transposition_table.clear();
        self.num_nodes_expanded = 0;

        let mut minimax_value = Score::NEG_INFINITY;
        let mut best: Option<(MoveDescription, GameState)> = None;

        let mut bot_best = Score::NEG_INFINITY;
        let human_best = Score::INFINITY;

        for action in self.game.actions(state) {
            let result = self
                .game
                .result(state, &action, Some(PieceClass::Queen))?;
            self.num_nodes_expanded += 1;

            let value = self.min_value(&result, bot_best, human_best, 1)?;
            if value > minimax_value {
                minimax_value = value;
                best = Some((action, result));
            }

            bot_best = bot_best.max(minimax_value);
        }

        let Some((action_taken, result_state)) = best else {
            return Ok(None);
        };

        let stats = self.transposition_table.stats();
        log::debug!(
            "decided on ({}, {}, {}) -> ({}, {}) with value {} at level {}: {} nodes, {} table hits / {} probes",
            action_taken.piece.glyph(),
            action_taken.piece.location.0,
            action_taken.piece.location.1,
            action_taken.destination.0,
            action_taken.destination.1,
            minimax_value,
            self.intelligence_level,
            self.num_nodes_expanded,
            stats.hits,
            stats.probes,
        );

        Ok(Some(DecisionRecord {
            time_taken: start_time.elapsed(),
            minimax_value,
            action_taken,
            result_state,
            num_nodes_expanded: self.num_nodes_expanded,
        }))
    }

    /// Best value the maximizer can force from `state`.
    ///
    /// A memoized position short-circuits before the terminal and cutoff
    /// checks, whatever depth budget stored it. Early cutoff (best already
    /// at or above the minimizer's bound) returns without storing.
    fn max_value(
        &mut self,
        state: &GameState,
        mut max_best: Score,
        min_best: Score,
        depth: u8,
    ) -> Result<Score, EngineError> {
        let key = StateKey::from_state(state);
        if let Some(value) = self.transposition_table.probe(&key) {
            return Ok(value);
        }
        if state.is_terminal() {
            return Ok(self.game.utility(state));
        }
        if self.should_cut_off(depth) {
            return Ok(self.game.evaluate(state));
        }

        let mut max_best_here = Score::NEG_INFINITY;

        for action in self.game.actions(state) {
            let result = self.game.result(state, &action, None)?;
            self.num_nodes_expanded += 1;

            let value = self.min_value(&result, max_best, min_best, depth + 1)?;
            if value > max_best_here {
                max_best_here = value;
            }
            if max_best_here >= min_best {
                return Ok(max_best_here);
            }
            max_best = max_best.max(max_best_here);
        }

        self.transposition_table.store(key, max_best_here);
        Ok(max_best_here)
    }

    /// Best value the minimizer can force from `state`; mirror image of
    /// `max_value`.
    fn min_value(
        &mut self,
        state: &GameState,
        max_best: Score,
        mut min_best: Score,
        depth: u8,
    ) -> Result<Score, EngineError> {
        let key = StateKey::from_state(state);
        if let Some(value) = self.transposition_table.probe(&key) {
            return Ok(value);
        }
        if state.is_terminal() {
            return Ok(self.game.utility(state));
        }
        if self.should_cut_off(depth) {
            return Ok(self.game.evaluate(state));
        }

        let mut min_best_here = Score::INFINITY;

        for action in self.game.actions(state) {
            let result = self.game.result(state, &action, None)?;
            self.num_nodes_expanded += 1;

            let value = self.max_value(&result, max_best, min_best, depth + 1)?;
            if value < min_best_here {
                min_best_here = value;
            }
            if min_best_here <= max_best {
                return Ok(min_best_here);
            }
            min_best = min_best.min(min_best_here);
        }

        self.transposition_table.store(key, min_best_here);
        Ok(min_best_here)
    }
}
