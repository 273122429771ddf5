//! Decision payload returned by the search engine.

use std::time::Duration;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::scoring::Score;

/// Everything a caller needs to know about one completed decision: wall
/// time spent, the minimax value of the chosen branch, the chosen action,
/// the state it leads to, and how many nodes the search expanded.
#[derive(Debug, Clone)]
pub struct DecisionRecord {
    pub time_taken: Duration,
    pub minimax_value: Score,
    pub action_taken: MoveDescription,
    pub result_state: GameState,
    pub num_nodes_expanded: u64,
}
