//! Per-decision memo of search values keyed by canonical position.
//!
//! The table lives for exactly one `decide` call and is cleared at the
//! start of the next. A memoized value is returned regardless of the depth
//! budget that was active when it was stored, an accepted inexactness
//! bounded by the table's one-call lifetime.

use std::collections::HashMap;

use crate::game_state::chess_types::{PieceClass, Side};
use crate::game_state::game_state::GameState;
use crate::scoring::Score;

const EMPTY_CODE: u8 = 0;

/// Canonical value key of a position: one code per square plus the side to
/// move. Two states with the same placement and turn share a key however
/// they were reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    squares: [u8; 64],
    is_bot_turn: bool,
}

impl StateKey {
    pub fn from_state(state: &GameState) -> Self {
        let mut squares = [EMPTY_CODE; 64];
        for player in [state.bot_player(), state.human_player()] {
            for piece in player.pieces() {
                let (file, rank) = piece.location;
                squares[rank as usize * 8 + file as usize] =
                    piece_code(piece.side, piece.class);
            }
        }
        StateKey {
            squares,
            is_bot_turn: state.is_bot_turn(),
        }
    }
}

fn piece_code(side: Side, class: PieceClass) -> u8 {
    let side_block = match side {
        Side::Bot => 0,
        Side::Human => PieceClass::ALL.len() as u8,
    };
    1 + side_block + class.index() as u8
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<StateKey, Score>,
    stats: TableStats,
}

impl TranspositionTable {
    pub fn new() -> Self {
        TranspositionTable::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TableStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    pub fn probe(&mut self, key: &StateKey) -> Option<Score> {
        self.stats.probes += 1;
        let hit = self.entries.get(key).copied();
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    pub fn store(&mut self, key: StateKey, value: Score) {
        self.stats.stores += 1;
        self.entries.insert(key, value);
    }
}
