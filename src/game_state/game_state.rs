//! Snapshot of a game in progress.
//!
//! A `GameState` owns both players, the turn flag, and the terminal
//! outcome. `Clone` is a deep copy; the rules engine and the search never
//! mutate an input state, they clone and transform.

use crate::game_state::chess_types::Side;
use crate::game_state::player::Player;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    bot_player: Player,
    human_player: Player,
    is_bot_turn: bool,
    is_terminal: bool,
    winner: Option<Side>,
}

impl GameState {
    /// The standard starting position, bot to move.
    pub fn new() -> Self {
        GameState::with_players(
            Player::new_initial(Side::Bot),
            Player::new_initial(Side::Human),
            true,
        )
    }

    /// Assemble a running (non-terminal) state from explicit parts.
    ///
    /// The turn flag must always be supplied: it is not recoverable from
    /// the piece placement alone.
    pub fn with_players(bot_player: Player, human_player: Player, is_bot_turn: bool) -> Self {
        GameState {
            bot_player,
            human_player,
            is_bot_turn,
            is_terminal: false,
            winner: None,
        }
    }

    #[inline]
    pub fn bot_player(&self) -> &Player {
        &self.bot_player
    }

    #[inline]
    pub fn human_player(&self) -> &Player {
        &self.human_player
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Bot => &self.bot_player,
            Side::Human => &self.human_player,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Bot => &mut self.bot_player,
            Side::Human => &mut self.human_player,
        }
    }

    #[inline]
    pub fn is_bot_turn(&self) -> bool {
        self.is_bot_turn
    }

    /// The side whose turn it is.
    #[inline]
    pub fn mover_side(&self) -> Side {
        if self.is_bot_turn {
            Side::Bot
        } else {
            Side::Human
        }
    }

    /// Pass the turn to the other side.
    pub fn advance_turn(&mut self) {
        self.is_bot_turn = !self.is_bot_turn;
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Mark the game as finished. `None` means a draw. Terminality, once
    /// set, is permanent for this state.
    pub fn set_outcome(&mut self, winner: Option<Side>) {
        self.is_terminal = true;
        self.winner = winner;
    }

    /// The winner of a finished game, or `None` for a draw.
    ///
    /// # Panics
    ///
    /// Panics when the game is still running; asking for a winner before
    /// the game is decided is a caller logic defect.
    pub fn winner(&self) -> Option<Side> {
        assert!(
            self.is_terminal,
            "the current state is not a terminal state"
        );
        self.winner
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
