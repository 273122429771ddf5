//! Rules engine: action enumeration, move application, and scoring.
//!
//! `result` is the single transition function. It deep-copies the input
//! state, relocates the acting piece, resolves a capture on the
//! destination square, applies promotion when a replacement class is
//! supplied, detects terminal positions, and passes the turn.

use crate::errors::EngineError;
use crate::game_state::chess_types::{PieceClass, Side};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::scoring::{
    material_weight, Score, MOBILITY_WEIGHT, PAWN_STRUCTURE_WEIGHT, TERMINAL_UTILITY,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Game;

impl Game {
    pub fn new() -> Self {
        Game
    }

    /// The standard starting position.
    pub fn initial_state(&self) -> GameState {
        GameState::new()
    }

    /// Every action available to the side to move.
    pub fn actions(&self, state: &GameState) -> Vec<MoveDescription> {
        let mover = state.player(state.mover_side());
        let opponent = state.player(state.mover_side().opposite());
        mover.actions(opponent)
    }

    /// Apply `action` to a copy of `state` and return the new state; the
    /// input is never mutated.
    ///
    /// When a `promotion` class is supplied, EVERY pawn of the acting side
    /// standing on its promotion rank is replaced with that class, not only
    /// the pawn just moved.
    ///
    /// Terminal detection after the move: both sides reduced to a lone king
    /// is a draw; a side whose king is gone loses; otherwise the game runs
    /// on. The turn passes to the other side in all cases.
    pub fn result(
        &self,
        state: &GameState,
        action: &MoveDescription,
        promotion: Option<PieceClass>,
    ) -> Result<GameState, EngineError> {
        let mut next = state.clone();
        let mover_side = action.piece.side;
        let opponent_side = mover_side.opposite();

        next.player_mut(mover_side)
            .relocate_piece(&action.piece.location, &action.destination)?;
        next.player_mut(opponent_side)
            .kill_piece_at(&action.destination);

        if let Some(class) = promotion {
            for location in next.player(mover_side).promotable_pawn_locations() {
                let mover = next.player_mut(mover_side);
                mover.kill_piece_at(&location);
                mover.insert(class, location)?;
            }
        }

        let my_king_alive = next.player(mover_side).count_of(PieceClass::King) == 1;
        let opponent_king_alive =
            next.player(opponent_side).count_of(PieceClass::King) == 1;
        let bare_kings = next.player(mover_side).piece_count() == 1
            && my_king_alive
            && next.player(opponent_side).piece_count() == 1
            && opponent_king_alive;

        if bare_kings {
            next.set_outcome(None);
        } else if !my_king_alive {
            next.set_outcome(Some(opponent_side));
        } else if !opponent_king_alive {
            next.set_outcome(Some(mover_side));
        }

        next.advance_turn();
        Ok(next)
    }

    /// Exact score of a finished game: `+TERMINAL_UTILITY` for a bot win,
    /// `-TERMINAL_UTILITY` for a human win, `0.0` for a draw.
    ///
    /// # Panics
    ///
    /// Panics when the state is not terminal.
    pub fn utility(&self, state: &GameState) -> Score {
        assert!(
            state.is_terminal(),
            "utility must not be used for a non-terminal state"
        );

        match state.winner() {
            None => 0.0,
            Some(Side::Bot) => TERMINAL_UTILITY,
            Some(Side::Human) => -TERMINAL_UTILITY,
        }
    }

    /// Heuristic value of a running game, positive in the bot's favor:
    /// weighted material difference, minus a pawn-structure penalty
    /// (doubled, blocked, isolated), plus a mobility bonus. Always strictly
    /// inside `±TERMINAL_UTILITY`.
    ///
    /// # Panics
    ///
    /// Panics when the state is terminal.
    pub fn evaluate(&self, state: &GameState) -> Score {
        assert!(
            !state.is_terminal(),
            "evaluate must not be used for a terminal state"
        );

        let bot = state.bot_player();
        let human = state.human_player();

        let mut value: Score = 0.0;
        for class in PieceClass::ALL {
            value += material_weight(class)
                * (bot.count_of(class) as Score - human.count_of(class) as Score);
        }

        value -= PAWN_STRUCTURE_WEIGHT
            * ((bot.doubled_pawn_count() as Score - human.doubled_pawn_count() as Score)
                + (bot.blocked_pawn_count(human) as Score
                    - human.blocked_pawn_count(bot) as Score)
                + (bot.isolated_pawn_count() as Score
                    - human.isolated_pawn_count() as Score));

        value += MOBILITY_WEIGHT
            * (bot.actions(human).len() as Score - human.actions(bot).len() as Score);

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::player::Player;
    use crate::utils::board_text::render_board;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn kings_duel(bot_king: (i8, i8), human_king: (i8, i8), is_bot_turn: bool) -> GameState {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, bot_king).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, human_king).unwrap();
        GameState::with_players(bot, human, is_bot_turn)
    }

    fn first_action_of(game: &Game, state: &GameState) -> MoveDescription {
        game.actions(state)
            .into_iter()
            .next()
            .expect("at least one action")
    }

    #[test]
    fn result_never_mutates_its_input() {
        let game = Game::new();
        let state = game.initial_state();
        let before = render_board(&state);
        let action = first_action_of(&game, &state);

        let next = game.result(&state, &action, None).unwrap();

        assert_eq!(render_board(&state), before);
        assert!(state.is_bot_turn());
        assert!(!next.is_bot_turn());
    }

    #[test]
    fn the_turn_alternates_exactly_once_per_applied_action() {
        let game = Game::new();
        let state = game.initial_state();
        let next = game
            .result(&state, &first_action_of(&game, &state), None)
            .unwrap();
        assert!(!next.is_bot_turn());

        let after = game
            .result(&next, &first_action_of(&game, &next), None)
            .unwrap();
        assert!(after.is_bot_turn());
    }

    #[test]
    fn capture_removes_the_opposing_piece() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        bot.insert(PieceClass::Rook, (3, 3)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 7)).unwrap();
        human.insert(PieceClass::Knight, (3, 6)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let game = Game::new();
        let rook = *state.bot_player().find_piece_at(&(3, 3)).unwrap();
        let next = game
            .result(
                &state,
                &MoveDescription {
                    piece: rook,
                    destination: (3, 6),
                },
                None,
            )
            .unwrap();

        assert_eq!(next.human_player().count_of(PieceClass::Knight), 0);
        assert_eq!(
            next.bot_player().find_piece_at(&(3, 6)).unwrap().class,
            PieceClass::Rook
        );
        assert!(!next.is_terminal());
    }

    #[test]
    fn result_rejects_an_action_for_a_missing_piece() {
        let game = Game::new();
        let state = game.initial_state();
        let mut action = first_action_of(&game, &state);
        action.piece.location = (4, 4);

        assert_eq!(
            game.result(&state, &action, None),
            Err(EngineError::PieceNotFound((4, 4)))
        );
    }

    #[test]
    fn promotion_replaces_every_pawn_on_the_promotion_rank() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        bot.insert(PieceClass::Pawn, (2, 7)).unwrap();
        bot.insert(PieceClass::Pawn, (5, 6)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 0)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let game = Game::new();
        let pawn = *state.bot_player().find_piece_at(&(5, 6)).unwrap();
        let next = game
            .result(
                &state,
                &MoveDescription {
                    piece: pawn,
                    destination: (5, 7),
                },
                Some(PieceClass::Queen),
            )
            .unwrap();

        // Both the moved pawn and the bystander on rank 7 are upgraded.
        assert_eq!(next.bot_player().count_of(PieceClass::Pawn), 0);
        assert_eq!(next.bot_player().count_of(PieceClass::Queen), 2);
        assert_eq!(
            next.bot_player().find_piece_at(&(2, 7)).unwrap().class,
            PieceClass::Queen
        );
    }

    #[test]
    fn without_a_promotion_class_pawns_stay_pawns() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        bot.insert(PieceClass::Pawn, (5, 6)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 0)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let game = Game::new();
        let pawn = *state.bot_player().find_piece_at(&(5, 6)).unwrap();
        let next = game
            .result(
                &state,
                &MoveDescription {
                    piece: pawn,
                    destination: (5, 7),
                },
                None,
            )
            .unwrap();

        assert_eq!(next.bot_player().count_of(PieceClass::Pawn), 1);
    }

    #[test]
    fn reducing_both_sides_to_bare_kings_is_a_draw() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 7)).unwrap();
        human.insert(PieceClass::Rook, (1, 1)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let game = Game::new();
        let king = *state.bot_player().find_piece_at(&(0, 0)).unwrap();
        let next = game
            .result(
                &state,
                &MoveDescription {
                    piece: king,
                    destination: (1, 1),
                },
                None,
            )
            .unwrap();

        assert!(next.is_terminal());
        assert_eq!(next.winner(), None);
        assert_eq!(game.utility(&next), 0.0);
    }

    #[test]
    fn capturing_the_king_wins_the_game() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        bot.insert(PieceClass::Rook, (7, 0)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 7)).unwrap();
        human.insert(PieceClass::Pawn, (6, 6)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let game = Game::new();
        let rook = *state.bot_player().find_piece_at(&(7, 0)).unwrap();
        let next = game
            .result(
                &state,
                &MoveDescription {
                    piece: rook,
                    destination: (7, 7),
                },
                None,
            )
            .unwrap();

        assert!(next.is_terminal());
        assert_eq!(next.winner(), Some(Side::Bot));
        assert_eq!(game.utility(&next), TERMINAL_UTILITY);
    }

    #[test]
    fn utility_is_negative_for_a_human_win() {
        let mut state = kings_duel((0, 0), (7, 7), false);
        state.set_outcome(Some(Side::Human));
        assert_eq!(Game::new().utility(&state), -TERMINAL_UTILITY);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn utility_on_a_running_game_panics() {
        let game = Game::new();
        let _ = game.utility(&game.initial_state());
    }

    #[test]
    #[should_panic(expected = "terminal state")]
    fn evaluate_on_a_finished_game_panics() {
        let mut state = kings_duel((0, 0), (7, 7), true);
        state.set_outcome(None);
        let _ = Game::new().evaluate(&state);
    }

    #[test]
    fn the_starting_position_evaluates_to_zero() {
        let game = Game::new();
        assert_eq!(game.evaluate(&game.initial_state()), 0.0);
    }

    #[test]
    fn material_advantage_shows_in_the_evaluation() {
        let mut bot = Player::new_empty(Side::Bot);
        bot.insert(PieceClass::King, (0, 0)).unwrap();
        bot.insert(PieceClass::Queen, (4, 4)).unwrap();
        let mut human = Player::new_empty(Side::Human);
        human.insert(PieceClass::King, (7, 7)).unwrap();
        let state = GameState::with_players(bot, human, true);

        let value = Game::new().evaluate(&state);
        assert!(value > 0.0);
        assert!(value.abs() < TERMINAL_UTILITY);
    }

    #[test]
    fn a_lone_king_duel_offers_the_kings_free_adjacent_squares() {
        // Kings on file 3 of the two home ranks; rank 0 is a board edge,
        // so the bot king has exactly five in-bound squares to step to.
        let state = kings_duel((3, 0), (3, 7), true);
        let game = Game::new();

        let mut destinations: Vec<_> = game
            .actions(&state)
            .into_iter()
            .map(|action| action.destination)
            .collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![(2, 0), (2, 1), (3, 1), (4, 0), (4, 1)]);
    }

    #[test]
    fn random_playouts_only_generate_legal_in_bound_moves() {
        let game = Game::new();
        let mut rng = StdRng::seed_from_u64(20_08_06);
        let mut state = game.initial_state();

        for _ in 0..120 {
            if state.is_terminal() {
                break;
            }

            let actions = game.actions(&state);
            let mover = state.player(state.mover_side());
            for action in &actions {
                let (file, rank) = action.destination;
                assert!((0..=7).contains(&file) && (0..=7).contains(&rank));
                assert!(!mover.is_occupied(&action.destination));
            }
            if actions.is_empty() {
                break;
            }

            let pieces_before = render_board(&state);
            let pick = rng.random_range(0..actions.len());
            let next = game.result(&state, &actions[pick], None).unwrap();
            assert_eq!(render_board(&state), pieces_before);

            state = next;
        }
    }
}
