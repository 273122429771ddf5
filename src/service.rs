//! Transport-facing entry points and wire records.
//!
//! The HTTP routing layer is out of scope; these stateless functions and
//! serde types are the exact surface it would mount. Every call
//! round-trips full board state: the initial board, the human's legal
//! actions, applying a human action, the heuristic evaluation, and the
//! bot's decision. Field names follow the camelCase wire format.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::game_state::chess_rules::Game;
use crate::game_state::chess_types::{classify_glyph, PieceClass, Side};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::scoring::Score;
use crate::search::alpha_beta::Bot;
use crate::search::decision::DecisionRecord;
use crate::search::multi_depth::decide_within;
use crate::utils::board_text::{parse_board, render_board};

/// The smallest accepted time limit, in seconds.
pub const MIN_TIME_LIMIT_SECONDS: u64 = 5;

/// One piece on the wire: its glyph and square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub icon: char,
    pub x: i8,
    pub y: i8,
}

/// One action on the wire: the moving piece and its destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionView {
    pub piece: PieceView,
    pub x: i8,
    pub y: i8,
}

impl ActionView {
    fn from_move(action: &MoveDescription) -> Self {
        ActionView {
            piece: PieceView {
                icon: action.piece.glyph(),
                x: action.piece.location.0,
                y: action.piece.location.1,
            },
            x: action.destination.0,
            y: action.destination.1,
        }
    }
}

/// A board on the wire.
///
/// `winner` is present only on finished games; the inner `None` encodes a
/// draw as an explicit JSON null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub board: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Option<String>>,
}

impl BoardView {
    fn from_state(state: &GameState) -> Self {
        let winner = if state.is_terminal() {
            Some(state.winner().map(winner_tag))
        } else {
            None
        };
        BoardView {
            board: render_board(state),
            winner,
        }
    }
}

fn winner_tag(side: Side) -> String {
    match side {
        Side::Bot => "black".to_string(),
        Side::Human => "white".to_string(),
    }
}

/// Request to apply a human action to a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub board: String,
    pub action: ActionView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoting_icon: Option<char>,
}

/// Request for the bot's decision on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub intelligence_level: u8,
    pub board: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u64>,
}

/// The bot's decision on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    pub time_taken: f64,
    pub minimax_value: Score,
    pub action_taken: ActionView,
    pub result: BoardView,
    pub num_nodes_expanded: u64,
}

impl DecisionView {
    fn from_record(record: &DecisionRecord) -> Self {
        DecisionView {
            time_taken: record.time_taken.as_secs_f64(),
            minimax_value: record.minimax_value,
            action_taken: ActionView::from_move(&record.action_taken),
            result: BoardView::from_state(&record.result_state),
            num_nodes_expanded: record.num_nodes_expanded,
        }
    }
}

/// The starting position's board text.
pub fn initial_board() -> String {
    render_board(&Game::new().initial_state())
}

/// The human player's legal actions on the given board.
pub fn legal_actions(board: &str) -> Result<Vec<ActionView>, EngineError> {
    let state = parse_board(board, false)?;
    Ok(Game::new()
        .actions(&state)
        .iter()
        .map(ActionView::from_move)
        .collect())
}

/// The heuristic evaluation of the given board, human to move.
pub fn evaluation(board: &str) -> Result<Score, EngineError> {
    let state = parse_board(board, false)?;
    Ok(Game::new().evaluate(&state))
}

/// Apply a human action (with an optional promotion glyph) and return the
/// resulting board.
pub fn apply_action(request: &ActionRequest) -> Result<BoardView, EngineError> {
    let state = parse_board(&request.board, false)?;

    let origin = (request.action.piece.x, request.action.piece.y);
    let piece = state
        .human_player()
        .find_piece_at(&origin)
        .copied()
        .ok_or(EngineError::PieceNotFound(origin))?;

    let promotion = match request.promoting_icon {
        Some(glyph) => Some(promotion_class(glyph)?),
        None => None,
    };

    let action = MoveDescription {
        piece,
        destination: (request.action.x, request.action.y),
    };
    let next = Game::new().result(&state, &action, promotion)?;

    Ok(BoardView::from_state(&next))
}

fn promotion_class(glyph: char) -> Result<PieceClass, EngineError> {
    classify_glyph(glyph)
        .map(|(_, class)| class)
        .ok_or(EngineError::UnknownGlyph(glyph))
}

/// Run the bot's decision protocol on the given board, bot to move.
///
/// Without a time limit this is one synchronous search at the requested
/// level. With a time limit, one search per level from 0 up runs
/// concurrently and the deepest one to finish in time wins.
pub fn decision(request: &DecisionRequest) -> Result<DecisionView, EngineError> {
    if let Some(limit) = request.time_limit {
        if limit < MIN_TIME_LIMIT_SECONDS {
            return Err(EngineError::InvalidSearchConfig(format!(
                "timeLimit cannot be less than {MIN_TIME_LIMIT_SECONDS}, given: {limit}"
            )));
        }
    }

    let state = parse_board(&request.board, true)?;
    log::info!(
        "deciding at level {} with time limit {:?}",
        request.intelligence_level,
        request.time_limit,
    );

    let record = match request.time_limit {
        None => Bot::new(request.intelligence_level)
            .decide(&state)?
            .ok_or(EngineError::NoAvailableActions)?,
        Some(seconds) => decide_within(
            &state,
            request.intelligence_level,
            Duration::from_secs(seconds),
        )
        .ok_or(EngineError::NoDecisionWithinTimeLimit)?,
    };

    log::info!(
        "moved {} from ({}, {}) to ({}, {}) with minimax value {} after {:.3} seconds, expanding {} nodes",
        record.action_taken.piece.glyph(),
        record.action_taken.piece.location.0,
        record.action_taken.piece.location.1,
        record.action_taken.destination.0,
        record.action_taken.destination.1,
        record.minimax_value,
        record.time_taken.as_secs_f64(),
        record.num_nodes_expanded,
    );

    Ok(DecisionView::from_record(&record))
}
