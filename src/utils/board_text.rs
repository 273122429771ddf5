//! Board-text codec.
//!
//! A board is 8 lines of 8 glyphs, rank 0 (the bot's home rank) first,
//! with '□' on empty squares and one trailing newline per line. The text
//! carries no turn information, so parsing always takes the side to move
//! explicitly.

use crate::errors::EngineError;
use crate::game_state::chess_types::{classify_glyph, Side};
use crate::game_state::game_state::GameState;
use crate::game_state::player::Player;

pub const BOARD_SIZE: usize = 8;
pub const EMPTY_GLYPH: char = '□';

/// Render the board to its 8-line text form.
pub fn render_board(state: &GameState) -> String {
    let mut rows = [[EMPTY_GLYPH; BOARD_SIZE]; BOARD_SIZE];

    for player in [state.bot_player(), state.human_player()] {
        for piece in player.pieces() {
            let (file, rank) = piece.location;
            rows[rank as usize][file as usize] = piece.glyph();
        }
    }

    let mut out = String::new();
    for row in rows {
        for glyph in row {
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Reconstruct a state from board text plus an explicitly supplied turn.
///
/// Any glyph that names no piece (the '□' placeholder included) reads as
/// an empty square. Lines past the eighth, or glyphs past the eighth of a
/// line, are structural defects and rejected.
pub fn parse_board(text: &str, is_bot_turn: bool) -> Result<GameState, EngineError> {
    let mut bot_player = Player::new_empty(Side::Bot);
    let mut human_player = Player::new_empty(Side::Human);

    for (rank, line) in text.lines().enumerate() {
        if rank >= BOARD_SIZE {
            return Err(EngineError::MalformedBoardText(format!(
                "expected at most {BOARD_SIZE} lines"
            )));
        }

        for (file, glyph) in line.chars().enumerate() {
            if file >= BOARD_SIZE {
                return Err(EngineError::MalformedBoardText(format!(
                    "line {rank} holds more than {BOARD_SIZE} glyphs"
                )));
            }

            let Some((side, _)) = classify_glyph(glyph) else {
                continue;
            };
            let location = (file as i8, rank as i8);
            match side {
                Side::Bot => bot_player.add_piece(glyph, location)?,
                Side::Human => human_player.add_piece(glyph, location)?,
            }
        }
    }

    Ok(GameState::with_players(bot_player, human_player, is_bot_turn))
}
