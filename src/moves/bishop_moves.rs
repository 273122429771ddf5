//! Bishop movement rules: the four diagonal rays.

use crate::board_location::BoardLocation;
use crate::cursor::RayDirection;
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;
use crate::moves::slider_moves::ray_destinations;

const DIRECTIONS: [RayDirection; 4] = RayDirection::DIAGONAL;

pub fn bishop_destinations(
    piece: &PieceRecord,
    own: &Player,
    opponent: &Player,
) -> Vec<BoardLocation> {
    ray_destinations(piece.location, own, opponent, &DIRECTIONS)
}
