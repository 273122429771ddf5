//! Rook movement rules: the four orthogonal rays.

use crate::board_location::BoardLocation;
use crate::cursor::RayDirection;
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;
use crate::moves::slider_moves::ray_destinations;

const DIRECTIONS: [RayDirection; 4] = RayDirection::ORTHOGONAL;

pub fn rook_destinations(
    piece: &PieceRecord,
    own: &Player,
    opponent: &Player,
) -> Vec<BoardLocation> {
    ray_destinations(piece.location, own, opponent, &DIRECTIONS)
}
