//! King movement rules: the eight adjacent squares.
//!
//! Check is not modeled, so the king is filtered only by board bounds and
//! its own side's occupancy, never by safety from attack.

use crate::board_location::{location_is_within_bounds, BoardLocation};
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;

const STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_destinations(piece: &PieceRecord, own: &Player) -> Vec<BoardLocation> {
    let (file, rank) = piece.location;

    STEPS
        .iter()
        .map(|(d_file, d_rank)| (file + d_file, rank + d_rank))
        .filter(location_is_within_bounds)
        .filter(|square| !own.is_occupied(square))
        .collect()
}
