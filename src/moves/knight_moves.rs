//! Knight movement rules: eight fixed jumps.

use crate::board_location::{location_is_within_bounds, BoardLocation};
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;

const JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// Knight destinations: the fixed jump offsets, filtered by board bounds
/// and the mover's own occupancy. Jumps ignore blockers in between.
pub fn knight_destinations(piece: &PieceRecord, own: &Player) -> Vec<BoardLocation> {
    let (file, rank) = piece.location;

    JUMPS
        .iter()
        .map(|(d_file, d_rank)| (file + d_file, rank + d_rank))
        .filter(location_is_within_bounds)
        .filter(|square| !own.is_occupied(square))
        .collect()
}
