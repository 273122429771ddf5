//! Shared ray walk for the sliding piece kinds.
//!
//! Bishop, rook, and queen each declare a direction set and delegate here.
//! A ray stops before a square held by the mover's own side, includes a
//! square held by the opponent (a capture) and stops there, and stops at
//! the edge of the board.

use crate::board_location::BoardLocation;
use crate::cursor::{RayCursor, RayDirection};
use crate::game_state::player::Player;

/// All destinations reachable from `origin` along the given rays.
pub fn ray_destinations(
    origin: BoardLocation,
    own: &Player,
    opponent: &Player,
    directions: &[RayDirection],
) -> Vec<BoardLocation> {
    let mut destinations = Vec::new();

    for &direction in directions {
        let mut cursor = RayCursor::new(origin, direction);

        // The opponent check looks at the square the cursor stands on, so a
        // capture square is pushed and then ends the ray one iteration later.
        while cursor.can_step() && !opponent.is_occupied(&cursor.location()) {
            cursor.step();
            let square = cursor.location();
            if own.is_occupied(&square) {
                break;
            }
            destinations.push(square);
        }
    }

    destinations
}
