//! Queen movement rules: all eight rays.

use crate::board_location::BoardLocation;
use crate::cursor::RayDirection;
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;
use crate::moves::slider_moves::ray_destinations;

const DIRECTIONS: [RayDirection; 8] = RayDirection::ALL;

pub fn queen_destinations(
    piece: &PieceRecord,
    own: &Player,
    opponent: &Player,
) -> Vec<BoardLocation> {
    ray_destinations(piece.location, own, opponent, &DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceClass, Side};
    use crate::moves::bishop_moves::bishop_destinations;
    use crate::moves::rook_moves::rook_destinations;

    #[test]
    fn queen_moves_are_the_union_of_rook_and_bishop_moves() {
        let mut own = Player::new_empty(Side::Bot);
        own.insert(PieceClass::Queen, (2, 5)).unwrap();
        let piece = *own.find_piece_at(&(2, 5)).unwrap();
        let opponent = Player::new_empty(Side::Human);

        let mut queen = queen_destinations(&piece, &own, &opponent);
        let mut split = rook_destinations(&piece, &own, &opponent);
        split.extend(bishop_destinations(&piece, &own, &opponent));

        queen.sort_unstable();
        split.sort_unstable();
        assert_eq!(queen, split);
    }
}
