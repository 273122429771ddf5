//! Move records and the per-kind movement dispatch.

use crate::board_location::BoardLocation;
use crate::game_state::chess_types::{PieceClass, PieceRecord};
use crate::game_state::player::Player;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::king_destinations;
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// One candidate action: a piece and the square it moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub piece: PieceRecord,
    pub destination: BoardLocation,
}

/// All legal destinations of one piece, dispatched over its class.
///
/// Movement generation is a pure function of the piece and the two
/// occupancy views; pieces hold no back-reference to their owner.
pub fn piece_destinations(
    piece: &PieceRecord,
    own: &Player,
    opponent: &Player,
) -> Vec<BoardLocation> {
    match piece.class {
        PieceClass::Pawn => pawn_destinations(piece, own, opponent),
        PieceClass::Knight => knight_destinations(piece, own),
        PieceClass::Bishop => bishop_destinations(piece, own, opponent),
        PieceClass::Rook => rook_destinations(piece, own, opponent),
        PieceClass::Queen => queen_destinations(piece, own, opponent),
        PieceClass::King => king_destinations(piece, own),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::location_is_within_bounds;
    use crate::game_state::chess_types::Side;

    #[test]
    fn every_class_generates_within_bounds_and_off_own_squares() {
        let mut own = Player::new_empty(Side::Bot);
        own.insert(PieceClass::Pawn, (0, 1)).unwrap();
        own.insert(PieceClass::Knight, (1, 0)).unwrap();
        own.insert(PieceClass::Bishop, (2, 0)).unwrap();
        own.insert(PieceClass::Rook, (0, 0)).unwrap();
        own.insert(PieceClass::Queen, (4, 0)).unwrap();
        own.insert(PieceClass::King, (3, 0)).unwrap();
        let opponent = Player::new_empty(Side::Human);

        for piece in own.pieces().to_vec() {
            for destination in piece_destinations(&piece, &own, &opponent) {
                assert!(location_is_within_bounds(&destination));
                assert!(!own.is_occupied(&destination));
            }
        }
    }
}
