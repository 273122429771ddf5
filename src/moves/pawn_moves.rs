//! Pawn movement rules.
//!
//! Forward direction depends on the owning side: the bot advances toward
//! rank 7 and the human toward rank 0. One step forward onto an empty
//! square; two steps only from the side's pawn home rank with both squares
//! empty; diagonal captures only onto opponent-held squares. No en passant.

use crate::board_location::{location_is_within_bounds, BoardLocation};
use crate::game_state::chess_types::PieceRecord;
use crate::game_state::player::Player;

pub fn pawn_destinations(
    piece: &PieceRecord,
    own: &Player,
    opponent: &Player,
) -> Vec<BoardLocation> {
    let (file, rank) = piece.location;
    let forward = piece.side.pawn_advance();

    let mut destinations = Vec::new();

    let one_forward = (file, rank + forward);
    if location_is_within_bounds(&one_forward)
        && !own.is_occupied(&one_forward)
        && !opponent.is_occupied(&one_forward)
    {
        destinations.push(one_forward);

        let two_forward = (file, rank + 2 * forward);
        if rank == piece.side.pawn_home_rank()
            && !own.is_occupied(&two_forward)
            && !opponent.is_occupied(&two_forward)
        {
            destinations.push(two_forward);
        }
    }

    for capture in [(file - 1, rank + forward), (file + 1, rank + forward)] {
        if location_is_within_bounds(&capture) && opponent.is_occupied(&capture) {
            destinations.push(capture);
        }
    }

    destinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceClass, Side};

    fn pawn_at(own: &mut Player, location: BoardLocation) -> PieceRecord {
        own.insert(PieceClass::Pawn, location).unwrap();
        *own.find_piece_at(&location).unwrap()
    }

    #[test]
    fn pawn_on_its_home_rank_may_advance_two() {
        let mut own = Player::new_empty(Side::Bot);
        let pawn = pawn_at(&mut own, (4, 1));

        let destinations =
            pawn_destinations(&pawn, &own, &Player::new_empty(Side::Human));
        assert_eq!(destinations, vec![(4, 2), (4, 3)]);
    }

    #[test]
    fn human_pawn_advances_toward_rank_zero() {
        let mut own = Player::new_empty(Side::Human);
        let pawn = pawn_at(&mut own, (4, 6));

        let destinations =
            pawn_destinations(&pawn, &own, &Player::new_empty(Side::Bot));
        assert_eq!(destinations, vec![(4, 5), (4, 4)]);
    }

    #[test]
    fn blocked_forward_square_stops_both_pushes() {
        let mut own = Player::new_empty(Side::Bot);
        let pawn = pawn_at(&mut own, (4, 1));
        let mut opponent = Player::new_empty(Side::Human);
        opponent.insert(PieceClass::Knight, (4, 2)).unwrap();

        assert!(pawn_destinations(&pawn, &own, &opponent).is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut own = Player::new_empty(Side::Bot);
        let pawn = pawn_at(&mut own, (4, 1));
        let mut opponent = Player::new_empty(Side::Human);
        opponent.insert(PieceClass::Knight, (4, 3)).unwrap();

        assert_eq!(pawn_destinations(&pawn, &own, &opponent), vec![(4, 2)]);
    }

    #[test]
    fn diagonal_moves_exist_only_as_captures() {
        let mut own = Player::new_empty(Side::Bot);
        let pawn = pawn_at(&mut own, (4, 4));
        let mut opponent = Player::new_empty(Side::Human);
        opponent.insert(PieceClass::Rook, (3, 5)).unwrap();

        let destinations = pawn_destinations(&pawn, &own, &opponent);
        assert_eq!(destinations, vec![(4, 5), (3, 5)]);
    }

    #[test]
    fn pawn_on_the_promotion_rank_has_no_moves_left() {
        let mut own = Player::new_empty(Side::Bot);
        let pawn = pawn_at(&mut own, (4, 7));

        assert!(
            pawn_destinations(&pawn, &own, &Player::new_empty(Side::Human)).is_empty()
        );
    }
}
