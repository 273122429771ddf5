//! One side's live pieces and the aggregate queries over them.
//!
//! Pieces are held in an insertion-ordered `Vec`, unique by location, which
//! keeps action enumeration (and therefore search tie-breaking)
//! deterministic. Derived counts are computed on demand, never cached.

use crate::board_location::BoardLocation;
use crate::errors::EngineError;
use crate::game_state::chess_types::{classify_glyph, PieceClass, PieceRecord, Side};
use crate::moves::move_descriptions::{piece_destinations, MoveDescription};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    side: Side,
    pieces: Vec<PieceRecord>,
}

impl Player {
    /// A player with the full starting lineup: pawns across the pawn home
    /// rank, and rook/knight/bishop/king/queen/bishop/knight/rook on the
    /// back rank (king on file 3, queen on file 4).
    pub fn new_initial(side: Side) -> Self {
        let mut player = Player::new_empty(side);

        let pawn_rank = side.pawn_home_rank();
        for file in 0..8 {
            player
                .insert(PieceClass::Pawn, (file, pawn_rank))
                .expect("starting squares are free");
        }

        const BACK_RANK: [PieceClass; 8] = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::King,
            PieceClass::Queen,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        let home_rank = side.home_rank();
        for (file, class) in BACK_RANK.iter().enumerate() {
            player
                .insert(*class, (file as i8, home_rank))
                .expect("starting squares are free");
        }

        player
    }

    pub fn new_empty(side: Side) -> Self {
        Player {
            side,
            pieces: Vec::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn pieces(&self) -> &[PieceRecord] {
        &self.pieces
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the given square is held by any piece of this player.
    pub fn is_occupied(&self, location: &BoardLocation) -> bool {
        self.pieces.iter().any(|piece| piece.location == *location)
    }

    /// Find the piece at the given square.
    pub fn find_piece_at(&self, location: &BoardLocation) -> Option<&PieceRecord> {
        self.pieces.iter().find(|piece| piece.location == *location)
    }

    fn find_index_at(&self, location: &BoardLocation) -> Option<usize> {
        self.pieces
            .iter()
            .position(|piece| piece.location == *location)
    }

    /// Remove the piece at the given square if present.
    pub fn kill_piece_at(&mut self, location: &BoardLocation) {
        if let Some(index) = self.find_index_at(location) {
            self.pieces.remove(index);
        }
    }

    /// Place a piece of the given class on a free square.
    pub fn insert(
        &mut self,
        class: PieceClass,
        location: BoardLocation,
    ) -> Result<(), EngineError> {
        if self.is_occupied(&location) {
            return Err(EngineError::SquareOccupied(location));
        }
        self.pieces
            .push(PieceRecord::new(class, self.side, location));
        Ok(())
    }

    /// Place the piece the glyph indicates on a free square.
    ///
    /// The glyph only selects the class; the piece always joins this
    /// player's side, whichever color the glyph carries.
    pub fn add_piece(
        &mut self,
        glyph: char,
        location: BoardLocation,
    ) -> Result<(), EngineError> {
        let (_, class) =
            classify_glyph(glyph).ok_or(EngineError::UnknownGlyph(glyph))?;
        self.insert(class, location)
    }

    /// Move the piece at `from` to `to`, leaving captures to the caller.
    pub fn relocate_piece(
        &mut self,
        from: &BoardLocation,
        to: &BoardLocation,
    ) -> Result<(), EngineError> {
        let index = self
            .find_index_at(from)
            .ok_or(EngineError::PieceNotFound(*from))?;
        self.pieces[index].location = *to;
        Ok(())
    }

    /// The number of live pieces of the given class.
    pub fn count_of(&self, class: PieceClass) -> usize {
        self.pieces
            .iter()
            .filter(|piece| piece.class == class)
            .count()
    }

    fn pawns(&self) -> impl Iterator<Item = &PieceRecord> {
        self.pieces
            .iter()
            .filter(|piece| piece.class == PieceClass::Pawn)
    }

    /// Extra pawns sharing a file: a file holding `n` pawns contributes
    /// `n - 1`.
    pub fn doubled_pawn_count(&self) -> usize {
        let mut files: Vec<i8> = self.pawns().map(|pawn| pawn.location.0).collect();
        files.sort_unstable();

        let mut count = 0;
        let mut previous_file = -1;
        for file in files {
            if file == previous_file {
                count += 1;
            }
            previous_file = file;
        }
        count
    }

    /// Pawns whose single forward square is held by either side.
    ///
    /// A pawn on its promotion rank has no forward square and is never
    /// counted as blocked.
    pub fn blocked_pawn_count(&self, opponent: &Player) -> usize {
        let forward = self.side.pawn_advance();
        self.pawns()
            .map(|pawn| (pawn.location.0, pawn.location.1 + forward))
            .filter(|square| self.is_occupied(square) || opponent.is_occupied(square))
            .count()
    }

    /// Pawns with no same-side pawn within one file of their own.
    pub fn isolated_pawn_count(&self) -> usize {
        let files: Vec<i8> = self.pawns().map(|pawn| pawn.location.0).collect();

        let mut count = 0;
        for (i, file) in files.iter().enumerate() {
            let has_neighbor = files
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && (file - other).abs() <= 1);
            if !has_neighbor {
                count += 1;
            }
        }
        count
    }

    /// Squares of this player's pawns standing on its promotion rank.
    pub fn promotable_pawn_locations(&self) -> Vec<BoardLocation> {
        let promotion_rank = self.side.promotion_rank();
        self.pawns()
            .filter(|pawn| pawn.location.1 == promotion_rank)
            .map(|pawn| pawn.location)
            .collect()
    }

    /// Every (piece, destination) pair this player can play, in piece
    /// insertion order.
    pub fn actions(&self, opponent: &Player) -> Vec<MoveDescription> {
        let mut actions = Vec::new();
        for piece in &self.pieces {
            for destination in piece_destinations(piece, self, opponent) {
                actions.push(MoveDescription {
                    piece: *piece,
                    destination,
                });
            }
        }
        actions
    }
}
