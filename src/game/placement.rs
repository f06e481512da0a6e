//! Module representing a [`Placement`] (move) submitted by a player.

use crate::{
    error::{GameError, GameResult},
    game::tile::{Letter, Tile},
    util::pos::Pos,
};
use serde::{Deserialize, Serialize};

/// One tile a player wishes to lay down this turn, at a specific
/// board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// The letter shown on the tile (the assigned letter, if this
    /// placement names a blank).
    pub letter: Letter,
    /// Where the tile is to be placed.
    pub pos: Pos,
    /// Whether the rack tile being placed is a blank.
    pub is_blank: bool,
}
impl PlacedTile {
    /// Builds a [`PlacedTile`] from raw wire coordinates, as received
    /// from an external client (`{letter, x, y, is_blank}`). Fails
    /// with [`GameError::OffBoard`] if `(x, y)` falls outside the board.
    pub fn from_coords(letter: Letter, x: usize, y: usize, is_blank: bool) -> GameResult<Self> {
        Ok(Self {
            letter,
            pos: Pos::new(x, y).ok_or(GameError::OffBoard)?,
            is_blank,
        })
    }
    /// The [`Tile`] this placement draws from the rack: a blank
    /// request regardless of `letter`, since the rack does not track
    /// which letter a blank will be assigned until it is placed.
    pub fn rack_tile(&self) -> Tile {
        match self.is_blank {
            true => Tile::Blank(None),
            false => Tile::Letter(self.letter),
        }
    }
    /// The [`Tile`] this placement writes onto the board: a blank
    /// tile carries the assigned `letter` from the moment it is played.
    pub fn board_tile(&self) -> Tile {
        match self.is_blank {
            true => Tile::Blank(Some(self.letter)),
            false => Tile::Letter(self.letter),
        }
    }
}

/// The action a player chooses for their turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Placement {
    /// The turn is forfeit.
    Pass,
    /// The named tiles (currently in the rack) are traded back into
    /// the bag for an equal number of fresh tiles.
    Exchange(Vec<Tile>),
    /// The named tiles are placed on the board.
    Place(Vec<PlacedTile>),
}

/// A word newly formed by a placement: the main word, or one of its
/// cross-words. Returned by the validator so the scorer and the
/// caller (for the `formed_words` part of a move's result) don't
/// need to re-derive it from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormedWord {
    /// The word's letters, read in position order.
    pub word: String,
    /// The squares the word covers, in the same order as `word`.
    pub positions: Vec<Pos>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_coords_are_rejected() {
        let err = PlacedTile::from_coords(Letter::new('A').unwrap(), 15, 0, false).unwrap_err();
        assert_eq!(err, GameError::OffBoard);
    }

    #[test]
    fn blank_placement_round_trips_letter() {
        let placed = PlacedTile::from_coords(Letter::new('E').unwrap(), 7, 7, true).unwrap();
        assert_eq!(placed.rack_tile(), Tile::Blank(None));
        assert_eq!(placed.board_tile(), Tile::Blank(Some(Letter::new('E').unwrap())));
    }
}
