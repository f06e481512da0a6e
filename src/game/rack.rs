//! Models a player's [`Rack`].

use crate::{
    config::RACK_SIZE,
    error::{GameError, GameResult},
    game::{letter_bag::TileBag, tile::Tile},
    util::tile_counts::TileCounts,
};
use std::fmt;

/// A player's hand: up to [`RACK_SIZE`] tiles, held as a multiset
/// rather than an ordered sequence (the engine never exposes rack
/// order to clients).
#[derive(Debug)]
pub struct Rack {
    counts: TileCounts,
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for tile in self.iter() {
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}
impl Rack {
    /// Creates a new [`Rack`], drawing [`RACK_SIZE`] tiles from `bag`.
    pub fn new(bag: &mut TileBag) -> Self {
        Self {
            counts: TileCounts::from_iter(bag.draw_many(RACK_SIZE)),
        }
    }
    /// Creates a [`Rack`] directly from `tiles`, truncated to
    /// [`RACK_SIZE`]. Used by [`restore`](crate::serializer::restore).
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        Self {
            counts: TileCounts::from_iter(tiles.iter().take(RACK_SIZE).copied()),
        }
    }
    /// Gets the sum of the point values of the tiles remaining on
    /// the rack, used for end-of-game scoring.
    pub fn tile_sum(&self) -> usize {
        self.counts.tile_sum()
    }
    /// Draws enough tiles from `bag` to bring the rack back up to
    /// [`RACK_SIZE`] (or as close to it as the bag allows).
    pub fn refill(&mut self, bag: &mut TileBag) {
        self.counts.insert(bag.draw_many(self.missing_count()));
    }
    /// The number of tiles below [`RACK_SIZE`] currently on the rack.
    pub fn missing_count(&self) -> usize {
        RACK_SIZE - self.len()
    }
    /// The number of tiles on the rack.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    /// Checks whether the rack is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// Checks whether `tiles` (as a multiset) is a sub-multiset of
    /// the rack, per the blank-matching rule in [`TileCounts::contains`].
    pub fn contains_multiset(&self, tiles: impl Iterator<Item = Tile>) -> bool {
        self.counts.contains(tiles)
    }
    /// Removes one matching tile per entry of `tiles` from the rack.
    /// Callers must have checked [`contains_multiset`](Self::contains_multiset)
    /// first.
    pub fn consume(&mut self, tiles: impl Iterator<Item = Tile>) {
        self.counts.remove(tiles)
    }
    /// Exchanges `tiles` (which must all be held) for an equal number
    /// of fresh tiles drawn from `bag`, returning the exchanged tiles
    /// to the bag. Fails if the rack does not hold `tiles`, or the
    /// bag cannot supply as many tiles back.
    pub fn exchange(&mut self, tiles: &[Tile], bag: &mut TileBag) -> GameResult<()> {
        if !self.contains_multiset(tiles.iter().copied()) {
            return Err(GameError::TileNotInRack);
        }

        self.consume(tiles.iter().copied());
        self.counts.insert(bag.draw_many(tiles.len()));
        bag.add_tiles(tiles.iter().copied());

        Ok(())
    }
    /// An iterator over the tiles held on the rack.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Letter;

    #[test]
    fn new_rack_draws_full_hand() {
        let mut bag = TileBag::seeded(3);
        let rack = Rack::new(&mut bag);

        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.len(), 100 - RACK_SIZE);
    }

    #[test]
    fn blank_request_matches_rack_blank() {
        let mut bag = TileBag::seeded(9);
        let rack = Rack::new(&mut bag);

        // a rack always holds at least one blank or letter combination;
        // exercise the multiset check directly instead.
        let letter = rack.iter().next().unwrap();
        assert!(rack.contains_multiset([letter].into_iter()));
        assert!(!rack.contains_multiset(
            std::iter::repeat(letter).take(RACK_SIZE + 1)
        ));
    }

    #[test]
    fn refill_tops_up_to_rack_size() {
        let mut bag = TileBag::seeded(11);
        let mut rack = Rack::new(&mut bag);

        rack.consume([Tile::Letter(Letter::new('A').unwrap())].into_iter().filter(|t| rack.contains_multiset([*t].into_iter())));
        rack.refill(&mut bag);

        assert!(rack.len() <= RACK_SIZE);
    }
}
