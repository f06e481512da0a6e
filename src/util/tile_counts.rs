//! Contains a structure for keeping track of how many of each
//! of the 27 tile kinds are held in a container (a rack or the bag).

use crate::game::tile::Tile;
use std::iter::repeat;

/// Reusable multiset of tiles, indexed by `usize::from(tile)`.
#[derive(Debug, Clone, Copy)]
pub struct TileCounts {
    counts: [usize; 27],
    len: usize,
}

impl TileCounts {
    /// The number of tiles held.
    pub fn len(&self) -> usize {
        self.len
    }
    /// Checks whether the counts are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// An iterator over the tiles held, in tile-kind order. Blanks
    /// are yielded unassigned, since the counts do not track which
    /// letter a held blank has been assigned (it hasn't, yet).
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.counts
            .iter()
            .enumerate()
            .flat_map(|(tile, &count)| repeat(Tile::from(tile)).take(count))
    }
    /// Gets the count for a specific tile kind.
    pub fn count<T>(&self, tile: T) -> usize
    where
        T: Into<Tile>,
    {
        self.counts[usize::from(tile.into())]
    }
    /// Sum of point values of every tile held (blanks contribute 0).
    pub fn tile_sum(&self) -> usize {
        self.iter().map(|t| t.points()).sum()
    }
    /// Checks whether `tiles` (as a multiset) is a sub-multiset of
    /// `self`. A request for a blank (`Tile::Blank`) matches any held
    /// blank, regardless of what letter it would later be assigned.
    pub fn contains<I>(&self, tiles: I) -> bool
    where
        I: Iterator<Item = Tile>,
    {
        Self::counts_of(tiles)
            .into_iter()
            .zip(self.counts)
            .all(|(requested, held)| requested <= held)
    }
    /// Removes `tiles` from `self`. Panics if `self` does not hold
    /// a sufficient multiset; callers must check with [`contains`](Self::contains)
    /// first.
    pub fn remove<I>(&mut self, tiles: I)
    where
        I: Iterator<Item = Tile>,
    {
        let counts = Self::counts_of(tiles);

        self.counts
            .iter_mut()
            .zip(counts)
            .for_each(|(held, removed)| *held -= removed);
        self.len = self.counts.iter().sum();
    }
    /// Adds `tiles` into `self`.
    pub fn insert<I>(&mut self, tiles: I)
    where
        I: Iterator<Item = Tile>,
    {
        let counts = Self::counts_of(tiles);

        self.counts
            .iter_mut()
            .zip(counts)
            .for_each(|(held, added)| *held += added);
        self.len = self.counts.iter().sum();
    }
    /// Tallies an iterator of tiles into a per-kind count array. A
    /// requested blank (`Tile::Blank(Some(_))` or `Tile::Blank(None)`)
    /// always tallies under the single "any blank" bucket.
    fn counts_of<I>(tiles: I) -> [usize; 27]
    where
        I: Iterator<Item = Tile>,
    {
        let mut counts = [0; 27];
        for tile in tiles {
            let bucket = match tile {
                Tile::Blank(_) => 26,
                letter => usize::from(letter),
            };
            counts[bucket] += 1;
        }
        counts
    }
}
impl FromIterator<Tile> for TileCounts {
    fn from_iter<T: IntoIterator<Item = Tile>>(tiles: T) -> Self {
        Self::from(Self::counts_of(tiles.into_iter()))
    }
}
impl From<[usize; 27]> for TileCounts {
    fn from(counts: [usize; 27]) -> Self {
        let len = counts.iter().sum();

        Self { counts, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Letter;

    #[test]
    fn blank_request_matches_any_held_blank() {
        let counts =
            TileCounts::from_iter([Tile::blank(), Tile::Letter(Letter::new('A').unwrap())]);

        assert!(counts.contains([Tile::blank()].into_iter()));
    }

    #[test]
    fn remove_then_insert_round_trips_len() {
        let mut counts = TileCounts::from_iter([
            Tile::Letter(Letter::new('A').unwrap()),
            Tile::Letter(Letter::new('B').unwrap()),
        ]);

        counts.remove([Tile::Letter(Letter::new('A').unwrap())].into_iter());
        assert_eq!(counts.len(), 1);

        counts.insert([Tile::Letter(Letter::new('A').unwrap())].into_iter());
        assert_eq!(counts.len(), 2);
    }
}
