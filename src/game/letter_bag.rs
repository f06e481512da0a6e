//! Models the [`TileBag`].

use crate::{game::tile::Tile, util::tile_counts::TileCounts};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::iter::once;

/// The shared pile of tiles that players draw from. Draws consume a
/// generator seeded at construction, so that two bags built with the
/// same seed and driven through the same sequence of draws and
/// returns reproduce byte-identical outcomes.
#[derive(Debug)]
pub struct TileBag {
    counts: TileCounts,
    rng: StdRng,
}

impl Default for TileBag {
    /// Builds a bag with the standard English tile distribution,
    /// seeded from the OS entropy source.
    fn default() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }
}
impl TileBag {
    /// Builds a bag with the standard English tile distribution and
    /// a tile-draw generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        let mut counts = [0; 27];
        for (idx, tile) in Tile::iter().enumerate() {
            counts[idx] = Self::initial_count(tile);
        }

        Self {
            counts: TileCounts::from(counts),
            rng: StdRng::seed_from_u64(seed),
        }
    }
    /// Rebuilds a bag holding exactly `counts`, with its draw
    /// generator freshly seeded from `seed`. Used by
    /// [`restore`](crate::serializer::restore): a restored bag's
    /// future draws need not replay the original game's sequence,
    /// only its remaining contents need to match exactly.
    pub fn from_counts(counts: TileCounts, seed: u64) -> Self {
        Self {
            counts,
            rng: StdRng::seed_from_u64(seed),
        }
    }
    /// Checks whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// Returns the total number of tiles remaining in the bag.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    /// Gets the underlying tile counts.
    pub fn counts(&self) -> &TileCounts {
        &self.counts
    }
    /// Gets the initial count for `tile` in the standard English
    /// distribution (100 tiles total).
    pub fn initial_count(tile: Tile) -> usize {
        const INIT_COUNTS: [usize; 27] = [
            9,  // A
            2,  // B
            2,  // C
            4,  // D
            12, // E
            2,  // F
            3,  // G
            2,  // H
            9,  // I
            1,  // J
            1,  // K
            4,  // L
            2,  // M
            6,  // N
            8,  // O
            2,  // P
            1,  // Q
            6,  // R
            4,  // S
            6,  // T
            4,  // U
            2,  // V
            2,  // W
            1,  // X
            2,  // Y
            1,  // Z
            2,  // Blank
        ];

        INIT_COUNTS[usize::from(tile)]
    }
    /// Draws a single, uniformly-random tile from the bag. Returns
    /// [`None`] if the bag is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        match self.len() {
            0 => None,
            len => Some({
                // Generate a random index, as though all tiles in the
                // bag were laid out in a single array.
                let idx = self.rng.gen_range(0..len);

                // traverse the tile kinds until `idx` is reached
                let mut tile_idx = 0;
                let mut count = self.counts.count(tile_idx);

                while count <= idx {
                    tile_idx += 1;
                    count += self.counts.count(tile_idx);
                }

                assert!(tile_idx < 27);

                let tile = Tile::from(tile_idx);
                self.counts.remove(once(tile));

                tile
            }),
        }
    }
    /// Draws `min(count, remaining)` tiles from the bag as an iterator.
    pub fn draw_many(&mut self, count: usize) -> impl Iterator<Item = Tile> + '_ {
        std::iter::from_fn(move || self.draw()).take(count)
    }
    /// Adds tiles from `tiles` back into the bag. Used only by the
    /// exchange operation.
    pub fn add_tiles(&mut self, tiles: impl Iterator<Item = Tile>) {
        self.counts.insert(tiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RACK_SIZE;

    #[test]
    fn draw_limits() {
        let mut bag = TileBag::seeded(1);
        assert_eq!(bag.draw_many(0).count(), 0);
        assert_eq!(bag.draw_many(RACK_SIZE).count(), RACK_SIZE);
        assert_eq!(bag.len(), 93);
        assert_eq!(bag.draw_many(1000).count(), 93);
        assert!(bag.is_empty());
    }

    #[test]
    fn same_seed_draws_same_sequence() {
        let mut a = TileBag::seeded(42);
        let mut b = TileBag::seeded(42);

        let drawn_a: Vec<_> = a.draw_many(20).collect();
        let drawn_b: Vec<_> = b.draw_many(20).collect();

        assert_eq!(drawn_a, drawn_b);
    }

    #[test]
    fn draining_preserves_tile_conservation() {
        let mut bag = TileBag::seeded(7);
        let mut counts = [0usize; 27];

        while !bag.is_empty() {
            for tile in bag.draw_many(RACK_SIZE) {
                counts[usize::from(tile)] += 1;
            }
        }

        for (i, &count) in counts.iter().enumerate() {
            assert_eq!(count, TileBag::initial_count(Tile::from(i)));
        }
    }
}
