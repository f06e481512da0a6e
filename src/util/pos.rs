//! Module containing the [`Pos`] type used to address board squares,
//! and the [`Premium`] bonus layout of the standard 15x15 board.

use crate::game::board::SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A premium (bonus) carried by a board square until a tile is
/// first placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Premium {
    /// No bonus.
    None,
    /// Doubles the value of the tile placed on the square.
    DoubleLetter,
    /// Triples the value of the tile placed on the square.
    TripleLetter,
    /// Doubles the value of every word that covers the square.
    DoubleWord,
    /// Triples the value of every word that covers the square.
    TripleWord,
}
impl Premium {
    /// Gets the multiplier applied to a tile's own point value.
    pub fn letter_multiplier(&self) -> usize {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }
    /// Gets the multiplier applied to the whole word.
    pub fn word_multiplier(&self) -> usize {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
    /// Gets the short wire code used in a serialized snapshot.
    pub fn code(&self) -> &'static str {
        match self {
            Premium::None => "",
            Premium::DoubleLetter => "DL",
            Premium::TripleLetter => "TL",
            Premium::DoubleWord => "DW",
            Premium::TripleWord => "TW",
        }
    }
    /// Parses the wire code produced by [`Premium::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "" => Some(Premium::None),
            "DL" => Some(Premium::DoubleLetter),
            "TL" => Some(Premium::TripleLetter),
            "DW" => Some(Premium::DoubleWord),
            "TW" => Some(Premium::TripleWord),
            _ => None,
        }
    }
    /// Computes the standard-layout premium for a position, by its
    /// distance from the center square.
    fn for_offsets(delta_row: usize, delta_col: usize) -> Self {
        match (delta_row, delta_col) {
            (0, 0) => Premium::DoubleWord,
            (2, 2) | (2, 6) | (6, 2) => Premium::TripleLetter,
            (0, 4) | (4, 0) | (1, 1) | (1, 5) | (5, 1) | (7, 4) | (4, 7) => Premium::DoubleLetter,
            (7, 7) | (0, 7) | (7, 0) => Premium::TripleWord,
            (a, b) if a == b => Premium::DoubleWord,
            _ => Premium::None,
        }
    }
}

/// The four orthogonal neighbours of a [`Pos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decreasing row.
    North,
    /// Increasing column.
    East,
    /// Increasing row.
    South,
    /// Decreasing column.
    West,
}
impl Direction {
    /// All four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }
}

/// A single axis that a placement can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Varies in `x` (column), fixed `y` (row).
    Horizontal,
    /// Varies in `y` (row), fixed `x` (column).
    Vertical,
}
impl Axis {
    /// The axis perpendicular to `self`.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A checked position on the 15x15 board, `0 <= x, y < 15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    x: usize,
    y: usize,
}
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
impl Pos {
    /// Builds a [`Pos`], returning [`None`] if either coordinate is
    /// outside `0..15`.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        match x < SIZE && y < SIZE {
            true => Some(Self { x, y }),
            false => None,
        }
    }
    /// The column.
    pub fn x(&self) -> usize {
        self.x
    }
    /// The row.
    pub fn y(&self) -> usize {
        self.y
    }
    /// The center square, `(7, 7)`.
    pub fn start() -> Self {
        Self { x: 7, y: 7 }
    }
    /// The standard-layout premium for this square.
    pub fn premium(&self) -> Premium {
        let abs_diff = |a: usize, b: usize| a.max(b) - a.min(b);
        let delta_row = abs_diff(self.y, 7);
        let delta_col = abs_diff(self.x, 7);

        Premium::for_offsets(delta_row, delta_col)
    }
    /// The neighbouring position in `dir`, or [`None`] if it would
    /// fall off the board.
    pub fn neighbour(&self, dir: Direction) -> Option<Self> {
        let (dx, dy): (i32, i32) = match dir {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        };

        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;

        if (0..SIZE as i32).contains(&x) && (0..SIZE as i32).contains(&y) {
            Some(Self {
                x: x as usize,
                y: y as usize,
            })
        } else {
            None
        }
    }
    /// Gets the coordinate of `self` along `axis` (the one that varies
    /// as a word is walked).
    pub fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
    /// Builds a [`Pos`] by combining a varying coordinate along `axis`
    /// with the fixed cross-coordinate taken from `self`.
    pub fn with_along(&self, axis: Axis, value: usize) -> Option<Self> {
        match axis {
            Axis::Horizontal => Self::new(value, self.y),
            Axis::Vertical => Self::new(self.x, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_double_word() {
        assert_eq!(Pos::start().premium(), Premium::DoubleWord);
    }

    #[test]
    fn corners_are_triple_word() {
        assert_eq!(Pos::new(0, 0).unwrap().premium(), Premium::TripleWord);
        assert_eq!(Pos::new(14, 14).unwrap().premium(), Premium::TripleWord);
        assert_eq!(Pos::new(0, 14).unwrap().premium(), Premium::TripleWord);
        assert_eq!(Pos::new(14, 0).unwrap().premium(), Premium::TripleWord);
    }

    #[test]
    fn center_diagonals_are_double_word_not_triple_letter() {
        assert_eq!(Pos::new(1, 1).unwrap().premium(), Premium::DoubleWord);
        assert_eq!(Pos::new(13, 13).unwrap().premium(), Premium::DoubleWord);
    }

    #[test]
    fn off_board_is_none() {
        assert!(Pos::new(15, 0).is_none());
        assert!(Pos::new(0, 15).is_none());
    }

    #[test]
    fn neighbour_off_board() {
        assert!(Pos::new(0, 0).unwrap().neighbour(Direction::North).is_none());
        assert!(Pos::new(0, 0).unwrap().neighbour(Direction::West).is_none());
    }
}
