//! The error and result types for the game engine.

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// The [`Result`] type for move rejection.
pub type GameResult<T> = std::result::Result<T, GameError>;

/// The error type for a rejected move. Every variant is a terminal
/// verdict for the attempted move only: the game itself is unaffected
/// and the caller is free to submit a different placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// The game has already ended; no further moves can be made.
    GameOver,
    /// The acting player is not the player whose turn it is.
    WrongPlayer,
    /// Placed tiles do not all share a single row or column.
    NotCollinear,
    /// A placement coordinate falls outside the 15x15 board.
    OffBoard,
    /// A placement targets a square that is already occupied.
    SquareOccupied,
    /// A placed tile is not available in the acting player's rack.
    TileNotInRack,
    /// The opening move does not cover the center square.
    MissingCenterOnOpening,
    /// Placed tiles leave a gap along their axis that is not filled
    /// by an existing letter.
    NotContiguous,
    /// The placement does not touch any tile already on the board.
    Disconnected,
    /// An extracted word has fewer than two letters.
    WordTooShort,
    /// An extracted word is not present in the lexicon.
    WordNotInLexicon(String),
    /// A blank placed on the board did not specify a letter.
    MissingLetter,
    /// A redraw (exchange) named zero tiles or a placement named zero
    /// tiles without being a deliberate pass.
    EmptyPlacement,
    /// Too few tiles remain in the bag to honor an exchange request.
    NotEnoughTilesToExchange,
}

impl Error for GameError {}
impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "the game is over; no further moves can be made"),
            GameError::WrongPlayer => write!(f, "it is not this player's turn"),
            GameError::NotCollinear => {
                write!(f, "placed tiles must share a common row or column")
            }
            GameError::OffBoard => write!(f, "a placed tile falls outside the board"),
            GameError::SquareOccupied => write!(f, "a placed tile targets an occupied square"),
            GameError::TileNotInRack => write!(f, "a placed tile is not in the player's rack"),
            GameError::MissingCenterOnOpening => {
                write!(f, "the opening move must cover the center square")
            }
            GameError::NotContiguous => {
                write!(f, "placed tiles leave an unfilled gap along their axis")
            }
            GameError::Disconnected => {
                write!(f, "placed tiles do not touch any existing structure")
            }
            GameError::WordTooShort => write!(f, "every word needs at least two letters"),
            GameError::WordNotInLexicon(word) => write!(f, "\"{word}\" is not in the lexicon"),
            GameError::MissingLetter => {
                write!(f, "a placed blank did not specify a letter")
            }
            GameError::EmptyPlacement => write!(f, "at least one tile must be named"),
            GameError::NotEnoughTilesToExchange => {
                write!(f, "the bag does not hold enough tiles to allow an exchange")
            }
        }
    }
}

/// Errors that can only arise while constructing a [`Game`](crate::game::Game),
/// never while playing one. Kept in a separate enum from [`GameError`] so a
/// caller can never confuse "my move was rejected" with "my game failed to
/// start".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// `num_players` was outside the supported `2..=4` range.
    InvalidPlayerCount(usize),
    /// A restored snapshot's board, bag or rack contents were not
    /// internally consistent (e.g. did not sum to 100 tiles, or
    /// referenced a premium code that does not exist).
    CorruptSnapshot(String),
}

impl Error for SetupError {}
impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidPlayerCount(n) => {
                write!(f, "{n} players requested, but only 2..=4 are supported")
            }
            SetupError::CorruptSnapshot(reason) => {
                write!(f, "snapshot failed to restore: {reason}")
            }
        }
    }
}
