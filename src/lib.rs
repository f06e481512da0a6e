//! A deterministic, in-memory Scrabble rules engine: board, bag,
//! racks, move validation and scoring, and turn-by-turn orchestration
//! of a multiplayer match.

// Produce a compiler warning for missing documentation.
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod game;
pub mod serializer;
pub mod util;
