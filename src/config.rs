//! Engine-level constants. Centralized here rather than scattered as
//! magic numbers through the rules code, even though none of them are
//! runtime-configurable (alternate board sizes and tournament variants
//! are explicit non-goals of this engine).

/// The number of squares per side of the board.
pub const BOARD_SIZE: usize = 15;

/// Maximum number of tiles a rack can hold.
pub const RACK_SIZE: usize = 7;

/// The smallest supported number of players.
pub const MIN_PLAYERS: usize = 2;

/// The largest supported number of players.
pub const MAX_PLAYERS: usize = 4;

/// Bonus added to a turn's score when all [`RACK_SIZE`] tiles are
/// placed in one turn.
pub const BINGO_BONUS: usize = 50;

/// Multiple of `num_players` worth of consecutive passes that ends
/// the game. E.g. for 2 players, 4 consecutive passes end the game.
pub const PASSES_PER_PLAYER_TO_END: usize = 2;

/// Minimum number of tiles that must remain in the bag before a
/// player is allowed to exchange tiles instead of placing a word.
pub const MIN_BAG_SIZE_TO_EXCHANGE: usize = 7;

/// Minimum number of letters a formed word must have.
pub const MIN_WORD_LEN: usize = 2;
