//! Canonical snapshot/restore of a [`Game`]'s full state.
//!
//! [`Snapshot`] derives `serde::{Serialize, Deserialize}` so an
//! embedding service picks its own wire encoding (JSON for an HTTP
//! facade, `bincode` for compact persistence) without this crate
//! taking a dependency on either. This module only guarantees that
//! encoding a snapshot and decoding it again, with any serde-compatible
//! format, reproduces an equivalent [`Game`] when paired with the
//! original [`Lexicon`].

use crate::{
    error::SetupError,
    game::{
        board::{Board, SIZE},
        letter_bag::TileBag,
        lexicon::Lexicon,
        rack::Rack,
        tile::{Letter, Tile},
        Game, Player,
    },
    util::pos::Pos,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One tile as it appears in a snapshot: the letter shown (`'_'` for
/// an unassigned blank) and whether it is a blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub letter: char,
    pub is_blank: bool,
}

/// The sentinel letter written for a blank that has not yet been
/// assigned a letter (unplaced, in a bag or rack).
const UNASSIGNED_BLANK: char = '_';

fn tile_to_snapshot(tile: Tile) -> TileSnapshot {
    match tile {
        Tile::Letter(l) => TileSnapshot {
            letter: char::from(l),
            is_blank: false,
        },
        Tile::Blank(Some(l)) => TileSnapshot {
            letter: char::from(l),
            is_blank: true,
        },
        Tile::Blank(None) => TileSnapshot {
            letter: UNASSIGNED_BLANK,
            is_blank: true,
        },
    }
}

fn tile_from_snapshot(snap: TileSnapshot) -> Result<Tile, SetupError> {
    if snap.is_blank && snap.letter == UNASSIGNED_BLANK {
        return Ok(Tile::Blank(None));
    }

    let letter = Letter::new(snap.letter)
        .ok_or_else(|| SetupError::CorruptSnapshot(format!("'{}' is not a letter", snap.letter)))?;

    Ok(match snap.is_blank {
        true => Tile::Blank(Some(letter)),
        false => Tile::Letter(letter),
    })
}

/// One player's snapshot: hand and score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub hand: Vec<TileSnapshot>,
    pub score: i64,
}

/// One board square's snapshot: the tile on it, if any, and its
/// still-live premium code (`""`, `"DL"`, `"TL"`, `"DW"`, `"TW"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub tile: Option<TileSnapshot>,
    pub premium: String,
}

/// A canonical, serde-friendly capture of an entire [`Game`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerSnapshot>,
    pub tile_bag: Vec<TileSnapshot>,
    pub board: Vec<Vec<CellSnapshot>>,
    pub turn: u32,
    pub current_player: usize,
    pub is_game_over: bool,
    pub consecutive_passes: u32,
}

/// Captures the full state of `game` as a [`Snapshot`].
pub fn snapshot(game: &Game) -> Snapshot {
    let players = game
        .players()
        .iter()
        .map(|player| PlayerSnapshot {
            hand: player.rack().iter().map(tile_to_snapshot).collect(),
            score: player.score(),
        })
        .collect();

    let tile_bag = game.bag().counts().iter().map(tile_to_snapshot).collect();

    let board = (0..SIZE)
        .map(|y| {
            (0..SIZE)
                .map(|x| {
                    let pos = Pos::new(x, y).expect("x, y within bounds by construction");
                    let cell = game.board().at(pos);

                    CellSnapshot {
                        tile: cell.tile().map(tile_to_snapshot),
                        premium: cell.premium().code().to_string(),
                    }
                })
                .collect()
        })
        .collect();

    Snapshot {
        players,
        tile_bag,
        board,
        turn: game.turn(),
        current_player: game.current_player(),
        is_game_over: game.is_game_over(),
        consecutive_passes: game.consecutive_passes(),
    }
}

/// Reconstructs a [`Game`] from `snap`, paired with `lexicon` (never
/// itself serialized). Fails if `snap` is not internally consistent —
/// e.g. an invalid letter, or a tile count that does not sum to 100.
pub fn restore<'a>(snap: &Snapshot, lexicon: &'a Lexicon) -> Result<Game<'a>, SetupError> {
    let mut board = Board::default();
    let mut placed_count = 0;

    for (y, row) in snap.board.iter().enumerate() {
        if row.len() != SIZE {
            return Err(SetupError::CorruptSnapshot(format!(
                "board row {y} has {} columns, expected {SIZE}",
                row.len()
            )));
        }
        for (x, cell) in row.iter().enumerate() {
            if let Some(tile_snap) = cell.tile {
                let pos = Pos::new(x, y)
                    .ok_or_else(|| SetupError::CorruptSnapshot(format!("({x}, {y}) is off-board")))?;
                board.place(pos, tile_from_snapshot(tile_snap)?);
                placed_count += 1;
            }
        }
    }
    if snap.board.len() != SIZE {
        return Err(SetupError::CorruptSnapshot(format!(
            "board has {} rows, expected {SIZE}",
            snap.board.len()
        )));
    }

    let mut bag_counts = [0usize; 27];
    for tile_snap in &snap.tile_bag {
        let tile = tile_from_snapshot(*tile_snap)?;
        bag_counts[usize::from(tile)] += 1;
    }
    let bag_tile_count: usize = bag_counts.iter().sum();

    let mut players = Vec::with_capacity(snap.players.len());
    let mut rack_tile_count = 0;
    for player_snap in &snap.players {
        let mut tiles = Vec::with_capacity(player_snap.hand.len());
        for tile_snap in &player_snap.hand {
            tiles.push(tile_from_snapshot(*tile_snap)?);
        }
        rack_tile_count += tiles.len();

        players.push(Player {
            rack: Rack::from_tiles(&tiles),
            score: player_snap.score,
        });
    }

    if placed_count + bag_tile_count + rack_tile_count != 100 {
        return Err(SetupError::CorruptSnapshot(format!(
            "tile counts do not sum to 100 ({placed_count} placed + {bag_tile_count} in bag + {rack_tile_count} in hand)"
        )));
    }

    let bag = TileBag::from_counts(bag_counts.into(), rand::thread_rng().gen());

    Ok(Game::from_parts(
        board,
        bag,
        players,
        snap.turn,
        snap.consecutive_passes,
        snap.is_game_over,
        lexicon,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::placement::Placement;

    fn lexicon() -> Lexicon {
        Lexicon::from(["HELLO"])
    }

    #[test]
    fn round_trips_through_bincode() {
        let lex = lexicon();
        let mut game = Game::start_seeded(2, 7, &lex).unwrap();
        game.apply_move(game.current_player(), Placement::Pass).unwrap();

        let snap = snapshot(&game);
        let bytes = bincode::serialize(&snap).unwrap();
        let decoded: Snapshot = bincode::deserialize(&bytes).unwrap();
        let restored = restore(&decoded, &lex).unwrap();

        assert_eq!(restored.turn(), game.turn());
        assert_eq!(restored.current_player(), game.current_player());
        assert_eq!(restored.players()[0].score(), game.players()[0].score());
        assert_eq!(restored.players()[1].score(), game.players()[1].score());
    }

    #[test]
    fn rejects_a_snapshot_with_the_wrong_tile_count() {
        let lex = lexicon();
        let mut snap = snapshot(&Game::start_seeded(2, 7, &lex).unwrap());
        snap.tile_bag.pop();

        let err = restore(&snap, &lex).unwrap_err();
        assert!(matches!(err, SetupError::CorruptSnapshot(_)));
    }
}
