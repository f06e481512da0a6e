//! Enforces every placement law and extracts newly formed words.
//!
//! The validator never mutates the board or rack: it reads them
//! alongside a scratch overlay of the proposed placement (a sparse
//! map from position to tile), so a rejected move leaves no trace.

use crate::{
    config::MIN_WORD_LEN,
    error::{GameError, GameResult},
    game::{
        board::Board,
        lexicon::Lexicon,
        placement::{FormedWord, PlacedTile},
        rack::Rack,
        tile::Tile,
    },
    util::pos::{Axis, Direction, Pos},
};
use std::collections::HashMap;

/// Checks `tiles` against every placement rule and, on success,
/// returns every word newly formed (main word first, then
/// cross-words in placement order).
pub fn validate_placement(
    board: &Board,
    rack: &Rack,
    lexicon: &Lexicon,
    turn: u32,
    tiles: &[PlacedTile],
) -> GameResult<Vec<FormedWord>> {
    if tiles.is_empty() {
        return Err(GameError::EmptyPlacement);
    }

    let overlay = build_overlay(tiles)?;
    let axis = collinear_axis(tiles)?;

    for placed in tiles {
        if !board.at(placed.pos).is_empty() {
            return Err(GameError::SquareOccupied);
        }
    }

    if !rack.contains_multiset(tiles.iter().map(PlacedTile::rack_tile)) {
        return Err(GameError::TileNotInRack);
    }

    if turn == 0 && !tiles.iter().any(|t| t.pos == Pos::start()) {
        return Err(GameError::MissingCenterOnOpening);
    }

    let occupied = |pos: Pos| -> Option<Tile> {
        overlay.get(&pos).copied().or_else(|| board.at(pos).tile())
    };

    check_contiguous(tiles, axis, &occupied)?;

    if turn > 0 && !touches_existing_structure(tiles, board) {
        return Err(GameError::Disconnected);
    }

    extract_words(tiles, axis, &occupied, lexicon)
}

fn build_overlay(tiles: &[PlacedTile]) -> GameResult<HashMap<Pos, Tile>> {
    let mut overlay = HashMap::with_capacity(tiles.len());
    for placed in tiles {
        if overlay.insert(placed.pos, placed.board_tile()).is_some() {
            return Err(GameError::SquareOccupied);
        }
    }
    Ok(overlay)
}

/// Determines the shared axis of a multi-tile placement. A
/// single-tile placement defaults to horizontal; both axes are
/// still explored during word extraction.
fn collinear_axis(tiles: &[PlacedTile]) -> GameResult<Axis> {
    if tiles.len() == 1 {
        return Ok(Axis::Horizontal);
    }

    let same_x = tiles.windows(2).all(|w| w[0].pos.x() == w[1].pos.x());
    let same_y = tiles.windows(2).all(|w| w[0].pos.y() == w[1].pos.y());

    match (same_x, same_y) {
        (true, false) => Ok(Axis::Vertical),
        (false, true) => Ok(Axis::Horizontal),
        _ => Err(GameError::NotCollinear),
    }
}

fn check_contiguous(
    tiles: &[PlacedTile],
    axis: Axis,
    occupied: &impl Fn(Pos) -> Option<Tile>,
) -> GameResult<()> {
    let coords: Vec<usize> = tiles.iter().map(|t| t.pos.along(axis)).collect();
    let (min, max) = (
        *coords.iter().min().unwrap(),
        *coords.iter().max().unwrap(),
    );
    let reference = tiles[0].pos;

    for value in min..=max {
        let pos = reference
            .with_along(axis, value)
            .expect("value is between two in-bounds coordinates");
        if occupied(pos).is_none() {
            return Err(GameError::NotContiguous);
        }
    }
    Ok(())
}

fn touches_existing_structure(tiles: &[PlacedTile], board: &Board) -> bool {
    tiles.iter().any(|placed| {
        Direction::all().iter().any(|&dir| {
            placed
                .pos
                .neighbour(dir)
                .is_some_and(|n| !board.at(n).is_empty())
        })
    })
}

/// Walks the maximal contiguous run through `pos` along `axis`,
/// consulting `occupied` (which consults the scratch overlay before
/// the live board).
fn run_through(pos: Pos, axis: Axis, occupied: &impl Fn(Pos) -> Option<Tile>) -> Vec<Pos> {
    let mut start = pos;
    while let Some(prev) = step(start, axis, false) {
        if occupied(prev).is_none() {
            break;
        }
        start = prev;
    }

    let mut run = vec![start];
    while let Some(next) = step(*run.last().unwrap(), axis, true) {
        if occupied(next).is_none() {
            break;
        }
        run.push(next);
    }
    run
}

fn step(pos: Pos, axis: Axis, forward: bool) -> Option<Pos> {
    let along = pos.along(axis);
    let value = match forward {
        true => along.checked_add(1)?,
        false => along.checked_sub(1)?,
    };
    pos.with_along(axis, value)
}

fn word_at(positions: &[Pos], occupied: &impl Fn(Pos) -> Option<Tile>) -> GameResult<FormedWord> {
    let mut word = String::with_capacity(positions.len());
    for &pos in positions {
        let tile = occupied(pos).expect("run only contains occupied squares");
        word.push(char::from(tile.letter()?));
    }
    Ok(FormedWord {
        word,
        positions: positions.to_vec(),
    })
}

fn extract_words(
    tiles: &[PlacedTile],
    axis: Axis,
    occupied: &impl Fn(Pos) -> Option<Tile>,
    lexicon: &Lexicon,
) -> GameResult<Vec<FormedWord>> {
    let mut formed = Vec::new();

    let main_run = run_through(tiles[0].pos, axis, occupied);
    if main_run.len() >= MIN_WORD_LEN {
        formed.push(word_at(&main_run, occupied)?);
    }

    for placed in tiles {
        let cross_run = run_through(placed.pos, axis.perpendicular(), occupied);
        if cross_run.len() >= MIN_WORD_LEN {
            formed.push(word_at(&cross_run, occupied)?);
        }
    }

    if formed.is_empty() {
        return Err(GameError::WordTooShort);
    }

    for word in &formed {
        if !lexicon.contains(&word.word) {
            return Err(GameError::WordNotInLexicon(word.word.clone()));
        }
    }

    Ok(formed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{letter_bag::TileBag, rack::Rack, tile::Letter};

    fn placed(ch: char, x: usize, y: usize, is_blank: bool) -> PlacedTile {
        PlacedTile {
            letter: Letter::new(ch).unwrap(),
            pos: Pos::new(x, y).unwrap(),
            is_blank,
        }
    }

    fn full_rack() -> Rack {
        let mut bag = TileBag::seeded(1);
        Rack::new(&mut bag)
    }

    #[test]
    fn opening_move_must_cover_center() {
        let board = Board::default();
        let lexicon = Lexicon::from(["HI"]);
        let tiles = [placed('H', 3, 3, false), placed('I', 4, 3, false)];

        let rack = Rack::from_tiles(&tiles.iter().map(PlacedTile::rack_tile).collect::<Vec<_>>());
        let err = validate_placement(&board, &rack, &lexicon, 0, &tiles).unwrap_err();
        assert_eq!(err, GameError::MissingCenterOnOpening);
    }

    #[test]
    fn opening_move_across_center_scores_main_word() {
        let board = Board::default();
        let lexicon = Lexicon::from(["HELLO"]);
        let tiles = [
            placed('H', 5, 7, false),
            placed('E', 6, 7, false),
            placed('L', 7, 7, false),
            placed('L', 8, 7, false),
            placed('O', 9, 7, false),
        ];
        let rack = Rack::from_tiles(&tiles.iter().map(PlacedTile::rack_tile).collect::<Vec<_>>());

        let formed = validate_placement(&board, &rack, &lexicon, 0, &tiles).unwrap();
        assert_eq!(formed.len(), 1);
        assert_eq!(formed[0].word, "HELLO");
    }

    #[test]
    fn rejects_word_not_in_lexicon() {
        let board = Board::default();
        let lexicon = Lexicon::from(["HELLO"]);
        let tiles = [placed('X', 7, 7, false), placed('Y', 8, 7, false)];
        let rack = Rack::from_tiles(&tiles.iter().map(PlacedTile::rack_tile).collect::<Vec<_>>());

        let err = validate_placement(&board, &rack, &lexicon, 0, &tiles).unwrap_err();
        assert_eq!(err, GameError::WordNotInLexicon("XY".to_string()));
    }

    #[test]
    fn duplicate_position_is_rejected_as_occupied_not_noncollinear() {
        let board = Board::default();
        let lexicon = Lexicon::from(["HI"]);
        let tiles = [placed('H', 7, 7, false), placed('I', 7, 7, false)];
        let rack = full_rack();

        let err = validate_placement(&board, &rack, &lexicon, 0, &tiles).unwrap_err();
        assert_eq!(err, GameError::SquareOccupied);
    }

    #[test]
    fn occupied_square_is_rejected() {
        let mut board = Board::default();
        board.place(Pos::start(), Tile::Letter(Letter::new('A').unwrap()));
        let lexicon = Lexicon::from(["AT"]);
        let tiles = [placed('A', 7, 7, false), placed('T', 8, 7, false)];
        let rack = full_rack();

        let err = validate_placement(&board, &rack, &lexicon, 1, &tiles).unwrap_err();
        assert_eq!(err, GameError::SquareOccupied);
    }

    #[test]
    fn single_tile_extension_without_cross_word_is_valid() {
        let mut board = Board::default();
        for (i, ch) in "CAT".chars().enumerate() {
            board.place(Pos::new(5 + i, 7).unwrap(), Tile::Letter(Letter::new(ch).unwrap()));
        }
        let lexicon = Lexicon::from(["CATS"]);
        let tiles = [placed('S', 8, 7, false)];
        let rack = Rack::from_tiles(&[Tile::Letter(Letter::new('S').unwrap())]);

        let formed = validate_placement(&board, &rack, &lexicon, 1, &tiles).unwrap();
        assert_eq!(formed.len(), 1);
        assert_eq!(formed[0].word, "CATS");
    }
}
