//! Scores a turn's newly formed words.

use crate::{
    game::{board::Board, placement::FormedWord, tile::Tile},
    util::pos::{Pos, Premium},
};
use std::collections::HashMap;

/// Computes the turn score for `formed`, given the pre-commit `board`
/// (so that squares about to be placed this turn still carry their
/// original, unconsumed premium) and `overlay`, the scratch map of
/// this turn's proposed placements.
///
/// Only squares present in `overlay` (newly placed this turn)
/// contribute a premium multiplier; squares already on the board
/// score at face value, since their premium — if any — was consumed
/// on an earlier turn.
pub fn score_turn(formed: &[FormedWord], board: &Board, overlay: &HashMap<Pos, Tile>) -> usize {
    formed.iter().map(|word| score_word(word, board, overlay)).sum()
}

fn score_word(word: &FormedWord, board: &Board, overlay: &HashMap<Pos, Tile>) -> usize {
    let mut letters = 0;
    let mut word_mult = 1;

    for &pos in &word.positions {
        let tile = overlay
            .get(&pos)
            .copied()
            .or_else(|| board.at(pos).tile())
            .expect("every word position is occupied by the overlay or the board");

        let premium = match overlay.contains_key(&pos) {
            true => board.at(pos).premium(),
            false => Premium::None,
        };

        letters += tile.points() * premium.letter_multiplier();
        word_mult *= premium.word_multiplier();
    }

    letters * word_mult
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tile::Letter;

    fn letter_tile(ch: char) -> Tile {
        Tile::Letter(Letter::new(ch).unwrap())
    }

    #[test]
    fn center_square_doubles_the_word() {
        let board = Board::default();
        let overlay = HashMap::from([
            (Pos::new(7, 7).unwrap(), letter_tile('A')),
            (Pos::new(8, 7).unwrap(), letter_tile('T')),
        ]);
        let word = FormedWord {
            word: "AT".to_string(),
            positions: vec![Pos::new(7, 7).unwrap(), Pos::new(8, 7).unwrap()],
        };

        // A=1, T=1, center square is DW -> (1+1)*2 = 4
        assert_eq!(score_turn(&[word], &board, &overlay), 4);
    }

    #[test]
    fn reused_premium_from_an_earlier_turn_does_not_apply() {
        let mut board = Board::default();
        board.place(Pos::new(7, 7).unwrap(), letter_tile('L'));

        let overlay = HashMap::from([
            (Pos::new(7, 8).unwrap(), letter_tile('I')),
            (Pos::new(7, 9).unwrap(), letter_tile('T')),
        ]);
        let word = FormedWord {
            word: "LIT".to_string(),
            positions: vec![
                Pos::new(7, 7).unwrap(),
                Pos::new(7, 8).unwrap(),
                Pos::new(7, 9).unwrap(),
            ],
        };

        // L is pre-existing (premium already spent): 1 + 1 + 1 = 3, no multiplier.
        assert_eq!(score_turn(&[word], &board, &overlay), 3);
    }
}
