//! The public, player-agnostic view of a [`Game`](super::Game).

use crate::{
    game::{board::Board, tile::Tile},
    util::pos::Pos,
};

/// A single square as shown to any observer: the letter on it (with
/// whether it was a blank), or nothing if the square is empty. Never
/// reveals premiums, since those are derivable from position alone.
pub type ViewCell = Option<(char, bool)>;

/// A snapshot of everything about a [`Game`](super::Game) that is
/// safe to show to every player (and to spectators). Individual
/// rack contents are deliberately absent: the host decides whether
/// and to whom to reveal a player's hand.
#[derive(Debug, Clone)]
pub struct GameView {
    /// The board, row-major, 15 rows of 15 squares.
    pub board: Vec<Vec<ViewCell>>,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// Each player's current score, in player-index order.
    pub scores: Vec<i64>,
    /// Tiles remaining in the bag.
    pub bag_size: usize,
    /// Whether the game has concluded.
    pub is_game_over: bool,
    /// Each player's rack size, in player-index order.
    pub hand_sizes: Vec<usize>,
}

pub(super) fn render_board(board: &Board) -> Vec<Vec<ViewCell>> {
    (0..crate::game::board::SIZE)
        .map(|y| {
            (0..crate::game::board::SIZE)
                .map(|x| {
                    let pos = Pos::new(x, y).expect("x, y are within board bounds");
                    board.at(pos).tile().map(cell_letter)
                })
                .collect()
        })
        .collect()
}

fn cell_letter(tile: Tile) -> (char, bool) {
    let letter = tile.letter().expect("a placed tile always has an assigned letter");
    (char::from(letter), tile.is_blank())
}
