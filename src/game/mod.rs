//! The [`Game`] controller: holds authoritative state for one match
//! and orchestrates every move (turn order, scoring, end-of-game
//! detection, pass counting, finalization).

use crate::{
    config::{BINGO_BONUS, MAX_PLAYERS, MIN_BAG_SIZE_TO_EXCHANGE, MIN_PLAYERS, PASSES_PER_PLAYER_TO_END, RACK_SIZE},
    error::{GameError, GameResult, SetupError},
    game::{
        board::Board,
        letter_bag::TileBag,
        lexicon::Lexicon,
        placement::{FormedWord, PlacedTile, Placement},
        rack::Rack,
        tile::Tile,
        view::{render_board, GameView},
    },
    util::pos::Pos,
};
use rand::Rng;
use std::collections::HashMap;

pub mod board;
pub mod letter_bag;
pub mod lexicon;
pub mod placement;
pub mod rack;
pub mod scoring;
pub mod tile;
pub mod validator;
pub mod view;

/// One seat at the table: a rack and a running score. Score is
/// signed because it may go negative once end-of-game finalization
/// subtracts unplayed rack value (it is never negative during play).
#[derive(Debug)]
pub struct Player {
    pub(crate) rack: Rack,
    pub(crate) score: i64,
}
impl Player {
    /// The player's current hand.
    pub fn rack(&self) -> &Rack {
        &self.rack
    }
    /// The player's current score.
    pub fn score(&self) -> i64 {
        self.score
    }
}

/// The result of a successfully applied move.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// Points earned this turn (0 for a pass or an exchange).
    pub turn_score: usize,
    /// Every word newly formed this turn, main word first.
    pub formed_words: Vec<FormedWord>,
}

/// The authoritative state of one Scrabble match. Holds the board,
/// bag, and every player's rack; the [`Lexicon`] is borrowed rather
/// than owned, so the same word list can back many concurrent games.
#[derive(Debug)]
pub struct Game<'a> {
    board: Board,
    bag: TileBag,
    players: Vec<Player>,
    turn: u32,
    consecutive_passes: u32,
    is_game_over: bool,
    lexicon: &'a Lexicon,
}
impl<'a> Game<'a> {
    /// Starts a new game for `num_players` (`2..=4`), drawing racks
    /// from a freshly, randomly seeded bag.
    pub fn start(num_players: usize, lexicon: &'a Lexicon) -> Result<Self, SetupError> {
        Self::start_seeded(num_players, rand::thread_rng().gen(), lexicon)
    }
    /// Starts a new game with a bag seeded deterministically from
    /// `seed`, so the draw sequence is reproducible.
    pub fn start_seeded(num_players: usize, seed: u64, lexicon: &'a Lexicon) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(SetupError::InvalidPlayerCount(num_players));
        }

        let mut bag = TileBag::seeded(seed);
        let players = (0..num_players)
            .map(|_| Player {
                rack: Rack::new(&mut bag),
                score: 0,
            })
            .collect();

        log::info!("started a {num_players}-player game");

        Ok(Self {
            board: Board::default(),
            bag,
            players,
            turn: 0,
            consecutive_passes: 0,
            is_game_over: false,
            lexicon,
        })
    }
    /// Rebuilds a [`Game`] from already-validated component parts.
    /// Used only by [`restore`](crate::serializer::restore), which is
    /// responsible for having checked every invariant already.
    pub(crate) fn from_parts(
        board: Board,
        bag: TileBag,
        players: Vec<Player>,
        turn: u32,
        consecutive_passes: u32,
        is_game_over: bool,
        lexicon: &'a Lexicon,
    ) -> Self {
        Self {
            board,
            bag,
            players,
            turn,
            consecutive_passes,
            is_game_over,
            lexicon,
        }
    }

    /// The index of the player whose turn it currently is.
    pub fn current_player(&self) -> usize {
        self.turn as usize % self.players.len()
    }
    /// The monotonic turn counter.
    pub fn turn(&self) -> u32 {
        self.turn
    }
    /// The number of consecutive passes/exchanges-counted-as-passes seen
    /// so far. Reset by any non-pass action.
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }
    /// Whether the game has concluded. Once true, every subsequent
    /// call to [`apply_move`](Self::apply_move) is rejected.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }
    /// Borrows the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Borrows the bag.
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }
    /// Borrows a player by index.
    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }
    /// Borrows every player, in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    /// The number of seats at the table.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
    /// The lexicon this game was started or restored with.
    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }
    /// Builds the player-agnostic public view of this game.
    pub fn view(&self) -> GameView {
        GameView {
            board: render_board(&self.board),
            current_player: self.current_player(),
            scores: self.players.iter().map(Player::score).collect(),
            bag_size: self.bag.len(),
            is_game_over: self.is_game_over,
            hand_sizes: self.players.iter().map(|p| p.rack.len()).collect(),
        }
    }

    /// Applies `placement` on behalf of `player_index`, the caller's
    /// claimed acting player. Either mutates state and returns the
    /// outcome, or returns a typed error leaving state untouched.
    pub fn apply_move(&mut self, player_index: usize, placement: Placement) -> GameResult<MoveOutcome> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if player_index != self.current_player() {
            return Err(GameError::WrongPlayer);
        }

        let outcome = match placement {
            Placement::Pass => self.apply_pass(),
            Placement::Exchange(tiles) => self.apply_exchange(player_index, tiles)?,
            Placement::Place(tiles) => self.apply_place(player_index, tiles)?,
        };

        self.turn += 1;
        self.check_end_of_game();

        Ok(outcome)
    }

    fn apply_pass(&mut self) -> MoveOutcome {
        self.consecutive_passes += 1;
        log::debug!("player {} passed", self.current_player());

        MoveOutcome {
            turn_score: 0,
            formed_words: Vec::new(),
        }
    }

    fn apply_exchange(&mut self, player_index: usize, tiles: Vec<Tile>) -> GameResult<MoveOutcome> {
        if tiles.is_empty() {
            return Err(GameError::EmptyPlacement);
        }
        if self.bag.len() < MIN_BAG_SIZE_TO_EXCHANGE {
            return Err(GameError::NotEnoughTilesToExchange);
        }

        self.players[player_index].rack.exchange(&tiles, &mut self.bag)?;
        self.consecutive_passes = 0;
        log::debug!("player {player_index} exchanged {} tiles", tiles.len());

        Ok(MoveOutcome {
            turn_score: 0,
            formed_words: Vec::new(),
        })
    }

    fn apply_place(&mut self, player_index: usize, tiles: Vec<PlacedTile>) -> GameResult<MoveOutcome> {
        let formed = validator::validate_placement(
            &self.board,
            self.players[player_index].rack(),
            self.lexicon,
            self.turn,
            &tiles,
        )?;

        let overlay: HashMap<Pos, Tile> = tiles.iter().map(|t| (t.pos, t.board_tile())).collect();
        let mut turn_score = scoring::score_turn(&formed, &self.board, &overlay);
        if tiles.len() == RACK_SIZE {
            turn_score += BINGO_BONUS;
        }

        for placed in &tiles {
            self.board.place(placed.pos, placed.board_tile());
        }

        let player = &mut self.players[player_index];
        player.rack.consume(tiles.iter().map(PlacedTile::rack_tile));
        player.rack.refill(&mut self.bag);
        player.score += turn_score as i64;
        self.consecutive_passes = 0;

        log::debug!("player {player_index} scored {turn_score} with {} word(s)", formed.len());

        Ok(MoveOutcome {
            turn_score,
            formed_words: formed,
        })
    }

    fn check_end_of_game(&mut self) {
        let passes_exhausted =
            self.consecutive_passes >= PASSES_PER_PLAYER_TO_END as u32 * self.players.len() as u32;
        let bag_and_rack_exhausted = self.bag.is_empty() && self.players.iter().any(|p| p.rack.is_empty());

        if passes_exhausted || bag_and_rack_exhausted {
            self.finalize();
        }
    }

    fn finalize(&mut self) {
        let rack_sums: Vec<usize> = self.players.iter().map(|p| p.rack.tile_sum()).collect();

        for (player, &sum) in self.players.iter_mut().zip(&rack_sums) {
            player.score -= sum as i64;
        }

        let empty_handed: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.rack.is_empty())
            .map(|(i, _)| i)
            .collect();

        if let [winner] = empty_handed[..] {
            let bonus: usize = rack_sums
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != winner)
                .map(|(_, &sum)| sum)
                .sum();
            self.players[winner].score += bonus as i64;
        }

        self.is_game_over = true;
        log::info!("game over after {} turns", self.turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from(["HELLO", "IT", "TO", "ON", "LIT"])
    }

    #[test]
    fn rejects_invalid_player_count() {
        let lex = lexicon();
        assert_eq!(
            Game::start_seeded(1, 0, &lex).unwrap_err(),
            SetupError::InvalidPlayerCount(1)
        );
        assert_eq!(
            Game::start_seeded(5, 0, &lex).unwrap_err(),
            SetupError::InvalidPlayerCount(5)
        );
    }

    #[test]
    fn pass_advances_turn_and_counts_toward_game_over() {
        let lex = lexicon();
        let mut game = Game::start_seeded(2, 1, &lex).unwrap();

        for expected_turn in 0..4 {
            assert_eq!(game.turn(), expected_turn);
            game.apply_move(game.current_player(), Placement::Pass).unwrap();
        }

        assert!(game.is_game_over());
    }

    #[test]
    fn wrong_player_is_rejected() {
        let lex = lexicon();
        let mut game = Game::start_seeded(2, 1, &lex).unwrap();

        let other = (game.current_player() + 1) % game.player_count();
        let err = game.apply_move(other, Placement::Pass).unwrap_err();
        assert_eq!(err, GameError::WrongPlayer);
    }

    #[test]
    fn exchange_requires_minimum_bag_size() {
        let lex = lexicon();

        let mut bag = TileBag::seeded(1);
        while bag.len() >= MIN_BAG_SIZE_TO_EXCHANGE {
            bag.draw_many(RACK_SIZE).for_each(drop);
        }

        let rack_tile = Tile::Letter(tile::Letter::new('A').unwrap());
        let players = vec![
            Player {
                rack: Rack::from_tiles(&[rack_tile]),
                score: 0,
            },
            Player {
                rack: Rack::from_tiles(&[rack_tile]),
                score: 0,
            },
        ];
        let mut game = Game::from_parts(Board::default(), bag, players, 0, 0, false, &lex);

        let err = game
            .apply_move(0, Placement::Exchange(vec![rack_tile]))
            .unwrap_err();
        assert_eq!(err, GameError::NotEnoughTilesToExchange);
    }

    #[test]
    fn successful_exchange_resets_passes_and_advances_turn() {
        let lex = lexicon();
        let mut game = Game::start_seeded(2, 1, &lex).unwrap();

        game.apply_move(game.current_player(), Placement::Pass).unwrap();
        let tile = game.player(game.current_player()).rack().iter().next().unwrap();

        let outcome = game
            .apply_move(game.current_player(), Placement::Exchange(vec![tile]))
            .unwrap();

        assert_eq!(outcome.turn_score, 0);
        assert_eq!(game.consecutive_passes(), 0);
        assert_eq!(game.turn(), 2);
    }
}
