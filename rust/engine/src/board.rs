use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Rank, COLOR_COUNT, DECK_SIZE};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Action, Player};

/// Maximum number of shared hint tokens.
pub const MAX_HINTS: u8 = 8;
/// Shared failure budget; the game is lost when it runs out.
pub const MAX_BOMBS: u8 = 3;

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pile reached rank 5
    Won,
    /// The bomb budget was exhausted by a third mismatched play
    Lost,
    /// The deck ran out and every player took one final turn
    DeckExhausted,
}

/// The game-state aggregate: piles, deck, discard pile, players, turn
/// pointer, and the shared hint/bomb counters. All mutation goes through
/// [`Board::give_hint`], [`Board::play`] and [`Board::discard`] (or the
/// [`Board::apply`] dispatcher); everything else is read access.
///
/// The board is a single-owner, synchronous state machine. An embedding
/// layer that exposes it to multiple callers must serialize access (one
/// lock or one owning task per game).
///
/// # Examples
///
/// ```
/// use hanabi_engine::board::Board;
///
/// // Seeded construction deals deterministically.
/// let mut board = Board::new(2, Some(42)).expect("2 players is valid");
/// assert_eq!(board.hints(), 8);
/// assert_eq!(board.bombs(), 3);
/// assert_eq!(board.deck_remaining(), 40);
///
/// // Player 0 opens; a play always draws a replacement while cards remain.
/// board.play(0, 0).expect("fresh board cannot end on one play");
/// assert_eq!(board.deck_remaining(), 39);
/// assert_eq!(board.current_player(), 1);
/// ```
#[derive(Debug)]
pub struct Board {
    piles: [u8; COLOR_COUNT],
    deck: Deck,
    discard_pile: Vec<Card>,
    players: Vec<Player>,
    current_player: usize,
    hints: u8,
    bombs: u8,
    /// Turns left once the last card has been drawn; None while cards remain
    final_turns: Option<usize>,
    outcome: Option<Outcome>,
}

/// Standard hand size: 5 cards for 2-3 players, 4 for 4-5.
fn hand_size_for(player_count: usize) -> Option<usize> {
    match player_count {
        2 | 3 => Some(5),
        4 | 5 => Some(4),
        _ => None,
    }
}

impl Board {
    /// Create a board for `player_count` players, shuffle a fresh deck and
    /// deal the opening hands (hand `i` is dealt in full before hand `i+1`).
    ///
    /// `None` seeds from entropy; `Some(seed)` replays the same deal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerCount`] unless `player_count` is
    /// 2 to 5.
    pub fn new(player_count: usize, seed: Option<u64>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self::from_deck(deck, player_count)
    }

    /// Deal from a fixed, unshuffled card order. Lets tests script exact
    /// hands and draws.
    pub fn with_deck_for_test(cards: Vec<Card>, player_count: usize) -> Result<Self, GameError> {
        Self::from_deck(Deck::with_cards_for_test(cards), player_count)
    }

    fn from_deck(mut deck: Deck, player_count: usize) -> Result<Self, GameError> {
        let hand_size = hand_size_for(player_count).ok_or(GameError::InvalidPlayerCount {
            count: player_count,
        })?;
        debug_assert!(player_count * hand_size <= DECK_SIZE);

        let mut players = Vec::with_capacity(player_count);
        for id in 0..player_count {
            let mut player = Player::new(id);
            for _ in 0..hand_size {
                let card = deck.draw().ok_or(GameError::InvalidPlayerCount {
                    count: player_count,
                })?;
                player.give_card(card);
            }
            players.push(player);
        }

        Ok(Self {
            piles: [0; COLOR_COUNT],
            deck,
            discard_pile: Vec::new(),
            players,
            current_player: 0,
            hints: MAX_HINTS,
            bombs: MAX_BOMBS,
            final_turns: None,
            outcome: None,
        })
    }

    /// Tell `target` about the card at `card_index`: every card in that hand
    /// is narrowed, positively for cards sharing the indicated value and
    /// negatively for the rest. Costs one hint token; touches no pile, deck
    /// or discard state.
    ///
    /// # Errors
    ///
    /// [`GameError::NoHintsRemaining`] when the token pool is empty,
    /// [`GameError::GameOver`] on a finished board, or an index error.
    /// Nothing is mutated on any error.
    pub fn give_hint(
        &mut self,
        target: usize,
        card_index: usize,
        number_hint: bool,
    ) -> Result<(), GameError> {
        self.ensure_active()?;
        self.check_indices(target, card_index)?;
        if self.hints == 0 {
            return Err(GameError::NoHintsRemaining);
        }
        self.hints -= 1;

        let hand = self.players[target].hand_mut();
        let hinted = hand[card_index].card;
        for held in hand.iter_mut() {
            if number_hint {
                held.knowledge
                    .note_rank(hinted.rank, held.card.rank == hinted.rank);
            } else {
                held.knowledge
                    .note_color(hinted.color, held.card.color == hinted.color);
            }
        }

        self.finish_turn(false);
        Ok(())
    }

    /// Play the card at `card_index` from `player`'s hand onto its pile,
    /// drawing a replacement while the deck lasts. A match advances the pile
    /// by one (a completed 5 refunds a hint token); a mismatch spends a bomb
    /// and sends the card to the discard pile.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfTurn`] when `player` is not the turn holder (no
    /// state change), [`GameError::OutOfBombs`] when this mismatch was the
    /// last bomb (the play stands and the game is lost),
    /// [`GameError::GameOver`] on a finished board, or an index error.
    pub fn play(&mut self, player: usize, card_index: usize) -> Result<(), GameError> {
        self.ensure_active()?;
        self.check_indices(player, card_index)?;
        self.check_turn(player)?;

        let (card, drew_last) = self.remove_and_replenish(player, card_index);
        let pile = card.color.index();
        if self.piles[pile] + 1 == card.rank.value() {
            self.piles[pile] += 1;
            if card.rank == Rank::Five {
                self.refund_hint();
            }
            if self.piles.iter().all(|&height| height == 5) {
                self.outcome = Some(Outcome::Won);
                return Ok(());
            }
        } else {
            self.bombs -= 1;
            self.discard_pile.push(card);
            if self.bombs == 0 {
                self.outcome = Some(Outcome::Lost);
                return Err(GameError::OutOfBombs);
            }
        }

        self.finish_turn(drew_last);
        Ok(())
    }

    /// Discard the card at `card_index` from `player`'s hand for a hint
    /// token, drawing a replacement while the deck lasts.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfTurn`] when `player` is not the turn holder,
    /// [`GameError::MaxHintsReached`] when the token pool is already full
    /// (standard rule: discarding at 8 hints is not allowed),
    /// [`GameError::GameOver`] on a finished board, or an index error.
    /// Nothing is mutated on any error.
    pub fn discard(&mut self, player: usize, card_index: usize) -> Result<(), GameError> {
        self.ensure_active()?;
        self.check_indices(player, card_index)?;
        self.check_turn(player)?;
        if self.hints == MAX_HINTS {
            return Err(GameError::MaxHintsReached);
        }

        let (card, drew_last) = self.remove_and_replenish(player, card_index);
        self.hints += 1;
        self.discard_pile.push(card);

        self.finish_turn(drew_last);
        Ok(())
    }

    /// Dispatch an [`Action`] submitted by `player`. For hints the acting
    /// player only matters to the caller's records; the board does not tie
    /// hints to the turn holder.
    pub fn apply(&mut self, player: usize, action: Action) -> Result<(), GameError> {
        match action {
            Action::Play { card_index } => self.play(player, card_index),
            Action::Discard { card_index } => self.discard(player, card_index),
            Action::Hint {
                target,
                card_index,
                number_hint,
            } => self.give_hint(target, card_index, number_hint),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn hints(&self) -> u8 {
        self.hints
    }

    pub fn bombs(&self) -> u8 {
        self.bombs
    }

    /// Pile heights indexed by [`Color::index`]; 0 means nothing played.
    pub fn piles(&self) -> &[u8; COLOR_COUNT] {
        &self.piles
    }

    pub fn pile(&self, color: Color) -> u8 {
        self.piles[color.index()]
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Seed the deck was shuffled with, for records and replay.
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    /// `Some` once the game has ended; `None` while it is still live.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Final-round turns left after the last card was drawn.
    pub fn final_turns_remaining(&self) -> Option<usize> {
        self.final_turns
    }

    /// Current score: the sum of all pile heights.
    pub fn score(&self) -> u8 {
        self.piles.iter().sum()
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.outcome.is_some() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn check_indices(&self, player: usize, card_index: usize) -> Result<(), GameError> {
        if player >= self.players.len() {
            return Err(GameError::InvalidPlayerIndex {
                index: player,
                players: self.players.len(),
            });
        }
        let hand_len = self.players[player].hand_len();
        if card_index >= hand_len {
            return Err(GameError::InvalidCardIndex {
                index: card_index,
                hand_len,
            });
        }
        Ok(())
    }

    fn check_turn(&self, player: usize) -> Result<(), GameError> {
        if player != self.current_player {
            Err(GameError::OutOfTurn {
                expected: self.current_player,
                actual: player,
            })
        } else {
            Ok(())
        }
    }

    /// Shared draw-replenish step: remove the card at `card_index` (later
    /// cards shift left) and append one drawn card, if any remain. Returns
    /// the removed card and whether this draw emptied the deck.
    fn remove_and_replenish(&mut self, player: usize, card_index: usize) -> (Card, bool) {
        let held = self.players[player].take_card(card_index);
        let mut drew_last = false;
        if let Some(card) = self.deck.draw() {
            self.players[player].give_card(card);
            drew_last = self.deck.is_empty();
        }
        (held.card, drew_last)
    }

    fn refund_hint(&mut self) {
        if self.hints < MAX_HINTS {
            self.hints += 1;
        }
    }

    /// Close out a successful action: arm or tick the final round and pass
    /// the turn. Drawing the last card arms the countdown without consuming
    /// a turn from it; every later action consumes one.
    fn finish_turn(&mut self, drew_last: bool) {
        if drew_last {
            self.final_turns = Some(self.players.len());
        } else if let Some(left) = self.final_turns {
            let left = left - 1;
            if left == 0 {
                self.outcome = Some(Outcome::DeckExhausted);
            }
            self.final_turns = Some(left);
        }
        self.current_player = (self.current_player + 1) % self.players.len();
    }
}
