use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome};
use crate::cards::{Card, COLOR_COUNT};
use crate::errors::GameError;
use crate::knowledge::CardKnowledge;

/// One card as a given observer sees it. `identity` is `None` for cards in
/// the observer's own hand; the knowledge half is always present, since that
/// is exactly what the holder is allowed to reason from.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub identity: Option<Card>,
    pub knowledge: CardKnowledge,
}

/// One player's hand as seen by the observer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandView {
    pub player: usize,
    pub cards: Vec<CardView>,
}

/// Snapshot of the board from one player's seat: shared state plus every
/// hand, with the observer's own card identities masked per the Hanabi
/// visibility rule. Serializable so the embedding application can hand it
/// to a UI or put it on the wire unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub observer: usize,
    pub piles: [u8; COLOR_COUNT],
    pub hints: u8,
    pub bombs: u8,
    pub discard_pile: Vec<Card>,
    pub deck_remaining: usize,
    pub current_player: usize,
    pub final_turns_remaining: Option<usize>,
    pub outcome: Option<Outcome>,
    pub score: u8,
    pub hands: Vec<HandView>,
}

impl BoardView {
    /// Build the snapshot `observer` is allowed to see.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerIndex`] for an unknown observer.
    pub fn observed_by(board: &Board, observer: usize) -> Result<Self, GameError> {
        if observer >= board.players().len() {
            return Err(GameError::InvalidPlayerIndex {
                index: observer,
                players: board.players().len(),
            });
        }

        let hands = board
            .players()
            .iter()
            .map(|player| HandView {
                player: player.id(),
                cards: player
                    .hand()
                    .iter()
                    .map(|held| CardView {
                        identity: (player.id() != observer).then_some(held.card),
                        knowledge: held.knowledge,
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            observer,
            piles: *board.piles(),
            hints: board.hints(),
            bombs: board.bombs(),
            discard_pile: board.discard_pile().to_vec(),
            deck_remaining: board.deck_remaining(),
            current_player: board.current_player(),
            final_turns_remaining: board.final_turns_remaining(),
            outcome: board.outcome(),
            score: board.score(),
            hands,
        })
    }
}
