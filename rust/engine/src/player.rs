use crate::cards::Card;
use crate::knowledge::CardKnowledge;
use serde::{Deserialize, Serialize};

/// A card as it sits in a hand: the true identity plus what its holder has
/// learned about it from hints. The identity never changes; the knowledge
/// only narrows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeldCard {
    /// True identity (hidden from the holder by the view layer)
    pub card: Card,
    /// Hint-narrowed candidate sets from the holder's perspective
    pub knowledge: CardKnowledge,
}

impl HeldCard {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            knowledge: CardKnowledge::new(),
        }
    }
}

/// An action a player submits to the board.
/// Hints target a hand position; the hinted value is read from that card.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `card_index` onto its pile
    Play { card_index: usize },
    /// Discard the card at `card_index` for a hint token
    Discard { card_index: usize },
    /// Tell `target` about the card at `card_index`; `number_hint` picks
    /// whether the rank or the color is revealed
    Hint {
        target: usize,
        card_index: usize,
        number_hint: bool,
    },
}

/// Represents a player: an identity and an ordered hand of cards.
/// Hand order is significant; removals shift later cards left and draws
/// append at the end.
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    hand: Vec<HeldCard>,
}

impl Player {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            hand: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn hand(&self) -> &[HeldCard] {
        &self.hand
    }

    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Append a freshly drawn card with all-possible knowledge.
    pub fn give_card(&mut self, card: Card) {
        self.hand.push(HeldCard::new(card));
    }

    /// Remove the card at `index`, shifting later cards left.
    /// Callers validate the index first.
    pub(crate) fn take_card(&mut self, index: usize) -> HeldCard {
        self.hand.remove(index)
    }

    pub(crate) fn hand_mut(&mut self) -> &mut [HeldCard] {
        &mut self.hand
    }
}
