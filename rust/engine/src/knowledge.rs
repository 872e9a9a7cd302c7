use serde::{Deserialize, Serialize};

use crate::cards::{all_colors, all_ranks, Card, Color, Rank, COLOR_COUNT};

/// What the holder of a card can deduce about it from the hints received so
/// far: the set of still-possible colors and the set of still-possible ranks.
///
/// A fresh card starts with every color and rank possible. A hint narrows the
/// sets: cards matching the hinted value collapse to exactly that value, and
/// cards not matching it drop the value from their candidates. Both are real
/// information, so every card in a hinted hand is updated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardKnowledge {
    colors: [bool; COLOR_COUNT],
    ranks: [bool; 5],
}

impl CardKnowledge {
    pub fn new() -> Self {
        Self {
            colors: [true; COLOR_COUNT],
            ranks: [true; 5],
        }
    }

    pub fn is_color_possible(&self, color: Color) -> bool {
        self.colors[color.index()]
    }

    pub fn is_rank_possible(&self, rank: Rank) -> bool {
        self.ranks[rank.index()]
    }

    pub fn possible_colors(&self) -> Vec<Color> {
        all_colors()
            .iter()
            .copied()
            .filter(|c| self.is_color_possible(*c))
            .collect()
    }

    pub fn possible_ranks(&self) -> Vec<Rank> {
        all_ranks()
            .iter()
            .copied()
            .filter(|r| self.is_rank_possible(*r))
            .collect()
    }

    /// The card's color, if hints have narrowed it to exactly one.
    pub fn known_color(&self) -> Option<Color> {
        let mut possible = self.possible_colors();
        if possible.len() == 1 {
            possible.pop()
        } else {
            None
        }
    }

    /// The card's rank, if hints have narrowed it to exactly one.
    pub fn known_rank(&self) -> Option<Rank> {
        let mut possible = self.possible_ranks();
        if possible.len() == 1 {
            possible.pop()
        } else {
            None
        }
    }

    /// Whether the given identity is still consistent with this knowledge.
    pub fn could_be(&self, card: Card) -> bool {
        self.is_color_possible(card.color) && self.is_rank_possible(card.rank)
    }

    /// Record a color hint: `matches` says whether this card carries the
    /// hinted color. Matching collapses the set to the hinted color alone;
    /// not matching removes it.
    pub fn note_color(&mut self, hinted: Color, matches: bool) {
        if matches {
            for color in all_colors() {
                self.colors[color.index()] = color == hinted;
            }
        } else {
            self.colors[hinted.index()] = false;
        }
    }

    /// Record a rank hint, with the same positive/negative semantics as
    /// [`CardKnowledge::note_color`].
    pub fn note_rank(&mut self, hinted: Rank, matches: bool) {
        if matches {
            for rank in all_ranks() {
                self.ranks[rank.index()] = rank == hinted;
            }
        } else {
            self.ranks[hinted.index()] = false;
        }
    }
}

impl Default for CardKnowledge {
    fn default() -> Self {
        Self::new()
    }
}
