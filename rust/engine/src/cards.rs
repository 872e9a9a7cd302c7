use serde::{Deserialize, Serialize};

/// Number of firework colors in the deck.
pub const COLOR_COUNT: usize = 5;

/// Total number of cards in a fresh deck (5 colors x 10 cards).
pub const DECK_SIZE: usize = 50;

/// Represents one of the five firework colors in a standard Hanabi deck.
/// Used as a component of [`Card`] and as the key for per-color pile progress.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    /// Blue fireworks
    Blue,
    /// Green fireworks
    Green,
    /// Red fireworks
    Red,
    /// White fireworks
    White,
    /// Yellow fireworks
    Yellow,
}

impl Color {
    /// Stable index for pile arrays and knowledge sets.
    pub fn index(self) -> usize {
        match self {
            Color::Blue => 0,
            Color::Green => 1,
            Color::Red => 2,
            Color::White => 3,
            Color::Yellow => 4,
        }
    }
}

/// Represents the rank (face value) of a card from One through Five.
/// The numeric value doubles as the pile height a successful play produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 1
    One = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Stable index for knowledge sets (rank 1 -> 0, rank 5 -> 4).
    pub fn index(self) -> usize {
        self.value() as usize - 1
    }
}

/// Represents a single Hanabi card with a color and rank.
/// Identity is fixed at deck construction; what the holder knows about it
/// lives separately in [`crate::knowledge::CardKnowledge`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The color of the card
    pub color: Color,
    /// The rank of the card (One through Five)
    pub rank: Rank,
}

pub fn all_colors() -> [Color; COLOR_COUNT] {
    [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::White,
        Color::Yellow,
    ]
}

pub fn all_ranks() -> [Rank; 5] {
    [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
}

/// Copies of a given rank per color: three 1s, two each of 2-4, one 5.
pub fn rank_copies(rank: Rank) -> usize {
    match rank {
        Rank::One => 3,
        Rank::Two | Rank::Three | Rank::Four => 2,
        Rank::Five => 1,
    }
}

/// Builds the canonical 50-card multiset in a fixed order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &color in &all_colors() {
        for &rank in &all_ranks() {
            for _ in 0..rank_copies(rank) {
                v.push(Card { color, rank });
            }
        }
    }
    v
}
