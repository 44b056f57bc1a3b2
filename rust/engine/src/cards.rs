use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCardError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spade,
    /// Clubs suit (♣)
    Club,
    /// Hearts suit (♥)
    Heart,
    /// Diamonds suit (♦)
    Diamond,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    fn code(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Club => 'c',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
        }
    }
}

/// Represents the rank (face value) of a playing card.
///
/// The declaration order is the ordering used by every evaluator: Ace sits
/// between Ten and Jack (index 9). Straight detection uses
/// [`Rank::straight_value`] instead, where Ace is high.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2, the deuce
    Two = 0,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Ace (index 9)
    Ace,
    /// Jack (index 10)
    Jack,
    /// Queen (index 11)
    Queen,
    /// King (index 12)
    King,
}

impl Rank {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(v: usize) -> Option<Rank> {
        all_ranks().get(v).copied()
    }

    /// Poker sequence value: Two=2 .. Ten=10, Jack=11, Queen=12, King=13, Ace=14.
    pub fn straight_value(self) -> u8 {
        match self {
            Rank::Ace => 14,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            r => r as u8 + 2,
        }
    }

    /// Single-bit mask over rank index, used for rank-set comparisons.
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }

    fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Ace => 'A',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// Represents a single playing card with a suit and rank.
/// Two cards are equal when both suit and rank match; there is no other identity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card
    pub rank: Rank,
}

/// Number of distinct cards, and so of slots.
pub const DECK_SIZE: usize = 52;

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Stable slot index in `0..52`.
    pub fn slot(self) -> usize {
        self.suit.index() * 13 + self.rank.index()
    }

    pub fn from_slot(slot: usize) -> Option<Card> {
        if slot >= DECK_SIZE {
            return None;
        }
        let suit = all_suits()[slot / 13];
        let rank = all_ranks()[slot % 13];
        Some(Card { suit, rank })
    }

    pub fn is_deuce(self) -> bool {
        self.rank == Rank::Two
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError(s.to_string()));
        };
        let rank = all_ranks()
            .into_iter()
            .find(|rank| rank.code() == r.to_ascii_uppercase())
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let suit = all_suits()
            .into_iter()
            .find(|suit| suit.code() == su.to_ascii_lowercase())
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards in slot order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Parses a whitespace-separated list of card codes, e.g. `"Ad Kd Qd Jd Td"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
