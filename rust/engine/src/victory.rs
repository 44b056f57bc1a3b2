use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::ConfigError;
use crate::{eval, wild};

/// Variant switches passed to every evaluator call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PokerSettings {
    #[serde(default)]
    pub wild_deuces: bool,
}

impl PokerSettings {
    pub fn standard() -> Self {
        Self { wild_deuces: false }
    }

    pub fn deuces_wild() -> Self {
        Self { wild_deuces: true }
    }
}

/// Category tags a victory condition can name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    RoyalFlush = 0,
    FourDeuces = 1,
    RoyalFlushWithDeuces = 2,
    FiveOfAKind = 3,
    StraightFlush = 4,
    FourOfAKind = 5,
    FullHouse = 6,
    Flush = 7,
    Straight = 8,
    ThreeOfAKind = 9,
    TwoPair = 10,
    JacksOrBetter = 11,
}

pub type Predicate = fn(&[Card], PokerSettings) -> bool;

/// Dispatch table indexed by `Category as usize`.
static PREDICATES: [Predicate; Category::COUNT] = [
    royal_flush,
    four_deuces,
    royal_flush_with_deuces,
    five_of_a_kind,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    jacks_or_better,
];

impl Category {
    pub const COUNT: usize = 12;

    pub const ALL: [Category; Category::COUNT] = [
        Category::RoyalFlush,
        Category::FourDeuces,
        Category::RoyalFlushWithDeuces,
        Category::FiveOfAKind,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::JacksOrBetter,
    ];

    pub fn predicate(self) -> Predicate {
        PREDICATES[self as usize]
    }

    pub fn is_satisfied(self, cards: &[Card], settings: PokerSettings) -> bool {
        self.predicate()(cards, settings)
    }
}

fn royal_flush(cards: &[Card], _: PokerSettings) -> bool {
    eval::royal_flush(cards)
}

fn four_deuces(cards: &[Card], settings: PokerSettings) -> bool {
    settings.wild_deuces && wild::four_deuces(cards)
}

fn royal_flush_with_deuces(cards: &[Card], _: PokerSettings) -> bool {
    wild::royal_flush_with_deuces(cards)
}

fn five_of_a_kind(cards: &[Card], settings: PokerSettings) -> bool {
    settings.wild_deuces && wild::five_of_a_kind(cards)
}

fn straight_flush(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::straight_flush(cards)
    } else {
        eval::straight_flush(cards)
    }
}

fn four_of_a_kind(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::four_of_a_kind(cards)
    } else {
        eval::four_of_a_kind(cards)
    }
}

fn full_house(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::full_house(cards)
    } else {
        eval::full_house(cards)
    }
}

fn flush(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::flush(cards)
    } else {
        eval::flush(cards)
    }
}

fn straight(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::straight(cards)
    } else {
        eval::straight(cards)
    }
}

fn three_of_a_kind(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        wild::three_of_a_kind(cards)
    } else {
        eval::three_of_a_kind(cards)
    }
}

fn two_pair(cards: &[Card], settings: PokerSettings) -> bool {
    if settings.wild_deuces {
        let (natural, _) = wild::split_deuces(cards);
        eval::two_pair_ranks(&natural)
    } else {
        eval::two_pair(cards)
    }
}

fn jacks_or_better(cards: &[Card], _: PokerSettings) -> bool {
    eval::jacks_or_better(cards)
}

/// One catalog entry: what wins, what it is called, and what it pays.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VictoryCondition {
    pub category: Category,
    /// Shown on the end-of-round message
    pub name: String,
    /// Paid per unit of bet
    pub payout: u32,
    /// Pays `jackpot_payout` instead of the multiplied `payout`
    #[serde(default)]
    pub is_jackpot: bool,
    #[serde(default)]
    pub jackpot_payout: u32,
}

impl VictoryCondition {
    pub fn new(category: Category, name: &str, payout: u32) -> Self {
        Self {
            category,
            name: name.to_string(),
            payout,
            is_jackpot: false,
            jackpot_payout: 0,
        }
    }

    pub fn jackpot(mut self, jackpot_payout: u32) -> Self {
        self.is_jackpot = true;
        self.jackpot_payout = jackpot_payout;
        self
    }

    pub fn is_satisfied(&self, cards: &[Card], settings: PokerSettings) -> bool {
        self.category.is_satisfied(cards, settings)
    }
}

/// Ordered catalog of victory conditions.
///
/// Order is priority: the first satisfied entry wins, so rarer hands must
/// come before the more common hands they also satisfy.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct VictoryTable {
    pub conditions: Vec<VictoryCondition>,
}

impl VictoryTable {
    pub fn new(conditions: Vec<VictoryCondition>) -> Self {
        Self { conditions }
    }

    /// 9/6 Jacks or Better.
    pub fn jacks_or_better() -> Self {
        use Category::*;
        Self::new(vec![
            VictoryCondition::new(RoyalFlush, "Royal Flush", 250).jackpot(4000),
            VictoryCondition::new(StraightFlush, "Straight Flush", 50),
            VictoryCondition::new(FourOfAKind, "Four of a Kind", 25),
            VictoryCondition::new(FullHouse, "Full House", 9),
            VictoryCondition::new(Flush, "Flush", 6),
            VictoryCondition::new(Straight, "Straight", 4),
            VictoryCondition::new(ThreeOfAKind, "Three of a Kind", 3),
            VictoryCondition::new(TwoPair, "Two Pair", 2),
            VictoryCondition::new(JacksOrBetter, "Jacks or Better", 1),
        ])
    }

    /// Full-pay Deuces Wild.
    pub fn deuces_wild() -> Self {
        use Category::*;
        Self::new(vec![
            VictoryCondition::new(RoyalFlush, "Natural Royal Flush", 250).jackpot(4000),
            VictoryCondition::new(FourDeuces, "Four Deuces", 200),
            VictoryCondition::new(RoyalFlushWithDeuces, "Wild Royal Flush", 25),
            VictoryCondition::new(FiveOfAKind, "Five of a Kind", 15),
            VictoryCondition::new(StraightFlush, "Straight Flush", 9),
            VictoryCondition::new(FourOfAKind, "Four of a Kind", 5),
            VictoryCondition::new(FullHouse, "Full House", 3),
            VictoryCondition::new(Flush, "Flush", 2),
            VictoryCondition::new(Straight, "Straight", 2),
            VictoryCondition::new(ThreeOfAKind, "Three of a Kind", 1),
        ])
    }

    /// First satisfied condition in catalog order, or `None` for no win.
    pub fn find_winner(&self, cards: &[Card], settings: PokerSettings) -> Option<&VictoryCondition> {
        self.conditions
            .iter()
            .find(|vc| vc.is_satisfied(cards, settings))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conditions.is_empty() {
            return Err(ConfigError::Invalid("victory table is empty".into()));
        }
        let mut seen = [false; Category::COUNT];
        for vc in &self.conditions {
            let idx = vc.category as usize;
            if seen[idx] {
                return Err(ConfigError::Invalid(format!(
                    "victory table lists {:?} twice",
                    vc.category
                )));
            }
            seen[idx] = true;
        }
        Ok(())
    }
}
