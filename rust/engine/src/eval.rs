//! Standard five-card draw predicates, no wild cards.
//!
//! Every predicate is pure and takes the hand as a slice. Behaviour for hands
//! of a size other than five is not part of the contract, but nothing here
//! panics on short input.

use crate::cards::{Card, Rank};

/// Ten, Jack, Queen, King, Ace.
pub const ACE_HIGH: u16 = (1 << Rank::Ten as u16)
    | (1 << Rank::Jack as u16)
    | (1 << Rank::Queen as u16)
    | (1 << Rank::King as u16)
    | (1 << Rank::Ace as u16);

/// Two, Three, Four, Five, Ace.
pub const ACE_LOW: u16 = (1 << Rank::Two as u16)
    | (1 << Rank::Three as u16)
    | (1 << Rank::Four as u16)
    | (1 << Rank::Five as u16)
    | (1 << Rank::Ace as u16);

/// Ranks in ascending rank-index order.
pub fn sorted_ranks(cards: &[Card]) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();
    ranks
}

/// Bit set of the ranks present, by rank index.
pub fn rank_mask(ranks: &[Rank]) -> u16 {
    ranks.iter().fold(0, |m, r| m | r.bit())
}

pub fn royal_flush(cards: &[Card]) -> bool {
    if !flush(cards) {
        return false;
    }
    let ranks = sorted_ranks(cards);
    ranks.len() == 5 && rank_mask(&ranks) == ACE_HIGH
}

pub fn straight_flush(cards: &[Card]) -> bool {
    straight(cards) && flush(cards)
}

pub fn four_of_a_kind(cards: &[Card]) -> bool {
    four_of_a_kind_ranks(&sorted_ranks(cards))
}

/// The outlier rule: drop the first rank if it differs from its neighbour,
/// keep `len - 1` ranks from there, and require them all equal.
pub(crate) fn four_of_a_kind_ranks(sorted: &[Rank]) -> bool {
    outlier_run(sorted).is_some()
}

/// Length of the uniform run left by the outlier rule, if uniform.
pub(crate) fn outlier_run(sorted: &[Rank]) -> Option<usize> {
    if sorted.len() < 2 {
        return None;
    }
    let start = usize::from(sorted[0] != sorted[1]);
    let kept = &sorted[start..start + sorted.len() - 1];
    kept.iter()
        .all(|&r| r == kept[0])
        .then_some(kept.len())
}

pub fn full_house(cards: &[Card]) -> bool {
    if !three_of_a_kind(cards) {
        return false;
    }
    let ranks = sorted_ranks(cards);
    let n = ranks.len();
    ranks[0] == ranks[1] && ranks[n - 1] == ranks[n - 2]
}

pub fn flush(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

pub fn straight(cards: &[Card]) -> bool {
    let ranks = sorted_ranks(cards);
    if ranks.is_empty() {
        return false;
    }
    if ranks.contains(&Rank::Ace) {
        let mask = rank_mask(&ranks);
        return ranks.len() == 5 && (mask == ACE_HIGH || mask == ACE_LOW);
    }
    consecutive(&ranks)
}

/// Sorted ranks step by exactly one in poker sequence order.
pub(crate) fn consecutive(sorted: &[Rank]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].straight_value() + 1 == w[1].straight_value())
}

pub fn three_of_a_kind(cards: &[Card]) -> bool {
    three_of_a_kind_ranks(&sorted_ranks(cards))
}

pub(crate) fn three_of_a_kind_ranks(sorted: &[Rank]) -> bool {
    sorted.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

pub fn two_pair(cards: &[Card]) -> bool {
    two_pair_ranks(&sorted_ranks(cards))
}

/// One pass over adjacent pairs; the second disjoint match after the first wins.
pub(crate) fn two_pair_ranks(sorted: &[Rank]) -> bool {
    let mut got_one_pair = false;
    let mut i = 0;
    while i + 1 < sorted.len() {
        if sorted[i] != sorted[i + 1] {
            i += 1;
            continue;
        }
        if got_one_pair {
            return true;
        }
        got_one_pair = true;
        i += 2;
    }
    false
}

/// Any two adjacent equal ranks.
pub(crate) fn has_pair(sorted: &[Rank]) -> bool {
    sorted.windows(2).any(|w| w[0] == w[1])
}

/// At least one Jack, Queen or King. Ace ranks below Jack here.
pub fn jacks_or_better(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.rank >= Rank::Jack)
}
