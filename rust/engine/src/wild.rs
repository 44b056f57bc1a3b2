//! Deuces-wild predicates.
//!
//! Deuces are pulled out of the hand first and their count becomes
//! substitution credit for rank. They never substitute for suit.

use crate::cards::{Card, Rank};
use crate::eval::{self, ACE_HIGH, ACE_LOW};

/// Sorted non-deuce ranks and the number of deuces removed.
pub fn split_deuces(cards: &[Card]) -> (Vec<Rank>, usize) {
    let ranks = eval::sorted_ranks(cards);
    let deuces = ranks.iter().filter(|&&r| r == Rank::Two).count();
    (ranks.into_iter().filter(|&r| r != Rank::Two).collect(), deuces)
}

pub fn deuce_count(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_deuce()).count()
}

pub fn four_of_a_kind(cards: &[Card]) -> bool {
    let (rest, deuces) = split_deuces(cards);
    if deuces == 4 {
        return true;
    }
    match eval::outlier_run(&rest) {
        Some(matches) => matches + deuces == 4,
        None => false,
    }
}

pub fn three_of_a_kind(cards: &[Card]) -> bool {
    let (rest, deuces) = split_deuces(cards);
    match deuces {
        0 => eval::three_of_a_kind_ranks(&rest),
        1 if eval::has_pair(&rest) => true,
        1 => eval::three_of_a_kind_ranks(&rest),
        _ => true,
    }
}

pub fn full_house(cards: &[Card]) -> bool {
    let (rest, deuces) = split_deuces(cards);
    match deuces {
        0 => eval::full_house(cards),
        1 => eval::three_of_a_kind_ranks(&rest) || eval::two_pair_ranks(&rest),
        2 => eval::has_pair(&rest),
        _ => true,
    }
}

pub fn straight(cards: &[Card]) -> bool {
    let (rest, mut deuces) = split_deuces(cards);
    let mask = eval::rank_mask(&rest);
    let fills = |target: u16| (mask ^ target).count_ones() as usize <= deuces;
    if fills(ACE_HIGH) || fills(ACE_LOW) {
        return true;
    }
    // Ace only straightens at either end, both covered above.
    if rest.contains(&Rank::Ace) {
        return false;
    }
    for w in rest.windows(2) {
        let (lo, hi) = (w[0].straight_value(), w[1].straight_value());
        if lo == hi {
            return false;
        }
        let gap = usize::from(hi - lo - 1);
        if gap > deuces {
            return false;
        }
        deuces -= gap;
    }
    true
}

pub fn straight_flush(cards: &[Card]) -> bool {
    straight(cards) && eval::flush(cards)
}

/// Deuces are not wild for suit, so this is the plain suit check.
pub fn flush(cards: &[Card]) -> bool {
    eval::flush(cards)
}

pub fn five_of_a_kind(cards: &[Card]) -> bool {
    let (rest, deuces) = split_deuces(cards);
    deuces >= 1 && rest.iter().all(|&r| r == rest[0])
}

pub fn royal_flush_with_deuces(cards: &[Card]) -> bool {
    if !eval::flush(cards) {
        return false;
    }
    let (mut rest, deuces) = split_deuces(cards);
    rest.dedup();
    if rest.iter().any(|&r| r < Rank::Ten) {
        return false;
    }
    rest.len() + deuces == 5
}

pub fn four_deuces(cards: &[Card]) -> bool {
    deuce_count(cards) == 4
}
