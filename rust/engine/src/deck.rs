use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, DECK_SIZE};
use crate::errors::GameError;

/// The shared card pool.
///
/// Cards leave from the front and come back at the back. A per-slot count
/// (indexed by [`Card::slot`]) keeps the one-of-each invariant checkable in
/// constant time; `cards in pool + cards dealt out` is always the full set.
#[derive(Debug)]
pub struct Deck {
    pool: VecDeque<Card>,
    counts: [u8; DECK_SIZE],
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Fresh shuffled deck seeded from entropy. The seed is kept for replay.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Fresh shuffled deck; the same seed always yields the same order.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            pool: full_deck().into(),
            counts: [1; DECK_SIZE],
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.shuffle(true);
        deck
    }

    /// Seeded when a seed is given, from entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new_with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let card = self.pool.pop_front().ok_or(GameError::EmptyDeck {
            requested: 1,
            remaining: 0,
        })?;
        self.counts[card.slot()] -= 1;
        Ok(card)
    }

    /// Draws `count` cards, or none at all if fewer remain.
    pub fn draw_n(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        self.ensure_available(count)?;
        (0..count).map(|_| self.draw()).collect()
    }

    /// Fails with `EmptyDeck` unless `count` cards can be drawn.
    pub fn ensure_available(&self, count: usize) -> Result<(), GameError> {
        if count > self.pool.len() {
            return Err(GameError::EmptyDeck {
                requested: count,
                remaining: self.pool.len(),
            });
        }
        Ok(())
    }

    /// Puts a card back at the bottom of the pool.
    ///
    /// Returns `false` without touching the pool when the card is already
    /// present and duplicates are not allowed.
    pub fn return_card(&mut self, card: Card, allow_duplicates: bool) -> bool {
        match self.insert(card, allow_duplicates) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(card = %card, error = %err, "rejected card return");
                false
            }
        }
    }

    /// Returns every card; true only if all of them were accepted.
    /// Accepted cards stay in the pool even when a later one is rejected.
    pub fn return_cards(&mut self, cards: &[Card]) -> bool {
        cards
            .iter()
            .fold(true, |ok, &card| self.return_card(card, false) && ok)
    }

    /// Shuffles the pool in place. With `require_full` set this is a no-op
    /// unless all 52 cards are present. Returns whether a shuffle happened.
    pub fn shuffle(&mut self, require_full: bool) -> bool {
        if require_full && self.pool.len() != DECK_SIZE {
            tracing::debug!(pool = self.pool.len(), "skipping shuffle of partial deck");
            return false;
        }
        self.pool.make_contiguous().shuffle(&mut self.rng);
        true
    }

    pub fn contains(&self, card: Card) -> bool {
        self.counts[card.slot()] > 0
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pool.len() == DECK_SIZE
    }

    /// Pool contents in draw order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.pool.iter().copied()
    }

    fn insert(&mut self, card: Card, allow_duplicates: bool) -> Result<(), GameError> {
        let count = &mut self.counts[card.slot()];
        if *count > 0 && !allow_duplicates {
            return Err(GameError::DuplicateCardReturn { card });
        }
        *count = count.saturating_add(1);
        self.pool.push_back(card);
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
