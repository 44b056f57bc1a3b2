use crate::cards::{Card, DECK_SIZE};
use crate::errors::GameError;

/// Per-slot markers for a card currently in a hand.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SlotState {
    /// The card is in this hand.
    pub active: bool,
    /// Kept through the poker redraw.
    pub held: bool,
    /// Face down (the blackjack hole card).
    pub hidden: bool,
}

/// An ordered hand of cards owned for the duration of one round.
///
/// Markers live in a table indexed by [`Card::slot`] rather than on the
/// cards themselves, so lookups never search by value.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    slots: [SlotState; DECK_SIZE],
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
            slots: [SlotState::default(); DECK_SIZE],
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
        self.slots[card.slot()] = SlotState {
            active: true,
            ..SlotState::default()
        };
    }

    pub fn add_hidden(&mut self, card: Card) {
        self.add(card);
        self.slots[card.slot()].hidden = true;
    }

    pub fn slot_state(&self, card: Card) -> SlotState {
        self.slots[card.slot()]
    }

    pub fn is_held(&self, card: Card) -> bool {
        self.slots[card.slot()].held
    }

    pub fn is_hidden(&self, card: Card) -> bool {
        self.slots[card.slot()].hidden
    }

    /// Flips the hold marker of the card at `position`, returning the new value.
    pub fn toggle_hold(&mut self, position: usize) -> Result<bool, GameError> {
        let card = *self
            .cards
            .get(position)
            .ok_or(GameError::NoSuchCard { index: position })?;
        let slot = &mut self.slots[card.slot()];
        slot.held = !slot.held;
        Ok(slot.held)
    }

    /// Turns every hidden card face up, returning the cards that changed.
    pub fn reveal_all(&mut self) -> Vec<Card> {
        let mut revealed = Vec::new();
        for &card in &self.cards {
            let slot = &mut self.slots[card.slot()];
            if slot.hidden {
                slot.hidden = false;
                revealed.push(card);
            }
        }
        revealed
    }

    /// Cards that are face up, in hand order.
    pub fn visible_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| !self.slots[c.slot()].hidden)
            .collect()
    }

    /// Removes and returns the cards not marked held, keeping hand order.
    pub fn remove_unheld(&mut self) -> Vec<Card> {
        let (held, unheld): (Vec<Card>, Vec<Card>) = self
            .cards
            .iter()
            .partition(|c| self.slots[c.slot()].held);
        for card in &unheld {
            self.slots[card.slot()] = SlotState::default();
        }
        self.cards = held;
        unheld
    }

    /// Empties the hand, returning every card it held.
    pub fn take_all(&mut self) -> Vec<Card> {
        for card in &self.cards {
            self.slots[card.slot()] = SlotState::default();
        }
        std::mem::take(&mut self.cards)
    }
}
