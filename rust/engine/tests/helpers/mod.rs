#![allow(dead_code)]

use casino_engine::cards::{parse_cards, Card};
use casino_engine::table::{Buttons, HandDisplay, Seat};

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card codes")
}

/// Display call log, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Show(Seat, usize, bool),
    Reveal(Seat, usize),
    Remove(Seat, usize),
    Interactive(Seat, usize, bool),
    Held(Seat, usize, bool),
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub events: Vec<DisplayEvent>,
}

impl RecordingDisplay {
    pub fn shown(&self, seat: Seat) -> Vec<(usize, bool)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Show(s, slot, up) if *s == seat => Some((*slot, *up)),
                _ => None,
            })
            .collect()
    }

    pub fn removed(&self, seat: Seat) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Remove(s, slot) if *s == seat => Some(*slot),
                _ => None,
            })
            .collect()
    }
}

impl HandDisplay for RecordingDisplay {
    fn show_card(&mut self, seat: Seat, slot: usize, face_up: bool) {
        self.events.push(DisplayEvent::Show(seat, slot, face_up));
    }
    fn reveal_card(&mut self, seat: Seat, slot: usize) {
        self.events.push(DisplayEvent::Reveal(seat, slot));
    }
    fn remove_card(&mut self, seat: Seat, slot: usize) {
        self.events.push(DisplayEvent::Remove(seat, slot));
    }
    fn set_interactive(&mut self, seat: Seat, slot: usize, enabled: bool) {
        self.events.push(DisplayEvent::Interactive(seat, slot, enabled));
    }
    fn set_held(&mut self, seat: Seat, slot: usize, held: bool) {
        self.events.push(DisplayEvent::Held(seat, slot, held));
    }
}

/// Remembers the latest value pushed to each control.
#[derive(Debug, Default)]
pub struct RecordingButtons {
    pub bet_controls: Option<bool>,
    pub deal_clickable: Option<bool>,
    pub deal_label: Option<String>,
    pub blackjack_controls: Option<bool>,
}

impl Buttons for RecordingButtons {
    fn set_bet_controls(&mut self, enabled: bool) {
        self.bet_controls = Some(enabled);
    }
    fn set_deal_clickable(&mut self, clickable: bool) {
        self.deal_clickable = Some(clickable);
    }
    fn set_deal_label(&mut self, text: &str) {
        self.deal_label = Some(text.to_string());
    }
    fn set_blackjack_controls(&mut self, enabled: bool) {
        self.blackjack_controls = Some(enabled);
    }
}
