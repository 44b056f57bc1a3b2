//! Collaborator contracts the controllers drive.
//!
//! Rendering, button wiring and bank text live behind these traits; the
//! controllers only say what changed.

/// Whose hand a display call refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Seat {
    Player,
    Dealer,
}

/// Bet and message handling.
pub trait Bet {
    /// Deducts the current bet. Returns false, leaving the bank alone, if it
    /// cannot be afforded.
    fn place_bet(&mut self) -> bool;
    fn can_place_bet(&self) -> bool;
    fn update_bank(&mut self, amount: u32, is_jackpot: bool);
    fn show_end_message(&mut self, text: &str);
    fn hide_end_message(&mut self);
    fn update_hand_state(&mut self, text: &str);
    fn hide_hand_state(&mut self);
}

/// Card visuals, addressed by seat and card slot (`0..52`).
pub trait HandDisplay {
    fn show_card(&mut self, seat: Seat, slot: usize, face_up: bool);
    fn reveal_card(&mut self, seat: Seat, slot: usize);
    fn remove_card(&mut self, seat: Seat, slot: usize);
    fn set_interactive(&mut self, seat: Seat, slot: usize, enabled: bool);
    fn set_held(&mut self, seat: Seat, slot: usize, held: bool);
}

/// Non-card controls.
pub trait Buttons {
    fn set_bet_controls(&mut self, enabled: bool);
    fn set_deal_clickable(&mut self, clickable: bool);
    fn set_deal_label(&mut self, text: &str);
    fn set_blackjack_controls(&mut self, enabled: bool);
}

/// The collaborators for one transition.
pub struct Table<'a> {
    pub bet: &'a mut dyn Bet,
    pub display: &'a mut dyn HandDisplay,
    pub buttons: &'a mut dyn Buttons,
}

impl<'a> Table<'a> {
    pub fn new(
        bet: &'a mut dyn Bet,
        display: &'a mut dyn HandDisplay,
        buttons: &'a mut dyn Buttons,
    ) -> Self {
        Self {
            bet,
            display,
            buttons,
        }
    }
}

/// Display that draws nothing, for headless play.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl HandDisplay for NoDisplay {
    fn show_card(&mut self, _: Seat, _: usize, _: bool) {}
    fn reveal_card(&mut self, _: Seat, _: usize) {}
    fn remove_card(&mut self, _: Seat, _: usize) {}
    fn set_interactive(&mut self, _: Seat, _: usize, _: bool) {}
    fn set_held(&mut self, _: Seat, _: usize, _: bool) {}
}

/// Buttons that do nothing, for headless play.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoButtons;

impl Buttons for NoButtons {
    fn set_bet_controls(&mut self, _: bool) {}
    fn set_deal_clickable(&mut self, _: bool) {}
    fn set_deal_label(&mut self, _: &str) {}
    fn set_blackjack_controls(&mut self, _: bool) {}
}
