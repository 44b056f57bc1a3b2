use crate::table::Bet;

/// Highest bet multiplier; jackpots pay out raw only at this level.
pub const MAX_BET_MULTIPLIER: u32 = 5;

/// Default opening bank for a session
pub const STARTING_BANK: u32 = 100;

/// Headless [`Bet`] implementation: the bank, the bet level, and the last
/// messages that a UI would show.
#[derive(Debug, Clone)]
pub struct Bank {
    /// Current balance
    balance: u32,
    /// Bet level, `1..=MAX_BET_MULTIPLIER`
    multiplier: u32,
    last_payout: Option<u32>,
    end_message: Option<String>,
    hand_state: Option<String>,
}

impl Bank {
    pub fn new(balance: u32) -> Self {
        Self {
            balance,
            multiplier: 1,
            last_payout: None,
            end_message: None,
            hand_state: None,
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn last_payout(&self) -> Option<u32> {
        self.last_payout
    }

    pub fn end_message(&self) -> Option<&str> {
        self.end_message.as_deref()
    }

    pub fn hand_state(&self) -> Option<&str> {
        self.hand_state.as_deref()
    }

    pub fn increase_bet(&mut self) {
        if self.multiplier < MAX_BET_MULTIPLIER {
            self.multiplier += 1;
        }
    }

    pub fn decrease_bet(&mut self) {
        if self.multiplier > 1 {
            self.multiplier -= 1;
        }
    }

    /// What `update_bank` would pay for this payout at the current level.
    pub fn payout_for(&self, payout: u32, is_jackpot: bool) -> u32 {
        if is_jackpot && self.multiplier == MAX_BET_MULTIPLIER {
            payout
        } else {
            payout.saturating_mul(self.multiplier)
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(STARTING_BANK)
    }
}

impl Bet for Bank {
    fn place_bet(&mut self) -> bool {
        if self.multiplier > self.balance {
            return false;
        }
        self.balance -= self.multiplier;
        self.last_payout = None;
        true
    }

    fn can_place_bet(&self) -> bool {
        self.multiplier <= self.balance
    }

    fn update_bank(&mut self, amount: u32, is_jackpot: bool) {
        let paid = self.payout_for(amount, is_jackpot);
        self.balance = self.balance.saturating_add(paid);
        self.last_payout = Some(paid);
        tracing::info!(paid, balance = self.balance, is_jackpot, "bank updated");
    }

    fn show_end_message(&mut self, text: &str) {
        self.end_message = Some(text.to_string());
    }

    fn hide_end_message(&mut self) {
        self.end_message = None;
    }

    fn update_hand_state(&mut self, text: &str) {
        self.hand_state = Some(text.to_string());
    }

    fn hide_hand_state(&mut self) {
        self.hand_state = None;
    }
}
