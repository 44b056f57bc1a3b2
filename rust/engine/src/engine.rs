use crate::bank::Bank;
use crate::blackjack::BlackjackGame;
use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{GameType, RoundOutcome, Transition};
use crate::logger::{RoundLogger, RoundRecord};
use crate::poker::PokerGame;
use crate::table::{Bet, Buttons, HandDisplay, Table};

/// Session host: owns one game controller, the bank, and an optional round log.
/// Each press of the deal button advances the game by exactly one state.
///
/// # Examples
///
/// ```
/// use casino_engine::blackjack::{BlackjackGame, BlackjackRules};
/// use casino_engine::engine::Engine;
/// use casino_engine::game::BlackjackState;
/// use casino_engine::table::{NoButtons, NoDisplay};
///
/// let mut engine = Engine::new(BlackjackGame::new(BlackjackRules::default(), Some(99)));
/// let (mut display, mut buttons) = (NoDisplay, NoButtons);
///
/// engine.deal_pressed(&mut display, &mut buttons).unwrap();
/// assert_eq!(engine.game().player().len(), 2);
/// assert_eq!(engine.bank().balance(), 99);
///
/// engine.deal_pressed(&mut display, &mut buttons).unwrap(); // stay: dealer plays
/// let settled = engine.deal_pressed(&mut display, &mut buttons).unwrap();
/// assert_eq!(settled.from, BlackjackState::End);
/// assert!(settled.outcome.is_some());
/// ```
pub struct Engine<G: GameType> {
    game: G,
    bank: Bank,
    logger: Option<RoundLogger>,
}

impl<G: GameType> Engine<G> {
    pub fn new(game: G) -> Self {
        let bank = Bank::new(game.starting_bank());
        Self {
            game,
            bank,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: RoundLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Advances the game one state. Finished rounds are written to the log.
    pub fn deal_pressed(
        &mut self,
        display: &mut dyn HandDisplay,
        buttons: &mut dyn Buttons,
    ) -> Result<Transition<G::State>, GameError> {
        let mut table = Table::new(&mut self.bank, display, buttons);
        let transition = self.game.advance(&mut table)?;
        if let Some(outcome) = &transition.outcome {
            self.record(outcome);
        }
        Ok(transition)
    }

    pub fn increase_bet(&mut self, buttons: &mut dyn Buttons) {
        self.bank.increase_bet();
        buttons.set_deal_clickable(self.bank.can_place_bet());
    }

    pub fn decrease_bet(&mut self, buttons: &mut dyn Buttons) {
        self.bank.decrease_bet();
        buttons.set_deal_clickable(self.bank.can_place_bet());
    }

    /// Throws the current round away and rebuilds the deck and controller
    /// state from scratch. The bank is kept.
    pub fn hard_reset(&mut self, seed: Option<u64>) {
        self.game.reset(seed);
        tracing::info!(game = G::NAME, seed = self.game.seed(), "session reset");
    }

    fn record(&mut self, outcome: &RoundOutcome) {
        tracing::info!(
            game = G::NAME,
            result = %outcome.result,
            paid = ?self.bank.last_payout(),
            balance = self.bank.balance(),
            "round finished"
        );
        let Some(logger) = self.logger.as_mut() else {
            return;
        };
        let record = RoundRecord {
            round_id: logger.next_id(),
            game: G::NAME.to_string(),
            seed: self.game.seed(),
            player: self.game.player_cards().to_vec(),
            dealer: self.game.dealer_cards().to_vec(),
            result: outcome.result.clone(),
            payout: outcome.payout.and(self.bank.last_payout()),
            ts: None,
            meta: Some(serde_json::json!({
                "bet": self.bank.multiplier(),
                "balance": self.bank.balance(),
            })),
        };
        if let Err(err) = logger.write(&record) {
            tracing::error!(round_id = %record.round_id, error = %err, "failed to write round record");
        }
    }
}

impl Engine<PokerGame> {
    /// Flips the hold marker on the card at `position` during Redeal.
    pub fn toggle_hold(
        &mut self,
        position: usize,
        display: &mut dyn HandDisplay,
        buttons: &mut dyn Buttons,
    ) -> Result<bool, GameError> {
        let mut table = Table::new(&mut self.bank, display, buttons);
        self.game.toggle_hold(position, &mut table)
    }
}

impl Engine<BlackjackGame> {
    /// Deals one card to the player. Rounds only settle through
    /// [`Engine::deal_pressed`], so a hit never skips the round log.
    pub fn hit(
        &mut self,
        display: &mut dyn HandDisplay,
        buttons: &mut dyn Buttons,
    ) -> Result<Card, GameError> {
        let mut table = Table::new(&mut self.bank, display, buttons);
        self.game.hit(&mut table)
    }
}
