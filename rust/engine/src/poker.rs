use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{GameType, Payout, PokerState, RoundOutcome, Transition};
use crate::hand::Hand;
use crate::table::{Seat, Table};
use crate::victory::{PokerSettings, VictoryTable};

/// Cards in a draw poker hand
pub const HAND_SIZE: usize = 5;

/// Shown when the final hand matches nothing in the catalog
pub const NO_WIN: &str = "No Win";

/// Five-card draw controller: deal, hold, redraw, score, reset.
///
/// # Examples
///
/// ```
/// use casino_engine::bank::Bank;
/// use casino_engine::game::{GameType, PokerState};
/// use casino_engine::poker::PokerGame;
/// use casino_engine::table::{NoButtons, NoDisplay, Table};
/// use casino_engine::victory::{PokerSettings, VictoryTable};
///
/// let mut game = PokerGame::new(VictoryTable::jacks_or_better(), PokerSettings::standard(), Some(7));
/// let (mut bank, mut display, mut buttons) = (Bank::new(100), NoDisplay, NoButtons);
/// let mut table = Table::new(&mut bank, &mut display, &mut buttons);
///
/// game.advance(&mut table).unwrap();
/// assert_eq!(game.state(), PokerState::Redeal);
/// assert_eq!(game.hand().len(), 5);
/// assert_eq!(game.deck().len(), 47);
/// ```
#[derive(Debug)]
pub struct PokerGame {
    state: PokerState,
    settings: PokerSettings,
    catalog: VictoryTable,
    deck: Deck,
    hand: Hand,
    starting_bank: u32,
}

impl PokerGame {
    pub fn new(catalog: VictoryTable, settings: PokerSettings, seed: Option<u64>) -> Self {
        Self {
            state: PokerState::Entry,
            settings,
            catalog,
            deck: Deck::from_seed(seed),
            hand: Hand::new(),
            starting_bank: crate::bank::STARTING_BANK,
        }
    }

    pub fn with_starting_bank(mut self, bank: u32) -> Self {
        self.starting_bank = bank;
        self
    }

    pub fn settings(&self) -> PokerSettings {
        self.settings
    }

    pub fn catalog(&self) -> &VictoryTable {
        &self.catalog
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Holds are only open between the deal and the redraw.
    pub fn holds_enabled(&self) -> bool {
        self.state == PokerState::Redeal
    }

    pub fn toggle_hold(&mut self, position: usize, table: &mut Table<'_>) -> Result<bool, GameError> {
        if !self.holds_enabled() {
            return Err(GameError::WrongState {
                state: self.state.name(),
            });
        }
        let held = self.hand.toggle_hold(position)?;
        let card = self.hand.cards()[position];
        table.display.set_held(Seat::Player, card.slot(), held);
        Ok(held)
    }

    fn initial_deal(&mut self, table: &mut Table<'_>) -> Result<(), GameError> {
        self.deck.ensure_available(HAND_SIZE)?;
        if !table.bet.place_bet() {
            tracing::warn!("poker deal blocked: bet cannot be placed");
            return Err(GameError::InsufficientBank);
        }
        let cards = self.deck.draw_n(HAND_SIZE)?;
        for card in cards {
            self.hand.add(card);
            table.display.show_card(Seat::Player, card.slot(), true);
            table.display.set_interactive(Seat::Player, card.slot(), true);
        }
        table.buttons.set_bet_controls(false);

        if let Some(vc) = self.catalog.find_winner(self.hand.cards(), self.settings) {
            table.bet.update_hand_state(&vc.name);
        }
        Ok(())
    }

    fn redeal(&mut self, table: &mut Table<'_>) -> Result<(), GameError> {
        let discarded = self.hand.remove_unheld();
        for card in &discarded {
            table.display.remove_card(Seat::Player, card.slot());
        }
        self.deck.return_cards(&discarded);
        for card in self.deck.draw_n(discarded.len())? {
            self.hand.add(card);
            table.display.show_card(Seat::Player, card.slot(), true);
        }
        for card in self.hand.cards() {
            table.display.set_interactive(Seat::Player, card.slot(), false);
        }

        match self.catalog.find_winner(self.hand.cards(), self.settings) {
            Some(vc) => table.bet.update_hand_state(&vc.name),
            None => table.bet.hide_hand_state(),
        }
        Ok(())
    }

    fn end_game(&mut self, table: &mut Table<'_>) -> RoundOutcome {
        let Some(vc) = self.catalog.find_winner(self.hand.cards(), self.settings) else {
            table.bet.show_end_message(NO_WIN);
            return RoundOutcome {
                result: NO_WIN.to_string(),
                payout: None,
            };
        };
        let payout = if vc.is_jackpot {
            Payout {
                amount: vc.jackpot_payout,
                is_jackpot: true,
            }
        } else {
            Payout {
                amount: vc.payout,
                is_jackpot: false,
            }
        };
        table.bet.update_bank(payout.amount, payout.is_jackpot);
        table.bet.show_end_message(&vc.name);
        RoundOutcome {
            result: vc.name.clone(),
            payout: Some(payout),
        }
    }

    fn new_round(&mut self, table: &mut Table<'_>) {
        let cards = self.hand.take_all();
        for card in &cards {
            table.display.remove_card(Seat::Player, card.slot());
        }
        self.deck.return_cards(&cards);
        self.deck.shuffle(true);

        table.buttons.set_bet_controls(true);
        table.buttons.set_deal_clickable(table.bet.can_place_bet());
        table.bet.hide_end_message();
        table.bet.hide_hand_state();
    }
}

impl GameType for PokerGame {
    type State = PokerState;

    const NAME: &'static str = "poker";

    fn state(&self) -> PokerState {
        self.state
    }

    fn advance(&mut self, table: &mut Table<'_>) -> Result<Transition<PokerState>, GameError> {
        let from = self.state;
        let mut outcome = None;
        match from {
            PokerState::Entry => self.initial_deal(table)?,
            PokerState::Redeal => self.redeal(table)?,
            PokerState::End => outcome = Some(self.end_game(table)),
            PokerState::Reset => self.new_round(table),
        }
        self.state = from.next();
        tracing::debug!(game = Self::NAME, from = from.name(), to = self.state.name(), "advanced");
        Ok(Transition {
            from,
            to: self.state,
            outcome,
        })
    }

    fn reset(&mut self, seed: Option<u64>) {
        self.deck = Deck::from_seed(seed);
        self.hand = Hand::new();
        self.state = PokerState::Entry;
    }

    fn starting_bank(&self) -> u32 {
        self.starting_bank
    }

    fn seed(&self) -> u64 {
        self.deck.seed()
    }

    fn player_cards(&self) -> &[Card] {
        self.hand.cards()
    }
}
