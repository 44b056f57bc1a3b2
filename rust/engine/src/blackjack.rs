use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, DECK_SIZE};
use crate::deck::Deck;
use crate::errors::{ConfigError, GameError};
use crate::game::{BlackjackState, GameType, Payout, RoundOutcome, Transition};
use crate::hand::Hand;
use crate::table::{Seat, Table};

/// Value of a blackjack hand.
///
/// Aces are counted last. Each Ace is worth 11 unless the running total
/// already exceeds `target - 11` and this is a player hand, in which case it
/// is worth 1. The dealer always counts Aces as 11. Multiple Aces are valued
/// one at a time against the running total, so the result depends on that
/// path rather than on the best possible total.
///
/// ```
/// use casino_engine::blackjack::hand_value;
/// use casino_engine::cards::parse_cards;
///
/// let aces = parse_cards("Ac Ad Ah").unwrap();
/// assert_eq!(hand_value(&aces, 21, false), 13);
/// assert_eq!(hand_value(&aces, 21, true), 33);
/// ```
pub fn hand_value(cards: &[Card], target: u32, is_dealer: bool) -> u32 {
    let mut ordered: Vec<Card> = cards.to_vec();
    ordered.sort_by_key(|c| (c.rank == Rank::Ace, c.rank));
    ordered.iter().fold(0, |total, card| {
        total
            + match card.rank {
                Rank::Ace if total + 11 > target && !is_dealer => 1,
                Rank::Ace => 11,
                Rank::Jack | Rank::Queen | Rank::King => 10,
                r => r.index() as u32 + 2,
            }
    })
}

/// Table rules for a blackjack session.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackjackRules {
    /// Score both sides aim for
    pub goal_score: u32,
    /// Paid on a win, multiplied by the bet level
    pub payout: u32,
    /// Paid when the player hits the goal exactly
    pub jackpot_payout: u32,
    /// Most cards the player may hold
    pub max_hand: usize,
    /// Dealer keeps drawing while at or below this value
    pub dealer_stands_above: u32,
}

impl Default for BlackjackRules {
    fn default() -> Self {
        Self {
            goal_score: 21,
            payout: 2,
            jackpot_payout: 15,
            max_hand: 13,
            dealer_stands_above: 16,
        }
    }
}

impl BlackjackRules {
    /// Most cards the dealer can end up holding. Every card is worth at
    /// least two, so the dealer stops drawing by `dealer_stands_above / 2 + 1`.
    pub fn dealer_card_limit(&self) -> usize {
        (self.dealer_stands_above as usize / 2 + 1).max(2)
    }

    /// Rejects rules under which a round could run the deck dry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal_score == 0 {
            return Err(ConfigError::Invalid("goal_score must be >0".into()));
        }
        if self.dealer_stands_above >= self.goal_score {
            return Err(ConfigError::Invalid(
                "dealer_stands_above must be below goal_score".into(),
            ));
        }
        if self.max_hand < 2 {
            return Err(ConfigError::Invalid("max_hand must be >=2".into()));
        }
        if self.max_hand + self.dealer_card_limit() > DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_hand must leave room for the dealer (at most {})",
                DECK_SIZE.saturating_sub(self.dealer_card_limit())
            )));
        }
        Ok(())
    }
}

/// Who takes the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlackjackVerdict {
    DealerWins,
    PlayerJackpot,
    PlayerWins,
}

impl BlackjackVerdict {
    pub fn message(self) -> &'static str {
        match self {
            BlackjackVerdict::DealerWins => "Dealer Wins",
            BlackjackVerdict::PlayerJackpot => "Player Wins: Jackpot",
            BlackjackVerdict::PlayerWins => "Player Wins",
        }
    }
}

/// Compares final values. Checked in order: player bust or dealer exactly on
/// goal, then player exactly on goal, then any dealer made hand below goal,
/// and only then a player win.
pub fn judge(player: u32, dealer: u32, goal: u32) -> BlackjackVerdict {
    if player > goal || dealer == goal {
        BlackjackVerdict::DealerWins
    } else if player == goal {
        BlackjackVerdict::PlayerJackpot
    } else if dealer > 0 && dealer < goal {
        BlackjackVerdict::DealerWins
    } else {
        BlackjackVerdict::PlayerWins
    }
}

/// Blackjack controller: deal, player turn, dealer play, settle, reset.
#[derive(Debug)]
pub struct BlackjackGame {
    state: BlackjackState,
    rules: BlackjackRules,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    starting_bank: u32,
}

impl BlackjackGame {
    pub fn new(rules: BlackjackRules, seed: Option<u64>) -> Self {
        Self {
            state: BlackjackState::Entry,
            rules,
            deck: Deck::from_seed(seed),
            player: Hand::new(),
            dealer: Hand::new(),
            starting_bank: crate::bank::STARTING_BANK,
        }
    }

    pub fn with_starting_bank(mut self, bank: u32) -> Self {
        self.starting_bank = bank;
        self
    }

    pub fn rules(&self) -> &BlackjackRules {
        &self.rules
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn player_value(&self) -> u32 {
        hand_value(self.player.cards(), self.rules.goal_score, false)
    }

    pub fn dealer_value(&self) -> u32 {
        hand_value(self.dealer.cards(), self.rules.goal_score, true)
    }

    /// Deals one more card to the player during their turn.
    pub fn hit(&mut self, table: &mut Table<'_>) -> Result<Card, GameError> {
        if self.state != BlackjackState::Player {
            return Err(GameError::WrongState {
                state: self.state.name(),
            });
        }
        if self.player.len() >= self.rules.max_hand {
            return Err(GameError::HandFull {
                max: self.rules.max_hand,
            });
        }
        let card = self.deck.draw()?;
        self.player.add(card);
        table.display.show_card(Seat::Player, card.slot(), true);
        table.display.set_interactive(Seat::Player, card.slot(), false);
        tracing::debug!(card = %card, value = self.player_value(), "player hit");
        Ok(card)
    }

    fn initial_deal(&mut self, table: &mut Table<'_>) -> Result<(), GameError> {
        self.deck.ensure_available(4)?;
        if !table.bet.place_bet() {
            tracing::warn!("blackjack deal blocked: bet cannot be placed");
            return Err(GameError::InsufficientBank);
        }
        let cards = self.deck.draw_n(4)?;
        for &card in &cards[..2] {
            self.player.add(card);
            table.display.show_card(Seat::Player, card.slot(), true);
            table.display.set_interactive(Seat::Player, card.slot(), false);
        }
        self.dealer.add_hidden(cards[3]);
        table.display.show_card(Seat::Dealer, cards[3].slot(), false);
        self.dealer.add(cards[2]);
        table.display.show_card(Seat::Dealer, cards[2].slot(), true);
        for card in [cards[3], cards[2]] {
            table.display.set_interactive(Seat::Dealer, card.slot(), false);
        }

        table.buttons.set_bet_controls(false);
        table.buttons.set_blackjack_controls(true);
        table.buttons.set_deal_label("Stay");
        Ok(())
    }

    /// How many cards the dealer will take, read off the top of the deck
    /// without drawing them.
    fn dealer_draw_count(&self) -> Result<usize, GameError> {
        let mut cards = self.dealer.cards().to_vec();
        let mut upcoming = self.deck.cards();
        while hand_value(&cards, self.rules.goal_score, true) <= self.rules.dealer_stands_above {
            let needed = cards.len() - self.dealer.len() + 1;
            let card = upcoming.next().ok_or(GameError::EmptyDeck {
                requested: needed,
                remaining: self.deck.len(),
            })?;
            cards.push(card);
        }
        Ok(cards.len() - self.dealer.len())
    }

    fn dealer_play(&mut self, table: &mut Table<'_>) -> Result<(), GameError> {
        let count = self.dealer_draw_count()?;
        table.buttons.set_blackjack_controls(false);
        for card in self.dealer.reveal_all() {
            table.display.reveal_card(Seat::Dealer, card.slot());
        }
        for card in self.deck.draw_n(count)? {
            self.dealer.add(card);
            table.display.show_card(Seat::Dealer, card.slot(), true);
        }
        tracing::debug!(value = self.dealer_value(), cards = self.dealer.len(), "dealer stands");
        Ok(())
    }

    fn end_game(&mut self, table: &mut Table<'_>) -> RoundOutcome {
        let player = self.player_value();
        let dealer = self.dealer_value();
        let verdict = judge(player, dealer, self.rules.goal_score);
        table.bet.show_end_message(verdict.message());

        let payout = match verdict {
            BlackjackVerdict::DealerWins => None,
            BlackjackVerdict::PlayerJackpot => Some(Payout {
                amount: self.rules.jackpot_payout,
                is_jackpot: true,
            }),
            BlackjackVerdict::PlayerWins => Some(Payout {
                amount: self.rules.payout,
                is_jackpot: false,
            }),
        };
        if let Some(p) = payout {
            table.bet.update_bank(p.amount, p.is_jackpot);
        }
        tracing::info!(player, dealer, verdict = ?verdict, "blackjack round settled");
        RoundOutcome {
            result: verdict.message().to_string(),
            payout,
        }
    }

    fn new_round(&mut self, table: &mut Table<'_>) {
        let player = self.player.take_all();
        let dealer = self.dealer.take_all();
        for card in &player {
            table.display.remove_card(Seat::Player, card.slot());
        }
        for card in &dealer {
            table.display.remove_card(Seat::Dealer, card.slot());
        }
        self.deck.return_cards(&player);
        self.deck.return_cards(&dealer);
        self.deck.shuffle(true);

        table.buttons.set_bet_controls(true);
        table.buttons.set_deal_clickable(table.bet.can_place_bet());
        table.bet.hide_end_message();
        table.buttons.set_deal_label("Deal");
        table.buttons.set_blackjack_controls(false);
    }
}

impl GameType for BlackjackGame {
    type State = BlackjackState;

    const NAME: &'static str = "blackjack";

    fn state(&self) -> BlackjackState {
        self.state
    }

    fn advance(&mut self, table: &mut Table<'_>) -> Result<Transition<BlackjackState>, GameError> {
        let from = self.state;
        let mut outcome = None;
        match from {
            BlackjackState::Entry => self.initial_deal(table)?,
            BlackjackState::Player => self.dealer_play(table)?,
            BlackjackState::End => outcome = Some(self.end_game(table)),
            BlackjackState::Reset => self.new_round(table),
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
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.state = BlackjackState::Entry;
    }

    fn starting_bank(&self) -> u32 {
        self.starting_bank
    }

    fn seed(&self) -> u64 {
        self.deck.seed()
    }

    fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    fn dealer_cards(&self) -> &[Card] {
        self.dealer.cards()
    }
}
