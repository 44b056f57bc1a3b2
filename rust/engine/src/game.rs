use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::table::Table;

/// Phases of a five-card draw round. Cyclic: `Reset` leads back to `Entry`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PokerState {
    /// Bet placed, five cards dealt, holds enabled
    Entry,
    /// Unheld cards replaced, holds locked
    Redeal,
    /// Hand scored and paid
    End,
    /// Cards returned, deck reshuffled
    Reset,
}

impl PokerState {
    /// The state reached by advancing out of `self`.
    pub fn next(self) -> Self {
        match self {
            PokerState::Entry => PokerState::Redeal,
            PokerState::Redeal => PokerState::End,
            PokerState::End => PokerState::Reset,
            PokerState::Reset => PokerState::Entry,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PokerState::Entry => "entry",
            PokerState::Redeal => "redeal",
            PokerState::End => "end",
            PokerState::Reset => "reset",
        }
    }
}

impl TryFrom<u8> for PokerState {
    type Error = GameError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(PokerState::Entry),
            1 => Ok(PokerState::Redeal),
            2 => Ok(PokerState::End),
            3 => Ok(PokerState::Reset),
            _ => Err(GameError::InvalidState { tag }),
        }
    }
}

/// Phases of a blackjack round. Cyclic: `Reset` leads back to `Entry`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum BlackjackState {
    /// Bet placed, two cards each, dealer hole card hidden
    Entry,
    /// Player hits until standing; advancing plays the dealer
    Player,
    /// Hands compared and paid
    End,
    /// Cards returned, deck reshuffled
    Reset,
}

impl BlackjackState {
    pub fn next(self) -> Self {
        match self {
            BlackjackState::Entry => BlackjackState::Player,
            BlackjackState::Player => BlackjackState::End,
            BlackjackState::End => BlackjackState::Reset,
            BlackjackState::Reset => BlackjackState::Entry,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlackjackState::Entry => "entry",
            BlackjackState::Player => "player",
            BlackjackState::End => "end",
            BlackjackState::Reset => "reset",
        }
    }
}

impl TryFrom<u8> for BlackjackState {
    type Error = GameError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(BlackjackState::Entry),
            1 => Ok(BlackjackState::Player),
            2 => Ok(BlackjackState::End),
            3 => Ok(BlackjackState::Reset),
            _ => Err(GameError::InvalidState { tag }),
        }
    }
}

/// What the bet collaborator was asked to pay.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub amount: u32,
    pub is_jackpot: bool,
}

/// Result of a finished round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// End-of-round message, e.g. "Full House" or "Dealer Wins"
    pub result: String,
    #[serde(default)]
    pub payout: Option<Payout>,
}

/// One step of a controller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Transition<S> {
    pub from: S,
    pub to: S,
    /// Set on the step that scores the round
    pub outcome: Option<RoundOutcome>,
}

/// Shared surface of the per-game controllers.
pub trait GameType {
    type State: Copy + Eq + fmt::Debug;

    const NAME: &'static str;

    fn state(&self) -> Self::State;

    /// Runs exactly one state transition.
    ///
    /// Every failure is detected before anything changes hands: on error the
    /// state, hands, deck and bank are as they were. Drive this through
    /// [`crate::engine::Engine::deal_pressed`] so finished rounds get logged.
    fn advance(&mut self, table: &mut Table<'_>) -> Result<Transition<Self::State>, GameError>;

    /// Abandons the round: fresh deck, empty hands, back to the first state.
    fn reset(&mut self, seed: Option<u64>);

    fn starting_bank(&self) -> u32;

    fn seed(&self) -> u64;

    fn player_cards(&self) -> &[Card];

    fn dealer_cards(&self) -> &[Card] {
        &[]
    }
}
