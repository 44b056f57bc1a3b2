use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: requested {requested} card(s), {remaining} remaining")]
    EmptyDeck { requested: usize, remaining: usize },
    #[error("Card {card} is already in the deck")]
    DuplicateCardReturn { card: Card },
    #[error("Invalid game state tag: {tag}")]
    InvalidState { tag: u8 },
    #[error("Action not allowed in the {state} state")]
    WrongState { state: &'static str },
    #[error("Insufficient bank to place the bet")]
    InsufficientBank,
    #[error("Hand is full ({max} cards)")]
    HandFull { max: usize },
    #[error("No card at hand position {index}")]
    NoSuchCard { index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid card code: {0:?}")]
pub struct ParseCardError(pub String);
