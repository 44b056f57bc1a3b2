//! # casino-engine: Card Game Engine Core
//!
//! Deterministic engine for two single-player casino games: five-card draw
//! video poker (Jacks or Better and Deuces Wild) and blackjack against a
//! dealer. Games run as small state machines over a shared 52-card deck and
//! talk to the outside world only through the collaborator traits in
//! [`table`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and slot indexing
//! - [`deck`] - Seeded FIFO deck with ChaCha20 shuffling
//! - [`hand`] - Hands with per-slot hold/hidden markers
//! - [`eval`] - Standard poker hand predicates
//! - [`wild`] - Deuces-wild poker hand predicates
//! - [`victory`] - Category dispatch and payout catalogs
//! - [`game`] - State enums and the [`game::GameType`] controller trait
//! - [`poker`] / [`blackjack`] - The two game controllers
//! - [`bank`] - Headless bank implementing [`table::Bet`]
//! - [`engine`] - Session host driving a controller from button presses
//! - [`logger`] - JSONL round records
//! - [`config`] - TOML configuration with environment overrides
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use casino_engine::cards::parse_cards;
//! use casino_engine::victory::{PokerSettings, VictoryTable};
//!
//! let hand = parse_cards("Kh Kd Ks 7c 7h").unwrap();
//! let table = VictoryTable::jacks_or_better();
//! let winner = table.find_winner(&hand, PokerSettings::standard()).unwrap();
//! assert_eq!(winner.name, "Full House");
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use casino_engine::deck::Deck;
//!
//! let a: Vec<_> = Deck::new_with_seed(42).cards().collect();
//! let b: Vec<_> = Deck::new_with_seed(42).cards().collect();
//! assert_eq!(a, b);
//! ```

pub mod bank;
pub mod blackjack;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod game;
pub mod hand;
pub mod logger;
pub mod poker;
pub mod table;
pub mod victory;
pub mod wild;
