mod helpers;

use casino_engine::bank::Bank;
use casino_engine::blackjack::{judge, BlackjackGame, BlackjackRules};
use casino_engine::cards::{Card, DECK_SIZE};
use casino_engine::errors::GameError;
use casino_engine::game::{BlackjackState, GameType, Transition};
use casino_engine::table::{Seat, Table};
use helpers::{DisplayEvent, RecordingButtons, RecordingDisplay};

struct Rig {
    game: BlackjackGame,
    bank: Bank,
    display: RecordingDisplay,
    buttons: RecordingButtons,
}

impl Rig {
    fn new(seed: u64) -> Self {
        Self {
            game: BlackjackGame::new(BlackjackRules::default(), Some(seed)),
            bank: Bank::new(100),
            display: RecordingDisplay::default(),
            buttons: RecordingButtons::default(),
        }
    }

    fn advance(&mut self) -> Result<Transition<BlackjackState>, GameError> {
        let mut table = Table::new(&mut self.bank, &mut self.display, &mut self.buttons);
        self.game.advance(&mut table)
    }

    fn hit(&mut self) -> Result<Card, GameError> {
        let mut table = Table::new(&mut self.bank, &mut self.display, &mut self.buttons);
        self.game.hit(&mut table)
    }
}

#[test]
fn default_rules() {
    let rules = BlackjackRules::default();
    assert_eq!(rules.goal_score, 21);
    assert_eq!(rules.payout, 2);
    assert_eq!(rules.jackpot_payout, 15);
    assert_eq!(rules.max_hand, 13);
    assert_eq!(rules.dealer_stands_above, 16);
}

#[test]
fn state_tags_round_trip_and_reject_unknown() {
    for tag in 0u8..4 {
        let state = BlackjackState::try_from(tag).unwrap();
        assert_eq!(state.next().next().next().next(), state);
    }
    assert_eq!(
        BlackjackState::try_from(4),
        Err(GameError::InvalidState { tag: 4 })
    );
}

#[test]
fn deal_gives_two_each_with_the_hole_card_face_down() {
    let mut rig = Rig::new(31);
    let top: Vec<Card> = rig.game.deck().cards().take(4).collect();

    let t = rig.advance().unwrap();
    assert_eq!(t.to, BlackjackState::Player);
    assert_eq!(rig.bank.balance(), 99);
    assert_eq!(rig.game.deck().len(), DECK_SIZE - 4);

    assert_eq!(rig.game.player().cards(), &top[..2]);
    assert_eq!(rig.game.dealer().cards(), &[top[3], top[2]]);
    assert!(rig.game.dealer().is_hidden(top[3]));
    assert!(!rig.game.dealer().is_hidden(top[2]));
    assert_eq!(
        rig.display.shown(Seat::Dealer),
        vec![(top[3].slot(), false), (top[2].slot(), true)]
    );

    assert_eq!(rig.buttons.deal_label.as_deref(), Some("Stay"));
    assert_eq!(rig.buttons.blackjack_controls, Some(true));
    assert_eq!(rig.buttons.bet_controls, Some(false));
}

#[test]
fn hit_only_during_the_player_turn() {
    let mut rig = Rig::new(12);
    assert_eq!(rig.hit(), Err(GameError::WrongState { state: "entry" }));
    rig.advance().unwrap();
    let card = rig.hit().unwrap();
    assert_eq!(rig.game.player().len(), 3);
    assert_eq!(rig.game.player().cards()[2], card);
    assert!(!rig.game.deck().contains(card));
}

#[test]
fn hit_stops_at_the_hand_limit() {
    let rules = BlackjackRules {
        max_hand: 3,
        ..BlackjackRules::default()
    };
    let mut rig = Rig::new(12);
    rig.game = BlackjackGame::new(rules, Some(12));
    rig.advance().unwrap();
    rig.hit().unwrap();
    assert_eq!(rig.hit(), Err(GameError::HandFull { max: 3 }));
    assert_eq!(rig.game.player().len(), 3);
}

#[test]
fn stay_reveals_and_dealer_draws_to_seventeen() {
    let mut rig = Rig::new(77);
    rig.advance().unwrap();
    let hole = rig.game.dealer().cards()[0];

    rig.advance().unwrap();
    assert_eq!(rig.game.state(), BlackjackState::End);
    assert!(!rig.game.dealer().is_hidden(hole));
    assert!(rig
        .display
        .events
        .contains(&DisplayEvent::Reveal(Seat::Dealer, hole.slot())));
    assert!(rig.game.dealer_value() > 16);
    assert_eq!(rig.buttons.blackjack_controls, Some(false));
}

#[test]
fn dealer_running_the_deck_dry_leaves_the_turn_untouched() {
    let rules = BlackjackRules {
        goal_score: 500,
        dealer_stands_above: 400,
        ..BlackjackRules::default()
    };
    let mut rig = Rig::new(8);
    rig.game = BlackjackGame::new(rules, Some(8));
    rig.advance().unwrap();
    let hole = rig.game.dealer().cards()[0];
    let events = rig.display.events.len();

    assert_eq!(
        rig.advance(),
        Err(GameError::EmptyDeck {
            requested: DECK_SIZE - 3,
            remaining: DECK_SIZE - 4,
        })
    );
    assert_eq!(rig.game.state(), BlackjackState::Player);
    assert_eq!(rig.game.dealer().len(), 2);
    assert!(rig.game.dealer().is_hidden(hole));
    assert_eq!(rig.game.deck().len(), DECK_SIZE - 4);
    assert_eq!(rig.display.events.len(), events);
    assert_eq!(rig.buttons.blackjack_controls, Some(true));
    assert_eq!(rig.bank.balance(), 99);
}

#[test]
fn settle_matches_judge_and_pays() {
    for seed in 0..40 {
        let mut rig = Rig::new(seed);
        rig.advance().unwrap();
        rig.advance().unwrap();
        let (player, dealer) = (rig.game.player_value(), rig.game.dealer_value());
        let verdict = judge(player, dealer, 21);

        let outcome = rig.advance().unwrap().outcome.unwrap();
        assert_eq!(outcome.result, verdict.message());
        assert_eq!(rig.bank.end_message(), Some(verdict.message()));
        let expected = match outcome.payout {
            None => 99,
            Some(p) if p.is_jackpot => 99 + 15,
            Some(_) => 99 + 2,
        };
        assert_eq!(rig.bank.balance(), expected, "seed {}", seed);
    }
}

#[test]
fn reset_returns_both_hands() {
    let mut rig = Rig::new(5);
    for _ in 0..4 {
        rig.advance().unwrap();
    }
    assert_eq!(rig.game.state(), BlackjackState::Entry);
    assert!(rig.game.player().is_empty());
    assert!(rig.game.dealer().is_empty());
    assert!(rig.game.deck().is_full());
    assert_eq!(rig.buttons.deal_label.as_deref(), Some("Deal"));
    assert_eq!(rig.bank.end_message(), None);
    assert!(!rig.display.removed(Seat::Dealer).is_empty());
}
