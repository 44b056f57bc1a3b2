mod helpers;

use casino_engine::blackjack::{hand_value, judge, BlackjackVerdict};
use helpers::cards;

#[test]
fn ace_and_king_is_21() {
    assert_eq!(hand_value(&cards("Ac Kc"), 21, false), 21);
    assert_eq!(hand_value(&cards("Ac Kc"), 21, true), 21);
}

#[test]
fn player_aces_soften_but_dealer_aces_do_not() {
    let aces = cards("Ac Ad Ah");
    assert_eq!(hand_value(&aces, 21, false), 13);
    assert_eq!(hand_value(&aces, 21, true), 33);
}

#[test]
fn aces_are_counted_after_other_cards() {
    assert_eq!(hand_value(&cards("Ac Kc 2c"), 21, false), 13);
    assert_eq!(hand_value(&cards("2c Ac Kc"), 21, false), 13);
}

#[test]
fn face_cards_count_ten() {
    assert_eq!(hand_value(&cards("2s Qd 6h"), 21, false), 18);
    assert_eq!(hand_value(&cards("Js Kd"), 21, true), 20);
    assert_eq!(hand_value(&[], 21, false), 0);
}

#[test]
fn verdict_precedence() {
    use BlackjackVerdict::*;
    assert_eq!(judge(22, 18, 21), DealerWins, "player bust");
    assert_eq!(judge(21, 21, 21), DealerWins, "dealer on goal beats player on goal");
    assert_eq!(judge(21, 18, 21), PlayerJackpot);
    assert_eq!(judge(21, 25, 21), PlayerJackpot);
    assert_eq!(judge(20, 18, 21), DealerWins, "any dealer hand under goal wins");
    assert_eq!(judge(15, 19, 21), DealerWins);
    assert_eq!(judge(18, 24, 21), PlayerWins, "dealer bust");
}

#[test]
fn verdict_messages() {
    assert_eq!(BlackjackVerdict::DealerWins.message(), "Dealer Wins");
    assert_eq!(BlackjackVerdict::PlayerJackpot.message(), "Player Wins: Jackpot");
    assert_eq!(BlackjackVerdict::PlayerWins.message(), "Player Wins");
}
