mod helpers;

use casino_engine::victory::{Category, PokerSettings};
use helpers::cards;

fn std_hit(cat: Category, hand: &str) -> bool {
    cat.is_satisfied(&cards(hand), PokerSettings::standard())
}

fn wild_hit(cat: Category, hand: &str) -> bool {
    cat.is_satisfied(&cards(hand), PokerSettings::deuces_wild())
}

#[test]
fn royal_flush_is_natural_only() {
    let cat = Category::RoyalFlush;
    let checks: [fn(Category, &str) -> bool; 2] = [std_hit, wild_hit];
    for hit in checks {
        assert!(hit(cat, "Td Ad Jd Qd Kd"));
        assert!(!hit(cat, "Td Ad Jh Qd Kd"));
        assert!(!hit(cat, "Td Ad 2d 3d Kd"));
        assert!(!hit(cat, "4d Ad 2d 3d 5d"));
        assert!(!hit(cat, "Td 2d 3d 4d Kd"));
    }
    assert!(!wild_hit(cat, "Td 2d Qd Jd Kd"));
}

#[test]
fn straight_standard() {
    let cat = Category::Straight;
    assert!(std_hit(cat, "2d 3s 4d 5s 6h"));
    assert!(std_hit(cat, "As 2s 3d 4d 5d"), "ace low");
    assert!(std_hit(cat, "Td Ad Jd Qd Kd"), "ace high");
    assert!(std_hit(cat, "9c Td Jh Qs Kd"), "nine to king");
    assert!(!std_hit(cat, "3d 4d Ad 7d Kd"));
    assert!(!std_hit(cat, "Qd Kd Ad 2s 3h"), "no wrap around");
    assert!(!std_hit(cat, "4d 5s 6h 7c 7d"));
}

#[test]
fn straight_with_deuces() {
    let cat = Category::Straight;
    assert!(!wild_hit(cat, "2d 4d Ad 7d Kd"));
    assert!(wild_hit(cat, "2d 3d 4d 5d 6d"));
    assert!(wild_hit(cat, "Ad 2d 2c 2h 2s"));
    assert!(wild_hit(cat, "3d 4d 2d 6d 7d"));
    assert!(wild_hit(cat, "Td 2d Jd Qd Kd"));
    assert!(!wild_hit(cat, "2d Kd 3h 2h Js"));
    assert!(!wild_hit(cat, "8c 3d 4c 4s 2c"), "paired ranks never straighten");
    assert!(wild_hit(cat, "5c 3d 4c As 2c"));
}

#[test]
fn flush() {
    let cat = Category::Flush;
    assert!(!std_hit(cat, "2d 3s 4d 5s 6h"));
    assert!(!std_hit(cat, "As 2s 3d 4d 5d"));
    assert!(std_hit(cat, "Td Ad Jd Qd Kd"));
    assert!(std_hit(cat, "3d 4d Ad 7d Kd"));
    assert!(!wild_hit(cat, "2s 4d Ad 7d Kd"), "deuces are not wild for suit");
}

#[test]
fn two_pair() {
    let cat = Category::TwoPair;
    assert!(std_hit(cat, "2d 2s 4d 5s 5h"));
    assert!(std_hit(cat, "Kd Ks 4d Qs Qh"));
    assert!(!std_hit(cat, "Kd Ks 4d Qs Jh"));
    assert!(!std_hit(cat, "Kd Ks Kh Qs Jh"), "three of a kind is one pair");
}

#[test]
fn three_of_a_kind() {
    let cat = Category::ThreeOfAKind;
    assert!(std_hit(cat, "2d 2s 2h 5s 4h"));
    assert!(std_hit(cat, "Kd Ks Kh 5s 4h"));
    assert!(!std_hit(cat, "2d 2s 3h 5s 4h"));

    assert!(wild_hit(cat, "2d 2s 2h 5s 4h"));
    assert!(wild_hit(cat, "Kd Ks 2h 5s 4h"));
    assert!(!wild_hit(cat, "2d Ts 3h 5s 4h"));
    assert!(wild_hit(cat, "2d 2s 3h 5s 4h"));
    assert!(wild_hit(cat, "Ad As 2h Qs 9h"));
}

#[test]
fn four_of_a_kind() {
    let cat = Category::FourOfAKind;
    assert!(std_hit(cat, "2d 2s 2h 2c 4h"));
    assert!(std_hit(cat, "4h 2d 2s 2h 2c"));
    assert!(std_hit(cat, "Kd Ks Kh Kc 4h"));
    assert!(!std_hit(cat, "2d 2s 3h 5s 4h"));

    assert!(wild_hit(cat, "2d 2s 2h 2c 4h"));
    assert!(wild_hit(cat, "4h 2d 2s 2h 2c"));
    assert!(wild_hit(cat, "Kd Ks 2h 2c 4h"));
    assert!(!wild_hit(cat, "2d 2s 3h 5s 4h"));
    assert!(wild_hit(cat, "2d As Ah Ac Ad"));
}

#[test]
fn full_house() {
    let cat = Category::FullHouse;
    assert!(std_hit(cat, "2d 2s 2h 5s 5h"));
    assert!(std_hit(cat, "Kd Ks Kh Qs Qh"));
    assert!(!std_hit(cat, "2d 2s 3h 5s 4h"));
    assert!(!std_hit(cat, "2d 2s 2h 5s 4h"));

    assert!(wild_hit(cat, "2d 2s 2h 5s 5h"));
    assert!(wild_hit(cat, "Kd 2s Kh 2c Qh"));
    assert!(wild_hit(cat, "2d 2s 3h 2c 4h"));
    assert!(wild_hit(cat, "2d 2s 2h 5s 4h"));
}

#[test]
fn jacks_or_better_ignores_aces() {
    let cat = Category::JacksOrBetter;
    assert!(std_hit(cat, "Jd 3s 5h 7c 9d"));
    assert!(std_hit(cat, "Kd 3s 5h 7c 9d"));
    assert!(!std_hit(cat, "Ad 3s 5h 7c 9d"));
    assert!(!std_hit(cat, "Td 3s 5h 7c 9d"));
}

#[test]
fn straight_flush() {
    let cat = Category::StraightFlush;
    assert!(std_hit(cat, "5h 6h 7h 8h 9h"));
    assert!(!std_hit(cat, "5h 6h 7h 8h 9c"));
    assert!(wild_hit(cat, "5h 2h 7h 8h 9h"));
    assert!(!wild_hit(cat, "5h 2c 7h 8h 9h"));
}
