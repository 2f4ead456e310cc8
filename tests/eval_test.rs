//! Тесты подсчёта очков (crate::eval).

use blackjack_engine::domain::card::{Card, Rank, Suit};
use blackjack_engine::eval::{describe_hand, evaluate, is_bust, is_natural_blackjack, score, HandValue};

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

#[test]
fn score_is_stable_across_calls() {
    let hand = cards(&["As", "Ah", "9c", "Kd"]);
    let first = score(&hand);
    for _ in 0..10 {
        assert_eq!(score(&hand), first);
    }
    assert_eq!(first, 21);
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(score(&[]), 0);
    assert!(!is_bust(&[]));
    assert!(!is_natural_blackjack(&[]));
}

#[test]
fn single_ace_is_eleven() {
    for suit in Suit::ALL {
        assert_eq!(score(&[Card::new(Rank::Ace, suit)]), 11);
    }
}

/// Туз + карта: при переборе туз становится 1, иначе остаётся 11.
#[test]
fn ace_plus_one_card() {
    for rank in Rank::ALL {
        let other = Card::new(rank, Suit::Clubs);
        let hand = [Card::new(Rank::Ace, Suit::Spades), other];
        let raw = 11 + other.value();
        let expected = if raw > 21 { raw - 10 } else { raw };
        assert_eq!(score(&hand), expected, "A + {other}");
    }

    assert_eq!(score(&cards(&["As", "Kc"])), 21);
    assert_eq!(score(&cards(&["As", "Ac"])), 12);
}

/// Раздача не на 2 карты: туз понижается, как только сумма больше 21.
#[test]
fn ace_reduced_after_extra_cards() {
    assert_eq!(score(&cards(&["As", "Kc", "5d"])), 16);
    assert_eq!(score(&cards(&["As", "6c", "9d"])), 16);
    assert_eq!(score(&cards(&["As", "6c", "4d"])), 21);
}

#[test]
fn four_aces_score_fourteen() {
    let hand = cards(&["As", "Ac", "Ah", "Ad"]);
    assert_eq!(score(&hand), 14);
}

#[test]
fn many_aces_with_tens() {
    // 11 + 10 + 1 + 1 = 23 -> все тузы по 1: 1+10+1+1 = 13
    assert_eq!(score(&cards(&["As", "Kc", "Ah", "Ad"])), 13);
    // A A A A K 7 = 4 + 17 = 21
    assert_eq!(score(&cards(&["As", "Ac", "Ah", "Ad", "Kc", "7s"])), 21);
}

#[test]
fn hands_without_aces_are_plain_sums() {
    assert_eq!(score(&cards(&["10s", "9c"])), 19);
    assert_eq!(score(&cards(&["Js", "Qc", "2d"])), 22);
    assert!(is_bust(&cards(&["Js", "Qc", "2d"])));
}

#[test]
fn natural_blackjack_requires_two_cards() {
    assert!(is_natural_blackjack(&cards(&["As", "Kc"])));
    assert!(is_natural_blackjack(&cards(&["10h", "Ad"])));
    assert!(!is_natural_blackjack(&cards(&["7s", "7c", "7d"])));
    assert!(!is_natural_blackjack(&cards(&["As", "Qc", "Kd"])));
    assert!(!is_natural_blackjack(&cards(&["9s", "Kc"])));
}

#[test]
fn soft_and_hard_totals() {
    assert_eq!(evaluate(&cards(&["As", "6c"])), HandValue { total: 17, soft: true });
    assert_eq!(evaluate(&cards(&["As", "6c", "Kd"])), HandValue { total: 17, soft: false });
    assert_eq!(evaluate(&cards(&["10s", "7c"])), HandValue { total: 17, soft: false });
    assert_eq!(evaluate(&cards(&["As", "Ac", "5d"])), HandValue { total: 17, soft: true });
}

#[test]
fn describe_hand_labels() {
    let bj = cards(&["As", "Kc"]);
    assert_eq!(describe_hand(evaluate(&bj), bj.len()), "Блэкджек");

    let soft = cards(&["As", "6c"]);
    assert_eq!(describe_hand(evaluate(&soft), soft.len()), "Мягкие 17");

    let bust = cards(&["Ks", "Qc", "5d"]);
    assert_eq!(describe_hand(evaluate(&bust), bust.len()), "Перебор (25)");

    let hard = cards(&["10s", "9c"]);
    assert_eq!(describe_hand(evaluate(&hard), hard.len()), "19");

    let three_card_21 = cards(&["7s", "7c", "7d"]);
    assert_eq!(describe_hand(evaluate(&three_card_21), three_card_21.len()), "21");
}
