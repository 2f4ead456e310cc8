use crate::domain::card::Card;

use super::hand_value::HandValue;
use super::BLACKJACK;

/// Разница между тузом-11 и тузом-1.
const ACE_REDUCTION: u32 = 10;

/// Полная оценка руки: лучшая сумма + «мягкость».
///
/// Все тузы сначала считаются за 11, затем, пока сумма больше 21
/// и остались непониженные тузы, каждый туз по очереди становится единицей.
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut soft_aces: u32 = 0;

    for card in cards {
        total += card.value();
        if card.is_ace() {
            soft_aces += 1;
        }
    }

    while total > BLACKJACK && soft_aces > 0 {
        total -= ACE_REDUCTION;
        soft_aces -= 1;
    }

    HandValue {
        total,
        soft: soft_aces > 0,
    }
}

/// Лучшая сумма очков руки.
pub fn score(cards: &[Card]) -> u32 {
    evaluate(cards).total
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Натуральный блэкджек: ровно две карты и 21 очко.
pub fn is_natural_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}
