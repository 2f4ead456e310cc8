use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::eval::{self, HandValue};

/// Рука участника: карты только добавляются, очищается в начале нового раунда.
///
/// Очки нигде не кэшируются, всегда считаются заново из `cards`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn score(&self) -> u32 {
        eval::score(&self.cards)
    }

    pub fn value(&self) -> HandValue {
        eval::evaluate(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        eval::is_bust(&self.cards)
    }

    pub fn is_natural_blackjack(&self) -> bool {
        eval::is_natural_blackjack(&self.cards)
    }
}
