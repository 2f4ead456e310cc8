use serde::{Deserialize, Serialize};

use super::BLACKJACK;

/// Результат подсчёта руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandValue {
    /// Лучшая сумма очков.
    pub total: u32,
    /// Есть ли туз, который всё ещё считается за 11.
    pub soft: bool,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Человеко-читаемое описание руки: "Блэкджек", "Мягкие 17", "Перебор (23)".
pub fn describe_hand(value: HandValue, card_count: usize) -> String {
    if card_count == 2 && value.total == BLACKJACK {
        return "Блэкджек".to_string();
    }
    if value.is_bust() {
        return format!("Перебор ({})", value.total);
    }
    if value.soft {
        format!("Мягкие {}", value.total)
    } else {
        value.total.to_string()
    }
}
