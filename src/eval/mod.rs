//! Модуль подсчёта очков руки в блэкджеке.
//!
//! Основные функции:
//!   `score(cards) -> u32`
//!   `is_natural_blackjack(cards) -> bool`

pub mod evaluator;
pub mod hand_value;

/// Порог перебора.
pub const BLACKJACK: u32 = 21;

pub use evaluator::{evaluate, is_bust, is_natural_blackjack, score};
pub use hand_value::{describe_hand, HandValue};
