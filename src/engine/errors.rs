use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::deck::DeckError;
use crate::engine::actions::ActionKind;
use crate::engine::game_loop::Phase;

/// Ошибки движка блэкджека.
///
/// Все ошибки локальные: после любой из них состояние движка не меняется.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректная ставка: нужно целое положительное число")]
    InvalidAmount,

    #[error("Недостаточно средств: ставка {requested}, баланс {balance}")]
    InsufficientBalance { requested: Chips, balance: Chips },

    #[error("Действие {action:?} недоступно в фазе {phase:?}")]
    IllegalAction { action: ActionKind, phase: Phase },

    #[error("В колоде не осталось карт")]
    EmptyDeck,
}

impl From<DeckError> for EngineError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => EngineError::EmptyDeck,
        }
    }
}
