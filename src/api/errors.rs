use serde::{Deserialize, Serialize};

use crate::engine::{ActionKind, EngineError, Phase};

/// Ошибки внешнего API (то, что отдаём слою отрисовки / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битая ставка, неизвестная команда).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе.
    InvalidCommand(String),

    /// Прочие ошибки движка.
    EngineError(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m) | ApiError::InvalidCommand(m) | ApiError::EngineError(m) => m,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidAmount | EngineError::InsufficientBalance { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            EngineError::IllegalAction { action, phase } => {
                ApiError::InvalidCommand(illegal_action_message(action, phase))
            }
            EngineError::EmptyDeck => ApiError::EngineError(err.to_string()),
        }
    }
}

/// Понятное сообщение вместо "Deal недоступно в фазе Idle".
fn illegal_action_message(action: ActionKind, phase: Phase) -> String {
    match (action, phase) {
        (_, Phase::Bankrupt) => "Баланс исчерпан. Игра окончена.".to_string(),
        (ActionKind::Deal, Phase::Idle) => "Сначала сделайте ставку.".to_string(),
        (ActionKind::PlaceBet, Phase::BetCommitted) => {
            "Ставка уже сделана. Нажмите Deal.".to_string()
        }
        (ActionKind::PlaceBet, _) | (ActionKind::Deal, _) => {
            "Раунд уже идёт.".to_string()
        }
        (ActionKind::Hit, _) | (ActionKind::Stand, _) => "Сейчас не ваш ход.".to_string(),
        (ActionKind::DealerStep, _) => "Сейчас не ход дилера.".to_string(),
    }
}
