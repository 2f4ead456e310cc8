use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Тип действия: то, что слой отрисовки может включать/выключать.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    PlaceBet,
    Deal,
    Hit,
    Stand,
    /// Очередной шаг автоматического дилера (для анимации).
    DealerStep,
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    PlaceBet(Chips),
    Deal,
    Hit,
    Stand,
}

impl PlayerAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::PlaceBet(_) => ActionKind::PlaceBet,
            PlayerAction::Deal => ActionKind::Deal,
            PlayerAction::Hit => ActionKind::Hit,
            PlayerAction::Stand => ActionKind::Stand,
        }
    }
}
