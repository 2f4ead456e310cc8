use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::RoundId;
use crate::engine::outcome::Outcome;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка принята и списана с баланса.
    BetPlaced {
        amount: Chips,
        balance_after: Chips,
    },

    /// Свежая колода, по две карты обоим.
    /// Вторая карта дилера лежит рубашкой вверх до конца хода игрока.
    InitialDeal {
        round_id: RoundId,
        player: Vec<Card>,
        dealer: Vec<Card>,
    },

    /// Игрок взял карту.
    PlayerHit { card: Card, score: u32 },

    /// Игрок остановился (сам или автоматически на натуральном 21).
    PlayerStood { score: u32 },

    /// Дилер взял карту. Одно событие = один шаг анимации.
    DealerDrew { card: Card, score: u32 },

    /// Дилер остановился (17+ или перебор).
    DealerStood { score: u32 },

    /// Итог раунда и выплата.
    RoundSettled {
        outcome: Outcome,
        payout: Chips,
        balance_after: Chips,
    },

    /// Баланс обнулился, игра окончена.
    Bankrupt,
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история одного раунда (от ставки до расчёта).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Промежуточные состояния руки дилера после каждого добора.
    pub fn dealer_draws(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            RoundEventKind::DealerDrew { card, score } => Some((card, score)),
            _ => None,
        })
    }
}
