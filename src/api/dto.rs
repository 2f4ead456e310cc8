use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::RoundId;
use crate::engine::{ActionKind, OutcomeKind, Phase, RoundSummary};

/// Одна карта на столе. Закрытая карта не раскрывает ни ранг, ни масть.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardViewDto {
    pub face_up: bool,
    pub card: Option<Card>,
    /// Готовый текст для отрисовки: "A♠" или "??".
    pub label: String,
    pub red: bool,
}

impl CardViewDto {
    pub fn face_up(card: Card) -> Self {
        Self {
            face_up: true,
            card: Some(card),
            label: card.to_string(),
            red: card.suit.is_red(),
        }
    }

    pub fn face_down() -> Self {
        Self {
            face_up: false,
            card: None,
            label: "??".to_string(),
            red: false,
        }
    }
}

/// Рука участника в том виде, в каком её можно показать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub cards: Vec<CardViewDto>,
    /// Полные очки, только если все карты открыты.
    pub score: Option<u32>,
    /// Текст очков: "19", "Мягкие 17", "7 + ?".
    pub score_label: String,
}

/// DTO всего стола для слоя отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameViewDto {
    pub round_id: RoundId,
    pub phase: Phase,
    pub balance: Chips,
    pub current_bet: Chips,
    pub player: HandViewDto,
    pub dealer: HandViewDto,
    pub dealer_revealed: bool,
    pub allowed_actions: Vec<ActionKind>,
    pub message: String,
    pub last_round: Option<RoundSummaryDto>,
}

/// Итог раунда для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummaryDto {
    pub round_id: RoundId,
    pub outcome: OutcomeKind,
    /// Множитель как число (0, 1, 2, 2.5).
    pub multiplier: f64,
    pub player_score: u32,
    pub dealer_score: u32,
    pub bet: Chips,
    pub payout: Chips,
    pub net: i64,
    pub balance_after: Chips,
    pub bankrupt: bool,
    pub message: String,
}

impl From<&RoundSummary> for RoundSummaryDto {
    fn from(s: &RoundSummary) -> Self {
        let mut message = s.outcome.describe();
        if s.bankrupt {
            message.push_str(" Баланс исчерпан! Игра окончена.");
        }

        Self {
            round_id: s.round_id,
            outcome: s.outcome.kind,
            multiplier: s.outcome.multiplier.as_f64(),
            player_score: s.outcome.player_score,
            dealer_score: s.outcome.dealer_score,
            bet: s.bet,
            payout: s.payout,
            net: s.net(),
            balance_after: s.balance_after,
            bankrupt: s.bankrupt,
            message,
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Раунд продолжается, вот новое состояние стола.
    State(GameViewDto),

    /// Раунд завершён и рассчитан.
    RoundFinished {
        view: GameViewDto,
        summary: RoundSummaryDto,
    },
}

impl CommandResponse {
    pub fn view(&self) -> &GameViewDto {
        match self {
            CommandResponse::State(view) | CommandResponse::RoundFinished { view, .. } => view,
        }
    }
}
