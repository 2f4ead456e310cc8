use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::engine::{GameEngine, Phase};
use crate::eval::{self, describe_hand};

use super::dto::{CardViewDto, GameViewDto, HandViewDto, RoundSummaryDto};

/// Сформировать DTO стола на основе `GameEngine`.
///
/// Закрытая карта дилера определяется движком (`hidden_dealer_card`),
/// а не позицией в руке.
pub fn build_game_view(engine: &GameEngine) -> GameViewDto {
    let hidden = engine.hidden_dealer_card();

    GameViewDto {
        round_id: engine.round_id(),
        phase: engine.phase(),
        balance: engine.balance(),
        current_bet: engine.current_bet(),
        player: build_hand_view(engine.player_hand(), None),
        dealer: build_hand_view(engine.dealer_hand(), hidden),
        dealer_revealed: engine.dealer_revealed(),
        allowed_actions: engine.allowed_actions(),
        message: phase_message(engine),
        last_round: engine.last_summary().map(RoundSummaryDto::from),
    }
}

/// DTO руки. `hidden`: карта, которую надо показать рубашкой.
pub fn build_hand_view(hand: &Hand, hidden: Option<Card>) -> HandViewDto {
    let cards = hand
        .cards
        .iter()
        .map(|&card| {
            if Some(card) == hidden {
                CardViewDto::face_down()
            } else {
                CardViewDto::face_up(card)
            }
        })
        .collect::<Vec<_>>();

    let fully_visible = cards.iter().all(|c| c.face_up);

    if hand.is_empty() {
        return HandViewDto {
            cards,
            score: Some(0),
            score_label: "0".to_string(),
        };
    }

    if fully_visible {
        let value = hand.value();
        HandViewDto {
            cards,
            score: Some(value.total),
            score_label: describe_hand(value, hand.len()),
        }
    } else {
        let visible: Vec<Card> = hand
            .cards
            .iter()
            .copied()
            .filter(|&c| Some(c) != hidden)
            .collect();
        HandViewDto {
            cards,
            score: None,
            score_label: format!("{} + ?", eval::score(&visible)),
        }
    }
}

/// Сообщение для строки статуса.
pub fn phase_message(engine: &GameEngine) -> String {
    let last = engine.last_summary().map(RoundSummaryDto::from);

    match engine.phase() {
        Phase::Idle => match last {
            Some(round) => format!("{} Сделайте новую ставку.", round.message),
            None => "Сделайте ставку.".to_string(),
        },
        Phase::BetCommitted => format!(
            "Ставка {} принята. Нажмите Deal.",
            engine.current_bet()
        ),
        Phase::PlayerTurn => "Игра идёт... Hit или Stand?".to_string(),
        Phase::DealerTurn => "Ход дилера...".to_string(),
        Phase::Settled => match last {
            Some(round) => round.message,
            None => String::new(),
        },
        Phase::Bankrupt => match last {
            Some(round) => round.message,
            None => "Баланс исчерпан! Игра окончена.".to_string(),
        },
    }
}
