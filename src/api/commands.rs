use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{GameEngine, RandomSource, RoundStatus};

use super::dto::{CommandResponse, RoundSummaryDto};
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда от слоя отрисовки, по одной на кнопку.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Ставка из поля ввода, как есть (свободный текст).
    PlaceBet { amount: String },
    Deal,
    Hit,
    Stand,
}

impl Command {
    /// Разбор текстовой команды для консольного клиента:
    /// `bet 100`, `deal`, `hit`, `stand` (и короткие `b`, `d`, `h`, `s`).
    pub fn parse_line(line: &str) -> Result<Self, ApiError> {
        let mut parts = line.split_whitespace();
        let head = parts
            .next()
            .ok_or_else(|| ApiError::BadRequest("Пустая команда".to_string()))?;

        match head.to_ascii_lowercase().as_str() {
            "bet" | "b" => Ok(Command::PlaceBet {
                amount: parts.collect::<Vec<_>>().join(" "),
            }),
            "deal" | "d" => Ok(Command::Deal),
            "hit" | "h" => Ok(Command::Hit),
            "stand" | "s" => Ok(Command::Stand),
            other => Err(ApiError::BadRequest(format!("Неизвестная команда: {other}"))),
        }
    }
}

/// Выполнить команду и вернуть свежее представление стола.
pub fn execute_command<R: RandomSource>(
    engine: &mut GameEngine,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let result = match &command {
        Command::PlaceBet { amount } => engine.place_bet_input(amount),
        Command::Deal => engine.deal(rng),
        Command::Hit => engine.hit(),
        Command::Stand => engine.stand(),
    };

    let status = result.map_err(|err| {
        warn!(?command, phase = ?engine.phase(), %err, "команда отклонена");
        ApiError::from(err)
    })?;

    let view = build_game_view(engine);
    Ok(match status {
        RoundStatus::Ongoing => CommandResponse::State(view),
        RoundStatus::Finished(summary, _history) => CommandResponse::RoundFinished {
            view,
            summary: RoundSummaryDto::from(&summary),
        },
    })
}
