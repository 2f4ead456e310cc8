use crate::domain::chips::Chips;
use crate::engine::actions::ActionKind;
use crate::engine::betting::Ledger;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::Phase;

/// Разбор ставки из свободного текста.
///
/// Пробелы по краям срезаются; всё, что не целое положительное число
/// (пусто, "abc", "12abc", "12.5", "-5", "0") даёт `InvalidAmount`.
pub fn parse_bet_amount(input: &str) -> Result<Chips, EngineError> {
    let amount: u64 = input
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidAmount)?;

    if amount == 0 {
        return Err(EngineError::InvalidAmount);
    }
    Ok(Chips(amount))
}

/// Проверка, что действие разрешено в текущей фазе.
pub fn ensure_phase(current: Phase, expected: Phase, action: ActionKind) -> Result<(), EngineError> {
    if current == expected {
        Ok(())
    } else {
        Err(EngineError::IllegalAction {
            action,
            phase: current,
        })
    }
}

/// Какие действия сейчас доступны слою отрисовки.
pub fn allowed_actions(phase: Phase, ledger: &Ledger) -> Vec<ActionKind> {
    match phase {
        Phase::Idle if !ledger.balance().is_zero() => vec![ActionKind::PlaceBet],
        Phase::Idle => Vec::new(),
        Phase::BetCommitted => vec![ActionKind::Deal],
        Phase::PlayerTurn => vec![ActionKind::Hit, ActionKind::Stand],
        Phase::DealerTurn => vec![ActionKind::DealerStep],
        Phase::Settled | Phase::Bankrupt => Vec::new(),
    }
}
