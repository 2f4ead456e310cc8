//! Движок блэкджека: ставки, раздача, ход игрока, автоматический дилер, расчёт.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `place_bet` – принять ставку (эскроу)
//!   - `deal` – свежая колода и по две карты
//!   - `hit` / `stand` – действия игрока
//!   - `dealer_step` – один шаг автоматического дилера

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod outcome;
pub mod validation;

use crate::domain::card::Card;

pub use actions::{ActionKind, PlayerAction};
pub use betting::Ledger;
pub use errors::EngineError;
pub use game_loop::{DealerStep, GameEngine, Phase, RoundStatus, RoundSummary};
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use outcome::{resolve, Multiplier, Outcome, OutcomeKind};
pub use validation::{allowed_actions, parse_bet_amount};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand` + скриптованная колода).
pub trait RandomSource {
    /// Равномерная перестановка карт на месте.
    fn shuffle(&mut self, cards: &mut [Card]);
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }
}
