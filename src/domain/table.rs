use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Стартовый баланс игрока по умолчанию.
pub const DEFAULT_STARTING_BALANCE: Chips = Chips(1000);

/// Пауза между шагами дилера по умолчанию (мс). Чисто анимация.
pub const DEFAULT_DEALER_STEP_DELAY_MS: u64 = 1000;

/// Дилер берёт карту, пока очков меньше этого порога.
pub const DEALER_STANDS_AT: u32 = 17;

/// Конфиг стола. Таблица выплат и правило дилера НЕ настраиваются.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// С каким балансом игрок садится за стол.
    pub starting_balance: Chips,
    /// Задержка между шагами дилера для слоя отрисовки.
    pub dealer_step_delay_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            dealer_step_delay_ms: DEFAULT_DEALER_STEP_DELAY_MS,
        }
    }
}

impl TableConfig {
    pub fn with_balance(mut self, balance: Chips) -> Self {
        self.starting_balance = balance;
        self
    }

    pub fn with_dealer_delay_ms(mut self, ms: u64) -> Self {
        self.dealer_step_delay_ms = ms;
        self
    }
}
