use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;
use crate::engine::outcome::Multiplier;

/// Баланс игрока и текущая ставка.
///
/// Ставка списывается с баланса сразу при принятии (эскроу)
/// и возвращается через множитель при расчёте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    balance: Chips,
    current_bet: Chips,
}

impl Ledger {
    pub fn new(balance: Chips) -> Self {
        Self {
            balance,
            current_bet: Chips::ZERO,
        }
    }

    pub fn balance(&self) -> Chips {
        self.balance
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn has_active_bet(&self) -> bool {
        !self.current_bet.is_zero()
    }

    /// Принять ставку. Фазу раунда проверяет GameEngine, не мы.
    pub fn commit_bet(&mut self, amount: Chips) -> Result<(), EngineError> {
        if amount.is_zero() {
            return Err(EngineError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(EngineError::InsufficientBalance {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Расчёт: balance += current_bet * multiplier, ставка обнуляется.
    /// Возвращает выплату.
    pub fn settle(&mut self, multiplier: Multiplier) -> Chips {
        let payout = multiplier.apply(self.current_bet);
        self.balance += payout;
        self.current_bet = Chips::ZERO;
        payout
    }

    /// Терминальное состояние: денег нет и ставки на столе тоже.
    pub fn is_bankrupt(&self) -> bool {
        self.balance.is_zero() && self.current_bet.is_zero()
    }
}
