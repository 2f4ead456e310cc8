use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::eval::BLACKJACK;

/// Множитель выплаты от ставки. Хранится в половинках, чтобы ×2.5
/// считался в целых числах.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier {
    halves: u8,
}

impl Multiplier {
    /// Проигрыш: ставка сгорает.
    pub const LOSS: Multiplier = Multiplier { halves: 0 };
    /// Пуш: ставка возвращается.
    pub const PUSH: Multiplier = Multiplier { halves: 2 };
    /// Обычный выигрыш: ставка + столько же.
    pub const WIN: Multiplier = Multiplier { halves: 4 };
    /// Блэкджек: ставка + 1.5 ставки (3:2).
    pub const BLACKJACK: Multiplier = Multiplier { halves: 5 };

    pub fn halves(self) -> u8 {
        self.halves
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.halves) / 2.0
    }

    /// Сумма к зачислению на баланс для данной ставки (с округлением вниз).
    pub fn apply(self, bet: Chips) -> Chips {
        bet.scale_halves(u64::from(self.halves))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.halves % 2 == 0 {
            write!(f, "x{}", self.halves / 2)
        } else {
            write!(f, "x{}.5", self.halves / 2)
        }
    }
}

/// Чем закончился раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    PlayerBust,
    DealerBust,
    Blackjack,
    PlayerWins,
    DealerWins,
    Push,
}

impl OutcomeKind {
    pub fn multiplier(self) -> Multiplier {
        match self {
            OutcomeKind::PlayerBust | OutcomeKind::DealerWins => Multiplier::LOSS,
            OutcomeKind::Push => Multiplier::PUSH,
            OutcomeKind::DealerBust | OutcomeKind::PlayerWins => Multiplier::WIN,
            OutcomeKind::Blackjack => Multiplier::BLACKJACK,
        }
    }

    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            OutcomeKind::DealerBust | OutcomeKind::Blackjack | OutcomeKind::PlayerWins
        )
    }
}

/// Итог сравнения рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub multiplier: Multiplier,
    pub player_score: u32,
    pub dealer_score: u32,
}

impl Outcome {
    /// Сообщение для игрока.
    pub fn describe(&self) -> String {
        let (p, d) = (self.player_score, self.dealer_score);
        match self.kind {
            OutcomeKind::PlayerBust => format!("Перебор! ({p}) Дилер выиграл!"),
            OutcomeKind::DealerBust => format!("Дилер перебрал! ({d}) Вы выиграли!"),
            OutcomeKind::Blackjack => "Блэкджек! Вы выиграли!".to_string(),
            OutcomeKind::PlayerWins => format!("Вы выиграли! ({p} против {d})"),
            OutcomeKind::DealerWins => format!("Дилер выиграл! ({p} против {d})"),
            OutcomeKind::Push => format!("Пуш (ничья)! ({p} против {d})"),
        }
    }
}

/// Определить исход раунда. Первое совпавшее правило побеждает:
///
/// 1. перебор игрока;
/// 2. перебор дилера;
/// 3. натуральный блэкджек игрока;
/// 4–6. сравнение очков.
///
/// Перебор дилера стоит выше блэкджека игрока: при натуральном 21
/// и переборе дилера платится x2, а не x2.5.
pub fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    let player_score = player.score();
    let dealer_score = dealer.score();

    let kind = if player_score > BLACKJACK {
        OutcomeKind::PlayerBust
    } else if dealer_score > BLACKJACK {
        OutcomeKind::DealerBust
    } else if player.is_natural_blackjack() {
        OutcomeKind::Blackjack
    } else if player_score > dealer_score {
        OutcomeKind::PlayerWins
    } else if dealer_score > player_score {
        OutcomeKind::DealerWins
    } else {
        OutcomeKind::Push
    };

    Outcome {
        kind,
        multiplier: kind.multiplier(),
        player_score,
        dealer_score,
    }
}
