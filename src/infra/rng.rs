use std::collections::VecDeque;

use crate::domain::card::Card;
use crate::engine::RandomSource;

/// Системный RNG (`thread_rng`). Перемешивание: Фишер–Йетс из `rand`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        cards.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed → одинаковые колоды во всех раундах сессии.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        use rand::seq::SliceRandom;
        cards.shuffle(&mut self.inner);
    }
}

/// «Подтасованная» колода: заданные карты выходят первыми и в заданном порядке.
///
/// Один скрипт на один вызов `shuffle` (т.е. на один раунд). Когда скрипты
/// кончились, колода остаётся как есть (или перемешивается fallback-RNG).
#[derive(Clone, Debug, Default)]
pub struct StackedRng {
    scripts: VecDeque<Vec<Card>>,
    fallback: Option<DeterministicRng>,
}

impl StackedRng {
    /// Один раунд: `top[0]` будет вытянута первой.
    pub fn new(top: Vec<Card>) -> Self {
        Self::with_rounds(vec![top])
    }

    pub fn with_rounds(rounds: Vec<Vec<Card>>) -> Self {
        Self {
            scripts: rounds.into(),
            fallback: None,
        }
    }

    /// Остаток колоды (и раунды без скрипта) перемешивать этим seed.
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback = Some(DeterministicRng::from_seed(seed));
        self
    }

    /// Разбор строки вида `"10s,9c,7d,6h;As,Kc,2d,3h"`:
    /// раунды через `;`, карты через `,`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let mut rounds = Vec::new();
        for round in spec.split(';').map(str::trim).filter(|r| !r.is_empty()) {
            let cards = round
                .split(',')
                .map(|c| c.trim().parse::<Card>())
                .collect::<Result<Vec<_>, _>>()?;
            rounds.push(cards);
        }
        Ok(Self::with_rounds(rounds))
    }

    pub fn rounds_left(&self) -> usize {
        self.scripts.len()
    }
}

impl RandomSource for StackedRng {
    fn shuffle(&mut self, cards: &mut [Card]) {
        if let Some(fallback) = self.fallback.as_mut() {
            fallback.shuffle(cards);
        }

        let Some(script) = self.scripts.pop_front() else {
            return;
        };

        // Верх колоды = конец среза: i-я карта скрипта встаёт на len-1-i.
        let len = cards.len();
        for (i, card) in script.iter().enumerate().take(len) {
            let target = len - 1 - i;
            if let Some(pos) = cards[..=target].iter().position(|c| c == card) {
                cards.swap(pos, target);
            }
        }
    }
}
