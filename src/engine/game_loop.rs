use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::table::{TableConfig, DEALER_STANDS_AT};
use crate::domain::RoundId;
use crate::engine::actions::{ActionKind, PlayerAction};
use crate::engine::betting::Ledger;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::outcome::{resolve, Outcome};
use crate::engine::validation::{allowed_actions, ensure_phase, parse_bet_amount};
use crate::engine::RandomSource;

/// Фаза раунда.
///
/// `Settled` промежуточная: движок сразу уходит из неё в `Idle`
/// или `Bankrupt`, снаружи её не видно.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    BetCommitted,
    PlayerTurn,
    DealerTurn,
    Settled,
    Bankrupt,
}

/// Итог сыгранного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub bet: Chips,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub outcome: Outcome,
    /// Сколько вернулось на баланс (ставка * множитель).
    pub payout: Chips,
    pub balance_after: Chips,
    pub bankrupt: bool,
}

impl RoundSummary {
    /// Чистый результат относительно ставки (+ выигрыш, - проигрыш).
    pub fn net(&self) -> i64 {
        self.payout.0 as i64 - self.bet.0 as i64
    }
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary, RoundHistory),
}

impl RoundStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundStatus::Finished(..))
    }
}

/// Результат одного шага дилера.
#[derive(Clone, Debug, PartialEq)]
pub enum DealerStep {
    /// Дилер взял карту и ещё думает.
    Drew(Card),
    /// Дилер остановился, раунд рассчитан.
    Finished(RoundSummary, RoundHistory),
}

/// Сессия за столом: баланс + текущий раунд.
///
/// Всё состояние живёт здесь, никаких глобальных переменных.
/// Каждая операция либо полностью применяется, либо возвращает ошибку
/// и ничего не меняет.
#[derive(Clone, Debug)]
pub struct GameEngine {
    pub config: TableConfig,
    ledger: Ledger,
    phase: Phase,
    /// Сколько раундов раздано, он же id последнего раунда.
    round_id: RoundId,
    /// Колода существует только внутри раунда.
    deck: Option<Deck>,
    player: Hand,
    dealer: Hand,
    /// Закрытая вторая карта дилера (лежит рубашкой, пока ходит игрок).
    dealer_hole_card: Option<Card>,
    history: RoundHistory,
    last_summary: Option<RoundSummary>,
}

impl GameEngine {
    pub fn new(config: TableConfig) -> Self {
        let ledger = Ledger::new(config.starting_balance);
        Self {
            config,
            ledger,
            phase: Phase::Idle,
            round_id: 0,
            deck: None,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_hole_card: None,
            history: RoundHistory::new(),
            last_summary: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn balance(&self) -> Chips {
        self.ledger.balance()
    }

    pub fn current_bet(&self) -> Chips {
        self.ledger.current_bet()
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// История текущего (или последнего завершённого) раунда.
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }

    /// Сколько карт осталось в колоде (None, если раунда нет).
    pub fn cards_remaining(&self) -> Option<usize> {
        self.deck.as_ref().map(Deck::len)
    }

    pub fn is_bankrupt(&self) -> bool {
        self.phase == Phase::Bankrupt
    }

    /// Закрытая карта дилера лежит рубашкой вверх только во время хода игрока.
    pub fn dealer_revealed(&self) -> bool {
        self.phase != Phase::PlayerTurn
    }

    /// Какую карту дилера слой отрисовки должен показать рубашкой.
    pub fn hidden_dealer_card(&self) -> Option<Card> {
        if self.phase == Phase::PlayerTurn {
            self.dealer_hole_card
        } else {
            None
        }
    }

    pub fn allowed_actions(&self) -> Vec<ActionKind> {
        allowed_actions(self.phase, &self.ledger)
    }

    /// Применить действие игрока (единая точка входа для API и симуляций).
    pub fn apply_action<R: RandomSource>(
        &mut self,
        rng: &mut R,
        action: PlayerAction,
    ) -> Result<RoundStatus, EngineError> {
        match action {
            PlayerAction::PlaceBet(amount) => self.place_bet(amount),
            PlayerAction::Deal => self.deal(rng),
            PlayerAction::Hit => self.hit(),
            PlayerAction::Stand => self.stand(),
        }
    }

    /// Принять ставку из свободного текста (поле ввода).
    pub fn place_bet_input(&mut self, input: &str) -> Result<RoundStatus, EngineError> {
        ensure_phase(self.phase, Phase::Idle, ActionKind::PlaceBet)?;
        let amount = parse_bet_amount(input)?;
        self.place_bet(amount)
    }

    /// Принять ставку: только в `Idle`, сумма сразу уходит в эскроу.
    pub fn place_bet(&mut self, amount: Chips) -> Result<RoundStatus, EngineError> {
        ensure_phase(self.phase, Phase::Idle, ActionKind::PlaceBet)?;
        self.ledger.commit_bet(amount)?;

        self.phase = Phase::BetCommitted;
        self.history = RoundHistory::new();
        self.history.push(RoundEventKind::BetPlaced {
            amount,
            balance_after: self.ledger.balance(),
        });

        debug!(bet = amount.0, balance = self.ledger.balance().0, "ставка принята");
        Ok(RoundStatus::Ongoing)
    }

    /// Раздача: свежая перемешанная колода, карты по очереди
    /// игрок, дилер, игрок, дилер.
    ///
    /// Натуральный блэкджек у игрока сразу запускает `stand()`.
    pub fn deal<R: RandomSource>(&mut self, rng: &mut R) -> Result<RoundStatus, EngineError> {
        ensure_phase(self.phase, Phase::BetCommitted, ActionKind::Deal)?;

        let mut deck = Deck::shuffled(rng);
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.push(deck.draw()?);
            dealer.push(deck.draw()?);
        }

        self.round_id += 1;
        self.history.push(RoundEventKind::InitialDeal {
            round_id: self.round_id,
            player: player.cards.clone(),
            dealer: dealer.cards.clone(),
        });
        self.dealer_hole_card = dealer.cards.get(1).copied();
        self.player = player;
        self.dealer = dealer;
        self.deck = Some(deck);
        self.phase = Phase::PlayerTurn;

        debug!(
            round_id = self.round_id,
            player_score = self.player.score(),
            "карты розданы"
        );

        if self.player.is_natural_blackjack() {
            debug!(round_id = self.round_id, "натуральный блэкджек, авто-stand");
            return self.stand();
        }
        Ok(RoundStatus::Ongoing)
    }

    /// Игрок берёт карту. Перебор сразу завершает раунд, дилер не играет.
    pub fn hit(&mut self) -> Result<RoundStatus, EngineError> {
        ensure_phase(self.phase, Phase::PlayerTurn, ActionKind::Hit)?;

        let card = self.deck_mut()?.draw()?;
        self.player.push(card);
        let score = self.player.score();
        self.history.push(RoundEventKind::PlayerHit { card, score });

        debug!(round_id = self.round_id, %card, score, "игрок взял карту");

        if self.player.is_bust() {
            let summary = self.settle_round();
            return Ok(RoundStatus::Finished(summary, self.history.clone()));
        }
        Ok(RoundStatus::Ongoing)
    }

    /// Игрок останавливается, дилер доигрывает до конца синхронно.
    pub fn stand(&mut self) -> Result<RoundStatus, EngineError> {
        self.begin_stand()?;
        loop {
            match self.dealer_step()? {
                DealerStep::Drew(_) => continue,
                DealerStep::Finished(summary, history) => {
                    return Ok(RoundStatus::Finished(summary, history));
                }
            }
        }
    }

    /// Ход переходит к дилеру, но карты он ещё не берёт.
    /// Дальше внешний планировщик вызывает `dealer_step()` с нужной паузой.
    pub fn begin_stand(&mut self) -> Result<(), EngineError> {
        ensure_phase(self.phase, Phase::PlayerTurn, ActionKind::Stand)?;

        self.phase = Phase::DealerTurn;
        self.history.push(RoundEventKind::PlayerStood {
            score: self.player.score(),
        });
        Ok(())
    }

    /// Одно решение дилера: меньше 17: берёт карту, иначе стоит
    /// (даже при переборе) и раунд рассчитывается.
    ///
    /// Баланс меняется только на последнем шаге, поэтому остановка
    /// между шагами не оставляет расчёт наполовину сделанным.
    pub fn dealer_step(&mut self) -> Result<DealerStep, EngineError> {
        ensure_phase(self.phase, Phase::DealerTurn, ActionKind::DealerStep)?;

        if self.dealer.score() < DEALER_STANDS_AT {
            let card = self.deck_mut()?.draw()?;
            self.dealer.push(card);
            let score = self.dealer.score();
            self.history.push(RoundEventKind::DealerDrew { card, score });

            debug!(round_id = self.round_id, %card, score, "дилер взял карту");
            return Ok(DealerStep::Drew(card));
        }

        self.history.push(RoundEventKind::DealerStood {
            score: self.dealer.score(),
        });
        let summary = self.settle_round();
        Ok(DealerStep::Finished(summary, self.history.clone()))
    }

    fn deck_mut(&mut self) -> Result<&mut Deck, EngineError> {
        self.deck.as_mut().ok_or(EngineError::EmptyDeck)
    }

    /// Исход → выплата → `Settled` → `Idle` / `Bankrupt`.
    fn settle_round(&mut self) -> RoundSummary {
        let bet = self.ledger.current_bet();
        let outcome = resolve(&self.player, &self.dealer);
        let payout = self.ledger.settle(outcome.multiplier);
        self.phase = Phase::Settled;
        self.deck = None;

        let balance_after = self.ledger.balance();
        self.history.push(RoundEventKind::RoundSettled {
            outcome,
            payout,
            balance_after,
        });

        let bankrupt = self.ledger.is_bankrupt();
        info!(
            round_id = self.round_id,
            outcome = ?outcome.kind,
            multiplier = %outcome.multiplier,
            bet = bet.0,
            payout = payout.0,
            balance = balance_after.0,
            "раунд рассчитан"
        );

        if bankrupt {
            self.history.push(RoundEventKind::Bankrupt);
            self.phase = Phase::Bankrupt;
            info!(round_id = self.round_id, "баланс обнулился, игра окончена");
        } else {
            self.phase = Phase::Idle;
        }

        let summary = RoundSummary {
            round_id: self.round_id,
            bet,
            player_cards: self.player.cards.clone(),
            dealer_cards: self.dealer.cards.clone(),
            outcome,
            payout,
            balance_after,
            bankrupt,
        };
        self.last_summary = Some(summary.clone());
        summary
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}
