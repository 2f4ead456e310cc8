// src/bin/blackjack_stress_test.rs

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use blackjack_engine::domain::chips::Chips;
use blackjack_engine::domain::table::TableConfig;
use blackjack_engine::engine::{
    EngineError, GameEngine, OutcomeKind, Phase, PlayerAction, RandomSource, RoundStatus,
    RoundSummary,
};
use blackjack_engine::infra::{init_tracing, DeterministicRng, SystemRng};

/// Стресс-тест движка: много раундов подряд с простой бот-логикой.
#[derive(Debug, Parser)]
#[command(name = "blackjack_stress_test", version)]
struct Args {
    /// Сколько раундов сыграть (меньше, если игрок обанкротится).
    #[arg(long, default_value_t = 10_000)]
    rounds: u64,

    /// Стартовый баланс.
    #[arg(long, default_value_t = 1_000_000)]
    balance: u64,

    /// Ставка на каждый раунд.
    #[arg(long, default_value_t = 10)]
    bet: u64,

    /// Seed; без него системный RNG.
    #[arg(long)]
    seed: Option<u64>,
}

/// Порог бот-игрока: берёт карту, пока у него меньше.
const BOT_STANDS_AT: u32 = 17;

/// Максимум действий в одном раунде (защита от зацикливания).
const MAX_STEPS: u32 = 32;

#[derive(Debug, Default)]
struct Stats {
    rounds: u64,
    wins: u64,
    losses: u64,
    pushes: u64,
    blackjacks: u64,
    player_busts: u64,
    dealer_busts: u64,
    total_wagered: u64,
    total_paid: u64,
}

impl Stats {
    fn record(&mut self, summary: &RoundSummary) {
        self.rounds += 1;
        self.total_wagered += summary.bet.0;
        self.total_paid += summary.payout.0;

        match summary.outcome.kind {
            OutcomeKind::PlayerBust => {
                self.losses += 1;
                self.player_busts += 1;
            }
            OutcomeKind::DealerWins => self.losses += 1,
            OutcomeKind::Push => self.pushes += 1,
            OutcomeKind::DealerBust => {
                self.wins += 1;
                self.dealer_busts += 1;
            }
            OutcomeKind::PlayerWins => self.wins += 1,
            OutcomeKind::Blackjack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
        }
    }
}

fn main() -> Result<()> {
    init_tracing("info");
    let args = Args::parse();

    let config = TableConfig::default().with_balance(Chips::new(args.balance));
    let mut engine = GameEngine::new(config);

    info!(
        rounds = args.rounds,
        balance = args.balance,
        bet = args.bet,
        seed = ?args.seed,
        "blackjack_stress_test: старт"
    );

    let stats = match args.seed {
        Some(seed) => run(&mut engine, &mut DeterministicRng::from_seed(seed), &args),
        None => run(&mut engine, &mut SystemRng, &args),
    };

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Сыграно раундов: {}", stats.rounds);
    if stats.rounds > 0 {
        let pct = |n: u64| n as f64 * 100.0 / stats.rounds as f64;
        println!("Выигрыши: {} ({:.2}%)", stats.wins, pct(stats.wins));
        println!("Проигрыши: {} ({:.2}%)", stats.losses, pct(stats.losses));
        println!("Пуши: {} ({:.2}%)", stats.pushes, pct(stats.pushes));
        println!("Блэкджеки: {}", stats.blackjacks);
        println!("Переборы игрока: {}", stats.player_busts);
        println!("Переборы дилера: {}", stats.dealer_busts);
        let rtp = stats.total_paid as f64 * 100.0 / stats.total_wagered.max(1) as f64;
        println!("Возврат игроку (RTP): {:.2}%", rtp);
    }
    println!("Итоговый баланс: {}", engine.balance());
    println!("Фаза: {:?}", engine.phase());
    println!("===========================================");
    Ok(())
}

fn run<R: RandomSource>(engine: &mut GameEngine, rng: &mut R, args: &Args) -> Stats {
    let mut stats = Stats::default();

    for _ in 0..args.rounds {
        if engine.phase() == Phase::Bankrupt {
            info!("игрок обанкротился, останавливаемся");
            break;
        }

        // Последнюю ставку урезаем до остатка баланса.
        let bet = Chips::new(args.bet.min(engine.balance().0));
        match play_round(engine, rng, bet) {
            Ok(Some(summary)) => stats.record(&summary),
            Ok(None) => {
                warn!(round_id = engine.round_id(), "раунд не завершился за {MAX_STEPS} шагов");
                break;
            }
            Err(e) => {
                warn!(round_id = engine.round_id(), %e, "ошибка в ходе раунда");
                break;
            }
        }
    }

    stats
}

/// Один раунд: ставка, раздача, "hit до 17", stand.
fn play_round<R: RandomSource>(
    engine: &mut GameEngine,
    rng: &mut R,
    bet: Chips,
) -> Result<Option<RoundSummary>, EngineError> {
    engine.apply_action(rng, PlayerAction::PlaceBet(bet))?;

    let mut status = engine.apply_action(rng, PlayerAction::Deal)?;
    let mut step: u32 = 0;
    loop {
        if let RoundStatus::Finished(summary, _history) = status {
            return Ok(Some(summary));
        }

        step += 1;
        if step > MAX_STEPS {
            return Ok(None);
        }

        let action = if engine.player_hand().score() < BOT_STANDS_AT {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        };
        status = engine.apply_action(rng, action)?;
    }
}
