// src/bin/blackjack_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use blackjack_engine::api::{
    build_game_view, execute_command, ApiError, Command, CommandResponse, GameViewDto, HandViewDto,
};
use blackjack_engine::domain::chips::Chips;
use blackjack_engine::engine::{DealerStep, GameEngine, Phase, RandomSource};
use blackjack_engine::infra::{init_tracing, load_table_config, DeterministicRng, StackedRng, SystemRng};

/// Консольный стол блэкджека: bet / deal / hit / stand.
#[derive(Debug, Parser)]
#[command(name = "blackjack_cli", version)]
struct Args {
    /// JSON-файл с конфигом стола.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Стартовый баланс (перекрывает конфиг).
    #[arg(long)]
    balance: Option<u64>,

    /// Пауза между шагами дилера, мс (перекрывает конфиг).
    #[arg(long)]
    dealer_delay_ms: Option<u64>,

    /// Seed для воспроизводимых колод.
    #[arg(long)]
    seed: Option<u64>,

    /// Подтасованная колода: "10s,9c,7d,6h,5s;As,Kc,2d,3h".
    #[arg(long)]
    stack: Option<String>,

    /// Печатать состояние стола как JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing("warn");
    let args = Args::parse();

    let mut config = load_table_config(args.config.as_deref())?;
    if let Some(balance) = args.balance {
        config = config.with_balance(Chips::new(balance));
    }
    if let Some(ms) = args.dealer_delay_ms {
        config = config.with_dealer_delay_ms(ms);
    }

    let mut rng = build_rng(&args)?;
    let mut engine = GameEngine::new(config);
    let delay = Duration::from_millis(engine.config.dealer_step_delay_ms);

    println!("blackjack_cli: стол открыт. Команды: bet <сумма>, deal, hit, stand, help, quit.");
    render(&build_game_view(&engine), args.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("не удалось прочитать stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "q" | "exit" => break,
            "help" | "?" => {
                print_help();
                continue;
            }
            _ => {}
        }

        let command = match Command::parse_line(line) {
            Ok(c) => c,
            Err(e) => {
                println!("[CLI] {}", e.message());
                continue;
            }
        };

        if command == Command::Stand && engine.phase() == Phase::PlayerTurn {
            play_dealer_animated(&mut engine, delay, args.json)?;
        } else {
            match execute_command(&mut engine, &mut rng, command) {
                Ok(response) => render_response(&response, args.json)?,
                Err(e) => println!("[CLI] {}", e.message()),
            }
        }

        if engine.is_bankrupt() {
            println!("[CLI] Баланс исчерпан. Игра окончена.");
            break;
        }
    }

    println!("[CLI] Завершение работы. Итоговый баланс: {}", engine.balance());
    Ok(())
}

fn build_rng(args: &Args) -> Result<Box<dyn RandomSource>> {
    if let Some(spec) = &args.stack {
        let mut stacked = StackedRng::parse(spec)
            .map_err(|e| anyhow::anyhow!("неверный --stack: {e}"))?;
        if let Some(seed) = args.seed {
            stacked = stacked.with_fallback_seed(seed);
        }
        return Ok(Box::new(stacked));
    }

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(DeterministicRng::from_seed(seed)),
        None => Box::new(SystemRng),
    };
    Ok(rng)
}

/// Ход дилера по шагам с паузой, чтобы было видно каждую карту.
fn play_dealer_animated(engine: &mut GameEngine, delay: Duration, json: bool) -> Result<()> {
    if let Err(e) = engine.begin_stand() {
        println!("[CLI] {}", ApiError::from(e).message());
        return Ok(());
    }
    render(&build_game_view(engine), json)?;

    loop {
        thread::sleep(delay);
        match engine.dealer_step() {
            Ok(DealerStep::Drew(card)) => {
                println!("[CLI] Дилер берёт {card}");
                render(&build_game_view(engine), json)?;
            }
            Ok(DealerStep::Finished(..)) => {
                render(&build_game_view(engine), json)?;
                return Ok(());
            }
            Err(e) => {
                println!("[CLI] {}", ApiError::from(e).message());
                return Ok(());
            }
        }
    }
}

fn render_response(response: &CommandResponse, json: bool) -> Result<()> {
    render(response.view(), json)
}

fn render(view: &GameViewDto, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();

    if json {
        serde_json::to_writer(&mut out, view)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "  Дилер: {}", format_hand(&view.dealer))?;
    writeln!(out, "  Игрок: {}", format_hand(&view.player))?;
    writeln!(
        out,
        "  Баланс: {} | Ставка: {} | Фаза: {:?}",
        view.balance, view.current_bet, view.phase
    )?;
    writeln!(out, "  {}", view.message)?;
    if !view.allowed_actions.is_empty() {
        writeln!(out, "  Доступно: {:?}", view.allowed_actions)?;
    }
    out.flush()?;
    Ok(())
}

fn format_hand(hand: &HandViewDto) -> String {
    if hand.cards.is_empty() {
        return "-".to_string();
    }
    let cards = hand
        .cards
        .iter()
        .map(|c| c.label.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards}  ({})", hand.score_label)
}

fn print_help() {
    println!("  bet <сумма> (b) — сделать ставку");
    println!("  deal (d)        — раздать карты");
    println!("  hit (h)         — взять карту");
    println!("  stand (s)       — остановиться, ход дилера");
    println!("  quit (q)        — выйти");
}
