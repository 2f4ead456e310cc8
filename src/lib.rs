//! Движок однопользовательского блэкджека со ставками.
//!
//! Ядро это состояние игры: колода, подсчёт очков, очерёдность ходов
//! (игрок, автоматический дилер) и расчёт баланса. Отрисовка и кнопки живут
//! снаружи: они читают `api::GameViewDto` и вызывают `api::Command`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::{build_game_view, execute_command, ApiError, Command, CommandResponse, GameViewDto};
pub use domain::{Card, Chips, Deck, Hand, Rank, Suit, TableConfig};
pub use engine::{EngineError, GameEngine, Phase, RandomSource, RoundStatus};
