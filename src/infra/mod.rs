//! Инфраструктурный слой вокруг движка блэкджека:
//! - RNG-реализации для движка (системный, seeded, подтасованная колода);
//! - загрузка конфига стола;
//! - настройка логирования для бинарей.

pub mod config;
pub mod logging;
pub mod rng;

pub use config::{load_table_config, parse_table_config, ConfigError};
pub use logging::init_tracing;
pub use rng::*;
