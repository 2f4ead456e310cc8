use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::table::TableConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("конфиг {} не является корректным JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Разобрать конфиг стола из JSON. Отсутствующие поля берутся по умолчанию.
pub fn parse_table_config(json: &str) -> Result<TableConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Загрузить конфиг из файла; без пути конфиг по умолчанию.
pub fn load_table_config(path: Option<&Path>) -> Result<TableConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(TableConfig::default());
    };

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_table_config(&raw).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}
