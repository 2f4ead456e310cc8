//! Доменная модель блэкджека: карты, колода, руки, фишки, конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod table;

/// Порядковый номер раунда в сессии (с 1).
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use table::*;
