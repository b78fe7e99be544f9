//! Доменная модель раздела банка: карты, суммы, игроки, борды, снимок раздачи.

pub mod amount;
pub mod board;
pub mod card;
pub mod player;
pub mod snapshot;

/// Идентификатор игрока, стабильный в пределах одного вычисления.
pub type PlayerId = u64;

/// Группа игроков, разделивших одно место на шоудауне.
pub type Tier = Vec<PlayerId>;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use amount::*;
pub use board::*;
pub use card::*;
pub use player::*;
pub use snapshot::*;
