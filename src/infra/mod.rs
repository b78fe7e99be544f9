//! Инфраструктурный слой вокруг движка:
//! - маппинги между записями UI и доменом (с проверкой ввода);
//! - имена игроков для отображения.

pub mod mapping;

pub use mapping::*;
