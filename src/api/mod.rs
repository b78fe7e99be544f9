//! Внешний API движка выплат.
//!
//! Здесь описываются:
//! - команды (commands.rs) – поты, шоудаун по бордам, полный расчёт выплат;
//! - запросы (queries.rs) – готовность ввода;
//! - DTO (dto.rs) – записи от UI и ответы для UI (camelCase JSON);
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
