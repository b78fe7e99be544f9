use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Карта не разбирается.
    InvalidCard(String),

    /// Отрицательная или нечисловая ставка.
    InvalidCommitment { player_id: PlayerId, reason: String },

    /// Один и тот же id у двух игроков.
    DuplicatePlayer(PlayerId),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BadCard { .. } | EngineError::BadBoardCard { .. } => {
                ApiError::InvalidCard(err.to_string())
            }
            EngineError::NegativeCommitment { player_id, .. }
            | EngineError::NonFiniteCommitment { player_id, .. } => ApiError::InvalidCommitment {
                player_id,
                reason: err.to_string(),
            },
            EngineError::DuplicatePlayer(id) => ApiError::DuplicatePlayer(id),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
