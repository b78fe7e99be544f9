use serde::{Deserialize, Serialize};

use crate::domain::Snapshot;
use crate::engine::readiness::{all_boards_complete, can_evaluate, is_board_complete, is_player_complete};
use crate::infra::mapping::snapshot_from_record;

use super::dto::{ReadinessDto, SnapshotRecord};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Можно ли уже считать шоудаун (какие кнопки включать в UI).
    Readiness(SnapshotRecord),
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Readiness(ReadinessDto),
}

pub fn run_query(query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::Readiness(rec) => {
            let snapshot = snapshot_from_record(rec)?;
            Ok(QueryResponse::Readiness(build_readiness(&snapshot)))
        }
    }
}

/// Сформировать DTO готовности по снимку.
pub fn build_readiness(snapshot: &Snapshot) -> ReadinessDto {
    ReadinessDto {
        boards_complete: snapshot.boards.iter().map(is_board_complete).collect(),
        all_boards_complete: all_boards_complete(&snapshot.boards),
        incomplete_players: snapshot
            .players
            .iter()
            .filter(|p| !is_player_complete(p))
            .map(|p| p.id)
            .collect(),
        can_evaluate: can_evaluate(snapshot),
    }
}
