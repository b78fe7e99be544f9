use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::{PayoutResult, Pot};
use crate::ranking::{Advisory, BoardResult};

/// Вклады игрока по улицам, как их присылает UI.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CommittedRecord {
    pub preflop: f64,
    pub flop: f64,
    pub turn: f64,
    pub river: f64,
}

/// Запись игрока от UI. Карты – строковые токены ("Ah"), пустой слот – `null`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Имя для отображения, в расчётах не участвует.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub hole_cards: [Option<String>; 2],
    #[serde(default)]
    pub folded: bool,
    #[serde(default)]
    pub committed: CommittedRecord,
}

/// Запись борда от UI.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub flop: [Option<String>; 3],
    #[serde(default)]
    pub turn: Option<String>,
    #[serde(default)]
    pub river: Option<String>,
}

/// Весь ввод UI: игроки и борды.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub boards: Vec<BoardRecord>,
}

/// Флаги готовности для UI (какие кнопки активны).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessDto {
    /// По одному флагу на борд, в порядке снимка.
    pub boards_complete: Vec<bool>,
    pub all_boards_complete: bool,
    /// id игроков, у которых не хватает карт.
    pub incomplete_players: Vec<PlayerId>,
    pub can_evaluate: bool,
}

/// Ответ на полный расчёт выплат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResponse {
    pub pots: Vec<Pot>,
    pub board_results: Vec<BoardResult>,
    pub payouts: PayoutResult,
    pub readiness: ReadinessDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
}
