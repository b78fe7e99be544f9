use serde::{Deserialize, Serialize};

use crate::engine::{build_pots, compute_payouts, PayoutConfig, Pot};
use crate::infra::mapping::{snapshot_from_record, snapshot_from_records, tiers_from_results};
use crate::ranking::{evaluate_boards, BoardEvaluation, BoardResult, HandRanker};

use super::dto::{BoardRecord, PayoutResponse, PlayerRecord, SnapshotRecord};
use super::errors::ApiError;
use super::queries::build_readiness;

/// Команда верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Пересобрать поты из вкладов.
    BuildPots(SnapshotRecord),

    /// Посчитать тиры и названия рук по всем бордам.
    EvaluateBoards(SnapshotRecord),

    /// Полный расчёт выплат.
    ComputePayouts(PayoutRequest),
}

/// Запрос на расчёт выплат.
///
/// Поты и результаты бордов можно прислать готовыми; если их нет (или список
/// пустой), они считаются из снимка.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutRequest {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub boards: Vec<BoardRecord>,
    #[serde(default)]
    pub pots: Option<Vec<Pot>>,
    #[serde(default)]
    pub board_results: Option<Vec<BoardResult>>,
    /// На сколько бордов делить банк. По умолчанию – число бордов в снимке.
    #[serde(default)]
    pub boards_count: Option<usize>,
    #[serde(default)]
    pub config: PayoutConfig,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CommandResponse {
    Pots(Vec<Pot>),
    Boards(BoardEvaluation),
    Payouts(PayoutResponse),
}

/// Выполнить команду. Ошибка возможна только на разборе ввода.
pub fn execute<R: HandRanker>(
    command: &Command,
    ranker: Option<&R>,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::BuildPots(rec) => {
            let snapshot = snapshot_from_record(rec)?;
            Ok(CommandResponse::Pots(build_pots(&snapshot.players)))
        }
        Command::EvaluateBoards(rec) => {
            let snapshot = snapshot_from_record(rec)?;
            Ok(CommandResponse::Boards(evaluate_boards(ranker, &snapshot)))
        }
        Command::ComputePayouts(req) => handle_payout_request(req, ranker).map(CommandResponse::Payouts),
    }
}

/// Полный расчёт: поты (свои или присланные) + тиры (свои или присланные) -> выплаты.
pub fn handle_payout_request<R: HandRanker>(
    req: &PayoutRequest,
    ranker: Option<&R>,
) -> Result<PayoutResponse, ApiError> {
    let snapshot = snapshot_from_records(&req.players, &req.boards)?;

    let pots = match &req.pots {
        Some(pots) if !pots.is_empty() => pots.clone(),
        _ => build_pots(&snapshot.players),
    };

    let (board_results, advisory) = match &req.board_results {
        Some(results) if !results.is_empty() => (results.clone(), None),
        _ => {
            let evaluation = evaluate_boards(ranker, &snapshot);
            (evaluation.results, evaluation.advisory)
        }
    };

    let boards_count = req
        .boards_count
        .filter(|n| *n > 0)
        .unwrap_or(snapshot.boards.len());

    let payouts = compute_payouts(
        &pots,
        &tiers_from_results(&board_results),
        boards_count,
        &snapshot.players,
        &req.config,
    );

    Ok(PayoutResponse {
        pots,
        board_results,
        payouts,
        readiness: build_readiness(&snapshot),
        advisory,
    })
}
