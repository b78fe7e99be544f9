use std::collections::BTreeMap;

use crate::domain::{Board, Contender, PlayerId, Snapshot};
use crate::ranking::board_eval::{evaluate_board, BoardResult};
use crate::ranking::capability::{ByScore, RankerError, ScoredRanker};

/// Сила рук, заданная руками для одного борда: больше – сильнее, равные – сплит.
///
/// Борд при оценке не смотрится: таблица уже привязана к своему борду.
#[derive(Clone, Copy, Debug)]
pub struct StrengthTable<'a>(pub &'a BTreeMap<PlayerId, u32>);

impl ScoredRanker for StrengthTable<'_> {
    type Score = u32;

    fn score(&self, contender: &Contender, _board: &Board) -> Result<u32, RankerError> {
        self.0
            .get(&contender.id)
            .copied()
            .ok_or_else(|| RankerError::Evaluation {
                player_id: contender.id,
                reason: "нет силы руки для этого борда".to_string(),
            })
    }

    fn describe(&self, score: &u32) -> Option<String> {
        Some(format!("strength {score}"))
    }
}

/// Результаты бордов по таблицам силы: `strengths[i]` относится к борду `i`.
///
/// Таблицы сопоставляются по позиции, а не по картам: неполные борды могут
/// совпадать. Борд без таблицы (или с неполной таблицей) даёт пустой результат.
pub fn evaluate_boards_by_strength(
    snapshot: &Snapshot,
    strengths: &[BTreeMap<PlayerId, u32>],
) -> Vec<BoardResult> {
    let contenders = snapshot.contenders();

    snapshot
        .boards
        .iter()
        .enumerate()
        .map(|(idx, board)| match strengths.get(idx) {
            Some(table) => evaluate_board(&ByScore(StrengthTable(table)), &contenders, board),
            None => BoardResult::default(),
        })
        .collect()
}
