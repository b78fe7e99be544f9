use std::collections::BTreeMap;
use std::fmt;

use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{Board, Contender, PlayerId, Snapshot, Tier};
use crate::ranking::capability::HandRanker;
use crate::ranking::tiers::{evaluate_all, reduce_tiers};

/// Результат шоудауна на одном борде.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardResult {
    /// Тиры, лучшие первыми.
    pub tiers: Vec<Tier>,
    /// Название руки каждого претендента (`None`, если оценщик не умеет описывать).
    #[serde(default)]
    pub hands: BTreeMap<PlayerId, Option<String>>,
}

/// Предупреждение для UI: расчёт выполнен, но в урезанном виде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Advisory {
    /// Оценщика рук нет – все тиры пустые, поты уйдут в fallback-раздел.
    RankerUnavailable,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::RankerUnavailable => {
                write!(f, "Оценщик рук недоступен: результаты шоудауна пустые")
            }
        }
    }
}

/// Результаты по всем бордам + одно общее предупреждение (если есть).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardEvaluation {
    pub results: Vec<BoardResult>,
    pub advisory: Option<Advisory>,
}

impl BoardEvaluation {
    /// Тиры по бордам в виде, который ждёт `compute_payouts`.
    pub fn tiers(&self) -> Vec<Vec<Tier>> {
        self.results.iter().map(|r| r.tiers.clone()).collect()
    }
}

/// Оценить все борды снимка.
///
/// На шоудаун идут игроки с двумя картами, которые не сфолдили.
/// Каждый борд считается независимо: сбой на одном не трогает остальные.
pub fn evaluate_boards<R: HandRanker>(ranker: Option<&R>, snapshot: &Snapshot) -> BoardEvaluation {
    let Some(ranker) = ranker else {
        warn!("{}", Advisory::RankerUnavailable);
        return BoardEvaluation {
            results: vec![BoardResult::default(); snapshot.boards.len()],
            advisory: Some(Advisory::RankerUnavailable),
        };
    };

    let contenders = snapshot.contenders();
    let results = snapshot
        .boards
        .iter()
        .map(|board| evaluate_board(ranker, &contenders, board))
        .collect();

    BoardEvaluation {
        results,
        advisory: None,
    }
}

/// Один борд: названия рук + тиры.
pub fn evaluate_board<R: HandRanker>(
    ranker: &R,
    contenders: &[Contender],
    board: &Board,
) -> BoardResult {
    if contenders.is_empty() {
        return BoardResult::default();
    }

    let hands = match evaluate_all(ranker, contenders, board) {
        Ok(hands) => hands,
        Err(err) => {
            error!("оценка борда не удалась: {err}");
            return BoardResult::default();
        }
    };

    let names = hands
        .iter()
        .map(|(id, hand)| (*id, ranker.describe(hand)))
        .collect();

    BoardResult {
        tiers: reduce_tiers(ranker, hands),
        hands: names,
    }
}
