use thiserror::Error;

use crate::domain::{Board, Contender, PlayerId};

/// Сбой внешнего оценщика рук во время конкретного вызова.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankerError {
    #[error("Не удалось оценить руку игрока {player_id}: {reason}")]
    Evaluation { player_id: PlayerId, reason: String },

    #[error("Ошибка сравнения рук: {0}")]
    Comparison(String),

    #[error("Оценщик вернул некорректный список победителей")]
    BadWinners,
}

/// Внешний оценщик силы рук.
///
/// Сам движок руки не сравнивает: он только спрашивает "кто лучший среди этих".
/// Оценщика может не быть вовсе – тогда везде передаётся `None`.
pub trait HandRanker {
    /// Непрозрачный дескриптор оценённой руки.
    type Hand;

    /// Оценить 2 карманные карты игрока вместе с бордом.
    fn evaluate(&self, contender: &Contender, board: &Board) -> Result<Self::Hand, RankerError>;

    /// Индексы рук, которые делят первое место среди переданных.
    fn winners(&self, hands: &[&Self::Hand]) -> Result<Vec<usize>, RankerError>;

    /// Человеческое название руки ("Two pair", "Flush"...), если оценщик умеет.
    fn describe(&self, _hand: &Self::Hand) -> Option<String> {
        None
    }
}

/// Оценщик, который умеет выдать полную упорядоченную силу руки.
///
/// С ним тиры строятся одной сортировкой, без повторных запросов победителей.
pub trait ScoredRanker {
    type Score: Ord + Clone;

    fn score(&self, contender: &Contender, board: &Board) -> Result<Self::Score, RankerError>;

    fn describe(&self, _score: &Self::Score) -> Option<String> {
        None
    }
}

/// Адаптер: любой `ScoredRanker` работает и как `HandRanker`.
/// Победители – все руки с максимальной силой.
#[derive(Clone, Debug, Default)]
pub struct ByScore<S>(pub S);

impl<S: ScoredRanker> HandRanker for ByScore<S> {
    type Hand = S::Score;

    fn evaluate(&self, contender: &Contender, board: &Board) -> Result<Self::Hand, RankerError> {
        self.0.score(contender, board)
    }

    fn winners(&self, hands: &[&Self::Hand]) -> Result<Vec<usize>, RankerError> {
        let Some(best) = hands.iter().max() else {
            return Ok(Vec::new());
        };
        Ok(hands
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == best)
            .map(|(idx, _)| idx)
            .collect())
    }

    fn describe(&self, hand: &Self::Hand) -> Option<String> {
        self.0.describe(hand)
    }
}
