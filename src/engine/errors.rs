use crate::domain::{CardParseError, PlayerId, Street};

use thiserror::Error;

/// Ошибки проверки входных данных движка.
///
/// Сами расчёты (поты, тиры, выплаты) не падают – только разбор снимка из UI.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Игрок {player_id}: битая карта ({source})")]
    BadCard {
        player_id: PlayerId,
        #[source]
        source: CardParseError,
    },

    #[error("Борд #{board_index}: битая карта ({source})")]
    BadBoardCard {
        board_index: usize,
        #[source]
        source: CardParseError,
    },

    #[error("Игрок {player_id}: отрицательная ставка на улице {street:?}")]
    NegativeCommitment { player_id: PlayerId, street: Street },

    #[error("Игрок {player_id}: ставка на улице {street:?} не является числом")]
    NonFiniteCommitment { player_id: PlayerId, street: Street },

    #[error("Игрок с id={0} встречается в снимке дважды")]
    DuplicatePlayer(PlayerId),
}
