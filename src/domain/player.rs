use serde::{Deserialize, Serialize};

use crate::domain::amount::Amount;
use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];
}

/// Сколько игрок вложил на каждой улице.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Commitments {
    #[serde(default)]
    pub preflop: Amount,
    #[serde(default)]
    pub flop: Amount,
    #[serde(default)]
    pub turn: Amount,
    #[serde(default)]
    pub river: Amount,
}

impl Commitments {
    pub fn new(preflop: f64, flop: f64, turn: f64, river: f64) -> Self {
        Self {
            preflop: Amount(preflop),
            flop: Amount(flop),
            turn: Amount(turn),
            river: Amount(river),
        }
    }

    /// Всё на префлопе – частый случай в тестах и олл-инах.
    pub fn preflop_only(amount: f64) -> Self {
        Self::new(amount, 0.0, 0.0, 0.0)
    }

    pub fn on(&self, street: Street) -> Amount {
        match street {
            Street::Preflop => self.preflop,
            Street::Flop => self.flop,
            Street::Turn => self.turn,
            Street::River => self.river,
        }
    }

    /// Суммарный вклад по всем улицам. Битые значения (NaN/inf) идут как 0.
    pub fn total(&self) -> Amount {
        Street::ALL
            .iter()
            .map(|s| self.on(*s).sanitized())
            .sum()
    }
}

/// Игрок в снэпшоте: только то, что нужно для раздела банка.
///
/// Фолд не возвращает фишки – вклад сфолдившего игрока остаётся в банке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub committed: Commitments,
    pub folded: bool,
    /// Карманные карты: 0, 1 или 2 заполненных слота.
    pub hole_cards: [Option<Card>; 2],
}

/// Игрок, допущенный к шоудауну: ровно две карманные карты.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contender {
    pub id: PlayerId,
    pub hole: [Card; 2],
}

impl Player {
    pub fn new(id: PlayerId, committed: Commitments) -> Self {
        Self {
            id,
            committed,
            folded: false,
            hole_cards: [None, None],
        }
    }

    pub fn with_cards(mut self, first: Card, second: Card) -> Self {
        self.hole_cards = [Some(first), Some(second)];
        self
    }

    pub fn folded(mut self) -> Self {
        self.folded = true;
        self
    }

    pub fn total_committed(&self) -> Amount {
        self.committed.total()
    }

    pub fn has_full_hand(&self) -> bool {
        self.hole_cards.iter().all(Option::is_some)
    }

    /// Вернёт `Some`, только если у игрока обе карманные карты.
    pub fn contender(&self) -> Option<Contender> {
        match self.hole_cards {
            [Some(a), Some(b)] => Some(Contender {
                id: self.id,
                hole: [a, b],
            }),
            _ => None,
        }
    }
}
