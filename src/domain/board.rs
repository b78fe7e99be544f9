use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Один борд общих карт. Несколько бордов = run it twice (или трижды).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Board {
    pub flop: [Option<Card>; 3],
    pub turn: Option<Card>,
    pub river: Option<Card>,
}

impl Board {
    /// Полный борд из 5 карт.
    pub fn full(flop: [Card; 3], turn: Card, river: Card) -> Self {
        Self {
            flop: flop.map(Some),
            turn: Some(turn),
            river: Some(river),
        }
    }

    /// Все выложенные карты: флоп, тёрн, ривер (пустые слоты пропускаются).
    pub fn cards(&self) -> Vec<Card> {
        self.flop
            .iter()
            .chain([&self.turn, &self.river])
            .flatten()
            .copied()
            .collect()
    }

    /// Борд готов: 3 карты флопа + тёрн + ривер.
    pub fn is_complete(&self) -> bool {
        self.flop.iter().all(Option::is_some) && self.turn.is_some() && self.river.is_some()
    }
}
