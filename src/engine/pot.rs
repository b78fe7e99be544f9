use serde::{Deserialize, Serialize};

use crate::domain::{Amount, PlayerId};

/// Пот (основной или сайд): сумма и кто может на неё претендовать.
///
/// Поты не мутируются, при каждом запросе строятся заново.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pot {
    pub amount: Amount,
    pub eligible_player_ids: Vec<PlayerId>,
}

impl Pot {
    pub fn new(amount: Amount, eligible_player_ids: Vec<PlayerId>) -> Self {
        Self {
            amount,
            eligible_player_ids,
        }
    }

    pub fn is_eligible(&self, id: PlayerId) -> bool {
        self.eligible_player_ids.contains(&id)
    }
}

/// Общая сумма по списку потов.
pub fn total_amount(pots: &[Pot]) -> Amount {
    pots.iter().map(|p| p.amount).sum()
}
