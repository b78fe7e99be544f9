use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::player::{Contender, Player};
use crate::domain::PlayerId;

/// Неизменяемый снимок раздачи, который UI передаёт движку на каждый вызов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub boards: Vec<Board>,
}

impl Snapshot {
    pub fn new(players: Vec<Player>, boards: Vec<Board>) -> Self {
        Self { players, boards }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Неизвестный id считаем не сфолдившим.
    pub fn is_folded(&self, id: PlayerId) -> bool {
        self.player(id).map_or(false, |p| p.folded)
    }

    /// Кто идёт на шоудаун: две карманные карты и не сфолдил.
    pub fn contenders(&self) -> Vec<Contender> {
        self.players
            .iter()
            .filter(|p| !p.folded)
            .filter_map(Player::contender)
            .collect()
    }
}
