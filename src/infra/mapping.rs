use std::collections::HashSet;

use crate::api::dto::{BoardRecord, CommittedRecord, PlayerRecord, SnapshotRecord};
use crate::domain::{Amount, Board, Card, Commitments, Player, PlayerId, Snapshot, Street, Tier};
use crate::engine::EngineError;
use crate::ranking::BoardResult;

/// Слот карты из UI: `null` и пустая строка – пустой слот.
fn parse_slot(slot: &Option<String>) -> Result<Option<Card>, crate::domain::CardParseError> {
    match slot.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => token.parse().map(Some),
    }
}

fn commitments_from_record(
    player_id: PlayerId,
    rec: &CommittedRecord,
) -> Result<Commitments, EngineError> {
    let committed = Commitments::new(rec.preflop, rec.flop, rec.turn, rec.river);

    for street in Street::ALL {
        let Amount(value) = committed.on(street);
        if !value.is_finite() {
            return Err(EngineError::NonFiniteCommitment { player_id, street });
        }
        if value < 0.0 {
            return Err(EngineError::NegativeCommitment { player_id, street });
        }
    }

    Ok(committed)
}

/// Маппинг записи игрока из UI в доменного игрока.
pub fn player_from_record(rec: &PlayerRecord) -> Result<Player, EngineError> {
    let mut hole_cards = [None, None];
    for (slot, raw) in hole_cards.iter_mut().zip(rec.hole_cards.iter()) {
        *slot = parse_slot(raw).map_err(|source| EngineError::BadCard {
            player_id: rec.id,
            source,
        })?;
    }

    Ok(Player {
        id: rec.id,
        committed: commitments_from_record(rec.id, &rec.committed)?,
        folded: rec.folded,
        hole_cards,
    })
}

/// Маппинг записи борда. `board_index` нужен только для текста ошибки.
pub fn board_from_record(board_index: usize, rec: &BoardRecord) -> Result<Board, EngineError> {
    let bad = |source| EngineError::BadBoardCard { board_index, source };

    let mut flop = [None; 3];
    for (slot, raw) in flop.iter_mut().zip(rec.flop.iter()) {
        *slot = parse_slot(raw).map_err(bad)?;
    }

    Ok(Board {
        flop,
        turn: parse_slot(&rec.turn).map_err(bad)?,
        river: parse_slot(&rec.river).map_err(bad)?,
    })
}

/// Проверить и собрать снимок целиком.
///
/// Уникальность карт не проверяется: её гарантирует UI, а движок на дублях
/// не падает.
pub fn snapshot_from_records(
    player_recs: &[PlayerRecord],
    board_recs: &[BoardRecord],
) -> Result<Snapshot, EngineError> {
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(player_recs.len());
    for p in player_recs {
        if !seen.insert(p.id) {
            return Err(EngineError::DuplicatePlayer(p.id));
        }
        players.push(player_from_record(p)?);
    }

    let boards = board_recs
        .iter()
        .enumerate()
        .map(|(idx, b)| board_from_record(idx, b))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot::new(players, boards))
}

pub fn snapshot_from_record(rec: &SnapshotRecord) -> Result<Snapshot, EngineError> {
    snapshot_from_records(&rec.players, &rec.boards)
}

/// Тиры из готовых результатов бордов (если UI прислал их сам).
pub fn tiers_from_results(results: &[BoardResult]) -> Vec<Vec<Tier>> {
    results.iter().map(|r| r.tiers.clone()).collect()
}

/// Утилита: получить отображаемое имя игрока.
pub trait PlayerNameResolver {
    fn resolve_name(&self, player_id: PlayerId) -> String;
}

/// Простая реализация: отображаемое имя = "Player {id}".
pub struct DefaultNameResolver;

impl PlayerNameResolver for DefaultNameResolver {
    fn resolve_name(&self, player_id: PlayerId) -> String {
        format!("Player {}", player_id)
    }
}

/// Имена из записей UI; пустое имя – как у `DefaultNameResolver`.
pub struct RecordNameResolver<'a> {
    players: &'a [PlayerRecord],
}

impl<'a> RecordNameResolver<'a> {
    pub fn new(players: &'a [PlayerRecord]) -> Self {
        Self { players }
    }
}

impl PlayerNameResolver for RecordNameResolver<'_> {
    fn resolve_name(&self, player_id: PlayerId) -> String {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .and_then(|p| p.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| DefaultNameResolver.resolve_name(player_id))
    }
}
