use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Player, PlayerId, Tier};
use crate::engine::config::{PayoutConfig, RoundingMode};
use crate::engine::pot::Pot;

/// Доля одного игрока в конкретном поте.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub player_id: PlayerId,
    pub amount: Amount,
    /// Процент от суммы пота, 2 знака.
    pub percent: f64,
}

/// Разбивка одного пота по игрокам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PotPayout {
    pub amount: Amount,
    /// Отсортированы по id игрока.
    pub allocations: Vec<Allocation>,
    /// Сколько не досталось никому: на каком-то борде не нашлось ни победителя,
    /// ни живого претендента на пот. Эти деньги не попадают в итоги.
    #[serde(default, skip_serializing_if = "Amount::is_zero")]
    pub unallocated: Amount,
}

impl PotPayout {
    pub fn allocated(&self) -> Amount {
        self.allocations.iter().map(|a| a.amount).sum()
    }
}

/// Итог раздела: сколько выиграл каждый игрок и детализация по потам.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayoutResult {
    pub totals: BTreeMap<PlayerId, Amount>,
    pub per_pot: Vec<PotPayout>,
}

impl PayoutResult {
    pub fn total_for(&self, id: PlayerId) -> Amount {
        self.totals.get(&id).copied().unwrap_or(Amount::ZERO)
    }

    pub fn total_paid(&self) -> Amount {
        self.totals.values().sum()
    }

    pub fn total_unallocated(&self) -> Amount {
        self.per_pot.iter().map(|p| p.unallocated).sum()
    }
}

/// Сколько бордов реально делят банк: явное число, иначе число рейтингов, иначе 1.
pub fn effective_boards_count(boards_count: usize, rankings: usize) -> usize {
    if boards_count > 0 {
        boards_count
    } else if rankings > 0 {
        rankings
    } else {
        1
    }
}

/// Разделить поты между игроками.
///
/// - `board_tiers[b]` – рейтинг на борде `b` (лучшие первыми);
/// - `boards_count` – на сколько бордов делится каждый пот;
/// - `players` – снимок, нужен для проверки фолдов.
///
/// Каждый пот делится поровну между бордами. На каждом борде его доля уходит
/// первому тиру, в котором есть живые претенденты на этот пот; если такого тира
/// нет – поровну всем живым претендентам пота.
pub fn compute_payouts(
    pots: &[Pot],
    board_tiers: &[Vec<Tier>],
    boards_count: usize,
    players: &[Player],
    config: &PayoutConfig,
) -> PayoutResult {
    let boards = effective_boards_count(boards_count, board_tiers.len());

    let mut ledger = Ledger::new(players);
    let mut per_pot = Vec::with_capacity(pots.len());

    for (pot_idx, pot) in pots.iter().enumerate() {
        let mut shares: BTreeMap<PlayerId, f64> = BTreeMap::new();
        let mut unallocated = 0.0;
        let board_share = pot.amount.0 / boards as f64;

        for b in 0..boards {
            let tiers = board_tiers.get(b).map(Vec::as_slice).unwrap_or(&[]);

            let recipients = match winning_tier(pot, tiers, &ledger) {
                Some(winners) => winners,
                None => {
                    let fallback = live_contestants(pot, &ledger);
                    debug!(
                        "пот #{pot_idx}, борд #{b}: ни один тир не подошёл, fallback на {fallback:?}"
                    );
                    fallback
                }
            };

            if recipients.is_empty() {
                unallocated += board_share;
                continue;
            }

            let per_winner = board_share / recipients.len() as f64;
            for id in recipients {
                *ledger.raw_totals.entry(id).or_insert(0.0) += per_winner;
                *shares.entry(id).or_insert(0.0) += per_winner;
            }
        }

        let allocations = match config.rounding {
            RoundingMode::PerPot => shares
                .iter()
                .map(|(&id, &raw)| {
                    let amount = Amount(raw).round_cents();
                    Allocation {
                        player_id: id,
                        amount,
                        percent: amount.percent_of(pot.amount),
                    }
                })
                .collect::<Vec<_>>(),
            RoundingMode::Reconciled => reconcile_cents(&shares)
                .into_iter()
                .map(|(id, cents)| {
                    *ledger.reconciled_totals.entry(id).or_insert(0) += cents;
                    let amount = Amount::from_cents(cents);
                    Allocation {
                        player_id: id,
                        amount,
                        percent: amount.percent_of(pot.amount),
                    }
                })
                .collect(),
        };

        per_pot.push(PotPayout {
            amount: pot.amount,
            allocations,
            unallocated: Amount(unallocated),
        });
    }

    PayoutResult {
        totals: ledger.into_totals(config.rounding),
        per_pot,
    }
}

/// Первый (лучший) тир, в котором есть живые претенденты на этот пот.
fn winning_tier(pot: &Pot, tiers: &[Tier], ledger: &Ledger<'_>) -> Option<Vec<PlayerId>> {
    tiers
        .iter()
        .map(|tier| {
            tier.iter()
                .copied()
                .filter(|&id| pot.is_eligible(id) && !ledger.is_folded(id))
                .collect::<Vec<_>>()
        })
        .find(|winners| !winners.is_empty())
}

/// Все несфолдившие претенденты пота, которые есть в снимке.
fn live_contestants(pot: &Pot, ledger: &Ledger<'_>) -> Vec<PlayerId> {
    pot.eligible_player_ids
        .iter()
        .copied()
        .filter(|&id| ledger.is_known_and_live(id))
        .collect()
}

/// Метод наибольшего остатка: целые центы, сумма которых равна округлённой
/// сумме пота. Лишний цент получает больший дробный остаток, при равенстве –
/// меньший id.
fn reconcile_cents(shares: &BTreeMap<PlayerId, f64>) -> BTreeMap<PlayerId, i64> {
    let target = (shares.values().sum::<f64>() * 100.0).round() as i64;

    let mut parts: Vec<(PlayerId, i64, f64)> = shares
        .iter()
        .map(|(&id, &raw)| {
            let cents = raw * 100.0;
            let floor = cents.floor();
            (id, floor as i64, cents - floor)
        })
        .collect();

    let mut leftover = target - parts.iter().map(|(_, c, _)| *c).sum::<i64>();

    let mut order: Vec<usize> = (0..parts.len()).collect();
    order.sort_by(|&a, &b| {
        parts[b]
            .2
            .total_cmp(&parts[a].2)
            .then_with(|| parts[a].0.cmp(&parts[b].0))
    });

    for idx in order {
        if leftover <= 0 {
            break;
        }
        parts[idx].1 += 1;
        leftover -= 1;
    }

    parts.into_iter().map(|(id, cents, _)| (id, cents)).collect()
}

/// Накопитель итогов по игрокам за весь расчёт.
struct Ledger<'a> {
    players: &'a [Player],
    raw_totals: BTreeMap<PlayerId, f64>,
    reconciled_totals: BTreeMap<PlayerId, i64>,
}

impl<'a> Ledger<'a> {
    fn new(players: &'a [Player]) -> Self {
        Self {
            players,
            raw_totals: players.iter().map(|p| (p.id, 0.0)).collect(),
            reconciled_totals: players.iter().map(|p| (p.id, 0)).collect(),
        }
    }

    /// Неизвестный id считаем не сфолдившим.
    fn is_folded(&self, id: PlayerId) -> bool {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map_or(false, |p| p.folded)
    }

    fn is_known_and_live(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id && !p.folded)
    }

    fn into_totals(self, rounding: RoundingMode) -> BTreeMap<PlayerId, Amount> {
        match rounding {
            RoundingMode::PerPot => self
                .raw_totals
                .into_iter()
                .map(|(id, raw)| (id, Amount(raw).round_cents()))
                .collect(),
            RoundingMode::Reconciled => self
                .reconciled_totals
                .into_iter()
                .map(|(id, cents)| (id, Amount::from_cents(cents)))
                .collect(),
        }
    }
}
