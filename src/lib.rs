//! Раздел банка на шоудауне: сайд-поты, тиры по бордам, run it twice.
//!
//! Поток данных односторонний:
//!   вклады -> поты; карманные карты + борд -> тиры; поты + тиры -> выплаты.
//!
//! Силу рук движок сам не считает: оценщик подключается через
//! `ranking::HandRanker` и может отсутствовать.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod ranking;

pub use domain::{Amount, Board, Card, Commitments, Player, PlayerId, Snapshot, Tier};
pub use engine::{
    build_pots, compute_payouts, PayoutConfig, PayoutEngine, PayoutResult, Pot, RoundingMode,
};
pub use ranking::{evaluate_boards, rank_tiers, HandRanker, RankerError, ScoredRanker};
