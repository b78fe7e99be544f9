//! Движок раздела банка: сайд-поты, раздел по тирам и бордам, готовность ввода.
//!
//! Высокоуровневый объект: `PayoutEngine`
//! Основные операции:
//!   - `build_pots` – поты из вкладов игроков
//!   - `evaluate_boards` – тиры по каждому борду
//!   - `payouts` – полный расчёт: поты + тиры -> выплаты
//!
//! Все операции – чистые функции снимка: повторный вызов даёт тот же результат.

pub mod config;
pub mod errors;
pub mod payouts;
pub mod pot;
pub mod readiness;
pub mod side_pots;

pub use config::{PayoutConfig, RoundingMode};
pub use errors::EngineError;
pub use payouts::{compute_payouts, Allocation, PayoutResult, PotPayout};
pub use pot::Pot;
pub use readiness::{all_boards_complete, can_evaluate, is_board_complete, is_player_complete};
pub use side_pots::build_pots;

use crate::domain::Snapshot;
use crate::ranking::{evaluate_boards, BoardEvaluation, HandRanker};

/// Полный расчёт поверх одного оценщика и одного конфига.
///
/// Состояния между вызовами нет: движок держит только ссылку на оценщика и настройки.
pub struct PayoutEngine<'r, R> {
    ranker: Option<&'r R>,
    config: PayoutConfig,
}

/// Всё, что получается из одного снимка.
#[derive(Clone, Debug)]
pub struct Showdown {
    pub pots: Vec<Pot>,
    pub boards: BoardEvaluation,
    pub payouts: PayoutResult,
}

impl<'r, R: HandRanker> PayoutEngine<'r, R> {
    pub fn new(ranker: Option<&'r R>, config: PayoutConfig) -> Self {
        Self { ranker, config }
    }

    pub fn build_pots(&self, snapshot: &Snapshot) -> Vec<Pot> {
        build_pots(&snapshot.players)
    }

    pub fn evaluate_boards(&self, snapshot: &Snapshot) -> BoardEvaluation {
        evaluate_boards(self.ranker, snapshot)
    }

    /// Поты + тиры -> выплаты. Число бордов берётся из снимка.
    pub fn payouts(&self, snapshot: &Snapshot) -> Showdown {
        let pots = self.build_pots(snapshot);
        let boards = self.evaluate_boards(snapshot);
        let payouts = compute_payouts(
            &pots,
            &boards.tiers(),
            snapshot.boards.len(),
            &snapshot.players,
            &self.config,
        );

        Showdown {
            pots,
            boards,
            payouts,
        }
    }
}
