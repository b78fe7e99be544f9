//! Шоудаун по бордам через внешний оценщик рук.
//!
//! Сам движок руки не сравнивает. Основные функции:
//!   - `rank_tiers(ranker, contenders, board) -> Vec<Tier>`
//!   - `evaluate_boards(ranker, snapshot) -> BoardEvaluation`

pub mod board_eval;
pub mod capability;
pub mod strength_table;
pub mod tiers;

pub use board_eval::{evaluate_board, evaluate_boards, Advisory, BoardEvaluation, BoardResult};
pub use capability::{ByScore, HandRanker, RankerError, ScoredRanker};
pub use strength_table::{evaluate_boards_by_strength, StrengthTable};
pub use tiers::{determine_winners, rank_tiers, rank_tiers_by_score};
