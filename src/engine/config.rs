use serde::{Deserialize, Serialize};

/// Как округлять доли игроков.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RoundingMode {
    /// Каждая доля в поте округляется до центов отдельно, итоги игроков
    /// копятся без округления и округляются один раз в конце.
    /// Сумма итогов может разойтись с суммой потов на несколько центов.
    #[default]
    PerPot,

    /// Доли в поте раскладываются методом наибольшего остатка в центах,
    /// итоги игроков – сумма уже сверенных долей.
    Reconciled,
}

/// Настройки расчёта выплат.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoutConfig {
    pub rounding: RoundingMode,
}

impl PayoutConfig {
    pub fn reconciled() -> Self {
        Self {
            rounding: RoundingMode::Reconciled,
        }
    }
}
