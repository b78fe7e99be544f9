use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, Sub};

use serde::{Deserialize, Serialize};

/// Денежная сумма в банке. Обёртка над f64, чтобы не путать с процентами и счётчиками.
///
/// Суммы бывают дробными: банк делится на число бордов и на число победителей.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// NaN и бесконечности считаем нулём (как пустое поле ввода).
    pub fn sanitized(self) -> Amount {
        if self.0.is_finite() {
            self
        } else {
            Amount::ZERO
        }
    }

    /// Округление до центов (2 знака после запятой), половинки – вверх.
    pub fn round_cents(self) -> Amount {
        Amount((self.0 * 100.0).round() / 100.0)
    }

    /// Сумма в целых центах (для сверки округления).
    pub fn to_cents(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    pub fn from_cents(cents: i64) -> Amount {
        Amount(cents as f64 / 100.0)
    }

    /// Доля `self` от `whole` в процентах, округлённая до 2 знаков.
    /// Для нулевого `whole` – 0.
    pub fn percent_of(self, whole: Amount) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        (self.0 / whole.0 * 100.0 * 100.0).round() / 100.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

/// Деление суммы на число долей (бордов, победителей).
impl Div<usize> for Amount {
    type Output = Amount;

    fn div(self, rhs: usize) -> Self::Output {
        Amount(self.0 / rhs as f64)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + *a)
    }
}
