use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

use crate::op;

pub const SETTLEMENT_CURRENCY_CODE: &str = "EUR";
pub const SETTLEMENT_CURRENCY_CODE_LOWER: &str = "eur";

//--------------------------------------       Money         ---------------------------------------------------------
/// An amount of money in integer cents. All ledger arithmetic happens in this type; fractional
/// currency never enters the system.
#[derive(Debug, Clone, Copy, Default, Type, Ord, PartialOrd, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct Money(i64);

op!(binary Money, Add, add);
op!(binary Money, Sub, sub);
op!(inplace Money, SubAssign, sub_assign);
op!(unary Money, Neg, neg);

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::from(self.value() * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in cents: {0}")]
pub struct MoneyConversionError(String);

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Money {}

impl TryFrom<u64> for Money {
    type Error = MoneyConversionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > i64::MAX as u64 {
            Err(MoneyConversionError(format!("Value {} is too large to convert to Money", value)))
        } else {
            #[allow(clippy::cast_possible_wrap)]
            Ok(Self(value as i64))
        }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Money {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Builds a `Money` from whole currency units.
    pub fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtraction that stops at zero. Used where an invariant floors a value rather than letting
    /// it go negative.
    pub fn saturating_sub_floor_zero(&self, rhs: Money) -> Money {
        Money((self.0 - rhs.0).max(0))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_formats_cents() {
        assert_eq!(Money::from(150_999).to_string(), "1509.99");
        assert_eq!(Money::from(5).to_string(), "0.05");
        assert_eq!(Money::from(-2_550).to_string(), "-25.50");
    }

    #[test]
    fn arithmetic() {
        let a = Money::from(500);
        let b = Money::from(300);
        assert_eq!(a + b, Money::from(800));
        assert_eq!(a - b, Money::from(200));
        assert_eq!(-a, Money::from(-500));
        assert_eq!(a * 3, Money::from(1500));
        assert_eq!(vec![a, b].into_iter().sum::<Money>(), Money::from(800));
    }

    #[test]
    fn floored_subtraction_never_goes_negative() {
        let paid = Money::from(200);
        assert_eq!(paid.saturating_sub_floor_zero(Money::from(700)), Money::from(0));
        assert_eq!(paid.saturating_sub_floor_zero(Money::from(50)), Money::from(150));
    }
}
