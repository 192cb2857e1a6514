//! Precision-safe monetary type.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors in balances, allocations, and PnL.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

/// Monetary amount with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and prevent mixing
/// amounts with unrelated numeric values (percentages, counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Apply a percentage (e.g., a performance fee of `10` takes 10%).
    #[inline]
    pub fn pct(&self, percentage: Decimal) -> Self {
        Self(self.0 * percentage / Decimal::from(100))
    }

    /// Round to a currency's display precision (2 decimal places).
    #[inline]
    pub fn round_display(&self) -> Self {
        Self(self.0.round_dp(2))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Amount {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Amount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Amount {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pct() {
        let pnl = Amount::new(dec!(250));
        let fee = pnl.pct(dec!(10));
        assert_eq!(fee.0, dec!(25));
    }

    #[test]
    fn test_round_display() {
        let a = Amount::new(dec!(10.0151));
        assert_eq!(a.round_display().0, dec!(10.02));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Amount::new(dec!(1)).is_positive());
        assert!(Amount::new(dec!(-1)).is_negative());
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::ZERO.is_positive());
    }
}
