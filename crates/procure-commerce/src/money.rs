//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the display currency, which
//! keeps cart arithmetic exact. The remote service speaks JSON numbers, so
//! conversion to and from decimals goes through a [`Currency`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::CommerceError;

/// Display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    JPY,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "JPY").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::JPY => "JPY",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "¥").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::JPY => "\u{00a5}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "JPY" => Some(Currency::JPY),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    fn multiplier(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s).ok_or_else(|| CommerceError::UnsupportedCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount in minor units.
///
/// Arithmetic saturates instead of overflowing so that cart operations stay
/// total functions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Create a value from minor units (yen, cents).
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create a value from a decimal amount as sent by the remote service.
    ///
    /// ```
    /// use procure_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(49.99, Currency::USD), Money::new(4999));
    /// assert_eq!(Money::from_decimal(1200.0, Currency::JPY), Money::new(1200));
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self((amount * currency.multiplier() as f64).round() as i64)
    }

    /// Convert to a decimal value for the wire.
    pub fn to_decimal(&self, currency: Currency) -> f64 {
        self.0 as f64 / currency.multiplier() as f64
    }

    /// Raw minor units.
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a quantity.
    pub fn times(&self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Clamp negative amounts to zero.
    pub fn floor_zero(&self) -> Money {
        Money(self.0.max(0))
    }

    /// Format with the currency symbol (e.g., "¥1200", "$49.99").
    pub fn display(&self, currency: Currency) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let places = currency.decimal_places() as usize;
        let abs = (self.0 as f64).abs() / currency.multiplier() as f64;
        format!("{}{}{:.places$}", sign, currency.symbol(), abs)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).minor_units(), 4999);
        assert_eq!(Money::from_decimal(100.0, Currency::JPY).minor_units(), 100);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999);
        assert!((m.to_decimal(Currency::USD) - 49.99).abs() < 0.001);
        assert!((m.to_decimal(Currency::JPY) - 4999.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(Currency::USD), "$49.99");
        assert_eq!(Money::new(1200).display(Currency::JPY), "\u{00a5}1200");
        assert_eq!(Money::new(-100).display(Currency::JPY), "-\u{00a5}100");
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        assert_eq!(Money::new(i64::MAX) + Money::new(1), Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MAX).times(2), Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
    }

    #[test]
    fn test_money_sum_and_floor() {
        let total: Money = [Money::new(300), Money::new(200)].iter().sum();
        assert_eq!(total, Money::new(500));
        assert_eq!((total - Money::new(600)).floor_zero(), Money::zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("jpy"), Some(Currency::JPY));
        assert_eq!("EUR".parse::<Currency>(), Ok(Currency::EUR));
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
