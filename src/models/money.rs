//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) so that ledger totals add up
//! exactly. Display always uses two decimals and the fixed currency code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency code used when rendering amounts
pub const CURRENCY_CODE: &str = "KD";

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use committee_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // KD 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Take `percent` percent of this amount, rounding half away from zero
    ///
    /// Results beyond the i64 range saturate.
    pub const fn percentage(&self, percent: i64) -> Self {
        let scaled = self.0 as i128 * percent as i128;
        let adjust = if scaled < 0 { -50 } else { 50 };
        let result = (scaled + adjust) / 100;
        if result > i64::MAX as i128 {
            Self(i64::MAX)
        } else if result < i64::MIN as i128 {
            Self(i64::MIN)
        } else {
            Self(result as i64)
        }
    }

    /// Amount as a floating-point number of units (for ratios only)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "KD 10.50", "10.50 KD", "10".
    /// At most two decimal places are allowed.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let s = s
            .strip_prefix(CURRENCY_CODE)
            .or_else(|| s.strip_suffix(CURRENCY_CODE))
            .unwrap_or(s)
            .trim();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(invalid());
        }

        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !digits(whole) || !digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with an explicit currency code
    pub fn format_with_code(&self, code: &str) -> String {
        if self.is_negative() {
            format!("-{} {}.{:02}", code, self.units().abs(), self.cents_part())
        } else {
            format!("{} {}.{:02}", code, self.units(), self.cents_part())
        }
    }

    /// Format as a plain decimal with two places, no currency code
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_code(CURRENCY_CODE))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// The amount does not fit in the ledger's range
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "KD 10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "KD 0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-KD 10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "KD 0.05");
        assert_eq!(format!("{:>10}", Money::from_cents(5)), "   KD 0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Money::from_units(1000).percentage(15), Money::from_units(150));
        assert_eq!(Money::from_cents(1050).percentage(15).cents(), 158);
        assert_eq!(Money::from_cents(-1050).percentage(15).cents(), -158);
        assert_eq!(Money::zero().percentage(15), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("KD 10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10.50 KD").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("5.x").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1 000").is_err());
    }

    #[test]
    fn test_parse_rejects_extra_decimal_places() {
        assert_eq!(
            Money::parse("10.999"),
            Err(MoneyParseError::InvalidFormat("10.999".into()))
        );
        assert!(Money::parse("0.001").is_err());
        assert_eq!(Money::parse("10.90").unwrap().cents(), 1090);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            Money::parse("99999999999999999"),
            Err(MoneyParseError::OutOfRange("99999999999999999".into()))
        );
        assert!(matches!(
            Money::parse("-KD 92233720368547758.08"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert_eq!(
            Money::parse("92233720368547758.07").unwrap(),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_percentage_of_large_amounts() {
        let large = Money::from_cents(i64::MAX / 10);
        assert_eq!(large.percentage(15).cents(), 138_350_580_552_821_637);
        assert_eq!(Money::from_cents(i64::MAX).percentage(200).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).percentage(200).cents(), i64::MIN);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((-max - Money::from_units(5)).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);

        let total: Money = vec![max, max].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(12345).to_decimal_string(), "123.45");
        assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
