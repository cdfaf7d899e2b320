//! Amount type for handling signed monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal`. The sign of an amount carries
//! its meaning: income is non-negative and expenses are negative.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents a signed money amount.
///
/// `Display` and serialization write the plain decimal numeral exactly as it was parsed, which is
/// what goes into the transactions file. Use `to_fixed` or `to_dollars` for two-decimal
/// presentation.
///
/// # Examples
///
/// ```
/// # use fintrack::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-40").unwrap();
/// assert!(amount.is_negative());
/// assert_eq!(amount.to_string(), "-40");
/// assert_eq!(amount.to_dollars(), "$-40.00");
/// ```
///
/// Scientific notation is accepted:
/// ```
/// # use fintrack::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1.5e2").unwrap();
/// assert_eq!(amount.to_fixed(), "150.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Creates a new Amount from a Decimal value.
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is negative, i.e. an expense.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Returns true if the amount counts as income. Zero is income.
    pub fn is_income(&self) -> bool {
        !self.is_negative()
    }

    /// The magnitude of the amount.
    pub fn abs(&self) -> Amount {
        Amount(self.0.abs())
    }

    /// Adds two amounts, returning `None` if the sum is outside the range of `Decimal`.
    pub fn checked_add(&self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Formats the amount with exactly two decimal places, e.g. `-40.00`.
    pub fn to_fixed(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }

    /// Formats the amount as dollars with two decimal places, e.g. `$-40.00`.
    pub fn to_dollars(&self) -> String {
        format!("${}", self.to_fixed())
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Clone, PartialEq, Eq)]
pub struct AmountError(String);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a numeric amount", self.0)
    }
}

impl Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError(s.to_string()));
        }

        // A leading '+' is valid numeric input but Decimal does not take it.
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let value = if unsigned.contains(['e', 'E']) {
            Decimal::from_scientific(unsigned)
        } else {
            Decimal::from_str(unsigned)
        }
        .map_err(|_| AmountError(s.to_string()))?;

        Ok(Amount(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(amt("100").value(), Decimal::from(100));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(amt("-40.00").value(), Decimal::from_str("-40.00").unwrap());
    }

    #[test]
    fn test_parse_explicit_plus() {
        assert_eq!(amt("+25.5").value(), Decimal::from_str("25.5").unwrap());
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(amt("  50.25  ").value(), Decimal::from_str("50.25").unwrap());
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(amt("1e3").value(), Decimal::from(1000));
        assert_eq!(amt("-2.5E1").value(), Decimal::from(-25));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Amount::from_str("").is_err());
        assert!(Amount::from_str("   ").is_err());
        assert!(Amount::from_str("abc").is_err());
        assert!(Amount::from_str("12.3.4").is_err());
        assert!(Amount::from_str("$50.00").is_err());
        assert!(Amount::from_str("cancel").is_err());
    }

    #[test]
    fn test_display_keeps_parsed_form() {
        assert_eq!(amt("25.5").to_string(), "25.5");
        assert_eq!(amt("-40").to_string(), "-40");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(amt("25.5").to_fixed(), "25.50");
        assert_eq!(amt("-40").to_fixed(), "-40.00");
        assert_eq!(amt("0.005").to_fixed(), "0.01");
        assert_eq!(amt("1234.5678").to_fixed(), "1234.57");
    }

    #[test]
    fn test_to_dollars() {
        assert_eq!(amt("125.5").to_dollars(), "$125.50");
        assert_eq!(amt("-40").to_dollars(), "$-40.00");
        assert_eq!(Amount::ZERO.to_dollars(), "$0.00");
    }

    #[test]
    fn test_zero_is_income_not_negative() {
        let zero = amt("0.00");
        assert!(zero.is_zero());
        assert!(zero.is_income());
        assert!(!zero.is_negative());
        assert!(!amt("-0").is_negative());
    }

    #[test]
    fn test_sign() {
        assert!(amt("-0.01").is_negative());
        assert!(!amt("-0.01").is_income());
        assert!(amt("0.01").is_income());
    }

    #[test]
    fn test_checked_add() {
        let total = amt("100.0").checked_add(amt("-40.0")).unwrap();
        assert_eq!(total.value(), Decimal::from_str("60.0").unwrap());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = amt("79228162514264337593543950335");
        assert!(max.checked_add(amt("1")).is_none());
        assert!(max.checked_add(amt("-1")).is_some());
        let min = amt("-79228162514264337593543950335");
        assert!(min.checked_add(amt("-1")).is_none());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&amt("-4.50")).unwrap();
        assert_eq!(json, "\"-4.50\"");
    }

    #[test]
    fn test_deserialize() {
        let amount: Amount = serde_json::from_str("\"12.75\"").unwrap();
        assert_eq!(amount.value(), Decimal::from_str("12.75").unwrap());
        assert!(serde_json::from_str::<Amount>("\"twelve\"").is_err());
    }
}
