use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// An amount of money in minor units (paise). Totals are computed here so
/// that the two-decimal rounding the backend expects is exact regardless of
/// how many line items go into them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Build from a major-unit amount (rupees), rounding half-away-from-zero
    /// to two decimal places.
    pub fn from_major(major: f64) -> Self {
        Money((major * 100.0).round() as i64)
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Major-unit value, exact to two decimal places.
    pub fn major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Scale by a line-item quantity.
    pub fn times(&self, quantity: u32) -> Self {
        Money(self.0 * i64::from(quantity))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Serde helper for wire fields that carry major-unit amounts as numbers
/// (the backend's order and verification payloads use rupees, the gateway
/// descriptor uses paise).
pub mod as_major {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.major())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Ok(Money::from_major(major))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_rounds_to_two_decimals() {
        assert_eq!(Money::from_major(300.0).minor(), 30000);
        assert_eq!(Money::from_major(99.99).minor(), 9999);
        assert_eq!(Money::from_major(0.004).minor(), 0);
        assert_eq!(Money::from_major(-12.5).minor(), -1250);
    }

    #[test]
    fn display_pads_minor_units() {
        assert_eq!(Money::from_minor(40000).to_string(), "400.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-150).to_string(), "-1.50");
    }

    #[test]
    fn line_totals_sum_exactly() {
        let ticket = Money::from_major(300.0);
        let food: Money = [Money::from_major(50.0).times(2)].into_iter().sum();
        assert_eq!((ticket + food).to_string(), "400.00");
        assert_eq!((ticket + Money::ZERO).to_string(), "300.00");
    }

    #[test]
    fn major_serde_roundtrip() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Payload {
            #[serde(with = "crate::money::as_major")]
            amount: Money,
        }

        let json = serde_json::to_string(&Payload {
            amount: Money::from_minor(40000),
        })
        .unwrap();
        assert_eq!(json, "{\"amount\":400.0}");

        let back: Payload = serde_json::from_str("{\"amount\":400}").unwrap();
        assert_eq!(back.amount.minor(), 40000);
    }
}
