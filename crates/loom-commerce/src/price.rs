//! Price type for catalog and cart amounts.
//!
//! Catalog prices arrive as plain numbers in whole currency units (rupees),
//! so the amount is kept as the number the backend sent rather than being
//! converted to minor units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Currency symbol used when displaying prices.
pub const CURRENCY_SYMBOL: &str = "\u{20b9}";

/// A non-negative amount in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Create a price from an amount.
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// The raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Price of `quantity` units at this price.
    pub fn times(&self, quantity: u64) -> Self {
        Self(self.0 * quantity as f64)
    }

    /// Format for display, e.g. `₹1,24,500` or `₹349.50`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, group_indian(whole))?;
        if fraction != "00" {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

/// Indian digit grouping: the last three digits, then pairs (12,34,567).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0 + other.0)
    }
}

impl Mul<u64> for Price {
    type Output = Price;

    fn mul(self, quantity: u64) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl From<u32> for Price {
    fn from(amount: u32) -> Self {
        Self(f64::from(amount))
    }
}
