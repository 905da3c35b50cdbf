//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.
//!
//! Ledger payloads carry amounts as strings and are not guaranteed to be
//! well-formed, so parsing is lenient: anything unparseable yields zero
//! instead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues and keeps report
/// totals exact across repeated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
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

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Larger of two amounts
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Parse a decimal amount string, degrading to zero on any failure
    ///
    /// Accepts formats: "1000", "1000.50", "-12.5", "$10.50", "1,000.00".
    /// Fractions beyond two digits round half-up. Empty, missing or malformed
    /// strings all parse to zero, as do amounts too large to represent in
    /// cents; ledger payloads are never trusted to carry clean numbers.
    pub fn parse_lenient(s: &str) -> Self {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Currency symbol and thousands separators are noise
        let s = s.strip_prefix('$').unwrap_or(s);
        let s: String = s.chars().filter(|c| *c != ',').collect();
        if s.is_empty() {
            return Self::zero();
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s.as_str(), ""),
        };

        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
            || (int_part.is_empty() && frac_part.is_empty())
        {
            return Self::zero();
        }

        let units: i64 = match int_part {
            "" => 0,
            _ => match int_part.parse() {
                Ok(n) => n,
                Err(_) => return Self::zero(),
            },
        };

        let mut digits = frac_part.chars().map(|c| c as i64 - '0' as i64);
        let mut cents = digits.next().unwrap_or(0) * 10 + digits.next().unwrap_or(0);
        if digits.next().unwrap_or(0) >= 5 {
            cents += 1;
        }

        // Amounts near i64::MAX cents overflow; treat them as malformed
        let total = match units.checked_mul(100).and_then(|t| t.checked_add(cents)) {
            Some(t) => t,
            None => return Self::zero(),
        };
        Self(if negative { -total } else { total })
    }

    /// Format as a plain signed decimal ("-500.00"), for CSV cells
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
