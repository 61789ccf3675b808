//! An exact money amount, stored as integer cents.
//!
//! Floating point is the wrong tool for balances: `0.1 + 0.2` is not `0.3`.
//! `Money` keeps amounts as a whole number of cents, which makes deposits
//! and withdrawals exact and comparisons trustworthy.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when reading a money amount from text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MoneyError {
    /// The text is not a recognizable amount (e.g. `"abc"`, `""`).
    #[error("not a valid money amount: {0:?}")]
    Malformed(String),

    /// The text has more than two decimal places.
    #[error("too many decimal places in money amount: {0:?}")]
    TooPrecise(String),
}

/// An amount of money in cents.
///
/// Construct with [`Money::from_dollars`] or [`Money::from_cents`], or
/// parse from text: `"250"`, `"19.75"`, `"$19.75"`, and `"-0.50"` are all
/// accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// The whole-dollar part, with the cents truncated away.
    pub const fn whole_dollars(&self) -> i64 {
        self.cents / 100
    }

    /// True for amounts strictly above zero.
    ///
    /// Deposits and withdrawals require a positive amount; zero is not a
    /// valid transaction.
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let magnitude = self.cents.unsigned_abs();
        write!(f, "{sign}${}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || MoneyError::Malformed(text.to_string());

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (dollar_text, cent_text) = match unsigned.split_once('.') {
            Some((dollars, cents)) => (dollars, cents),
            None => (unsigned, ""),
        };
        if dollar_text.is_empty() && cent_text.is_empty() {
            return Err(malformed());
        }
        if !dollar_text.chars().all(|c| c.is_ascii_digit())
            || !cent_text.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let dollars: i64 = if dollar_text.is_empty() {
            0
        } else {
            dollar_text.parse().map_err(|_| malformed())?
        };
        let cents: i64 = match cent_text.len() {
            0 => 0,
            1 => cent_text.parse::<i64>().map_err(|_| malformed())? * 10,
            2 => cent_text.parse().map_err(|_| malformed())?,
            _ => return Err(MoneyError::TooPrecise(text.to_string())),
        };

        let magnitude = dollars * 100 + cents;
        Ok(Money::from_cents(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents + rhs.cents)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.cents += rhs.cents;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::from_cents(self.cents - rhs.cents)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.cents -= rhs.cents;
    }
}
