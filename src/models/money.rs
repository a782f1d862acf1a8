//! Money type for representing currency amounts
//!
//! Wraps an exact `rust_decimal::Decimal` so repeated additions never drift the
//! way binary floating point does. Arithmetic is checked: an overflow yields
//! `None` instead of a panic.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::Neg;

/// Number of decimal places shown for an amount
const DISPLAY_SCALE: u32 = 2;

/// Most significant digits SQLite keeps exactly when it stores a value as REAL
pub const MAX_SIGNIFICANT_DIGITS: u32 = 15;

/// Largest amount a single booking may carry, in cents
const MAX_BOOKING_CENTS: i64 = 999_999_999_999_999;

/// Represents an exact monetary amount (positive for income, negative for expense)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from an exact decimal
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use virtuallet::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, DISPLAY_SCALE))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the exact decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Largest amount accepted for a single booking: 9,999,999,999,999.99
    pub fn max_booking() -> Self {
        Self::from_cents(MAX_BOOKING_CENTS)
    }

    /// Number of significant digits, ignoring trailing zeros
    pub fn significant_digits(&self) -> u32 {
        let mantissa = self.0.normalize().mantissa().unsigned_abs();
        if mantissa == 0 {
            0
        } else {
            mantissa.ilog10() + 1
        }
    }

    /// Whether the amount survives a trip through a SQLite `DECIMAL` column unchanged
    pub fn is_storable(&self) -> bool {
        self.significant_digits() <= MAX_SIGNIFICANT_DIGITS
    }

    /// Whether the amount may be booked or configured: storable and no larger than [`max_booking`](Self::max_booking)
    pub fn is_within_booking_limit(&self) -> bool {
        self.abs() <= Self::max_booking() && self.is_storable()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Round to cents, half-up (midpoints move away from zero)
    pub fn rounded(&self) -> Self {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // Drop a negative sign left over from rounding e.g. -0.001
            Self(Decimal::ZERO)
        } else {
            Self(rounded)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10.50", "$10.50", "10", ".5".
    /// Precision is kept exactly as entered.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str_exact(rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// The exact value as text, without rounding (used for persistence)
    pub fn to_exact_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.rounded().0;
        value.rescale(DISPLAY_SCALE);
        write!(f, "{}", value)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
