//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  In many retail systems:                                            │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                   │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Prices are stored as cents (i64). Form input arrives as a        │
//! │    decimal string and is parsed ONCE, at the command boundary.      │
//! │    A price is a fixed 2-decimal value from then on.                 │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boutique_core::money::Money;
//!
//! // Parse from form input (preferred at the boundary)
//! let price = Money::parse("10.99").unwrap();
//!
//! // Create from cents (preferred internally)
//! let same = Money::from_cents(1099);
//! assert_eq!(price, same);
//!
//! // Arithmetic operations
//! let doubled = price * 2;            // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values (differences)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                              │
/// │                                                                     │
/// │  Price form input ──► Money::parse ──► Product.price                │
/// │                                             │                       │
/// │  Sale snapshot ◄── unit_price frozen at sale time                   │
/// │                                             │                       │
/// │  Displayed as locale-formatted currency by the rendering layer      │
/// │                                                                     │
/// │  EVERY monetary value in the system flows through this type         │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

/// Error produced when a decimal string cannot be parsed into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The input was empty or whitespace.
    #[error("empty amount")]
    Empty,

    /// The input contained something other than digits, one dot, and an
    /// optional leading sign.
    #[error("invalid amount: {0}")]
    Invalid(String),

    /// More than two fractional digits; amounts are fixed 2-decimal values.
    #[error("too many decimal places: {0}")]
    TooPrecise(String),
}

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use boutique_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use boutique_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal string into Money, normalizing to fixed 2 decimals.
    ///
    /// Accepts `"10"`, `"10.9"`, `"10.99"`, and a leading `-`. Rejects more
    /// than two fractional digits rather than rounding silently.
    ///
    /// ## Example
    /// ```rust
    /// use boutique_core::money::Money;
    ///
    /// assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
    /// assert_eq!(Money::parse("10.9").unwrap().cents(), 1090);
    /// assert_eq!(Money::parse("10").unwrap().cents(), 1000);
    /// assert!(Money::parse("10.999").is_err());
    /// assert!(Money::parse("ten").is_err());
    /// ```
    ///
    /// ## Why Parse, Not Accept f64?
    /// The rendering layer hands us raw form text. Going text → f64 → cents
    /// reintroduces the float problem this type exists to avoid.
    pub fn parse(input: &str) -> Result<Self, ParseMoneyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, digits) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((maj, min)) => (maj, min),
            None => (digits, ""),
        };

        if minor_str.len() > 2 {
            return Err(ParseMoneyError::TooPrecise(input.to_string()));
        }
        if major_str.is_empty() && minor_str.is_empty() {
            return Err(ParseMoneyError::Invalid(input.to_string()));
        }
        if !major_str.chars().all(|c| c.is_ascii_digit())
            || !minor_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ParseMoneyError::Invalid(input.to_string()));
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse()
                .map_err(|_| ParseMoneyError::Invalid(input.to_string()))?
        };

        // "10.9" means 90 cents, not 9
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().unwrap_or(0) * 10,
            _ => minor_str.parse::<i64>().unwrap_or(0),
        };

        let cents = major * 100 + minor;
        Ok(if negative { Money(-cents) } else { Money(cents) })
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    ///
    /// ## Example
    /// ```rust
    /// use boutique_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.major(), 10);
    /// ```
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use boutique_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.9").unwrap().cents(), 1090);
        assert_eq!(Money::parse("10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
        assert_eq!(Money::parse(" 10.99 ").unwrap().cents(), 1099);
        assert_eq!(Money::parse("-5.50").unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse(""), Err(ParseMoneyError::Empty)));
        assert!(matches!(Money::parse("   "), Err(ParseMoneyError::Empty)));
        assert!(matches!(
            Money::parse("10.999"),
            Err(ParseMoneyError::TooPrecise(_))
        ));
        assert!(Money::parse("ten").is_err());
        assert!(Money::parse("10.9.9").is_err());
        assert!(Money::parse("10,99").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("-").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
