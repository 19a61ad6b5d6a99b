//! Currency amounts and tax rates over [`rust_decimal::Decimal`].
//!
//! Prices enter in minor units (cents) and every sum, quantity product and tax is kept
//! exact. Rounding to cents happens once, when an amount is shown. Arithmetic saturates
//! at the limits of `Decimal` instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Digits shown after the decimal point.
const MINOR_DIGITS: u32 = 2;

/// A signed amount of money. Serialized as a decimal string, e.g. `"68.01"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// `Money::from_minor(1299)` is 12.99.
    pub fn from_minor(minor: i64) -> Self {
        Money(Decimal::new(minor, MINOR_DIGITS))
    }

    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// The exact, unrounded amount.
    pub const fn amount(self) -> Decimal {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The amount as it is presented: cents, half away from zero.
    pub fn rounded(self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Even share of `self` across `parts`. Zero parts yields zero.
    pub fn divided_by(self, parts: usize) -> Money {
        self.0
            .checked_div(Decimal::from(parts))
            .map(Money)
            .unwrap_or(Money::ZERO)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.rounded().0;
        shown.rescale(MINOR_DIGITS);
        if shown.is_zero() {
            shown.set_sign_positive(true);
        }
        write!(f, "{shown}")
    }
}

/// A tax rate as a fraction between 0 and 1: `0.08` is 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub fn new(rate: Decimal) -> Result<Self, TaxRateError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(TaxRateError::OutOfRange(rate));
        }
        Ok(Self(rate))
    }

    pub const fn rate(self) -> Decimal {
        self.0
    }

    /// Tax owed on `amount`, unrounded.
    pub fn tax_on(self, amount: Money) -> Money {
        Money(amount.0.saturating_mul(self.0))
    }
}

impl Default for TaxRate {
    /// 8%.
    fn default() -> Self {
        Self(Decimal::new(8, 2))
    }
}

impl Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = (self.0 * Decimal::ONE_HUNDRED).normalize();
        write!(f, "{percent}%")
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = TaxRateError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxRateError {
    #[error("invalid tax rate {0:?}: expected a decimal fraction such as 0.08")]
    Malformed(String),
    #[error("tax rate {0} is outside 0..=1")]
    OutOfRange(Decimal),
}

impl FromStr for TaxRate {
    type Err = TaxRateError;

    /// Parses a decimal fraction: `"0.08"` is 8%, `"0.0825"` is 8.25%.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate =
            Decimal::from_str(s.trim()).map_err(|_| TaxRateError::Malformed(s.to_string()))?;
        Self::new(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        Money::from_decimal(s.parse().unwrap())
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(money("5.0376").to_string(), "5.04");
        assert_eq!(money("68.0076").to_string(), "68.01");
        assert_eq!(money("0.005").to_string(), "0.01");
        assert_eq!(money("0.004999").to_string(), "0.00");
        assert_eq!(money("-0.005").to_string(), "-0.01");
        assert_eq!(money("-0.001").to_string(), "0.00");
        assert_eq!(Money::from_minor(700).to_string(), "7.00");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn tax_is_exact_before_rounding() {
        let subtotal = Money::from_minor(6297);
        let tax = TaxRate::default().tax_on(subtotal);
        assert_eq!(tax, money("5.0376"));
        assert_eq!(tax.rounded(), Money::from_minor(504));
        assert_eq!((subtotal + tax).to_string(), "68.01");
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_decimal(Decimal::MAX);
        assert_eq!(huge * u32::MAX, huge);
        assert_eq!(huge + Money::from_minor(1), huge);
        assert_eq!(
            Money::from_decimal(Decimal::MIN) - Money::from_minor(1),
            Money::from_decimal(Decimal::MIN)
        );
    }

    #[test]
    fn parses_decimal_rates() {
        assert_eq!("0.08".parse::<TaxRate>().unwrap(), TaxRate::default());
        assert_eq!(
            "0.0825".parse::<TaxRate>().unwrap().rate(),
            Decimal::new(825, 4)
        );
        assert_eq!(" 0.080000 ".parse::<TaxRate>().unwrap(), TaxRate::default());
        assert_eq!("0".parse::<TaxRate>().unwrap().rate(), Decimal::ZERO);
        assert_eq!("1".parse::<TaxRate>().unwrap().rate(), Decimal::ONE);
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(matches!(
            "-0.08".parse::<TaxRate>(),
            Err(TaxRateError::OutOfRange(_))
        ));
        assert!(matches!(
            "1.5".parse::<TaxRate>(),
            Err(TaxRateError::OutOfRange(_))
        ));
        assert!(matches!(
            "eight".parse::<TaxRate>(),
            Err(TaxRateError::Malformed(_))
        ));
        assert!(matches!(
            "".parse::<TaxRate>(),
            Err(TaxRateError::Malformed(_))
        ));
    }

    #[test]
    fn rate_display() {
        assert_eq!(TaxRate::default().to_string(), "8%");
        assert_eq!("0.0825".parse::<TaxRate>().unwrap().to_string(), "8.25%");
        assert_eq!("0.085".parse::<TaxRate>().unwrap().to_string(), "8.5%");
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(Money::from_minor(100).divided_by(0), Money::ZERO);
        assert_eq!(Money::from_minor(100).divided_by(4), Money::from_minor(25));
    }
}
