//! Exact rational numbers.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::{Error, Number, Real, Result};

/// Number of decimal digits kept on each side of a fraction when promoting to
/// a [`Real`]; chosen so both fit an `f64` without rounding.
const SAFE_DIGITS: usize = 15;

/// An exact ratio of two integers.
///
/// A `Rational` is always stored in lowest terms with a positive denominator.
/// Rationals whose denominator is one are normally demoted to
/// [`Number::Integer`] by [`Rational::simplify`]; they only exist as
/// `Rational` values while an integer is being promoted up the tower.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Reduces `numer / denom` to lowest terms with a positive denominator.
    ///
    /// The result is demoted to an integer when the denominator reduces to
    /// one, unless `keep_rational` is set. A zero denominator is an error.
    ///
    /// ```
    /// # use scmjs::number::{BigInt, Number, Rational};
    /// let half = Rational::simplify(BigInt::from(-2), BigInt::from(-4), false).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// let two = Rational::simplify(BigInt::from(4), BigInt::from(2), false).unwrap();
    /// assert!(matches!(two, Number::Integer(_)));
    /// ```
    pub fn simplify(numer: BigInt, denom: BigInt, keep_rational: bool) -> Result<Number> {
        if denom.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(reduce(numer, denom, keep_rational))
    }

    /// Lifts an integer into the rational tier without demoting it again.
    pub(crate) fn from_integer(n: BigInt) -> Rational {
        Rational {
            numer: n,
            denom: BigInt::one(),
        }
    }

    /// The numerator; carries the sign.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator; always positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Promotes to the inexact tier.
    ///
    /// This is lossy: numerator and denominator are each truncated to their
    /// leading significant digits before dividing.
    pub fn to_real(&self) -> Real {
        if self.numer.is_zero() {
            return Real::ZERO;
        }
        let (numer, numer_shift) = truncate(&self.numer);
        let (denom, denom_shift) = truncate(&self.denom);
        Real::from_f64(numer / denom).shift(numer_shift - denom_shift)
    }

    /// Sum of two rationals.
    pub fn add(&self, other: &Rational) -> Number {
        let numer = &self.numer * &other.denom + &other.numer * &self.denom;
        let denom = &self.denom * &other.denom;
        reduce(numer, denom, false)
    }

    /// Product of two rationals.
    pub fn multiply(&self, other: &Rational) -> Number {
        reduce(&self.numer * &other.numer, &self.denom * &other.denom, false)
    }

    /// Additive inverse.
    pub fn negate(&self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    /// Multiplicative inverse; fails for zero.
    pub fn multiplicative_inverse(&self) -> Result<Number> {
        if self.numer.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Rational::simplify(self.denom.clone(), self.numer.clone(), false)
    }

    /// Exact equality.
    pub fn equals(&self, other: &Rational) -> bool {
        self == other
    }

    /// Exact ordering.
    pub fn compare(&self, other: &Rational) -> Ordering {
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

/// Reduces a fraction whose denominator is known to be non-zero.
fn reduce(numer: BigInt, denom: BigInt, keep_rational: bool) -> Number {
    let divisor = numer.gcd(&denom);
    let (mut numer, mut denom) = (numer / &divisor, denom / &divisor);
    if denom.is_negative() {
        numer = -numer;
        denom = -denom;
    }
    if denom.is_one() && !keep_rational {
        Number::Integer(numer)
    } else {
        Number::Rational(Rational { numer, denom })
    }
}

/// Cuts `n` down to at most `SAFE_DIGITS` significant digits, returning the
/// truncated value and the power of ten that was divided out.
fn truncate(n: &BigInt) -> (f64, i64) {
    let digits = n.magnitude().to_string().len();
    if digits <= SAFE_DIGITS {
        return (n.to_f64().unwrap_or(f64::NAN), 0);
    }
    let shift = digits - SAFE_DIGITS;
    let truncated = n / BigInt::from(10).pow(shift as u32);
    (truncated.to_f64().unwrap_or(f64::NAN), shift as i64)
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
