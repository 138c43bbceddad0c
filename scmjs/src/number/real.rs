//! Inexact real numbers in sign/mantissa/exponent form.

use std::cmp::Ordering;
use std::fmt::{self, Display};

/// Absolute tolerance used when comparing mantissas for equality.
pub const MANTISSA_TOLERANCE: f64 = 1e-10;

/// Sign of a [`Real`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or positive.
    Plus,
    /// Negative.
    Minus,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    fn factor(self) -> f64 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }
}

/// An inexact real number, `sign * mantissa * 10^exponent`.
///
/// The mantissa of a finite, non-zero `Real` always lies in `[1, 10)`; the
/// exponent is an unbounded (well, 64-bit) integer, so magnitudes far outside
/// the range of `f64` are representable. Zero is the single value
/// [`Real::ZERO`]. Infinities and NaN are carried in the mantissa with an
/// exponent of zero.
///
/// Equality is approximate: signs and exponents must match exactly, while
/// mantissas only need to agree within [`MANTISSA_TOLERANCE`].
#[derive(Debug, Clone, Copy)]
pub struct Real {
    sign: Sign,
    mantissa: f64,
    exponent: i64,
}

impl Real {
    /// The canonical zero.
    pub const ZERO: Real = Real {
        sign: Sign::Plus,
        mantissa: 0.0,
        exponent: 0,
    };

    /// Positive infinity, written `+inf.0`.
    pub const INFINITY: Real = Real {
        sign: Sign::Plus,
        mantissa: f64::INFINITY,
        exponent: 0,
    };

    /// Negative infinity, written `-inf.0`.
    pub const NEG_INFINITY: Real = Real {
        sign: Sign::Minus,
        mantissa: f64::INFINITY,
        exponent: 0,
    };

    /// Not a number, written `+nan.0`.
    pub const NAN: Real = Real {
        sign: Sign::Plus,
        mantissa: f64::NAN,
        exponent: 0,
    };

    /// Builds a `Real` from its parts, renormalizing the mantissa into
    /// `[1, 10)`.
    ///
    /// A negative `mantissa` flips `sign`.
    pub fn new(sign: Sign, mantissa: f64, exponent: i64) -> Real {
        normalize(sign.factor() * mantissa, exponent)
    }

    /// Converts a native float.
    pub fn from_f64(f: f64) -> Real {
        normalize(f, 0)
    }

    /// Builds a `Real` from the digits before and after a decimal point.
    ///
    /// Both strings must consist of ASCII digits only; either may be empty.
    /// At most 17 significant digits are retained.
    pub(crate) fn from_digits(integral: &str, fraction: &str) -> Real {
        let integral = integral.trim_start_matches('0');
        let (digits, exponent) = if integral.is_empty() {
            let trimmed = fraction.trim_start_matches('0');
            if trimmed.is_empty() {
                return Real::ZERO;
            }
            let leading_zeros = (fraction.len() - trimmed.len()) as i64;
            (trimmed.to_owned(), -leading_zeros - 1)
        } else {
            let mut digits = String::with_capacity(integral.len() + fraction.len());
            digits.push_str(integral);
            digits.push_str(fraction);
            (digits, integral.len() as i64 - 1)
        };
        let significant = &digits[..digits.len().min(17)];
        let scaled = significant
            .bytes()
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
        let mantissa = scaled as f64 / 10f64.powi(significant.len() as i32 - 1);
        normalize(mantissa, exponent)
    }

    /// The sign of this number. Zero and NaN are positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The (unsigned) mantissa.
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// The decimal exponent.
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns true for the canonical zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0.0
    }

    /// Returns true for `+nan.0`.
    pub fn is_nan(&self) -> bool {
        self.mantissa.is_nan()
    }

    /// Returns true for `+inf.0` and `-inf.0`.
    pub fn is_infinite(&self) -> bool {
        self.mantissa.is_infinite()
    }

    /// Returns true if the number is finite and has no fractional part.
    pub fn is_integer(&self) -> bool {
        if !self.mantissa.is_finite() {
            return false;
        }
        if self.is_zero() || self.exponent >= 17 {
            return true;
        }
        if self.exponent < 0 {
            return false;
        }
        let value = self.to_f64().abs();
        (value - value.round()).abs() <= MANTISSA_TOLERANCE * value
    }

    /// Converts to the nearest `f64`, saturating to infinity or zero outside
    /// of its range.
    pub fn to_f64(&self) -> f64 {
        let signed = self.signed_mantissa();
        if !signed.is_finite() || self.is_zero() {
            return signed;
        }
        if self.exponent > 308 {
            signed * f64::INFINITY
        } else if self.exponent < -340 {
            signed * 0.0
        } else if self.exponent < -300 {
            signed * 10f64.powi(self.exponent as i32 + 300) * 1e-300
        } else {
            signed * 10f64.powi(self.exponent as i32)
        }
    }

    fn signed_mantissa(&self) -> f64 {
        self.sign.factor() * self.mantissa
    }

    /// Multiplies by `10^shift`.
    pub(crate) fn shift(&self, shift: i64) -> Real {
        if !self.mantissa.is_finite() || self.is_zero() {
            return *self;
        }
        normalize(self.signed_mantissa(), self.exponent.saturating_add(shift))
    }

    /// Multiplies by `10^shift` for a non-integer `shift`.
    pub(crate) fn shift_f64(&self, shift: f64) -> Real {
        if shift.is_nan() {
            return Real::NAN;
        }
        if shift.is_infinite() {
            return if self.is_zero() || self.is_nan() {
                *self
            } else if shift > 0.0 {
                Real::new(self.sign, f64::INFINITY, 0)
            } else {
                Real::ZERO
            };
        }
        let whole = shift.floor();
        let scaled = Real::from_f64(self.signed_mantissa() * 10f64.powf(shift - whole));
        Real::new(scaled.sign, scaled.mantissa, self.exponent)
            .shift(scaled.exponent)
            .shift(whole as i64)
    }

    /// Sum of two reals.
    pub fn add(&self, other: &Real) -> Real {
        if !self.mantissa.is_finite() || !other.mantissa.is_finite() {
            return Real::from_f64(self.signed_mantissa() + other.signed_mantissa());
        }
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        let (big, small) = if self.exponent >= other.exponent {
            (self, other)
        } else {
            (other, self)
        };
        let distance = big.exponent.saturating_sub(small.exponent);
        if distance > 17 {
            return *big;
        }
        let sum = big.signed_mantissa() + small.signed_mantissa() / 10f64.powi(distance as i32);
        normalize(sum, big.exponent)
    }

    /// Product of two reals.
    pub fn multiply(&self, other: &Real) -> Real {
        if !self.mantissa.is_finite() || !other.mantissa.is_finite() {
            return Real::from_f64(self.signed_mantissa() * other.signed_mantissa());
        }
        if self.is_zero() || other.is_zero() {
            return Real::ZERO;
        }
        normalize(
            self.signed_mantissa() * other.signed_mantissa(),
            self.exponent.saturating_add(other.exponent),
        )
    }

    /// Additive inverse.
    pub fn negate(&self) -> Real {
        if self.is_zero() || self.is_nan() {
            return *self;
        }
        Real {
            sign: self.sign.flip(),
            ..*self
        }
    }

    /// Multiplicative inverse. The inverse of zero is `+inf.0`.
    pub fn multiplicative_inverse(&self) -> Real {
        if self.is_zero() {
            return Real::INFINITY;
        }
        if self.is_infinite() {
            return Real::ZERO;
        }
        if self.is_nan() {
            return *self;
        }
        normalize(1.0 / self.signed_mantissa(), self.exponent.saturating_neg())
    }

    /// Approximate equality; see the type-level documentation.
    pub fn equals(&self, other: &Real) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.is_infinite() || other.is_infinite() {
            return self.is_infinite() && other.is_infinite() && self.sign == other.sign;
        }
        self.sign == other.sign
            && self.exponent == other.exponent
            && (self.mantissa - other.mantissa).abs() < MANTISSA_TOLERANCE
    }

    /// Orders two reals; `None` if either is NaN.
    ///
    /// Values that are `equals` compare as `Equal`.
    pub fn compare(&self, other: &Real) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.equals(other) {
            return Some(Ordering::Equal);
        }
        let (a, b) = (self.signum(), other.signum());
        if a != b {
            return Some(a.cmp(&b));
        }
        let magnitude = match (self.is_infinite(), other.is_infinite()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => self
                .exponent
                .cmp(&other.exponent)
                .then(self.mantissa.partial_cmp(&other.mantissa)?),
        };
        Some(if a < 0 { magnitude.reverse() } else { magnitude })
    }

    fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Minus {
            -1
        } else {
            1
        }
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Real) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Real) -> Option<Ordering> {
        self.compare(other)
    }
}

/// Brings a signed mantissa into `[1, 10)`, adjusting the exponent.
fn normalize(mantissa: f64, exponent: i64) -> Real {
    if mantissa == 0.0 {
        return Real::ZERO;
    }
    if mantissa.is_nan() {
        return Real::NAN;
    }
    let sign = if mantissa < 0.0 { Sign::Minus } else { Sign::Plus };
    let mut mantissa = mantissa.abs();
    if mantissa.is_infinite() {
        return Real {
            sign,
            mantissa,
            exponent: 0,
        };
    }
    let mut exponent = exponent;
    while mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent = exponent.saturating_add(1);
    }
    while mantissa < 1.0 {
        mantissa *= 10.0;
        exponent = exponent.saturating_sub(1);
    }
    if mantissa >= 10.0 {
        mantissa /= 10.0;
        exponent = exponent.saturating_add(1);
    }
    Real {
        sign,
        mantissa,
        exponent,
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("+nan.0");
        }
        if self.is_infinite() {
            return f.write_str(match self.sign {
                Sign::Plus => "+inf.0",
                Sign::Minus => "-inf.0",
            });
        }
        let mut buffer = ryu::Buffer::new();
        if (-300..300).contains(&self.exponent) {
            return f.write_str(buffer.format(self.to_f64()));
        }
        let mut exponent = itoa::Buffer::new();
        write!(
            f,
            "{}e{}",
            buffer.format(self.signed_mantissa()),
            exponent.format(self.exponent)
        )
    }
}
