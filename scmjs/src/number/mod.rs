//! The numeric tower.
//!
//! Scheme numbers come in four ranks, each one able to represent every value
//! of the ranks below it:
//!
//! | rank | variant | exact |
//! |------|---------|-------|
//! | 1 | [`Number::Integer`], an arbitrary precision integer | yes |
//! | 2 | [`Number::Rational`], a reduced fraction | yes |
//! | 3 | [`Number::Real`], sign, mantissa and decimal exponent | no |
//! | 4 | [`Number::Complex`], a pair of reals | no |
//!
//! Binary operations first bring both operands to the same rank with
//! [`equalify`], promoting the lower-ranked operand one level at a time, and
//! then apply the rank-specific operation. Promotion from rationals to reals
//! loses precision, so values that have passed through the inexact tiers do
//! not round-trip exactly.
//!
//! ```
//! use scmjs::number::{make_number, Number};
//!
//! let half = make_number("1/2").unwrap();
//! let sum = half.add(&make_number("1/2").unwrap());
//! assert!(matches!(sum, Number::Integer(_)));
//! assert_eq!(sum, Number::from(1));
//!
//! let inexact = sum.add(&make_number("0.5").unwrap());
//! assert_eq!(inexact.to_string(), "1.5");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

mod complex;
mod error;
mod integer;
mod lexical;
mod rational;
mod real;

pub use num_bigint::BigInt;

pub use self::complex::Complex;
pub use self::error::{Error, Result};
pub use self::integer::{abs, exact_to_inexact, gcd, lcm, modulo, quotient, remainder};
pub use self::lexical::{classify, is_number, matches};
pub use self::rational::Rational;
pub use self::real::{Real, Sign, MANTISSA_TOLERANCE};

/// A number in the Scheme numeric tower.
///
/// Equality (`==`) follows Scheme's `=`: operands are promoted to a common
/// rank and compared there, so `Number::from(1) == make_number("1.0")`.
#[derive(Debug, Clone)]
pub enum Number {
    /// An exact integer.
    Integer(BigInt),
    /// An exact fraction in lowest terms.
    Rational(Rational),
    /// An inexact real.
    Real(Real),
    /// An inexact complex number.
    Complex(Complex),
}

/// Position of a [`Number`] variant in the tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Exact integers.
    Integer = 1,
    /// Exact rationals.
    Rational = 2,
    /// Inexact reals.
    Real = 3,
    /// Inexact complex numbers.
    Complex = 4,
}

/// Constructs the lowest-ranked number written as `lexeme`.
///
/// The integer, rational, real and complex grammars are tried in that order.
/// A rational with a zero denominator is rejected here even though the
/// lexical grammar accepts it.
///
/// ```
/// use scmjs::number::{make_number, Error, Number};
///
/// assert!(matches!(make_number("-42").unwrap(), Number::Integer(_)));
/// assert!(matches!(make_number("6/4").unwrap(), Number::Rational(_)));
/// assert!(matches!(make_number("6/3").unwrap(), Number::Integer(_)));
/// assert_eq!(make_number("1e1e1").unwrap(), make_number("1e10").unwrap());
/// assert_eq!(make_number("1/0"), Err(Error::ZeroDenominator));
/// assert!(make_number("one").is_err());
/// ```
pub fn make_number(lexeme: &str) -> Result<Number> {
    if let Some(n) = lexical::integer(lexeme) {
        return Ok(Number::Integer(n));
    }
    if let Some((numer, denom)) = lexical::rational(lexeme) {
        return Rational::simplify(numer, denom, false);
    }
    if let Some(r) = lexical::real(lexeme) {
        return Ok(Number::Real(r));
    }
    if let Some(c) = lexical::complex(lexeme) {
        return Ok(Number::Complex(c));
    }
    Err(Error::InvalidLiteral(lexeme.into()))
}

/// Promotes the lower-ranked of two numbers until both have the same rank.
///
/// Promotion proceeds one rank at a time; two numbers of equal rank are
/// returned unchanged.
pub fn equalify(a: &Number, b: &Number) -> (Number, Number) {
    match a.rank().cmp(&b.rank()) {
        Ordering::Less => equalify(&a.promote(), b),
        Ordering::Greater => equalify(a, &b.promote()),
        Ordering::Equal => (a.clone(), b.clone()),
    }
}

impl Number {
    /// The rank of this number's variant.
    pub fn rank(&self) -> Rank {
        match self {
            Number::Integer(_) => Rank::Integer,
            Number::Rational(_) => Rank::Rational,
            Number::Real(_) => Rank::Real,
            Number::Complex(_) => Rank::Complex,
        }
    }

    /// Converts to the next rank up. Complex numbers are returned as is.
    ///
    /// Integers become rationals with denominator one that are not demoted
    /// back; rationals become (approximate) reals; reals become complex
    /// numbers with a zero imaginary part.
    pub fn promote(&self) -> Number {
        match self {
            Number::Integer(n) => Number::Rational(Rational::from_integer(n.clone())),
            Number::Rational(r) => Number::Real(r.to_real()),
            Number::Real(r) => Number::Complex(Complex::new(*r, Real::ZERO)),
            Number::Complex(c) => Number::Complex(*c),
        }
    }

    /// Returns true for integers and rationals.
    pub fn is_exact(&self) -> bool {
        self.rank() <= Rank::Rational
    }

    /// Returns true for exact integers and for reals without a fractional
    /// part.
    pub fn is_integer(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Rational(r) => r.denom() == &BigInt::from(1),
            Number::Real(r) => r.is_integer(),
            Number::Complex(c) => c.imag().is_zero() && c.real().is_integer(),
        }
    }

    /// Returns true if this number equals zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_zero(),
            Number::Rational(r) => r.numer().is_zero(),
            Number::Real(r) => r.is_zero(),
            Number::Complex(c) => c.is_zero(),
        }
    }

    /// Approximates the number as an `f64`; complex numbers yield their real
    /// part.
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => n.to_f64().unwrap_or(f64::NAN),
            Number::Rational(r) => r.to_real().to_f64(),
            Number::Real(r) => r.to_f64(),
            Number::Complex(c) => c.real().to_f64(),
        }
    }

    /// Sum of two numbers.
    pub fn add(&self, other: &Number) -> Number {
        match equalify(self, other) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a + b),
            (Number::Rational(a), Number::Rational(b)) => a.add(&b),
            (Number::Real(a), Number::Real(b)) => Number::Real(a.add(&b)),
            (Number::Complex(a), Number::Complex(b)) => Number::Complex(a.add(&b)),
            _ => unreachable!("equalify returns operands of equal rank"),
        }
    }

    /// Product of two numbers.
    pub fn multiply(&self, other: &Number) -> Number {
        match equalify(self, other) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a * b),
            (Number::Rational(a), Number::Rational(b)) => a.multiply(&b),
            (Number::Real(a), Number::Real(b)) => Number::Real(a.multiply(&b)),
            (Number::Complex(a), Number::Complex(b)) => Number::Complex(a.multiply(&b)),
            _ => unreachable!("equalify returns operands of equal rank"),
        }
    }

    /// Additive inverse.
    pub fn negate(&self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(-n),
            Number::Rational(r) => Number::Rational(r.negate()),
            Number::Real(r) => Number::Real(r.negate()),
            Number::Complex(c) => Number::Complex(c.negate()),
        }
    }

    /// Multiplicative inverse.
    ///
    /// Fails with [`Error::DivisionByZero`] for exact zero and for complex
    /// zero; the inverse of the inexact real zero is `+inf.0`.
    pub fn multiplicative_inverse(&self) -> Result<Number> {
        match self {
            Number::Integer(n) => {
                if n.is_zero() {
                    Err(Error::DivisionByZero)
                } else {
                    Rational::simplify(BigInt::from(1), n.clone(), false)
                }
            }
            Number::Rational(r) => r.multiplicative_inverse(),
            Number::Real(r) => Ok(Number::Real(r.multiplicative_inverse())),
            Number::Complex(c) => Ok(Number::Complex(c.multiplicative_inverse()?)),
        }
    }

    /// Difference of two numbers, `self + (-other)`.
    pub fn subtract(&self, other: &Number) -> Number {
        self.add(&other.negate())
    }

    /// Quotient of two numbers, `self * (1 / other)`.
    pub fn divide(&self, other: &Number) -> Result<Number> {
        Ok(self.multiply(&other.multiplicative_inverse()?))
    }

    /// Numeric equality after promotion to a common rank.
    pub fn equals(&self, other: &Number) -> bool {
        match equalify(self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Rational(a), Number::Rational(b)) => a.equals(&b),
            (Number::Real(a), Number::Real(b)) => a.equals(&b),
            (Number::Complex(a), Number::Complex(b)) => a.equals(&b),
            _ => unreachable!("equalify returns operands of equal rank"),
        }
    }

    /// Orders two real numbers after promotion to a common rank.
    ///
    /// Returns `Ok(None)` if either operand is NaN; complex operands are an
    /// error.
    pub fn compare(&self, other: &Number) -> Result<Option<Ordering>> {
        match equalify(self, other) {
            (Number::Integer(a), Number::Integer(b)) => Ok(Some(a.cmp(&b))),
            (Number::Rational(a), Number::Rational(b)) => Ok(Some(a.compare(&b))),
            (Number::Real(a), Number::Real(b)) => Ok(a.compare(&b)),
            (Number::Complex(_), Number::Complex(_)) => {
                let offender = if self.rank() == Rank::Complex { self } else { other };
                Err(Error::NotReal {
                    procedure: "compare",
                    value: offender.to_string(),
                })
            }
            _ => unreachable!("equalify returns operands of equal rank"),
        }
    }

    /// Scheme's `<`.
    pub fn less_than(&self, other: &Number) -> Result<bool> {
        Ok(self.compare(other)? == Some(Ordering::Less))
    }

    /// Scheme's `>`.
    pub fn greater_than(&self, other: &Number) -> Result<bool> {
        Ok(self.compare(other)? == Some(Ordering::Greater))
    }

    /// Returns true if the number is below zero; complex numbers are never
    /// negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(n) => n.is_negative(),
            Number::Rational(r) => r.numer().is_negative(),
            Number::Real(r) => r.sign() == Sign::Minus && !r.is_zero(),
            Number::Complex(_) => false,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.equals(other)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        self.compare(other).ok().flatten()
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Number> {
        make_number(s)
    }
}

macro_rules! impl_from_integer {
    (
        $($ty:ty),*
    ) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(n: $ty) -> Self {
                    Number::Integer(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Number::Integer(n)
    }
}

impl From<f64> for Number {
    /// Integral floats become exact integers; everything else, including the
    /// special values, becomes a real.
    fn from(f: f64) -> Self {
        if f.is_finite() && f.fract() == 0.0 {
            if let Some(n) = BigInt::from_f64(f) {
                return Number::Integer(n);
            }
        }
        Number::Real(Real::from_f64(f))
    }
}

impl From<Real> for Number {
    fn from(r: Real) -> Self {
        Number::Real(r)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Number::Rational(r)
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Number::Complex(c)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, other: Number) -> Number {
                Number::$op(&self, &other)
            }
        }

        impl<'a> $trait<&'a Number> for &'a Number {
            type Output = Number;

            fn $method(self, other: &'a Number) -> Number {
                Number::$op(self, other)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
impl_binary_op!(Mul, mul, multiply);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negate()
    }
}

impl<'a> Neg for &'a Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.negate()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => Display::fmt(n, f),
            Number::Rational(r) => Display::fmt(r, f),
            Number::Real(r) => Display::fmt(r, f),
            Number::Complex(c) => Display::fmt(c, f),
        }
    }
}
