//! Recognizers for the textual forms of numbers.
//!
//! Four grammars are recognized, in increasing rank:
//!
//! - integers: an optional sign followed by one or more digits;
//! - rationals: two integers separated by `/`. A zero or negative denominator
//!   is accepted here and only rejected when the value is constructed;
//! - reals: a signed decimal (`12`, `1.5`, `.45`, `0.`) or one of the
//!   case-insensitive special spellings `inf`, `inf.0`, `nan` and `nan.0`,
//!   optionally followed by an exponent suffix `e<number>`. Everything after
//!   the first `e` is itself read as an integer, rational or real, which is
//!   what makes `1e1e1` (that is, `1e10`) and `1e1/2` valid;
//! - complex numbers: an optional real part followed by a signed imaginary
//!   part and the letter `i`. Both parts use the integer, rational or real
//!   grammar; a bare `i` without digits is rejected.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use super::{Complex, Number, Rank, Rational, Real};

/// Determines the lowest rank whose grammar matches `lexeme`.
///
/// Returns `None` when no numeric grammar matches.
///
/// ```
/// use scmjs::number::{classify, Rank};
///
/// assert_eq!(classify("123"), Some(Rank::Integer));
/// assert_eq!(classify("123/234"), Some(Rank::Rational));
/// assert_eq!(classify("123.123e123"), Some(Rank::Real));
/// assert_eq!(classify("123+123i"), Some(Rank::Complex));
/// assert_eq!(classify("lambda"), None);
/// ```
pub fn classify(lexeme: &str) -> Option<Rank> {
    [Rank::Integer, Rank::Rational, Rank::Real, Rank::Complex]
        .into_iter()
        .find(|&rank| matches(rank, lexeme))
}

/// Returns true if `lexeme` is written according to the grammar of `rank`.
///
/// ```
/// use scmjs::number::{matches, Rank};
///
/// assert!(!matches(Rank::Integer, "123."));
/// assert!(matches(Rank::Real, "0."));
/// assert!(!matches(Rank::Complex, "i"));
/// assert!(!matches(Rank::Complex, "12"));
/// ```
pub fn matches(rank: Rank, lexeme: &str) -> bool {
    match rank {
        Rank::Integer => integer(lexeme).is_some(),
        Rank::Rational => rational(lexeme).is_some(),
        Rank::Real => real(lexeme).is_some(),
        Rank::Complex => complex(lexeme).is_some(),
    }
}

/// Returns true if `lexeme` is written as a number of any rank.
pub fn is_number(lexeme: &str) -> bool {
    classify(lexeme).is_some()
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub(super) fn integer(s: &str) -> Option<BigInt> {
    let (negative, digits) = split_sign(s);
    if !all_digits(digits) {
        return None;
    }
    let n = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -n } else { n })
}

pub(super) fn rational(s: &str) -> Option<(BigInt, BigInt)> {
    let (numer, denom) = s.split_once('/')?;
    Some((integer(numer)?, integer(denom)?))
}

pub(super) fn real(s: &str) -> Option<Real> {
    let (base, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let (negative, body) = split_sign(base);
    let value = special(body).or_else(|| decimal(body))?;
    let value = if negative { value.negate() } else { value };
    match exponent {
        None => Some(value),
        Some(rest) => Some(scale(value, &exponent_value(rest)?)),
    }
}

fn special(body: &str) -> Option<Real> {
    let is = |spellings: &[&str]| spellings.iter().any(|s| body.eq_ignore_ascii_case(s));
    if is(&["inf", "inf.0"]) {
        Some(Real::INFINITY)
    } else if is(&["nan", "nan.0"]) {
        Some(Real::NAN)
    } else {
        None
    }
}

fn decimal(body: &str) -> Option<Real> {
    let (integral, fraction) = body.split_once('.').unwrap_or((body, ""));
    if integral.is_empty() && fraction.is_empty() {
        return None;
    }
    let digits_or_empty = |s: &str| s.is_empty() || all_digits(s);
    if !digits_or_empty(integral) || !digits_or_empty(fraction) {
        return None;
    }
    Some(Real::from_digits(integral, fraction))
}

/// Reads the part after an exponent marker. Rationals with a zero denominator
/// do not make valid exponents.
fn exponent_value(s: &str) -> Option<Number> {
    if let Some(n) = integer(s) {
        return Some(Number::Integer(n));
    }
    if let Some((numer, denom)) = rational(s) {
        return Rational::simplify(numer, denom, false).ok();
    }
    real(s).map(Number::Real)
}

fn scale(value: Real, exponent: &Number) -> Real {
    match exponent {
        Number::Integer(n) => value.shift(n.to_i64().unwrap_or(if n.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        })),
        other => value.shift_f64(other.to_f64()),
    }
}

pub(super) fn complex(s: &str) -> Option<Complex> {
    let body = s.strip_suffix('i')?;
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .filter(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
        .last();
    match split {
        Some(i) => Some(Complex::new(part(&body[..i])?, part(&body[i..])?)),
        None => Some(Complex::new(Real::ZERO, part(body)?)),
    }
}

/// Reads one part of a complex number, promoted to the real tier.
fn part(s: &str) -> Option<Real> {
    if let Some(n) = integer(s) {
        return Some(Rational::from_integer(n).to_real());
    }
    if let Some((numer, denom)) = rational(s) {
        return match Rational::simplify(numer, denom, true).ok()? {
            Number::Rational(r) => Some(r.to_real()),
            _ => None,
        };
    }
    real(s)
}
