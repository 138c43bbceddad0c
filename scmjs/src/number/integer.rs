//! Integer division and the procedures derived from the tower's operations.
//!
//! The integer procedures accept exact integers as well as reals without a
//! fractional part (`4.0`). The result is exact only when every argument is.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, Signed, Zero};

use super::{Error, Number, Rank, Result};

/// Unwraps an integer argument, reporting whether it was inexact.
fn integer_arg(procedure: &'static str, n: &Number) -> Result<(BigInt, bool)> {
    let not_integer = || Error::NotAnInteger {
        procedure,
        value: n.to_string(),
    };
    match n {
        Number::Integer(i) => Ok((i.clone(), false)),
        Number::Rational(r) if r.denom() == &BigInt::from(1) => Ok((r.numer().clone(), false)),
        Number::Real(r) if r.is_integer() => BigInt::from_f64(r.to_f64().round())
            .map(|i| (i, true))
            .ok_or_else(not_integer),
        _ => Err(not_integer()),
    }
}

fn integer_result(n: BigInt, inexact: bool) -> Number {
    let n = Number::Integer(n);
    if inexact {
        exact_to_inexact(&n)
    } else {
        n
    }
}

fn divide_with(
    procedure: &'static str,
    dividend: &Number,
    divisor: &Number,
    op: impl FnOnce(&BigInt, &BigInt) -> BigInt,
) -> Result<Number> {
    let (a, a_inexact) = integer_arg(procedure, dividend)?;
    let (b, b_inexact) = integer_arg(procedure, divisor)?;
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(integer_result(op(&a, &b), a_inexact || b_inexact))
}

/// Integer division truncated towards zero.
///
/// ```
/// use scmjs::number::{quotient, Number};
///
/// assert_eq!(quotient(&Number::from(-7), &Number::from(2)).unwrap(), Number::from(-3));
/// ```
pub fn quotient(dividend: &Number, divisor: &Number) -> Result<Number> {
    divide_with("quotient", dividend, divisor, |a, b| a / b)
}

/// Remainder of [`quotient`]; takes the sign of the dividend.
///
/// ```
/// use scmjs::number::{remainder, Number};
///
/// assert_eq!(remainder(&Number::from(-7), &Number::from(2)).unwrap(), Number::from(-1));
/// ```
pub fn remainder(dividend: &Number, divisor: &Number) -> Result<Number> {
    divide_with("remainder", dividend, divisor, |a, b| a % b)
}

/// Remainder of floored division; takes the sign of the divisor.
///
/// ```
/// use scmjs::number::{modulo, Number};
///
/// assert_eq!(modulo(&Number::from(-7), &Number::from(2)).unwrap(), Number::from(1));
/// assert_eq!(modulo(&Number::from(7), &Number::from(-2)).unwrap(), Number::from(-1));
/// ```
pub fn modulo(dividend: &Number, divisor: &Number) -> Result<Number> {
    divide_with("modulo", dividend, divisor, |a, b| a.mod_floor(b))
}

/// Greatest common divisor of any number of integers; `0` for none.
///
/// The result is never negative.
pub fn gcd(args: &[Number]) -> Result<Number> {
    let mut acc = BigInt::zero();
    let mut inexact = false;
    for arg in args {
        let (n, arg_inexact) = integer_arg("gcd", arg)?;
        acc = acc.gcd(&n);
        inexact |= arg_inexact;
    }
    Ok(integer_result(acc, inexact))
}

/// Least common multiple of any number of integers; `1` for none.
///
/// The result is never negative, and is zero if any argument is zero.
pub fn lcm(args: &[Number]) -> Result<Number> {
    let mut acc = BigInt::from(1);
    let mut inexact = false;
    for arg in args {
        let (n, arg_inexact) = integer_arg("lcm", arg)?;
        acc = if acc.is_zero() || n.is_zero() {
            BigInt::zero()
        } else {
            acc.lcm(&n)
        };
        inexact |= arg_inexact;
    }
    Ok(integer_result(acc.abs(), inexact))
}

/// Absolute value of a real number.
pub fn abs(n: &Number) -> Result<Number> {
    match n {
        Number::Complex(_) => Err(Error::NotReal {
            procedure: "abs",
            value: n.to_string(),
        }),
        _ if n.is_negative() => Ok(n.negate()),
        _ => Ok(n.clone()),
    }
}

/// Converts exact numbers to the real tier; inexact numbers are returned
/// unchanged.
pub fn exact_to_inexact(n: &Number) -> Number {
    let mut n = n.clone();
    while n.rank() < Rank::Real {
        n = n.promote();
    }
    n
}
